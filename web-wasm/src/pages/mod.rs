pub mod generate;
pub mod landing;
pub mod matches;
