pub mod service;

pub use service::{generate_email, match_professors};
