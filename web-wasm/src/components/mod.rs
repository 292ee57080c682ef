pub mod email_panel;
pub mod header;
pub mod loading;
pub mod professor_card;
pub mod selection_dialog;
