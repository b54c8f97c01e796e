pub mod document;
pub mod verify;
