//! Input processing module
//! Loads resume documents and extracts job description text

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
