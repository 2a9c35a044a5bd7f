//! Input processing module
//! Reads resume text and job listings from disk for the CLI

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
