//! Document intake
//! Detects file types, extracts text, and walks input directories

pub mod file_detector;
pub mod manager;
pub mod text_extractor;
