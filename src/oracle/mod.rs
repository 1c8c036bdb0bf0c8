//! Scoring/extraction oracle integration

pub mod client;
pub mod parser;
