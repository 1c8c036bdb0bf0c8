//! Candidate/job matching and scoring engine

pub mod bucket;
pub mod engine;
pub mod rules;
pub mod tags;
pub mod taxonomy;
