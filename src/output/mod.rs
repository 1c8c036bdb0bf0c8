//! Ranked output and persistence

pub mod ranking;
pub mod store;
pub mod writer;
