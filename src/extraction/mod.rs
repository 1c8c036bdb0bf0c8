//! Structured profile/job extraction via the oracle
//!
//! Raw document text goes in, explicit typed records come out. Fields
//! the oracle cannot infer are "Unknown", never errors.

pub mod job;
pub mod profile;
pub mod prompts;
