//! JSON persistence for extracted profiles and job requirements

use crate::error::Result;
use crate::extraction::job::JobRequirement;
use crate::extraction::profile::CandidateProfile;
use chrono::Local;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

fn timestamped(dir: &Path, prefix: &str) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("{}_{}.json", prefix, timestamp))
}

fn write_json<T: Serialize>(dir: &Path, prefix: &str, records: &[T]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = timestamped(dir, prefix);
    let content = serde_json::to_string_pretty(records)?;
    std::fs::write(&path, content)?;
    Ok(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_profiles(dir: &Path, profiles: &[CandidateProfile]) -> Result<PathBuf> {
    write_json(dir, "candidate_profiles", profiles)
}

pub fn load_profiles(path: &Path) -> Result<Vec<CandidateProfile>> {
    read_json(path)
}

pub fn save_jobs(dir: &Path, jobs: &[JobRequirement]) -> Result<PathBuf> {
    write_json(dir, "job_requirements", jobs)
}

pub fn load_jobs(path: &Path) -> Result<Vec<JobRequirement>> {
    read_json(path)
}
