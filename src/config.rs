//! Configuration management for the talent scorer

use crate::error::{Result, TalentScorerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub oracle: OracleConfig,
    pub scoring: ScoringConfig,
    pub rules: RulesConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Base URL of an OpenAI-compatible chat completions endpoint
    pub api_base: String,
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub request_timeout_secs: u64,
    /// Where per-call token usage is appended, when the reply reports it
    pub usage_log: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Maximum tag-overlap bonus per taxonomy axis
    pub tag_bonus_cap: u32,
    /// Rule-based score at or above which the oracle is consulted
    pub escalation_threshold: u32,
    /// Always deep-score the first N candidates; 0 disables the quota
    pub deep_score_quota: usize,
    /// Baseline + tag bonus above this value promotes the bucket to Perfect Match
    pub perfect_match_floor: u32,
    pub unmapped_bucket_policy: UnmappedBucketPolicy,
}

/// What to do with a candidate whose matched levels have no bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnmappedBucketPolicy {
    /// Drop the candidate from the ranked output
    Exclude,
    /// Keep the candidate with a final score of 0
    ScoreZero,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Candidate age may differ from the target by this many years without penalty
    pub age_tolerance_years: u32,
    /// One point deducted per this many full years beyond the tolerance window
    pub age_years_per_point: u32,
    /// Flat bonus when the candidate matches the job's preferred gender; 0 disables the rule
    pub gender_bonus: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub color_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            oracle: OracleConfig {
                api_base: "https://api.openai.com/v1".to_string(),
                model: "gpt-4o".to_string(),
                api_key_env: "OPENAI_API_KEY".to_string(),
                request_timeout_secs: 120,
                usage_log: PathBuf::from("openai_usage.log"),
            },
            scoring: ScoringConfig {
                tag_bonus_cap: 8,
                escalation_threshold: 70,
                deep_score_quota: 0,
                perfect_match_floor: 84,
                unmapped_bucket_policy: UnmappedBucketPolicy::Exclude,
            },
            rules: RulesConfig {
                age_tolerance_years: 6,
                age_years_per_point: 3,
                gender_bonus: 0,
            },
            output: OutputConfig {
                output_dir: PathBuf::from("output"),
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                TalentScorerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            TalentScorerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("talent-scorer")
            .join("config.toml")
    }

    pub fn scored_candidates_dir(&self) -> PathBuf {
        self.output.output_dir.join("scored_candidates")
    }

    pub fn ensure_output_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(self.scored_candidates_dir())?;
        Ok(())
    }
}
