//! Job requirements and their extraction from job description text

use crate::error::Result;
use crate::extraction::profile::{field_or_unknown, taxonomy_from_reply, Age, Gender, LanguageLevel};
use crate::extraction::prompts;
use crate::oracle::client::ChatOracle;
use crate::scoring::taxonomy::TaxonomyPath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the employer is headquartered relative to the job's country.
/// Global HQ rewards strong English more heavily than domestic HQ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Headquarters {
    #[default]
    Domestic,
    Global,
}

impl Headquarters {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "global" | "international" | "foreign" => Headquarters::Global,
            _ => Headquarters::Domestic,
        }
    }
}

impl fmt::Display for Headquarters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Headquarters::Domestic => write!(f, "Domestic"),
            Headquarters::Global => write!(f, "Global"),
        }
    }
}

/// One job requirement; drives one scoring pass over the whole
/// candidate set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    pub company: String,
    pub position: String,
    pub country: String,
    pub city: String,
    pub industry: TaxonomyPath,
    pub function: TaxonomyPath,
    pub required_japanese: LanguageLevel,
    pub required_english: LanguageLevel,
    pub target_age: Option<u32>,
    pub headquarters: Headquarters,
    pub headcount: String,
    pub job_level: String,
    /// Preferred gender for the configurable gender bonus rule; not
    /// extracted, only honored when present in the job data.
    #[serde(default)]
    pub preferred_gender: Option<Gender>,
}

impl JobRequirement {
    /// A Japan-based role that expects spoken fluency gets the heavier
    /// Japanese penalty tier.
    pub fn requires_spoken_japanese(&self) -> bool {
        self.country == "Japan" && self.required_japanese >= LanguageLevel::Fluent
    }
}

/// Build a job requirement from job description text with three oracle
/// calls: job info, industry labels, function labels.
pub async fn extract_job<O: ChatOracle>(oracle: &O, job_text: &str) -> Result<JobRequirement> {
    let info = oracle
        .complete(
            prompts::JOB_INFO_PROMPT,
            job_text,
            Some(&prompts::job_info_tool()),
        )
        .await?;

    let industry = oracle
        .complete(
            prompts::INDUSTRY_GRID_PROMPT,
            job_text,
            Some(&prompts::industry_labels_tool()),
        )
        .await?;

    let function = oracle
        .complete(
            prompts::FUNCTION_GRID_PROMPT,
            job_text,
            Some(&prompts::function_labels_tool()),
        )
        .await?;

    Ok(JobRequirement {
        company: field_or_unknown(&info, "company"),
        position: field_or_unknown(&info, "position"),
        country: field_or_unknown(&info, "country"),
        city: field_or_unknown(&info, "city"),
        industry: taxonomy_from_reply(&industry, "I"),
        function: taxonomy_from_reply(&function, "F"),
        required_japanese: LanguageLevel::parse(info.tool_str("japanese_level").unwrap_or_default()),
        required_english: LanguageLevel::parse(info.tool_str("english_level").unwrap_or_default()),
        target_age: info
            .tool_str("target_age")
            .and_then(Age::parse)
            .map(|age| age.years),
        headquarters: Headquarters::parse(info.tool_str("headquarters").unwrap_or_default()),
        headcount: field_or_unknown(&info, "headcount"),
        job_level: field_or_unknown(&info, "job_level"),
        preferred_gender: None,
    })
}
