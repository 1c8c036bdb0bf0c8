//! Candidate profiles and their extraction from resume text

use crate::error::Result;
use crate::extraction::prompts;
use crate::oracle::client::{ChatOracle, ChatReply};
use crate::scoring::taxonomy::TaxonomyPath;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language proficiency, ordered weakest to strongest so that
/// `Native > Fluent > Business > ReadingWriting > NoneOrUnknown`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum LanguageLevel {
    #[default]
    #[serde(rename = "None/Unknown")]
    NoneOrUnknown,
    #[serde(rename = "Reading/Writing")]
    ReadingWriting,
    Business,
    Fluent,
    Native,
}

impl LanguageLevel {
    /// Parse an extracted level string; anything unrecognized is
    /// `NoneOrUnknown` rather than an error.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value.to_lowercase().as_str() {
            "native" => LanguageLevel::Native,
            "fluent" => LanguageLevel::Fluent,
            "business" => LanguageLevel::Business,
            "reading/writing" | "reading-writing" | "reading writing" => {
                LanguageLevel::ReadingWriting
            }
            _ => LanguageLevel::NoneOrUnknown,
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, LanguageLevel::Native | LanguageLevel::Fluent)
    }
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LanguageLevel::Native => "Native",
            LanguageLevel::Fluent => "Fluent",
            LanguageLevel::Business => "Business",
            LanguageLevel::ReadingWriting => "Reading/Writing",
            LanguageLevel::NoneOrUnknown => "None/Unknown",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Gender {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Candidate age with an optional ± margin, e.g. "35 +/- 2"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age {
    pub years: u32,
    pub margin: Option<u32>,
}

impl Age {
    /// Parse an extracted age string. "Unknown" or anything without a
    /// leading number yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let re = Regex::new(r"^\s*(\d{1,3})(?:\s*\+/-\s*(\d{1,3}))?").unwrap();
        let caps = re.captures(value)?;
        let years = caps[1].parse().ok()?;
        let margin = caps.get(2).and_then(|m| m.as_str().parse().ok());
        Some(Self { years, margin })
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.margin {
            Some(margin) => write!(f, "{} +/- {}", self.years, margin),
            None => write!(f, "{}", self.years),
        }
    }
}

/// Immutable candidate record produced by extraction and consumed
/// read-only by the scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub current_company: String,
    pub current_position: String,
    pub previous_company_1: String,
    pub previous_position_1: String,
    pub previous_company_2: String,
    pub previous_position_2: String,
    pub country: String,
    pub city: String,
    pub age: Option<Age>,
    pub gender: Gender,
    pub japanese_level: LanguageLevel,
    pub english_level: LanguageLevel,
    pub other_languages: String,
    pub industry: TaxonomyPath,
    pub function: TaxonomyPath,
    /// Full extracted document text, used as the oracle escalation
    /// subject; dropped from the ranked output.
    pub resume_text: String,
}

/// Extracted field or "Unknown" when the oracle left it out
pub(crate) fn field_or_unknown(reply: &ChatReply, field: &str) -> String {
    reply
        .tool_str(field)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or("Unknown")
        .to_string()
}

pub(crate) fn taxonomy_from_reply(reply: &ChatReply, prefix: &str) -> TaxonomyPath {
    let level = |n: u8| {
        reply
            .tool_str(&format!("{}{}", prefix, n))
            .unwrap_or_default()
            .trim()
            .to_string()
    };
    TaxonomyPath {
        l1: level(1),
        l2: level(2),
        l3: level(3),
        tags: level(4),
    }
}

/// Build a candidate profile from resume text with three oracle calls:
/// general info, industry labels, function labels.
pub async fn extract_profile<O: ChatOracle>(
    oracle: &O,
    resume_text: &str,
) -> Result<CandidateProfile> {
    let info = oracle
        .complete(
            prompts::CANDIDATE_INFO_PROMPT,
            resume_text,
            Some(&prompts::candidate_info_tool()),
        )
        .await?;

    let industry = oracle
        .complete(
            prompts::INDUSTRY_GRID_PROMPT,
            resume_text,
            Some(&prompts::industry_labels_tool()),
        )
        .await?;

    let function = oracle
        .complete(
            prompts::FUNCTION_GRID_PROMPT,
            resume_text,
            Some(&prompts::function_labels_tool()),
        )
        .await?;

    Ok(CandidateProfile {
        name: field_or_unknown(&info, "name"),
        current_company: field_or_unknown(&info, "current_company"),
        current_position: field_or_unknown(&info, "current_position"),
        previous_company_1: field_or_unknown(&info, "previous_company_1"),
        previous_position_1: field_or_unknown(&info, "previous_position_1"),
        previous_company_2: field_or_unknown(&info, "previous_company_2"),
        previous_position_2: field_or_unknown(&info, "previous_position_2"),
        country: field_or_unknown(&info, "country"),
        city: field_or_unknown(&info, "city"),
        age: info.tool_str("age").and_then(Age::parse),
        gender: Gender::parse(info.tool_str("gender").unwrap_or_default()),
        japanese_level: LanguageLevel::parse(info.tool_str("japanese_level").unwrap_or_default()),
        english_level: LanguageLevel::parse(info.tool_str("english_level").unwrap_or_default()),
        other_languages: field_or_unknown(&info, "other_languages"),
        industry: taxonomy_from_reply(&industry, "I"),
        function: taxonomy_from_reply(&function, "F"),
        resume_text: resume_text.to_string(),
    })
}
