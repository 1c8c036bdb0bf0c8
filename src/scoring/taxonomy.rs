//! Hierarchical taxonomy paths and the prefix matcher
//!
//! Candidates and jobs carry two parallel 4-level classifications: an
//! industry axis (I1..I4) and a function axis (F1..F4). Levels 1-3 are
//! controlled vocabulary; level 4 is a comma-separated set of free-form
//! keyword tags.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One 4-level classification path. `l1..l3` are controlled labels,
/// `tags` is the free-form level-4 keyword field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyPath {
    pub l1: String,
    pub l2: String,
    pub l3: String,
    pub tags: String,
}

impl TaxonomyPath {
    pub fn new(l1: &str, l2: &str, l3: &str, tags: &str) -> Self {
        Self {
            l1: l1.to_string(),
            l2: l2.to_string(),
            l3: l3.to_string(),
            tags: tags.to_string(),
        }
    }

    /// Normalized level-4 tag set: split on commas, trim, drop empties.
    /// Duplicates collapse, so repeated tags never inflate any score.
    pub fn tag_set(&self) -> BTreeSet<String> {
        parse_tags(&self.tags)
    }

    fn label(&self, level: u8) -> &str {
        match level {
            1 => &self.l1,
            2 => &self.l2,
            3 => &self.l3,
            _ => &self.tags,
        }
    }
}

pub fn parse_tags(csv: &str) -> BTreeSet<String> {
    csv.split(',')
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

/// Taxonomy axis, used only for the matched-level label prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Industry,
    Function,
}

impl Category {
    pub fn prefix(&self) -> &'static str {
        match self {
            Category::Industry => "I",
            Category::Function => "F",
        }
    }
}

/// The deepest level at which a job and candidate path agree, 0..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedLevel {
    pub category: Category,
    pub depth: u8,
}

impl MatchedLevel {
    pub fn is_full_depth(&self) -> bool {
        self.depth == 4
    }
}

impl fmt::Display for MatchedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.category.prefix(), self.depth)
    }
}

/// Find the longest common matched prefix of two taxonomy paths.
///
/// Levels are compared left to right and the walk stops at the first
/// mismatch; deeper levels that happen to coincide are never counted.
/// Levels 1-3 compare by case-sensitive string equality, with an empty
/// label on either side treated as a non-match rather than a wildcard.
/// Level 4 counts as matched when the job's tag set is empty (an
/// unconstrained requirement) or overlaps the candidate's tag set.
pub fn match_level(
    job: &TaxonomyPath,
    candidate: &TaxonomyPath,
    category: Category,
) -> MatchedLevel {
    let mut depth = 0u8;
    for level in 1..=3u8 {
        let job_label = job.label(level);
        let candidate_label = candidate.label(level);
        if job_label.is_empty() || candidate_label.is_empty() || job_label != candidate_label {
            return MatchedLevel { category, depth };
        }
        depth = level;
    }

    let job_tags = job.tag_set();
    if job_tags.is_empty() || !job_tags.is_disjoint(&candidate.tag_set()) {
        depth = 4;
    }

    MatchedLevel { category, depth }
}
