//! Match-quality buckets and the (function level, industry level) lookup

use crate::scoring::taxonomy::MatchedLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named match-quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BucketName {
    TooBasic,
    IffyMatch,
    GoodMatch,
    StrongMatch,
    PerfectMatch,
    OutOfTheBox,
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BucketName::TooBasic => "Too Basic",
            BucketName::IffyMatch => "Iffy Match",
            BucketName::GoodMatch => "Good Match",
            BucketName::StrongMatch => "Strong Match",
            BucketName::PerfectMatch => "Perfect Match",
            BucketName::OutOfTheBox => "Out of the box",
        };
        write!(f, "{}", label)
    }
}

/// Closed score range attached to a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

impl ScoreRange {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// A resolved bucket: name plus its score range. The range's upper
/// bound is the baseline score before adjustment; perfect matches start
/// near the top of their range and are adjusted downward by penalties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBucket {
    pub name: BucketName,
    pub range: ScoreRange,
}

pub fn score_range(name: BucketName) -> ScoreRange {
    match name {
        BucketName::TooBasic => ScoreRange { min: 0, max: 30 },
        BucketName::IffyMatch => ScoreRange { min: 31, max: 50 },
        BucketName::GoodMatch => ScoreRange { min: 51, max: 70 },
        BucketName::StrongMatch => ScoreRange { min: 71, max: 84 },
        BucketName::PerfectMatch => ScoreRange { min: 85, max: 100 },
        BucketName::OutOfTheBox => ScoreRange { min: 60, max: 75 },
    }
}

/// Resolve the bucket for a (matched function level, matched industry
/// level) pair. Level 0 on either axis never maps to a bucket; the
/// caller decides whether that excludes the candidate or scores them
/// zero.
pub fn resolve(function: MatchedLevel, industry: MatchedLevel) -> Option<MatchBucket> {
    let name = match (function.depth, industry.depth) {
        (1, 1) => BucketName::TooBasic,
        (1, 2..=4) => BucketName::IffyMatch,
        (2, 1) => BucketName::IffyMatch,
        (2, 2..=3) => BucketName::GoodMatch,
        (2, 4) => BucketName::OutOfTheBox,
        (3..=4, 1) => BucketName::IffyMatch,
        (3..=4, 2) => BucketName::GoodMatch,
        (3..=4, 3) => BucketName::StrongMatch,
        (3..=4, 4) => BucketName::PerfectMatch,
        _ => return None,
    };

    Some(MatchBucket {
        name,
        range: score_range(name),
    })
}
