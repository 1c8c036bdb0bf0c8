//! Deterministic penalty/bonus rules applied after bucket resolution
//!
//! Every rule computes its delta against the same baseline; the sum is
//! linear and the final score is floored at 0. No external calls.

use crate::config::RulesConfig;
use crate::extraction::job::{Headquarters, JobRequirement};
use crate::extraction::profile::{CandidateProfile, LanguageLevel};
use serde::{Deserialize, Serialize};

/// Per-rule deltas, kept for auditability of each adjustment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RuleBreakdown {
    pub japanese: i32,
    pub location: i32,
    pub age: i32,
    pub gender: i32,
    pub english: i32,
}

impl RuleBreakdown {
    pub fn total(&self) -> i32 {
        self.japanese + self.location + self.age + self.gender + self.english
    }
}

/// Apply all rules to `base_score`. Returns the floored score and the
/// per-rule breakdown.
pub fn adjust_score(
    base_score: u32,
    candidate: &CandidateProfile,
    job: &JobRequirement,
    config: &RulesConfig,
) -> (u32, RuleBreakdown) {
    let breakdown = RuleBreakdown {
        japanese: japanese_delta(candidate, job),
        location: location_delta(candidate, job),
        age: age_delta(candidate, job, config),
        gender: gender_delta(candidate, job, config),
        english: english_delta(candidate, job),
    };

    let adjusted = base_score as i64 + breakdown.total() as i64;
    (adjusted.max(0) as u32, breakdown)
}

fn japanese_delta(candidate: &CandidateProfile, job: &JobRequirement) -> i32 {
    let strict = job.requires_spoken_japanese();
    match candidate.japanese_level {
        LanguageLevel::Native => 0,
        LanguageLevel::Fluent => {
            if strict {
                -5
            } else {
                -1
            }
        }
        LanguageLevel::Business => {
            if strict {
                -15
            } else {
                -10
            }
        }
        LanguageLevel::ReadingWriting => -20,
        LanguageLevel::NoneOrUnknown => {
            if strict {
                -80
            } else {
                -30
            }
        }
    }
}

fn location_delta(candidate: &CandidateProfile, job: &JobRequirement) -> i32 {
    if candidate.country == job.country {
        return 0;
    }

    match candidate.japanese_level {
        level if level.is_strong() => -5,
        LanguageLevel::Business | LanguageLevel::ReadingWriting => -40,
        _ => {
            // No local language at all; heavier still when the role
            // actually requires it
            if job.required_japanese >= LanguageLevel::Business {
                -90
            } else {
                -50
            }
        }
    }
}

fn age_delta(candidate: &CandidateProfile, job: &JobRequirement, config: &RulesConfig) -> i32 {
    let Some(age) = candidate.age else { return 0 };

    let mut delta = 0i32;

    if let Some(target) = job.target_age {
        let distance = age.years.abs_diff(target);
        if distance > config.age_tolerance_years {
            let beyond = distance - config.age_tolerance_years;
            delta -= (beyond / config.age_years_per_point.max(1)) as i32;
        }
    }

    // Independent seniority risk: the largest crossed threshold applies
    delta -= match age.years {
        y if y > 60 => 20,
        y if y > 55 => 10,
        y if y > 50 => 5,
        _ => 0,
    };

    delta
}

fn gender_delta(candidate: &CandidateProfile, job: &JobRequirement, config: &RulesConfig) -> i32 {
    if config.gender_bonus == 0 {
        return 0;
    }
    match job.preferred_gender {
        Some(preferred) if preferred == candidate.gender => config.gender_bonus as i32,
        _ => 0,
    }
}

fn english_delta(candidate: &CandidateProfile, job: &JobRequirement) -> i32 {
    match job.headquarters {
        Headquarters::Global => match candidate.english_level {
            level if level.is_strong() => 5,
            LanguageLevel::Business => 2,
            LanguageLevel::ReadingWriting => 0,
            _ => -10,
        },
        Headquarters::Domestic => match candidate.english_level {
            level if level.is_strong() => 2,
            LanguageLevel::Business => 1,
            _ => 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::profile::{Age, Gender};
    use crate::scoring::taxonomy::TaxonomyPath;

    fn candidate(
        country: &str,
        age: Option<u32>,
        japanese: LanguageLevel,
        english: LanguageLevel,
    ) -> CandidateProfile {
        CandidateProfile {
            name: "Test Candidate".to_string(),
            current_company: "Acme".to_string(),
            current_position: "AE".to_string(),
            previous_company_1: "Unknown".to_string(),
            previous_position_1: "Unknown".to_string(),
            previous_company_2: "Unknown".to_string(),
            previous_position_2: "Unknown".to_string(),
            country: country.to_string(),
            city: "Tokyo".to_string(),
            age: age.map(|years| Age {
                years,
                margin: None,
            }),
            gender: Gender::Unknown,
            japanese_level: japanese,
            english_level: english,
            other_languages: "Unknown".to_string(),
            industry: TaxonomyPath::default(),
            function: TaxonomyPath::default(),
            resume_text: String::new(),
        }
    }

    fn job(country: &str, required_japanese: LanguageLevel, hq: Headquarters) -> JobRequirement {
        JobRequirement {
            company: "Acme".to_string(),
            position: "AE".to_string(),
            country: country.to_string(),
            city: "Tokyo".to_string(),
            industry: TaxonomyPath::default(),
            function: TaxonomyPath::default(),
            required_japanese,
            required_english: LanguageLevel::Business,
            target_age: Some(30),
            headquarters: hq,
            headcount: "Unknown".to_string(),
            job_level: "Unknown".to_string(),
            preferred_gender: None,
        }
    }

    fn rules() -> RulesConfig {
        RulesConfig {
            age_tolerance_years: 6,
            age_years_per_point: 3,
            gender_bonus: 0,
        }
    }

    #[test]
    fn test_perfect_local_candidate_has_no_penalties() {
        let candidate = candidate(
            "Japan",
            Some(30),
            LanguageLevel::Native,
            LanguageLevel::Fluent,
        );
        let job = job("Japan", LanguageLevel::Business, Headquarters::Domestic);
        let (score, breakdown) = adjust_score(100, &candidate, &job, &rules());
        assert_eq!(breakdown.japanese, 0);
        assert_eq!(breakdown.location, 0);
        assert_eq!(breakdown.age, 0);
        // Domestic HQ still rewards strong English modestly
        assert_eq!(breakdown.english, 2);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_japanese_tiers() {
        let job = job("Japan", LanguageLevel::Business, Headquarters::Domestic);
        let levels = [
            (LanguageLevel::Native, 0),
            (LanguageLevel::Fluent, -1),
            (LanguageLevel::Business, -10),
            (LanguageLevel::ReadingWriting, -20),
            (LanguageLevel::NoneOrUnknown, -30),
        ];
        for (level, expected) in levels {
            let candidate = candidate("Japan", Some(30), level, LanguageLevel::NoneOrUnknown);
            let (_, breakdown) = adjust_score(100, &candidate, &job, &rules());
            assert_eq!(breakdown.japanese, expected, "level {:?}", level);
        }
    }

    #[test]
    fn test_spoken_fluency_roles_use_the_heavier_tier() {
        let job = job("Japan", LanguageLevel::Fluent, Headquarters::Domestic);
        let candidate = candidate(
            "Japan",
            Some(30),
            LanguageLevel::NoneOrUnknown,
            LanguageLevel::Fluent,
        );
        let (_, breakdown) = adjust_score(100, &candidate, &job, &rules());
        assert_eq!(breakdown.japanese, -80);
    }

    #[test]
    fn test_location_penalty_tiers() {
        let job = job("Japan", LanguageLevel::Business, Headquarters::Domestic);

        let strong = candidate(
            "Singapore",
            Some(30),
            LanguageLevel::Fluent,
            LanguageLevel::Fluent,
        );
        let (_, breakdown) = adjust_score(100, &strong, &job, &rules());
        assert_eq!(breakdown.location, -5);

        let moderate = candidate(
            "Singapore",
            Some(30),
            LanguageLevel::Business,
            LanguageLevel::Fluent,
        );
        let (_, breakdown) = adjust_score(100, &moderate, &job, &rules());
        assert_eq!(breakdown.location, -40);

        // No local language and the role requires it: the largest tier
        let none = candidate(
            "Singapore",
            Some(30),
            LanguageLevel::NoneOrUnknown,
            LanguageLevel::Fluent,
        );
        let (_, breakdown) = adjust_score(100, &none, &job, &rules());
        assert_eq!(breakdown.location, -90);
    }

    #[test]
    fn test_location_penalty_without_language_requirement() {
        let mut job = job("Japan", LanguageLevel::NoneOrUnknown, Headquarters::Domestic);
        job.required_japanese = LanguageLevel::NoneOrUnknown;
        let none = candidate(
            "Singapore",
            Some(30),
            LanguageLevel::NoneOrUnknown,
            LanguageLevel::Fluent,
        );
        let (_, breakdown) = adjust_score(100, &none, &job, &rules());
        assert_eq!(breakdown.location, -50);
    }

    #[test]
    fn test_age_distance_beyond_tolerance() {
        let job = job("Japan", LanguageLevel::Business, Headquarters::Domestic);
        // Target 30, tolerance 6: age 45 is 9 beyond, one point per 3 years
        let candidate = candidate(
            "Japan",
            Some(45),
            LanguageLevel::Native,
            LanguageLevel::Fluent,
        );
        let (_, breakdown) = adjust_score(100, &candidate, &job, &rules());
        assert_eq!(breakdown.age, -3);
    }

    #[test]
    fn test_age_seniority_thresholds() {
        let job = job("Japan", LanguageLevel::Business, Headquarters::Domestic);
        for (age, expected_flat) in [(52u32, 5i32), (57, 10), (63, 20)] {
            let candidate = candidate(
                "Japan",
                Some(age),
                LanguageLevel::Native,
                LanguageLevel::Fluent,
            );
            let (_, breakdown) = adjust_score(100, &candidate, &job, &rules());
            let distance_part = ((age - 30 - 6) / 3) as i32;
            assert_eq!(breakdown.age, -(distance_part + expected_flat), "age {}", age);
        }
    }

    #[test]
    fn test_unknown_age_is_not_penalized() {
        let job = job("Japan", LanguageLevel::Business, Headquarters::Domestic);
        let candidate = candidate("Japan", None, LanguageLevel::Native, LanguageLevel::Fluent);
        let (_, breakdown) = adjust_score(100, &candidate, &job, &rules());
        assert_eq!(breakdown.age, 0);
    }

    #[test]
    fn test_gender_bonus_only_when_configured() {
        let mut config = rules();
        let mut job = job("Japan", LanguageLevel::Business, Headquarters::Domestic);
        job.preferred_gender = Some(Gender::Female);
        let mut candidate = candidate(
            "Japan",
            Some(30),
            LanguageLevel::Native,
            LanguageLevel::NoneOrUnknown,
        );
        candidate.gender = Gender::Female;

        let (_, breakdown) = adjust_score(100, &candidate, &job, &config);
        assert_eq!(breakdown.gender, 0);

        config.gender_bonus = 2;
        let (_, breakdown) = adjust_score(100, &candidate, &job, &config);
        assert_eq!(breakdown.gender, 2);
    }

    #[test]
    fn test_english_depends_on_headquarters() {
        let global = job("Japan", LanguageLevel::Business, Headquarters::Global);
        let domestic = job("Japan", LanguageLevel::Business, Headquarters::Domestic);

        let fluent = candidate("Japan", Some(30), LanguageLevel::Native, LanguageLevel::Fluent);
        assert_eq!(adjust_score(100, &fluent, &global, &rules()).1.english, 5);
        assert_eq!(adjust_score(100, &fluent, &domestic, &rules()).1.english, 2);

        let none = candidate(
            "Japan",
            Some(30),
            LanguageLevel::Native,
            LanguageLevel::NoneOrUnknown,
        );
        assert_eq!(adjust_score(100, &none, &global, &rules()).1.english, -10);
        assert_eq!(adjust_score(100, &none, &domestic, &rules()).1.english, 0);
    }

    #[test]
    fn test_score_never_goes_negative() {
        let job = job("Japan", LanguageLevel::Business, Headquarters::Global);
        let worst = candidate(
            "Brazil",
            Some(65),
            LanguageLevel::NoneOrUnknown,
            LanguageLevel::NoneOrUnknown,
        );
        let (score, breakdown) = adjust_score(30, &worst, &job, &rules());
        assert!(breakdown.total() < -30);
        assert_eq!(score, 0);
    }
}
