//! Final ranking of scored candidates

use crate::scoring::engine::ScoredCandidate;

/// Sort scored candidates by final score, best first. The sort is
/// stable, so candidates with equal scores keep their original input
/// order.
pub fn rank(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| b.final_score.cmp(&a.final_score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::profile::{CandidateProfile, Gender, LanguageLevel};
    use crate::scoring::rules::RuleBreakdown;
    use crate::scoring::taxonomy::{Category, MatchedLevel, TaxonomyPath};

    fn scored(name: &str, final_score: u32) -> ScoredCandidate {
        ScoredCandidate {
            profile: CandidateProfile {
                name: name.to_string(),
                current_company: "Unknown".to_string(),
                current_position: "Unknown".to_string(),
                previous_company_1: "Unknown".to_string(),
                previous_position_1: "Unknown".to_string(),
                previous_company_2: "Unknown".to_string(),
                previous_position_2: "Unknown".to_string(),
                country: "Japan".to_string(),
                city: "Tokyo".to_string(),
                age: None,
                gender: Gender::Unknown,
                japanese_level: LanguageLevel::Native,
                english_level: LanguageLevel::Business,
                other_languages: "Unknown".to_string(),
                industry: TaxonomyPath::default(),
                function: TaxonomyPath::default(),
                resume_text: String::new(),
            },
            matched_industry: MatchedLevel {
                category: Category::Industry,
                depth: 3,
            },
            matched_function: MatchedLevel {
                category: Category::Function,
                depth: 3,
            },
            bucket: None,
            bucket_score: 84,
            tag_bonus: 0,
            rule_breakdown: RuleBreakdown::default(),
            rule_based_score: final_score,
            oracle_score: None,
            final_score,
        }
    }

    #[test]
    fn test_rank_sorts_descending() {
        let ranked = rank(vec![scored("a", 40), scored("b", 90), scored("c", 70)]);
        let names: Vec<&str> = ranked.iter().map(|s| s.profile.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank(vec![
            scored("first", 70),
            scored("second", 70),
            scored("third", 70),
        ]);
        let names: Vec<&str> = ranked.iter().map(|s| s.profile.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_input_is_fine() {
        assert!(rank(Vec::new()).is_empty());
    }
}
