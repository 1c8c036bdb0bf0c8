//! CSV output for ranked scoring results

use crate::error::Result;
use crate::extraction::job::JobRequirement;
use crate::scoring::engine::ScoredCandidate;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Flat row shape for the scored-candidates CSV. The resume text is
/// deliberately dropped; everything else from the profile is carried
/// along with the computed scoring fields.
#[derive(Debug, Serialize)]
struct ScoredRow {
    name: String,
    current_company: String,
    current_position: String,
    previous_company_1: String,
    previous_position_1: String,
    previous_company_2: String,
    previous_position_2: String,
    country: String,
    city: String,
    age: String,
    gender: String,
    japanese_level: String,
    english_level: String,
    other_languages: String,
    i1: String,
    i2: String,
    i3: String,
    i4: String,
    f1: String,
    f2: String,
    f3: String,
    f4: String,
    matched_industry_level: String,
    matched_function_level: String,
    bucket: String,
    bucket_score: u32,
    tag_bonus: u32,
    rule_based_score: u32,
    oracle_score: Option<u32>,
    final_score: u32,
}

impl From<&ScoredCandidate> for ScoredRow {
    fn from(scored: &ScoredCandidate) -> Self {
        let profile = &scored.profile;
        Self {
            name: profile.name.clone(),
            current_company: profile.current_company.clone(),
            current_position: profile.current_position.clone(),
            previous_company_1: profile.previous_company_1.clone(),
            previous_position_1: profile.previous_position_1.clone(),
            previous_company_2: profile.previous_company_2.clone(),
            previous_position_2: profile.previous_position_2.clone(),
            country: profile.country.clone(),
            city: profile.city.clone(),
            age: profile
                .age
                .map(|age| age.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            gender: profile.gender.to_string(),
            japanese_level: profile.japanese_level.to_string(),
            english_level: profile.english_level.to_string(),
            other_languages: profile.other_languages.clone(),
            i1: profile.industry.l1.clone(),
            i2: profile.industry.l2.clone(),
            i3: profile.industry.l3.clone(),
            i4: profile.industry.tags.clone(),
            f1: profile.function.l1.clone(),
            f2: profile.function.l2.clone(),
            f3: profile.function.l3.clone(),
            f4: profile.function.tags.clone(),
            matched_industry_level: scored.matched_industry.to_string(),
            matched_function_level: scored.matched_function.to_string(),
            bucket: scored
                .bucket
                .map(|bucket| bucket.to_string())
                .unwrap_or_default(),
            bucket_score: scored.bucket_score,
            tag_bonus: scored.tag_bonus,
            rule_based_score: scored.rule_based_score,
            oracle_score: scored.oracle_score,
            final_score: scored.final_score,
        }
    }
}

/// Replace everything outside `[A-Za-z0-9_-]` so job identity is safe
/// in a filename
pub fn sanitize_filename(name: &str) -> String {
    let re = Regex::new(r"[^\w\-]").unwrap();
    re.replace_all(name, "_").to_string()
}

/// Deterministic output path for one job's ranked results
pub fn output_path(dir: &Path, job: &JobRequirement) -> PathBuf {
    dir.join(format!(
        "{}_{}_scored_candidates.csv",
        sanitize_filename(&job.company),
        sanitize_filename(&job.position)
    ))
}

/// Write ranked results for one job. An empty result set still writes
/// an (empty) file so "no scorable candidates" is visible on disk.
pub fn write_scored_candidates(
    dir: &Path,
    job: &JobRequirement,
    ranked: &[ScoredCandidate],
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = output_path(dir, job);

    let mut writer = csv::Writer::from_path(&path)?;
    for scored in ranked {
        writer.serialize(ScoredRow::from(scored))?;
    }
    writer.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::job::Headquarters;
    use crate::extraction::profile::{Age, CandidateProfile, Gender, LanguageLevel};
    use crate::scoring::bucket::BucketName;
    use crate::scoring::rules::RuleBreakdown;
    use crate::scoring::taxonomy::{Category, MatchedLevel, TaxonomyPath};
    use tempfile::tempdir;

    fn job() -> JobRequirement {
        JobRequirement {
            company: "Acme K.K.".to_string(),
            position: "Enterprise AE (Tokyo)".to_string(),
            country: "Japan".to_string(),
            city: "Tokyo".to_string(),
            industry: TaxonomyPath::default(),
            function: TaxonomyPath::default(),
            required_japanese: LanguageLevel::Business,
            required_english: LanguageLevel::Business,
            target_age: None,
            headquarters: Headquarters::Domestic,
            headcount: "Unknown".to_string(),
            job_level: "Unknown".to_string(),
            preferred_gender: None,
        }
    }

    fn scored() -> ScoredCandidate {
        ScoredCandidate {
            profile: CandidateProfile {
                name: "Taro Tanaka".to_string(),
                current_company: "CloudCo".to_string(),
                current_position: "AE".to_string(),
                previous_company_1: "Unknown".to_string(),
                previous_position_1: "Unknown".to_string(),
                previous_company_2: "Unknown".to_string(),
                previous_position_2: "Unknown".to_string(),
                country: "Japan".to_string(),
                city: "Tokyo".to_string(),
                age: Some(Age {
                    years: 35,
                    margin: Some(2),
                }),
                gender: Gender::Male,
                japanese_level: LanguageLevel::Native,
                english_level: LanguageLevel::Fluent,
                other_languages: "Unknown".to_string(),
                industry: TaxonomyPath::new("Digital", "Cloud", "SaaS", "AI"),
                function: TaxonomyPath::new("GTM", "Sales", "AE", "Field Sales"),
                resume_text: "should not appear in output".to_string(),
            },
            matched_industry: MatchedLevel {
                category: Category::Industry,
                depth: 4,
            },
            matched_function: MatchedLevel {
                category: Category::Function,
                depth: 4,
            },
            bucket: Some(BucketName::PerfectMatch),
            bucket_score: 100,
            tag_bonus: 16,
            rule_breakdown: RuleBreakdown::default(),
            rule_based_score: 99,
            oracle_score: Some(92),
            final_score: 92,
        }
    }

    #[test]
    fn test_filename_sanitization() {
        assert_eq!(sanitize_filename("Acme K.K."), "Acme_K_K_");
        assert_eq!(sanitize_filename("AE (Tokyo)"), "AE__Tokyo_");
        assert_eq!(sanitize_filename("plain-name_1"), "plain-name_1");
    }

    #[test]
    fn test_output_path_is_deterministic() {
        let dir = Path::new("out");
        let first = output_path(dir, &job());
        let second = output_path(dir, &job());
        assert_eq!(first, second);
        assert_eq!(
            first.file_name().unwrap().to_str().unwrap(),
            "Acme_K_K__Enterprise_AE__Tokyo__scored_candidates.csv"
        );
    }

    #[test]
    fn test_write_scored_candidates() {
        let dir = tempdir().unwrap();
        let path = write_scored_candidates(dir.path(), &job(), &[scored()]).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("matched_industry_level"));
        assert!(header.contains("final_score"));

        let row = lines.next().unwrap();
        assert!(row.contains("Taro Tanaka"));
        assert!(row.contains("Perfect Match"));
        assert!(row.contains("I4"));
        assert!(row.contains("92"));
        assert!(!content.contains("should not appear in output"));
    }

    #[test]
    fn test_empty_result_set_writes_empty_file() {
        let dir = tempdir().unwrap();
        let path = write_scored_candidates(dir.path(), &job(), &[]).unwrap();
        assert!(path.exists());
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.is_empty());
    }
}
