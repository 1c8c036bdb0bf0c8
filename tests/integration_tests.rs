//! Integration tests for the talent scorer pipeline

use serde_json::json;
use std::path::Path;
use talent_scorer::config::Config;
use talent_scorer::error::Result;
use talent_scorer::extraction::job::extract_job;
use talent_scorer::extraction::profile::extract_profile;
use talent_scorer::input::manager::InputManager;
use talent_scorer::oracle::client::{ChatOracle, ChatReply, ToolSpec};
use talent_scorer::output::{ranking, writer};
use talent_scorer::scoring::engine::ScoringEngine;

/// Oracle stand-in that answers every tool by name with fixed records,
/// the way the real endpoint would for the fixture documents.
struct ScriptedOracle;

impl ChatOracle for ScriptedOracle {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_text: &str,
        tool: Option<&ToolSpec>,
    ) -> Result<ChatReply> {
        let arguments = match tool.map(|t| t.name.as_str()) {
            Some("get_general_info") => json!({
                "name": "Hanako Sato",
                "current_company": "CloudCo K.K.",
                "current_position": "Account Executive",
                "previous_company_1": "NetSoft Japan",
                "previous_position_1": "Field Sales",
                "previous_company_2": "Unknown",
                "previous_position_2": "Unknown",
                "country": "Japan",
                "city": "Tokyo",
                "age": "32",
                "gender": "Female",
                "japanese_level": "Native",
                "english_level": "Business",
                "other_languages": "Unknown",
            }),
            Some("get_job_info") => json!({
                "company": "Acme K.K.",
                "position": "Enterprise Account Executive",
                "country": "Japan",
                "city": "Tokyo",
                "japanese_level": "Business",
                "english_level": "Business",
                "target_age": "35",
                "headquarters": "Domestic",
                "headcount": "1000+",
                "job_level": "Senior",
            }),
            Some("generate_industry_labels") => json!({
                "I1": "Digital", "I2": "Cloud", "I3": "SaaS", "I4": "Sales, AI",
            }),
            Some("generate_function_labels") => json!({
                "F1": "GTM", "F2": "Sales", "F3": "AE", "F4": "Field Sales",
            }),
            Some("score_candidate") => json!({"score": 88}),
            _ => json!({}),
        };
        Ok(ChatReply {
            content: None,
            tool_arguments: Some(arguments),
        })
    }
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Hanako Sato"));
    assert!(text.contains("Account Executive"));
    assert!(text.contains("SaaS"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Hanako Sato"));
    assert!(text.contains("Account Executive"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_directory_intake_finds_fixture_documents() {
    let mut manager = InputManager::new();
    let docs = manager
        .load_directory(Path::new("tests/fixtures"))
        .await
        .unwrap();

    // Sorted order: sample_job.txt, sample_resume.md, sample_resume.txt
    assert_eq!(docs.len(), 3);
    assert!(docs[0].path.ends_with("sample_job.txt"));
    assert!(docs[2].text.contains("Keio University"));
}

#[tokio::test]
async fn test_full_pipeline_from_documents_to_ranked_csv() {
    let oracle = ScriptedOracle;
    let mut manager = InputManager::new();

    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let profile = extract_profile(&oracle, &resume_text).await.unwrap();
    assert_eq!(profile.name, "Hanako Sato");
    assert_eq!(profile.industry.l3, "SaaS");

    let job = extract_job(&oracle, &job_text).await.unwrap();
    assert_eq!(job.company, "Acme K.K.");
    assert_eq!(job.target_age, Some(35));

    let config = Config::default();
    let engine = ScoringEngine::new(&config, Some(&oracle));
    let ranked = ranking::rank(engine.score_all(&job, &[profile]).await);

    assert_eq!(ranked.len(), 1);
    // Full-depth match on both axes escalates, and the scripted oracle decides
    assert_eq!(ranked[0].matched_industry.to_string(), "I4");
    assert_eq!(ranked[0].matched_function.to_string(), "F4");
    assert_eq!(ranked[0].oracle_score, Some(88));
    assert_eq!(ranked[0].final_score, 88);

    let dir = tempfile::tempdir().unwrap();
    let path = writer::write_scored_candidates(dir.path(), &job, &ranked).unwrap();
    assert!(path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("Acme_K_K__Enterprise_Account_Executive"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Hanako Sato"));
    assert!(content.contains("88"));
    // The raw document never reaches the ranked output
    assert!(!content.contains("Keio University"));
}

#[tokio::test]
async fn test_pipeline_with_no_matching_candidates_writes_empty_file() {
    let oracle = ScriptedOracle;
    let job = {
        let job_text = "irrelevant";
        let mut job = extract_job(&oracle, job_text).await.unwrap();
        // A taxonomy no candidate matches at level 1
        job.industry.l1 = "Physical".to_string();
        job.function.l1 = "Engineering".to_string();
        job
    };

    let profile = extract_profile(&oracle, "resume body").await.unwrap();

    let config = Config::default();
    let engine = ScoringEngine::new(&config, Some(&oracle));
    let ranked = ranking::rank(engine.score_all(&job, &[profile]).await);
    assert!(ranked.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let path = writer::write_scored_candidates(dir.path(), &job, &ranked).unwrap();
    assert!(path.exists());
    assert!(std::fs::read_to_string(&path).unwrap().is_empty());
}
