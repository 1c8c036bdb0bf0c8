//! Talent scorer: candidate-to-job matching and scoring pipeline

use clap::Parser;
use colored::Colorize;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;

use talent_scorer::cli::{Cli, Commands, ConfigAction};
use talent_scorer::config::Config;
use talent_scorer::error::Result;
use talent_scorer::extraction::job::{extract_job, JobRequirement};
use talent_scorer::extraction::profile::{extract_profile, CandidateProfile};
use talent_scorer::input::manager::InputManager;
use talent_scorer::oracle::client::{ChatOracle, OpenAiOracle};
use talent_scorer::output::{ranking, store, writer};
use talent_scorer::scoring::engine::ScoringEngine;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Extract {
            resumes,
            jobs,
            output,
        } => {
            if let Some(dir) = output {
                config.output.output_dir = dir;
            }
            let oracle = OpenAiOracle::from_config(&config.oracle)?;

            println!("🚀 Profile extraction");
            println!("📄 Resumes: {}", resumes.display());
            println!("💼 Job descriptions: {}", jobs.display());

            let (profiles, job_requirements) =
                extract_corpus(&oracle, &resumes, &jobs).await?;

            let profiles_path = store::save_profiles(&config.output.output_dir, &profiles)?;
            let jobs_path = store::save_jobs(&config.output.output_dir, &job_requirements)?;

            println!(
                "\n{} Extracted {} candidate profiles and {} job requirements",
                "✅".green(),
                profiles.len(),
                job_requirements.len()
            );
            println!("💾 Profiles: {}", profiles_path.display());
            println!("💾 Jobs: {}", jobs_path.display());
            Ok(())
        }

        Commands::Score {
            profiles,
            jobs,
            quota,
            no_oracle,
            output,
        } => {
            apply_overrides(&mut config, quota, output);

            println!("🚀 Candidate scoring");
            let candidate_profiles = store::load_profiles(&profiles)?;
            let job_requirements = store::load_jobs(&jobs)?;
            println!(
                "📊 {} candidates, {} jobs",
                candidate_profiles.len(),
                job_requirements.len()
            );

            let oracle = build_oracle(&config, no_oracle)?;
            score_and_write(&config, oracle.as_ref(), &job_requirements, &candidate_profiles).await
        }

        Commands::Run {
            resumes,
            jobs,
            quota,
            no_oracle,
            output,
        } => {
            apply_overrides(&mut config, quota, output);
            let extraction_oracle = OpenAiOracle::from_config(&config.oracle)?;

            println!("🚀 Full pipeline: extract and score");
            println!("📄 Resumes: {}", resumes.display());
            println!("💼 Job descriptions: {}", jobs.display());

            let (candidate_profiles, job_requirements) =
                extract_corpus(&extraction_oracle, &resumes, &jobs).await?;

            let profiles_path =
                store::save_profiles(&config.output.output_dir, &candidate_profiles)?;
            let jobs_path = store::save_jobs(&config.output.output_dir, &job_requirements)?;
            println!("💾 Profiles: {}", profiles_path.display());
            println!("💾 Jobs: {}", jobs_path.display());

            let scoring_oracle = build_oracle(&config, no_oracle)?;
            score_and_write(
                &config,
                scoring_oracle.as_ref(),
                &job_requirements,
                &candidate_profiles,
            )
            .await
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        talent_scorer::TalentScorerError::Configuration(e.to_string())
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::default().save()?;
                    println!("{} Configuration reset to defaults", "✅".green());
                }
            }
            Ok(())
        }
    }
}

fn apply_overrides(config: &mut Config, quota: Option<usize>, output: Option<PathBuf>) {
    if let Some(quota) = quota {
        config.scoring.deep_score_quota = quota;
    }
    if let Some(dir) = output {
        config.output.output_dir = dir;
    }
}

fn build_oracle(config: &Config, no_oracle: bool) -> Result<Option<OpenAiOracle>> {
    if no_oracle {
        println!("⚠️  LLM scoring disabled, rule-based scores only");
        return Ok(None);
    }
    Ok(Some(OpenAiOracle::from_config(&config.oracle)?))
}

/// Read both input directories and extract structured records from
/// every document. A document the oracle cannot process is logged and
/// skipped so the rest of the batch survives.
async fn extract_corpus<O: ChatOracle>(
    oracle: &O,
    resumes_dir: &Path,
    jobs_dir: &Path,
) -> Result<(Vec<CandidateProfile>, Vec<JobRequirement>)> {
    let mut input_manager = InputManager::new();

    println!("\n📂 Reading input documents...");
    let resume_docs = input_manager.load_directory(resumes_dir).await?;
    let job_docs = input_manager.load_directory(jobs_dir).await?;
    println!(
        "📂 {} resume files, {} job description files",
        resume_docs.len(),
        job_docs.len()
    );

    let mut profiles = Vec::new();
    for doc in &resume_docs {
        println!("📄 Extracting: {}", doc.path.display());
        match extract_profile(oracle, &doc.text).await {
            Ok(profile) => {
                info!("Extracted profile for {}", profile.name);
                profiles.push(profile);
            }
            Err(e) => warn!("Skipping {}: {}", doc.path.display(), e),
        }
    }

    let mut job_requirements = Vec::new();
    for doc in &job_docs {
        println!("💼 Extracting: {}", doc.path.display());
        match extract_job(oracle, &doc.text).await {
            Ok(job) => {
                info!("Extracted requirement for {} / {}", job.company, job.position);
                job_requirements.push(job);
            }
            Err(e) => warn!("Skipping {}: {}", doc.path.display(), e),
        }
    }

    Ok((profiles, job_requirements))
}

/// Score every candidate against every job and write one ranked CSV
/// per job. A job that ends with zero scorable candidates still gets
/// its file; the summary makes the empty outcome visible.
async fn score_and_write<O: ChatOracle>(
    config: &Config,
    oracle: Option<&O>,
    jobs: &[JobRequirement],
    candidates: &[CandidateProfile],
) -> Result<()> {
    config.ensure_output_dirs()?;
    let engine = ScoringEngine::new(config, oracle);
    let csv_dir = config.scored_candidates_dir();

    for job in jobs {
        println!(
            "\n🎯 {} / {}",
            job.company.bold(),
            job.position.bold()
        );

        let scored = engine.score_all(job, candidates).await;
        let ranked = ranking::rank(scored);
        let path = writer::write_scored_candidates(&csv_dir, job, &ranked)?;

        if ranked.is_empty() {
            println!("⚠️  No scorable candidates, wrote {}", path.display());
        } else {
            let top = &ranked[0];
            println!(
                "🏆 Top candidate: {} ({})",
                top.profile.name,
                top.final_score.to_string().green()
            );
            println!("💾 {} candidates ranked in {}", ranked.len(), path.display());
        }
    }

    println!("\n{} Scoring complete", "✅".green());
    Ok(())
}
