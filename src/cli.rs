//! CLI interface for the talent scorer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "talent-scorer")]
#[command(about = "Candidate-to-job matching and scoring tool")]
#[command(
    long_about = "Extract structured profiles from resumes and job descriptions, then score and rank candidates against each job using taxonomy matching, rule adjustments, and optional LLM escalation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract structured profiles from resume and job description files
    Extract {
        /// Directory of resume files (PDF, TXT, MD)
        #[arg(short, long)]
        resumes: PathBuf,

        /// Directory of job description files (PDF, TXT, MD)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Directory to write the extracted JSON files
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score previously extracted profiles against jobs and write ranked CSVs
    Score {
        /// Extracted candidate profiles JSON file
        #[arg(short, long)]
        profiles: PathBuf,

        /// Extracted job requirements JSON file
        #[arg(short, long)]
        jobs: PathBuf,

        /// Force LLM scoring for the first N candidates per job
        #[arg(long)]
        quota: Option<usize>,

        /// Rule-based scoring only, never call the LLM
        #[arg(long)]
        no_oracle: bool,

        /// Directory to write the ranked CSV files
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract and score in one pass
    Run {
        /// Directory of resume files (PDF, TXT, MD)
        #[arg(short, long)]
        resumes: PathBuf,

        /// Directory of job description files (PDF, TXT, MD)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Force LLM scoring for the first N candidates per job
        #[arg(long)]
        quota: Option<usize>,

        /// Rule-based scoring only, never call the LLM
        #[arg(long)]
        no_oracle: bool,

        /// Directory to write extracted JSON and ranked CSV files
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}
