//! CLI interface for jobfit

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "jobfit")]
#[command(about = "Match a resume against a job catalog")]
#[command(
    long_about = "Extract text from a resume, normalize it, and rank catalog jobs by TF-IDF cosine similarity"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a resume against the job catalog
    Match {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job catalog CSV (defaults to the configured path)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Number of matches to return
        #[arg(short = 'k', long)]
        top: Option<usize>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Show matched skill text per job
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Browse the job catalog
    Jobs {
        #[command(subcommand)]
        action: JobsAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum JobsAction {
    /// List job titles alphabetically, one page at a time
    List {
        /// Zero-based page number
        #[arg(short, long, default_value_t = 0)]
        page: usize,

        /// Titles per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Job catalog CSV (defaults to the configured path)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show the skills required for one job title
    Show {
        /// Exact job title
        title: String,

        /// Job catalog CSV (defaults to the configured path)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
