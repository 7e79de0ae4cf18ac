//! Jobfit: resume-to-job matching over a static catalog

mod catalog;
mod cli;
mod config;
mod error;
mod input;
mod matching;
mod output;

use catalog::JobCatalog;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction, JobsAction};
use config::Config;
use error::{JobFitError, Result};
use input::manager::InputManager;
use log::{error, info, warn};
use matching::engine::MatchEngine;
use output::formatter::ReportGenerator;
use output::report::MatchReport;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            catalog,
            top,
            output,
            detailed,
            save,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md", "markdown"])
                .map_err(|e| JobFitError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = cli::parse_output_format(&output).map_err(JobFitError::InvalidInput)?;

            let catalog_path = catalog.unwrap_or_else(|| config.catalog.path.clone());
            info!("Loading job catalog from {}", catalog_path.display());
            let catalog = JobCatalog::load(&catalog_path)?;

            // One-time build phase; the engine is read-only afterwards
            let engine = MatchEngine::with_options(
                &catalog,
                config.matching.max_features,
                config.matching.top_k,
            )?;

            let mut input_manager = InputManager::new();
            let resume_text = match input_manager.extract_text(&resume).await {
                Ok(text) => text,
                Err(JobFitError::PdfExtraction(e)) => {
                    // No usable text; let the plausibility gate reject it below
                    warn!("Could not extract text from resume: {}", e);
                    String::new()
                }
                Err(e) => return Err(e),
            };

            let normalized = engine.normalize(&resume_text);
            if !engine.is_plausible_resume(&normalized) {
                println!(
                    "This does not appear to be a valid resume. \
                     Please provide a resume that lists your skills."
                );
                return Ok(());
            }

            let k = top.unwrap_or(config.matching.top_k);
            let matches = engine.query_normalized(&normalized, k)?;

            let report = MatchReport::new(
                resume.display().to_string(),
                engine.corpus_size(),
                engine.vocabulary_size(),
                matches,
            );

            let generator = ReportGenerator::new(
                config.output.color_output,
                detailed || config.output.detailed,
            );
            println!("{}", generator.format(&report, &output_format)?);

            if let Some(save_path) = save {
                generator.save(&report, &output_format, &save_path)?;
                println!("Report saved to {}", save_path.display());
            }
        }

        Commands::Jobs { action } => match action {
            JobsAction::List {
                page,
                page_size,
                catalog,
            } => {
                let catalog = load_catalog(catalog, &config)?;
                let page_size = page_size.unwrap_or(config.catalog.page_size);

                let titles = catalog.title_page(page, page_size);
                if titles.is_empty() {
                    println!("No job titles on page {}.", page);
                    return Ok(());
                }

                println!(
                    "Job titles (page {}, {} of {} total):",
                    page,
                    titles.len(),
                    catalog.titles().len()
                );
                for title in titles {
                    println!("  {}", title);
                }
            }

            JobsAction::Show { title, catalog } => {
                let catalog = load_catalog(catalog, &config)?;
                match catalog.skills_for(&title) {
                    Some(skills) => {
                        println!("Skills required for {}:", title);
                        println!("  {}", skills);
                    }
                    None => {
                        println!("No job titled '{}' in the catalog.", title);
                    }
                }
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration ({})", Config::config_path().display());
                println!("Catalog: {}", config.catalog.path.display());
                println!("Page size: {}", config.catalog.page_size);
                println!("Max vocabulary terms: {}", config.matching.max_features);
                println!("Top matches per query: {}", config.matching.top_k);
                println!("Output format: {:?}", config.output.format);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults.");
            }
        },
    }

    Ok(())
}

fn load_catalog(path: Option<PathBuf>, config: &Config) -> Result<JobCatalog> {
    let path = path.unwrap_or_else(|| config.catalog.path.clone());
    JobCatalog::load(&path)
}
