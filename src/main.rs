//! Skill matcher: extract resume skills and rank job postings against them

use clap::Parser;
use log::{error, info};
use skill_matcher::cli::{self, Cli, Commands, ConfigAction};
use skill_matcher::config::{Config, OutputFormat};
use skill_matcher::input::InputManager;
use skill_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use skill_matcher::output::report::{AnalysisReport, SkillReport};
use skill_matcher::processing::job::filter_by_company;
use skill_matcher::processing::{JobMatcher, JobRanker, SimilarityEstimator, SkillCatalog, SkillExtractor};
use skill_matcher::{Result, SkillMatcherError};
use std::path::{Path, PathBuf};
use std::process;

const RESUME_EXTENSIONS: [&str; 4] = ["txt", "text", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> Result<()> {
    let mut input_manager = InputManager::new();

    match command {
        Commands::Extract { resume, output, save } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let extractor = SkillExtractor::from_config(&config)?;

            let text = read_resume(&mut input_manager, &resume).await?;
            let skills = extractor.extract(&text);
            info!("Extracted {} skills from {}", skills.len(), resume.display());

            let report = SkillReport::new(skills, extractor.catalog());
            let rendered = ReportGenerator::from_config(&config.output).generate_skills(&report, format)?;
            emit(&rendered, save.as_ref())?;
        }

        Commands::Match {
            resume,
            jobs,
            top,
            company,
            detailed,
            output,
            save,
            phrases,
        } => {
            if detailed {
                config.output.detailed = true;
            }
            if phrases {
                config.extraction.noun_phrases = true;
            }

            let format = resolve_format(output.as_deref(), &config)?;
            cli::validate_file_extension(&jobs, &["json"])
                .map_err(|e| SkillMatcherError::InvalidInput(format!("Jobs file: {}", e)))?;

            let extractor = SkillExtractor::from_config(&config)?;
            let ranker = JobRanker::new(JobMatcher::with_similarity(SimilarityEstimator::from_config(
                &config.similarity,
            )));

            let text = read_resume(&mut input_manager, &resume).await?;
            let postings = filter_by_company(input_manager.load_jobs(&jobs).await?, company);
            if postings.is_empty() {
                return Err(SkillMatcherError::InvalidInput(match company {
                    Some(id) => format!("No jobs found for company {}", id),
                    None => "No jobs found".to_string(),
                }));
            }
            let skills = extractor.extract(&text);
            info!("Extracted {} skills, scoring {} jobs", skills.len(), postings.len());

            let matches = ranker.rank(&skills, &postings);
            let mut report = AnalysisReport::new(skills, matches);
            if let Some(top) = top {
                report.truncate(top);
            }

            let rendered = ReportGenerator::from_config(&config.output).generate_report(&report, format)?;
            emit(&rendered, save.as_ref())?;
        }

        Commands::Score { skills, required, preferred } => {
            let skills = cli::clean_list(&skills);
            let required = cli::clean_list(&required);
            let preferred = cli::clean_list(&preferred);

            let matcher = JobMatcher::with_similarity(SimilarityEstimator::from_config(&config.similarity));
            let result = matcher.score(&skills, &required, &preferred);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Catalog { technical, soft } => {
            let catalog = SkillCatalog::from_config(&config.catalog)?;

            if !soft {
                println!("Technical skills ({}):", catalog.technical().len());
                for skill in catalog.technical() {
                    println!("  {}", skill);
                }
            }
            if !technical {
                if !soft {
                    println!();
                }
                println!("Soft skills ({}):", catalog.soft().len());
                for skill in catalog.soft() {
                    println!("  {}", skill);
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| SkillMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("# {}\n", config_path.display());
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset: {}", config_path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

/// The command-line format wins over the configured default
fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(SkillMatcherError::InvalidInput),
        None => Ok(config.output.format),
    }
}

async fn read_resume(input_manager: &mut InputManager, path: &Path) -> Result<String> {
    cli::validate_file_extension(path, &RESUME_EXTENSIONS)
        .map_err(|e| SkillMatcherError::InvalidInput(format!("Resume file: {}", e)))?;

    input_manager.extract_text(path).await
}

fn emit(rendered: &str, save: Option<&PathBuf>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(rendered, path)?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
