//! CLI interface for the skill matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "skill-matcher")]
#[command(about = "Extract skills from a resume and rank job postings against them")]
#[command(long_about = "Extract a normalized skill set from resume text, score it against job postings and suggest how to close the gaps")]
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
    /// Extract skills from a resume
    Extract {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Rank job postings against the skills found in a resume
    Match {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a JSON array of job postings
        #[arg(short, long)]
        jobs: PathBuf,

        /// Only show the best N matches
        #[arg(short, long)]
        top: Option<usize>,

        /// Only rank postings from this company id
        #[arg(long)]
        company: Option<i64>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Also collect noun phrases that mention APIs, frameworks, tools...
        #[arg(long)]
        phrases: bool,
    },

    /// Score a skill list against ad-hoc requirements
    Score {
        /// Skills to score, comma separated
        #[arg(short, long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Required skills, comma separated
        #[arg(short, long, value_delimiter = ',')]
        required: Vec<String>,

        /// Preferred skills, comma separated
        #[arg(short, long, value_delimiter = ',')]
        preferred: Vec<String>,
    },

    /// List the skill catalog
    Catalog {
        /// Show only technical skills
        #[arg(long, conflicts_with = "soft")]
        technical: bool,

        /// Show only soft skills
        #[arg(long)]
        soft: bool,
    },

    /// Show configuration
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

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
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

/// Trim list arguments and drop empty entries left by stray commas
pub fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
