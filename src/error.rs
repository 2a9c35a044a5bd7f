//! Error handling for the skill matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Skill catalog error: {0}")]
    Catalog(String),

    #[error("Similarity error: {0}")]
    Similarity(String),

    #[error("Phrase extraction error: {0}")]
    PhraseExtraction(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillMatcherError {
    fn from(err: anyhow::Error) -> Self {
        SkillMatcherError::InvalidInput(format!("{:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_anyhow_context_is_kept() {
        let err: SkillMatcherError = std::fs::read_to_string("/nonexistent/jobs.json")
            .context("Failed to read job listings")
            .unwrap_err()
            .into();

        match err {
            SkillMatcherError::InvalidInput(message) => {
                assert!(message.starts_with("Failed to read job listings: "));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
