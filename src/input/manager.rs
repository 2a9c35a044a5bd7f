//! Input manager for resume documents and job listings

use crate::error::{Result, SkillMatcherError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use crate::processing::job::{parse_jobs, JobPosting};
use anyhow::Context;
use log::info;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Read a resume document as plain text
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if let Some(cached_text) = self.cache.get(&path_str) {
            info!("Using cached text for: {}", path.display());
            return Ok(cached_text.clone());
        }

        Self::ensure_exists(path)?;

        let text = match self.detect_file_type(path)? {
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Json | FileType::Unknown => {
                return Err(SkillMatcherError::UnsupportedFormat(format!(
                    "Unsupported document type for: {}",
                    path.display()
                )));
            }
        };

        self.cache.insert(path_str, text.clone());

        Ok(text)
    }

    /// Read a JSON array of job postings
    pub async fn load_jobs(&self, path: &Path) -> Result<Vec<JobPosting>> {
        Self::ensure_exists(path)?;

        if self.detect_file_type(path)? != FileType::Json {
            return Err(SkillMatcherError::UnsupportedFormat(format!(
                "Job listings must be a .json file: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read job listings from {}", path.display()))?;
        let jobs = parse_jobs(&content)?;
        info!("Loaded {} jobs from {}", jobs.len(), path.display());
        Ok(jobs)
    }

    fn ensure_exists(path: &Path) -> Result<()> {
        if path.exists() {
            Ok(())
        } else {
            Err(SkillMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )))
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                SkillMatcherError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
