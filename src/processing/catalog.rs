//! Skill catalog: the fixed vocabulary of recognized technical and soft skills

use crate::config::CatalogConfig;
use crate::error::{Result, SkillMatcherError};
use aho_corasick::{AhoCorasick, MatchKind};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Immutable skill vocabulary, partitioned into technical and soft skills.
///
/// Build it once and share it by reference (or `Arc`) between extractors;
/// nothing mutates it after construction, so concurrent reads need no locking.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    technical: BTreeSet<String>,
    soft: BTreeSet<String>,
    /// All skills, longest first, ties broken lexicographically
    by_length: Vec<String>,
    /// Overlapping multi-pattern matcher over `by_length`
    matcher: AhoCorasick,
}

impl SkillCatalog {
    /// Create the catalog with the built-in vocabulary only
    pub fn new() -> Result<Self> {
        Self::with_extra_skills(&[], &[])
    }

    /// Create the catalog from configuration, adding any extra skills
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        Self::with_extra_skills(&config.extra_technical, &config.extra_soft)
    }

    /// Create the catalog with additional technical and soft skills.
    ///
    /// Extra skills are trimmed and lowercased; blank entries are dropped.
    /// A skill already present in one partition is never added to the other.
    pub fn with_extra_skills(extra_technical: &[String], extra_soft: &[String]) -> Result<Self> {
        let mut technical: BTreeSet<String> =
            Self::default_technical_skills().iter().map(|s| s.to_string()).collect();
        let mut soft: BTreeSet<String> =
            Self::default_soft_skills().iter().map(|s| s.to_string()).collect();

        for skill in extra_technical.iter().filter_map(|s| Self::canonicalize(s)) {
            if !soft.contains(&skill) {
                technical.insert(skill);
            }
        }
        for skill in extra_soft.iter().filter_map(|s| Self::canonicalize(s)) {
            if !technical.contains(&skill) {
                soft.insert(skill);
            }
        }

        let mut by_length: Vec<String> = technical.iter().chain(soft.iter()).cloned().collect();
        by_length.sort_by(|a, b| {
            Reverse(a.chars().count())
                .cmp(&Reverse(b.chars().count()))
                .then_with(|| a.cmp(b))
        });

        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&by_length)
            .map_err(|e| SkillMatcherError::Catalog(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            technical,
            soft,
            by_length,
            matcher,
        })
    }

    fn canonicalize(skill: &str) -> Option<String> {
        let skill = skill.trim().to_lowercase();
        if skill.is_empty() {
            None
        } else {
            Some(skill)
        }
    }

    pub fn technical(&self) -> &BTreeSet<String> {
        &self.technical
    }

    pub fn soft(&self) -> &BTreeSet<String> {
        &self.soft
    }

    /// Case-insensitive membership test
    pub fn contains(&self, skill: &str) -> bool {
        let skill = skill.trim().to_lowercase();
        self.technical.contains(&skill) || self.soft.contains(&skill)
    }

    pub fn is_technical(&self, skill: &str) -> bool {
        self.technical.contains(&skill.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.by_length.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }

    /// All skills, longest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.by_length.iter().map(String::as_str)
    }

    pub(crate) fn matcher(&self) -> &AhoCorasick {
        &self.matcher
    }

    pub(crate) fn pattern(&self, index: usize) -> &str {
        &self.by_length[index]
    }

    /// Map a free-form skills-section token to a canonical catalog skill.
    ///
    /// Containment is tested both ways. Candidates are tried in a fixed order
    /// so the result is deterministic: an exact match first, then the longest
    /// skill contained in the token, then the shortest skill containing it.
    pub fn resolve_token(&self, token: &str) -> Option<&str> {
        if let Some(exact) = self.by_length.iter().find(|skill| skill.as_str() == token) {
            return Some(exact.as_str());
        }

        if let Some(contained) = self.by_length.iter().find(|skill| token.contains(skill.as_str())) {
            return Some(contained.as_str());
        }

        self.by_length
            .iter()
            .rev()
            .find(|skill| skill.contains(token))
            .map(String::as_str)
    }

    fn default_technical_skills() -> &'static [&'static str] {
        &[
            // Programming languages
            "python", "java", "javascript", "typescript", "c++", "c#", "go", "rust", "kotlin",
            "swift", "php", "ruby", "scala", "r", "matlab", "perl", "shell", "bash", "powershell",
            // Web
            "html", "css", "react", "angular", "vue", "node.js", "express", "django", "flask",
            "spring", "asp.net", "laravel", "rails", "next.js", "nuxt.js",
            // Databases
            "sql", "mysql", "postgresql", "mongodb", "redis", "oracle", "sqlite", "cassandra",
            "elasticsearch", "dynamodb", "neo4j",
            // Cloud and devops
            "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "ci/cd",
            "terraform", "ansible", "chef", "puppet", "linux", "unix",
            // Data science and ML
            "machine learning", "deep learning", "tensorflow", "pytorch", "keras",
            "scikit-learn", "pandas", "numpy", "matplotlib", "seaborn", "jupyter",
            "data analysis", "natural language processing", "nlp", "computer vision",
            "neural networks",
            // Mobile
            "android", "ios", "react native", "flutter", "xamarin",
            // Tools and practices
            "github", "gitlab", "jira", "confluence", "agile", "scrum", "kanban", "rest api",
            "graphql", "microservices", "api development",
        ]
    }

    fn default_soft_skills() -> &'static [&'static str] {
        &[
            "leadership", "communication", "teamwork", "problem solving", "critical thinking",
            "project management", "time management", "collaboration", "adaptability",
            "creativity", "analytical thinking", "attention to detail", "multitasking",
        ]
    }
}
