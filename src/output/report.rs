//! Report structures handed to the formatters and serialized for consumers

use crate::processing::catalog::SkillCatalog;
use crate::processing::ranking::RankedMatch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of extracting skills from one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillReport {
    pub success: bool,
    pub skills: Vec<String>,
    pub skill_count: usize,
    /// Extracted skills that belong to the technical partition
    pub technical_skills: Vec<String>,
    /// Extracted skills that belong to the soft partition
    pub soft_skills: Vec<String>,
    /// Extracted phrases that are not catalog skills
    pub other_skills: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl SkillReport {
    pub fn new(skills: Vec<String>, catalog: &SkillCatalog) -> Self {
        let mut technical_skills = Vec::new();
        let mut soft_skills = Vec::new();
        let mut other_skills = Vec::new();

        for skill in &skills {
            if catalog.is_technical(skill) {
                technical_skills.push(skill.clone());
            } else if catalog.contains(skill) {
                soft_skills.push(skill.clone());
            } else {
                other_skills.push(skill.clone());
            }
        }

        Self {
            success: true,
            skill_count: skills.len(),
            skills,
            technical_skills,
            soft_skills,
            other_skills,
            generated_at: Utc::now(),
        }
    }
}

/// Extracted skills plus the ranked job list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub success: bool,
    pub extracted_skills: Vec<String>,
    pub matches: Vec<RankedMatch>,
    pub total_jobs_analyzed: usize,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn new(extracted_skills: Vec<String>, matches: Vec<RankedMatch>) -> Self {
        Self {
            success: true,
            extracted_skills,
            total_jobs_analyzed: matches.len(),
            matches,
            generated_at: Utc::now(),
        }
    }

    /// Keep only the best `top` matches; the analyzed-job count is unchanged
    pub fn truncate(&mut self, top: usize) {
        self.matches.truncate(top);
    }

    pub fn best_match(&self) -> Option<&RankedMatch> {
        self.matches.first()
    }
}
