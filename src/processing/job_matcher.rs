//! Match scoring between an extracted skill set and a job's skill requirements

use crate::processing::similarity::SimilarityEstimator;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Weight of the required-skill score within the exact-match score
pub const REQUIRED_WEIGHT: f64 = 0.7;
/// Weight of the preferred-skill score within the exact-match score
pub const PREFERRED_WEIGHT: f64 = 0.3;
/// Weight of the exact-match score within the final score
pub const EXACT_MATCH_WEIGHT: f64 = 0.7;
/// Weight of the semantic similarity within the final score
pub const SEMANTIC_WEIGHT: f64 = 0.3;

/// Score breakdown for one resume-vs-job comparison.
///
/// All scores are percentages rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: f64,
    #[serde(flatten)]
    pub detail: MatchDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub required_score: f64,
    pub preferred_score: f64,
    pub matching_required_skills: Vec<String>,
    pub matching_preferred_skills: Vec<String>,
    pub missing_required_skills: Vec<String>,
    pub missing_preferred_skills: Vec<String>,
    pub total_required_skills: usize,
    pub total_preferred_skills: usize,
    pub matched_required_count: usize,
    pub matched_preferred_count: usize,
}

impl MatchDetail {
    /// Missing required skills followed by missing preferred skills
    pub fn missing_skills(&self) -> Vec<String> {
        self.missing_required_skills
            .iter()
            .chain(self.missing_preferred_skills.iter())
            .cloned()
            .collect()
    }
}

/// Scores resume skills against job requirements
#[derive(Clone, Default)]
pub struct JobMatcher {
    similarity: SimilarityEstimator,
}

impl JobMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_similarity(similarity: SimilarityEstimator) -> Self {
        Self { similarity }
    }

    pub fn similarity(&self) -> &SimilarityEstimator {
        &self.similarity
    }

    /// Compute the composite match score.
    ///
    /// Skills are compared by lowercase equality. Empty requirement lists
    /// score 0 rather than dividing by zero.
    pub fn score(&self, resume_skills: &[String], required: &[String], preferred: &[String]) -> MatchResult {
        let resume: HashSet<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();
        let required_lower: Vec<String> = required.iter().map(|s| s.to_lowercase()).collect();
        let preferred_lower: Vec<String> = preferred.iter().map(|s| s.to_lowercase()).collect();

        let (matching_required, missing_required) = partition_by_presence(&required_lower, &resume);
        let (matching_preferred, missing_preferred) = partition_by_presence(&preferred_lower, &resume);

        let required_score = percentage(matching_required.len(), required_lower.len());
        let preferred_score = percentage(matching_preferred.len(), preferred_lower.len());
        let overall_score = required_score * REQUIRED_WEIGHT + preferred_score * PREFERRED_WEIGHT;

        let job_skills: Vec<String> = required.iter().chain(preferred.iter()).cloned().collect();
        let semantic_score = self.similarity.similarity(resume_skills, &job_skills);

        let final_score = overall_score * EXACT_MATCH_WEIGHT + semantic_score * SEMANTIC_WEIGHT;

        MatchResult {
            overall_score: round2(final_score),
            detail: MatchDetail {
                required_score: round2(required_score),
                preferred_score: round2(preferred_score),
                total_required_skills: required_lower.len(),
                total_preferred_skills: preferred_lower.len(),
                matched_required_count: matching_required.len(),
                matched_preferred_count: matching_preferred.len(),
                matching_required_skills: matching_required,
                matching_preferred_skills: matching_preferred,
                missing_required_skills: missing_required,
                missing_preferred_skills: missing_preferred,
            },
        }
    }
}

/// Split job skills into (present in resume, absent from resume), keeping order
fn partition_by_presence(job_skills: &[String], resume: &HashSet<String>) -> (Vec<String>, Vec<String>) {
    job_skills.iter().cloned().partition(|skill| resume.contains(skill))
}

fn percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64 * 100.0
    }
}

/// Round to two decimals, ties to even on the exact binary value
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
