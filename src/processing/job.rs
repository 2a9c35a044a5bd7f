//! Job postings as supplied by the job store

use crate::error::{Result, SkillMatcherError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque job identifier; stores use either integer or string keys
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    Number(i64),
    Text(String),
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobId::Number(id) => write!(f, "{}", id),
            JobId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for JobId {
    fn from(id: i64) -> Self {
        JobId::Number(id)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        JobId::Text(id.to_string())
    }
}

/// A job posting with its required and preferred skills.
///
/// Everything apart from the two skill lists is metadata carried through to
/// the ranked output untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub company_website: Option<String>,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
}

impl JobPosting {
    pub fn new(id: impl Into<JobId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            company_id: None,
            company_name: None,
            company_logo: None,
            company_website: None,
            experience_level: String::new(),
            location: None,
            salary_range: None,
            required_skills: Vec::new(),
            preferred_skills: Vec::new(),
        }
    }

    pub fn with_required<S: AsRef<str>>(mut self, skills: &[S]) -> Self {
        self.required_skills = skills.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn with_preferred<S: AsRef<str>>(mut self, skills: &[S]) -> Self {
        self.preferred_skills = skills.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn with_company(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }
}

/// Parse a JSON array of job postings
pub fn parse_jobs(json: &str) -> Result<Vec<JobPosting>> {
    let jobs: Vec<JobPosting> = serde_json::from_str(json)?;

    if let Some(job) = jobs.iter().find(|job| job.title.trim().is_empty()) {
        return Err(SkillMatcherError::InvalidInput(format!("Job {} has an empty title", job.id)));
    }

    Ok(jobs)
}

/// Keep only postings owned by `company_id`; `None` keeps every posting
pub fn filter_by_company(jobs: Vec<JobPosting>, company_id: Option<i64>) -> Vec<JobPosting> {
    match company_id {
        Some(id) => jobs.into_iter().filter(|job| job.company_id == Some(id)).collect(),
        None => jobs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_jobs_with_mixed_ids() {
        let json = r#"[
            {"id": 1, "title": "Backend Engineer", "required_skills": ["python", "sql"]},
            {"id": "ext-7", "title": "Data Analyst", "company_name": "Acme",
             "preferred_skills": ["pandas"]}
        ]"#;

        let jobs = parse_jobs(json).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].id, JobId::Number(1));
        assert_eq!(jobs[0].required_skills, vec!["python", "sql"]);
        assert!(jobs[0].preferred_skills.is_empty());
        assert_eq!(jobs[1].id, JobId::Text("ext-7".to_string()));
        assert_eq!(jobs[1].company_name.as_deref(), Some("Acme"));
        assert_eq!(jobs[1].id.to_string(), "ext-7");
    }

    #[test]
    fn test_parse_jobs_rejects_blank_title() {
        let json = r#"[{"id": 3, "title": "  "}]"#;
        let err = parse_jobs(json).unwrap_err();
        assert!(matches!(err, SkillMatcherError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_jobs_rejects_malformed_json() {
        let err = parse_jobs(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, SkillMatcherError::Serialization(_)));
    }

    #[test]
    fn test_builder() {
        let job = JobPosting::new(5_i64, "SRE")
            .with_required(&["docker"])
            .with_preferred(&["terraform"])
            .with_company("Initech");

        assert_eq!(job.id, JobId::Number(5));
        assert_eq!(job.required_skills, vec!["docker"]);
        assert_eq!(job.preferred_skills, vec!["terraform"]);
        assert_eq!(job.company_name.as_deref(), Some("Initech"));
    }

    #[test]
    fn test_filter_by_company() {
        let mut owned = JobPosting::new(1_i64, "Backend Engineer");
        owned.company_id = Some(42);
        let mut other = JobPosting::new(2_i64, "Data Engineer");
        other.company_id = Some(7);
        let unowned = JobPosting::new(3_i64, "SRE");
        let jobs = vec![owned, other, unowned];

        let filtered = filter_by_company(jobs.clone(), Some(42));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, JobId::Number(1));

        assert_eq!(filter_by_company(jobs.clone(), None), jobs);
        assert!(filter_by_company(jobs, Some(99)).is_empty());
    }
}
