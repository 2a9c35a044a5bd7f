//! Ranking of job postings by match score, with improvement tips per job

use crate::processing::job::{JobId, JobPosting};
use crate::processing::job_matcher::{JobMatcher, MatchDetail, MatchResult};
use log::info;
use serde::{Deserialize, Serialize};

const PROGRAMMING_LANGUAGES: [&str; 6] = ["python", "java", "javascript", "c++", "go", "rust"];
const FRAMEWORKS: [&str; 5] = ["react", "angular", "django", "flask", "spring"];
const TOOLS: [&str; 5] = ["docker", "kubernetes", "aws", "git", "jenkins"];

/// Skills listed per bucket tip
const MAX_SKILLS_PER_TIP: usize = 3;
/// Above this many missing skills the general advice is appended
const GENERAL_ADVICE_THRESHOLD: usize = 5;

/// Job metadata carried into the ranked output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub job_id: JobId,
    pub company_id: Option<i64>,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub company_website: Option<String>,
    pub job_title: String,
    pub job_description: String,
    pub experience_level: String,
    pub location: Option<String>,
    pub salary_range: Option<String>,
}

impl From<&JobPosting> for JobSummary {
    fn from(job: &JobPosting) -> Self {
        Self {
            job_id: job.id.clone(),
            company_id: job.company_id,
            company_name: job
                .company_name
                .clone()
                .unwrap_or_else(|| "Unknown Company".to_string()),
            company_logo: job.company_logo.clone(),
            company_website: job.company_website.clone(),
            job_title: job.title.clone(),
            job_description: job.description.clone(),
            experience_level: job.experience_level.clone(),
            location: job.location.clone(),
            salary_range: job.salary_range.clone(),
        }
    }
}

/// One entry of the ranked list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(flatten)]
    pub job: JobSummary,
    pub match_score: f64,
    #[serde(flatten)]
    pub detail: MatchDetail,
    pub improvement_tips: Vec<String>,
}

impl RankedMatch {
    fn new(job: &JobPosting, result: MatchResult) -> Self {
        let improvement_tips = generate_improvement_tips(&result.detail.missing_skills(), &job.title);

        Self {
            job: JobSummary::from(job),
            match_score: result.overall_score,
            detail: result.detail,
            improvement_tips,
        }
    }
}

/// Scores every job and orders them best first
#[derive(Clone, Default)]
pub struct JobRanker {
    matcher: JobMatcher,
}

impl JobRanker {
    pub fn new(matcher: JobMatcher) -> Self {
        Self { matcher }
    }

    /// Rank jobs by match score, descending. The sort is stable: jobs with
    /// equal scores keep their input order.
    pub fn rank(&self, resume_skills: &[String], jobs: &[JobPosting]) -> Vec<RankedMatch> {
        let mut matches: Vec<RankedMatch> = jobs
            .iter()
            .map(|job| {
                let result = self
                    .matcher
                    .score(resume_skills, &job.required_skills, &job.preferred_skills);
                RankedMatch::new(job, result)
            })
            .collect();

        matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

        info!("Ranked {} jobs against {} resume skills", matches.len(), resume_skills.len());
        matches
    }
}

/// Turn missing skills into human-readable advice for one job
pub fn generate_improvement_tips(missing_skills: &[String], job_title: &str) -> Vec<String> {
    if missing_skills.is_empty() {
        return vec!["Great! You have all the required skills for this position.".to_string()];
    }

    let mut tips = vec![format!(
        "To improve your match for {}, consider learning or highlighting:",
        job_title
    )];

    let buckets = [
        ("Programming languages", &PROGRAMMING_LANGUAGES[..]),
        ("Frameworks", &FRAMEWORKS[..]),
        ("Tools & Technologies", &TOOLS[..]),
    ];

    for (label, keywords) in buckets {
        let members: Vec<&str> = missing_skills
            .iter()
            .filter(|skill| {
                let skill = skill.to_lowercase();
                keywords.iter().any(|keyword| skill.contains(keyword))
            })
            .map(String::as_str)
            .take(MAX_SKILLS_PER_TIP)
            .collect();

        if !members.is_empty() {
            tips.push(format!("• {}: {}", label, members.join(", ")));
        }
    }

    if missing_skills.len() > GENERAL_ADVICE_THRESHOLD {
        tips.push("• Consider taking online courses or certifications for the missing skills".to_string());
        tips.push("• Build projects demonstrating these skills".to_string());
        tips.push("• Update your resume to highlight any related experience".to_string());
    }

    tips
}
