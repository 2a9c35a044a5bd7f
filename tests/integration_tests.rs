//! Integration tests for the skill matcher

use skill_matcher::config::{Config, OutputFormat};
use skill_matcher::input::InputManager;
use skill_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use skill_matcher::output::report::{AnalysisReport, SkillReport};
use skill_matcher::processing::job::filter_by_company;
use skill_matcher::processing::{JobId, JobRanker, SkillExtractor};
use skill_matcher::SkillMatcherError;
use std::path::Path;
use tempfile::TempDir;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Smith"));
    assert!(text.contains("Backend Software Engineer"));
    assert!(text.contains("PostgreSQL"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Smith"));
    assert!(text.contains("Kubernetes"));
    assert!(text.contains("AWS"));
    // Markdown syntax is stripped
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(!text.contains('`'));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(SkillMatcherError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(SkillMatcherError::InvalidInput(_))));
}

#[tokio::test]
async fn test_load_jobs() {
    let manager = InputManager::new();
    let jobs = manager.load_jobs(Path::new("tests/fixtures/jobs.json")).await.unwrap();

    assert_eq!(jobs.len(), 3);
    assert_eq!(jobs[1].id, JobId::Number(2));
    assert_eq!(jobs[1].company_id, Some(42));
    assert_eq!(jobs[2].id, JobId::Text("data-7".to_string()));
    assert!(jobs[2].description.is_empty());
    assert_eq!(jobs[2].preferred_skills, vec!["AWS"]);
}

#[tokio::test]
async fn test_load_jobs_rejects_documents() {
    let manager = InputManager::new();
    let result = manager.load_jobs(Path::new("tests/fixtures/sample_resume.txt")).await;
    assert!(matches!(result, Err(SkillMatcherError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_extract_skills_from_resume() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let extractor = SkillExtractor::from_config(&Config::default()).unwrap();
    let skills = extractor.extract(&text);

    for expected in ["python", "django", "postgresql", "docker", "git", "aws", "kubernetes", "communication"] {
        assert!(skills.contains(&expected.to_string()), "missing {}", expected);
    }
    assert!(!skills.contains(&"sql".to_string()));
    assert!(!skills.contains(&"react".to_string()));

    let mut sorted = skills.clone();
    sorted.sort();
    assert_eq!(skills, sorted);

    let report = SkillReport::new(skills, extractor.catalog());
    assert_eq!(report.soft_skills, vec!["communication"]);
    assert!(report.other_skills.is_empty());
}

#[tokio::test]
async fn test_markdown_and_text_resumes_agree() {
    let mut manager = InputManager::new();
    let extractor = SkillExtractor::from_config(&Config::default()).unwrap();

    let txt = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let md = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    assert_eq!(extractor.extract(&txt), extractor.extract(&md));
}

#[tokio::test]
async fn test_end_to_end_ranking() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let jobs = manager.load_jobs(Path::new("tests/fixtures/jobs.json")).await.unwrap();

    let skills = SkillExtractor::from_config(&Config::default()).unwrap().extract(&text);
    let matches = JobRanker::default().rank(&skills, &jobs);

    let ids: Vec<String> = matches.iter().map(|m| m.job.job_id.to_string()).collect();
    assert_eq!(ids, vec!["2", "data-7", "1"]);

    let best = &matches[0];
    assert_eq!(best.job.company_name, "Ledgerly");
    assert_eq!(best.detail.required_score, 100.0);
    assert_eq!(best.detail.preferred_score, 100.0);
    assert!(best.match_score > 70.0 && best.match_score <= 100.0);
    assert_eq!(
        best.improvement_tips,
        vec!["Great! You have all the required skills for this position."]
    );

    let data = &matches[1];
    assert_eq!(data.job.company_name, "Unknown Company");
    assert_eq!(data.detail.required_score, 33.33);
    assert_eq!(data.detail.missing_required_skills, vec!["pandas", "sql"]);

    let frontend = &matches[2];
    assert_eq!(frontend.match_score, 0.0);
    assert_eq!(
        frontend.improvement_tips,
        vec![
            "To improve your match for Frontend Developer, consider learning or highlighting:",
            "• Frameworks: react",
        ]
    );
}

#[tokio::test]
async fn test_json_report_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let resume_path = temp_dir.path().join("resume.txt");
    std::fs::write(
        &resume_path,
        "Skills\nRust • Go • Terraform\n\nBuilt CLI tools in Rust.\n",
    )
    .unwrap();

    let mut manager = InputManager::new();
    let text = manager.extract_text(&resume_path).await.unwrap();
    let jobs = manager.load_jobs(Path::new("tests/fixtures/jobs.json")).await.unwrap();

    let skills = SkillExtractor::from_config(&Config::default()).unwrap().extract(&text);
    assert_eq!(skills, vec!["go", "rust", "terraform"]);

    let mut report = AnalysisReport::new(skills, JobRanker::default().rank(&[], &jobs));
    report.truncate(1);

    let rendered = ReportGenerator::new()
        .generate_report(&report, OutputFormat::Json)
        .unwrap();
    let out_path = temp_dir.path().join("reports").join("matches.json");
    save_report_to_file(&rendered, &out_path).unwrap();

    let saved: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(saved["success"], true);
    assert_eq!(saved["total_jobs_analyzed"], 3);
    assert_eq!(saved["matches"].as_array().map(Vec::len), Some(1));
    assert_eq!(saved["extracted_skills"][0], "go");
}

#[tokio::test]
async fn test_ranking_restricted_to_one_company() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let jobs = manager.load_jobs(Path::new("tests/fixtures/jobs.json")).await.unwrap();

    let jobs = filter_by_company(jobs, Some(42));
    let skills = SkillExtractor::from_config(&Config::default()).unwrap().extract(&text);
    let matches = JobRanker::default().rank(&skills, &jobs);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].job.company_id, Some(42));
    assert_eq!(matches[0].job.job_title, "Backend Engineer");
}
