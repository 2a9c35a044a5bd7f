//! Output formatters: console, JSON and Markdown

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, SkillMatcherError};
use crate::output::report::{AnalysisReport, SkillReport};
use crate::processing::ranking::RankedMatch;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn format_skills(&self, report: &SkillReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored score bands
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    max_tips: usize,
}

/// JSON formatter; field names match the analysis API payload
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn score_color(score: f64) -> Color {
    if score >= 70.0 {
        Color::Green
    } else if score >= 40.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn score_label(score: f64) -> &'static str {
    if score >= 70.0 {
        "STRONG"
    } else if score >= 40.0 {
        "PARTIAL"
    } else {
        "WEAK"
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, max_tips: usize) -> Self {
        Self {
            use_colors,
            detailed,
            max_tips,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let badge = format!("[{:.2}% {}]", score, score_label(score));
        if self.use_colors {
            badge.color(score_color(score)).bold().to_string()
        } else {
            badge
        }
    }

    fn format_match(&self, rank: usize, entry: &RankedMatch) -> String {
        let mut output = String::new();
        let detail = &entry.detail;

        output.push_str(&format!(
            "{}. {} @ {} {}\n",
            rank,
            entry.job.job_title,
            entry.job.company_name,
            self.format_score_badge(entry.match_score)
        ));
        output.push_str(&format!(
            "   Required: {:.2}% ({}/{})  Preferred: {:.2}% ({}/{})\n",
            detail.required_score,
            detail.matched_required_count,
            detail.total_required_skills,
            detail.preferred_score,
            detail.matched_preferred_count,
            detail.total_preferred_skills
        ));

        if self.detailed {
            if let Some(location) = &entry.job.location {
                output.push_str(&format!("   Location: {}\n", location));
            }
            if !entry.job.experience_level.is_empty() {
                output.push_str(&format!("   Level: {}\n", entry.job.experience_level));
            }
            output.push_str(&format!(
                "   Matching: {}\n",
                self.colorize(
                    &list_or_none(
                        &[detail.matching_required_skills.clone(), detail.matching_preferred_skills.clone()]
                            .concat()
                    ),
                    Color::Green
                )
            ));
        }

        output.push_str(&format!(
            "   Missing required: {}\n",
            self.colorize(&list_or_none(&detail.missing_required_skills), Color::Red)
        ));
        if self.detailed {
            output.push_str(&format!(
                "   Missing preferred: {}\n",
                self.colorize(&list_or_none(&detail.missing_preferred_skills), Color::Yellow)
            ));
        }

        for tip in entry.improvement_tips.iter().take(self.max_tips) {
            output.push_str(&format!("   {}\n", tip));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("SKILL MATCH ANALYSIS"));
        output.push_str(&format!(
            "Generated: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&format!(
            "Extracted skills ({}): {}\n",
            report.extracted_skills.len(),
            self.colorize(&list_or_none(&report.extracted_skills), Color::Cyan)
        ));

        output.push_str(&self.format_header(&format!(
            "Ranked Jobs ({} of {})",
            report.matches.len(),
            report.total_jobs_analyzed
        )));

        if report.matches.is_empty() {
            output.push_str("No jobs to rank.\n");
        }
        for (index, entry) in report.matches.iter().enumerate() {
            output.push_str(&self.format_match(index + 1, entry));
            output.push('\n');
        }

        Ok(output)
    }

    fn format_skills(&self, report: &SkillReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("Extracted Skills ({})", report.skill_count)));
        output.push_str(&format!(
            "Technical: {}\n",
            self.colorize(&list_or_none(&report.technical_skills), Color::Cyan)
        ));
        output.push_str(&format!(
            "Soft: {}\n",
            self.colorize(&list_or_none(&report.soft_skills), Color::Magenta)
        ));
        if self.detailed || !report.other_skills.is_empty() {
            output.push_str(&format!("Other: {}\n", list_or_none(&report.other_skills)));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.map_err(|e| SkillMatcherError::OutputFormatting(format!("JSON serialization failed: {}", e)))
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_skills(&self, report: &SkillReport) -> Result<String> {
        self.to_json(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut content = String::new();

        content.push_str("# Skill Match Analysis\n\n");
        if self.include_metadata {
            content.push_str(&format!(
                "_Generated {} | {} jobs analyzed_\n\n",
                report.generated_at.to_rfc3339(),
                report.total_jobs_analyzed
            ));
        }

        content.push_str("## Extracted Skills\n\n");
        content.push_str(&format!("{}\n\n", list_or_none(&report.extracted_skills)));

        content.push_str("## Ranked Jobs\n\n");
        content.push_str("| # | Job | Company | Score | Required | Preferred |\n");
        content.push_str("|---|-----|---------|-------|----------|-----------|\n");
        for (index, entry) in report.matches.iter().enumerate() {
            content.push_str(&format!(
                "| {} | {} | {} | {:.2}% | {:.2}% | {:.2}% |\n",
                index + 1,
                entry.job.job_title,
                entry.job.company_name,
                entry.match_score,
                entry.detail.required_score,
                entry.detail.preferred_score
            ));
        }

        for entry in &report.matches {
            content.push_str(&format!("\n### {}\n\n", entry.job.job_title));
            content.push_str(&format!(
                "- **Missing required:** {}\n",
                list_or_none(&entry.detail.missing_required_skills)
            ));
            content.push_str(&format!(
                "- **Missing preferred:** {}\n\n",
                list_or_none(&entry.detail.missing_preferred_skills)
            ));
            for tip in &entry.improvement_tips {
                // bucket tips already carry a bullet
                let tip = tip.trim_start_matches("• ");
                content.push_str(&format!("> {}\n", tip));
            }
        }

        Ok(content)
    }

    fn format_skills(&self, report: &SkillReport) -> Result<String> {
        let mut content = String::new();

        content.push_str(&format!("# Extracted Skills ({})\n\n", report.skill_count));
        content.push_str(&format!("- **Technical:** {}\n", list_or_none(&report.technical_skills)));
        content.push_str(&format!("- **Soft:** {}\n", list_or_none(&report.soft_skills)));
        content.push_str(&format!("- **Other:** {}\n", list_or_none(&report.other_skills)));

        Ok(content)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::from_config(&OutputConfig::default())
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(config.color_output, config.detailed, config.max_tips),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_report(report)
    }

    pub fn generate_skills(&self, report: &SkillReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_skills(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::job::JobPosting;
    use crate::processing::ranking::JobRanker;
    use tempfile::TempDir;

    fn sample_report() -> AnalysisReport {
        let jobs = vec![
            JobPosting::new(1_i64, "Backend Engineer")
                .with_required(&["python", "sql", "docker"])
                .with_company("Acme"),
            JobPosting::new(2_i64, "Mobile Developer").with_required(&["kotlin", "swift"]),
        ];
        let skills = vec!["python".to_string(), "sql".to_string()];
        let matches = JobRanker::default().rank(&skills, &jobs);
        AnalysisReport::new(skills, matches)
    }

    #[test]
    fn test_console_without_colors() {
        let formatter = ConsoleFormatter::new(false, true, 10);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("SKILL MATCH ANALYSIS"));
        assert!(output.contains("1. Backend Engineer @ Acme"));
        assert!(output.contains("Missing required: docker"));
        assert!(output.contains("2. Mobile Developer @ Unknown Company"));
        assert!(output.contains("• Tools & Technologies: docker"));
        assert!(output.contains("[0.00% WEAK]"));
    }

    #[test]
    fn test_console_limits_tips() {
        let formatter = ConsoleFormatter::new(false, false, 1);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(!output.contains("• Tools & Technologies"));
        assert!(output.contains("To improve your match for Backend Engineer"));
    }

    #[test]
    fn test_json_round_trips_field_names() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["total_jobs_analyzed"], 2);
        assert_eq!(value["extracted_skills"][0], "python");
        assert_eq!(value["matches"][0]["job_title"], "Backend Engineer");
        assert!(value["matches"][0]["missing_required_skills"].is_array());
    }

    #[test]
    fn test_markdown_table() {
        let formatter = MarkdownFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.starts_with("# Skill Match Analysis"));
        assert!(output.contains("| 1 | Backend Engineer | Acme |"));
        assert!(output.contains("> Tools & Technologies: docker"));
    }

    #[test]
    fn test_generator_dispatch_and_save() {
        let generator = ReportGenerator::from_config(&OutputConfig {
            color_output: false,
            ..OutputConfig::default()
        });
        let report = sample_report();
        assert_eq!(generator.formatter(OutputFormat::Json).supports_format(), OutputFormat::Json);

        let content = generator.generate_report(&report, OutputFormat::Markdown).unwrap();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("report.md");
        save_report_to_file(&content, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }
}
