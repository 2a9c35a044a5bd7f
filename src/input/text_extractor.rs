//! Text extraction from plain text and markdown files

use crate::error::{Result, SkillMatcherError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).await.map_err(|e| {
        SkillMatcherError::InvalidInput(format!("Failed to read '{}': {}", path.display(), e))
    })
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        read_file(path).await
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = read_file(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Render markdown to plain text, one line per heading, list item or
/// paragraph line. Block ends become blank lines so section boundaries
/// survive.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::End(Tag::Heading(..)) | Event::End(Tag::Item) | Event::End(Tag::CodeBlock(_)) => {
                text.push('\n')
            }
            Event::End(Tag::Paragraph) | Event::End(Tag::List(_)) | Event::End(Tag::BlockQuote) => {
                text.push_str("\n\n")
            }
            _ => {}
        }
    }

    collapse_blank_lines(&text)
}

fn collapse_blank_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.is_empty() && lines.last().map_or(true, |last| last.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_keeps_section_boundaries() {
        let markdown = "## Skills\n\n- Python, SQL\n- Docker\n\n## Experience\n\nBuilt **things**.";
        let text = markdown_to_text(markdown);

        assert!(text.contains("Skills\nPython, SQL\nDocker\n\nExperience"));
        assert!(text.ends_with("Built things."));
        assert!(!text.contains("**"));
        assert!(!text.contains("##"));
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("\n\na  \n\n\n\nb\n\n"), "a\n\nb");
    }
}
