//! Skill extraction from free-form resume text

use crate::config::Config;
use crate::error::Result;
use crate::processing::catalog::SkillCatalog;
use crate::processing::text_processor::{PhraseExtractor, TextProcessor};
use log::debug;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Line cues that open a skills section
const SECTION_HEADERS: [&str; 4] = ["skills", "technical skills", "competencies", "proficiencies"];

/// Skills-section delimiters in priority order; only the first one present is used
const SECTION_DELIMITERS: [&str; 6] = [",", ";", "|", "\n", "•", "-"];

/// Noun phrases are kept only if they mention one of these
const PHRASE_CUES: [&str; 5] = ["api", "framework", "library", "tool", "platform"];

/// Turns text into a sorted, deduplicated list of canonical skills.
///
/// Three passes feed one set: a word-bounded catalog scan over the whole
/// text, a heuristic scan of the first "skills" section, and (when a phrase
/// extractor is attached) cue-bearing noun phrases.
#[derive(Clone)]
pub struct SkillExtractor {
    catalog: Arc<SkillCatalog>,
    phrase_extractor: Option<Arc<dyn PhraseExtractor>>,
}

impl SkillExtractor {
    pub fn new(catalog: Arc<SkillCatalog>) -> Self {
        Self {
            catalog,
            phrase_extractor: None,
        }
    }

    pub fn with_phrase_extractor(mut self, extractor: Arc<dyn PhraseExtractor>) -> Self {
        self.phrase_extractor = Some(extractor);
        self
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = Arc::new(SkillCatalog::from_config(&config.catalog)?);
        let extractor = Self::new(catalog);

        if config.extraction.noun_phrases {
            Ok(extractor.with_phrase_extractor(Arc::new(TextProcessor::new())))
        } else {
            Ok(extractor)
        }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Extract skills from text. Never fails; empty text gives an empty list.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut skills = BTreeSet::new();
        let text_lower = text.to_lowercase();

        self.scan_catalog(&text_lower, &mut skills);
        let from_catalog = skills.len();

        let section = find_skills_section(text);
        if !section.is_empty() {
            self.extract_from_skills_section(&section, &mut skills);
        }
        debug!(
            "Catalog scan found {} skills, skills section added {}",
            from_catalog,
            skills.len() - from_catalog
        );

        if let Some(extractor) = &self.phrase_extractor {
            self.extract_noun_phrases(extractor.as_ref(), text, &mut skills);
        }

        skills.into_iter().collect()
    }

    /// Add every catalog skill that occurs in the text with word boundaries on both sides
    fn scan_catalog(&self, text_lower: &str, skills: &mut BTreeSet<String>) {
        for mat in self.catalog.matcher().find_overlapping_iter(text_lower) {
            if has_word_boundaries(text_lower, mat.start(), mat.end()) {
                let skill = self.catalog.pattern(mat.pattern().as_usize());
                if !skills.contains(skill) {
                    skills.insert(skill.to_string());
                }
            }
        }
    }

    /// Split the section on its highest-priority delimiter and map each token
    /// to a catalog skill
    fn extract_from_skills_section(&self, section: &str, skills: &mut BTreeSet<String>) {
        let Some(delimiter) = SECTION_DELIMITERS.iter().find(|d| section.contains(*d)) else {
            return;
        };

        for part in section.split(delimiter) {
            let token = part.trim().to_lowercase();
            if token.chars().count() <= 2 {
                continue;
            }

            if let Some(skill) = self.catalog.resolve_token(&token) {
                skills.insert(skill.to_string());
            }
        }
    }

    fn extract_noun_phrases(
        &self,
        extractor: &dyn PhraseExtractor,
        text: &str,
        skills: &mut BTreeSet<String>,
    ) {
        match extractor.noun_phrases(text) {
            Ok(phrases) => {
                for phrase in phrases {
                    let phrase = phrase.trim().to_lowercase();
                    let length = phrase.chars().count();
                    if length > 2 && length < 30 && PHRASE_CUES.iter().any(|cue| phrase.contains(cue)) {
                        skills.insert(phrase);
                    }
                }
            }
            Err(e) => debug!("Noun phrase extraction skipped: {}", e),
        }
    }
}

/// Collect the lines of the first skills section into one space-joined buffer.
///
/// A line containing a header cue opens the section (and is itself skipped);
/// the section ends at the first blank line or line starting with a digit.
/// This is an approximation: a section with no such line runs to the end of
/// the text.
pub fn find_skills_section(text: &str) -> String {
    let mut section = String::new();
    let mut in_section = false;

    for line in text.split('\n') {
        let line_lower = line.to_lowercase();
        if SECTION_HEADERS.iter().any(|header| line_lower.contains(header)) {
            in_section = true;
            continue;
        }

        if in_section {
            match line.trim().chars().next() {
                Some(first) if !first.is_ascii_digit() => {
                    section.push_str(line);
                    section.push(' ');
                }
                _ => break,
            }
        }
    }

    section
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when the match is neither preceded nor followed by a letter, digit or
/// underscore. Skills such as "c++" or "ci/cd" may themselves end in
/// punctuation, so only the neighbouring characters are inspected.
fn has_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}
