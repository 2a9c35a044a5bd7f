//! Noun-phrase extraction used as an optional recall booster during skill extraction

use crate::error::{Result, SkillMatcherError};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Capability that pulls candidate noun phrases out of free text.
///
/// Implementations may fail; callers treat a failure as "no phrases".
pub trait PhraseExtractor: Send + Sync {
    fn noun_phrases(&self, text: &str) -> Result<Vec<String>>;
}

/// Stop-word chunker: a noun phrase is a maximal run of words inside one
/// sentence that contains no stop word and no punctuation.
pub struct TextProcessor {
    stop_words: HashSet<&'static str>,
    max_length: usize,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    /// Inputs longer than this many characters are rejected
    pub const DEFAULT_MAX_LENGTH: usize = 1_000_000;

    pub fn new() -> Self {
        Self {
            stop_words: Self::create_stop_words(),
            max_length: Self::DEFAULT_MAX_LENGTH,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Split one sentence into phrase chunks
    fn chunk_sentence(&self, sentence: &str, phrases: &mut Vec<String>) {
        let mut current: Vec<&str> = Vec::new();

        for segment in sentence.split_word_bounds() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }

            let is_word = segment.chars().any(char::is_alphanumeric);
            if is_word && !self.stop_words.contains(segment.to_lowercase().as_str()) {
                current.push(segment);
            } else {
                Self::flush(&mut current, phrases);
            }
        }

        Self::flush(&mut current, phrases);
    }

    fn flush(current: &mut Vec<&str>, phrases: &mut Vec<String>) {
        if !current.is_empty() {
            phrases.push(current.join(" ").to_lowercase());
            current.clear();
        }
    }

    /// Common English function words and the verbs that usually bound a
    /// noun phrase in resume prose
    fn create_stop_words() -> HashSet<&'static str> {
        [
            "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "of", "in", "on", "at",
            "to", "for", "from", "by", "with", "without", "into", "onto", "over", "under",
            "about", "across", "after", "before", "between", "through", "during", "via", "per",
            "as", "is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had",
            "do", "does", "did", "will", "would", "can", "could", "should", "may", "might",
            "must", "shall", "i", "me", "my", "we", "our", "us", "you", "your", "he", "she",
            "it", "its", "they", "them", "their", "this", "that", "these", "those", "which",
            "who", "whom", "whose", "what", "where", "when", "while", "also", "very", "more",
            "most", "than", "then", "there", "here", "such", "each", "every", "all", "any",
            "both", "some", "other", "using", "used", "use", "built", "build", "building",
            "developed", "develop", "developing", "designed", "design", "led", "managed",
            "created", "implemented", "maintained", "worked", "working", "including",
        ]
        .into_iter()
        .collect()
    }
}

impl PhraseExtractor for TextProcessor {
    fn noun_phrases(&self, text: &str) -> Result<Vec<String>> {
        let length = text.chars().count();
        if length > self.max_length {
            return Err(SkillMatcherError::PhraseExtraction(format!(
                "Text of length {} exceeds maximum of {}",
                length, self.max_length
            )));
        }

        let mut phrases = Vec::new();
        for sentence in text.unicode_sentences() {
            for line in sentence.lines() {
                self.chunk_sentence(line, &mut phrases);
            }
        }

        Ok(phrases)
    }
}
