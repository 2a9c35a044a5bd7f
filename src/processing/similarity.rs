//! Similarity between skill lists: TF-IDF cosine with a token-overlap fallback

use crate::config::SimilarityConfig;
use crate::error::{Result, SkillMatcherError};
use log::warn;
use ndarray::Array1;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Capability that fits a vector space over exactly two documents and
/// returns the cosine similarity of their vectors in [0, 1].
pub trait DocumentVectorizer: Send + Sync {
    fn pairwise_similarity(&self, first: &str, second: &str) -> Result<f64>;
}

/// Term-frequency / inverse-document-frequency vectorizer.
///
/// Tokens are lowercase runs of two or more word characters. IDF is smoothed,
/// `ln((1 + n) / (1 + df)) + 1`, and rows are L2-normalized.
pub struct TfidfVectorizer {
    token_regex: Regex,
}

impl TfidfVectorizer {
    pub fn new() -> Result<Self> {
        let token_regex = Regex::new(r"\b\w\w+\b")
            .map_err(|e| SkillMatcherError::Similarity(format!("Invalid token pattern: {}", e)))?;
        Ok(Self { token_regex })
    }

    fn tokenize(&self, document: &str) -> Vec<String> {
        self.token_regex
            .find_iter(document)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }

    /// Fit the vocabulary and return one normalized TF-IDF row per document
    fn fit_transform(&self, documents: &[&str]) -> Result<Vec<Array1<f64>>> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| self.tokenize(d)).collect();

        let mut vocabulary: BTreeMap<&str, usize> = BTreeMap::new();
        for token in tokenized.iter().flatten() {
            vocabulary.insert(token.as_str(), 0);
        }
        if vocabulary.is_empty() {
            return Err(SkillMatcherError::Similarity(
                "Empty vocabulary; the documents contain no usable terms".to_string(),
            ));
        }
        for (index, slot) in vocabulary.values_mut().enumerate() {
            *slot = index;
        }

        let n_docs = documents.len() as f64;
        let mut document_frequency = Array1::<f64>::zeros(vocabulary.len());
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in unique {
                document_frequency[vocabulary[token]] += 1.0;
            }
        }
        let idf = document_frequency.mapv(|df| ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);

        let mut rows = Vec::with_capacity(tokenized.len());
        for tokens in &tokenized {
            let mut tf = Array1::<f64>::zeros(vocabulary.len());
            for token in tokens {
                tf[vocabulary[token.as_str()]] += 1.0;
            }

            let weighted = &tf * &idf;
            let norm = weighted.dot(&weighted).sqrt();
            rows.push(if norm > 0.0 { weighted / norm } else { weighted });
        }

        Ok(rows)
    }
}

impl DocumentVectorizer for TfidfVectorizer {
    fn pairwise_similarity(&self, first: &str, second: &str) -> Result<f64> {
        let rows = self.fit_transform(&[first, second])?;
        let (a, b) = (&rows[0], &rows[1]);

        let norm_a = a.dot(a).sqrt();
        let norm_b = b.dot(b).sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return Ok(0.0);
        }

        let score = a.dot(b) / (norm_a * norm_b);
        if score.is_finite() {
            Ok(score.clamp(0.0, 1.0))
        } else {
            Err(SkillMatcherError::Similarity(format!("Degenerate similarity value: {}", score)))
        }
    }
}

/// Estimates how similar two skill lists are, as a percentage in [0, 100].
///
/// Uses the vectorizer capability when present and falls back to Jaccard
/// similarity over whitespace tokens when it is absent or fails.
#[derive(Clone)]
pub struct SimilarityEstimator {
    vectorizer: Option<Arc<dyn DocumentVectorizer>>,
}

impl Default for SimilarityEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityEstimator {
    /// Estimator backed by TF-IDF, or by token overlap alone if the
    /// vectorizer cannot be constructed
    pub fn new() -> Self {
        match TfidfVectorizer::new() {
            Ok(vectorizer) => Self::with_vectorizer(Arc::new(vectorizer)),
            Err(e) => {
                warn!("TF-IDF vectorizer unavailable, using token overlap: {}", e);
                Self::jaccard_only()
            }
        }
    }

    pub fn from_config(config: &SimilarityConfig) -> Self {
        if config.tfidf {
            Self::new()
        } else {
            Self::jaccard_only()
        }
    }

    pub fn with_vectorizer(vectorizer: Arc<dyn DocumentVectorizer>) -> Self {
        Self {
            vectorizer: Some(vectorizer),
        }
    }

    pub fn jaccard_only() -> Self {
        Self { vectorizer: None }
    }

    pub fn has_vectorizer(&self) -> bool {
        self.vectorizer.is_some()
    }

    /// Similarity of two skill lists as a percentage; empty input yields 0
    pub fn similarity(&self, a: &[String], b: &[String]) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        if let Some(vectorizer) = &self.vectorizer {
            match vectorizer.pairwise_similarity(&a.join(" "), &b.join(" ")) {
                Ok(score) => return score * 100.0,
                Err(e) => warn!("Vectorizer failed, falling back to token overlap: {}", e),
            }
        }

        jaccard_similarity(a, b)
    }
}

/// Jaccard similarity of the lowercase whitespace tokens of two skill lists,
/// as a percentage
pub fn jaccard_similarity(a: &[String], b: &[String]) -> f64 {
    let tokens = |skills: &[String]| -> HashSet<String> {
        skills
            .iter()
            .flat_map(|skill| skill.split_whitespace())
            .map(str::to_lowercase)
            .collect()
    };

    let a_tokens = tokens(a);
    let b_tokens = tokens(b);

    let union = a_tokens.union(&b_tokens).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = a_tokens.intersection(&b_tokens).count();
    100.0 * intersection as f64 / union as f64
}
