//! Character n-gram TF-IDF vectorizer.
//!
//! Converts raw text into sparse numeric feature rows. The analyzer works on
//! Unicode characters (spaces included), emitting every contiguous n-gram for
//! n in `ngram_min..=ngram_max`, so Korean text vectorizes without any
//! tokenizer. The vocabulary is capped at `max_features`, keeping the most
//! frequent n-grams across the fit corpus.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One vectorized text: `(feature index, weight)` pairs, sorted by index.
pub type SparseRow = Vec<(usize, f64)>;

/// Character n-gram TF-IDF vectorizer.
///
/// `fit` builds the vocabulary and IDF table from training texts only;
/// `transform` can then be applied to arbitrary future text. N-grams outside
/// the fitted vocabulary contribute nothing and are never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharNgramVectorizer {
    /// N-gram to feature index mapping
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature index
    pub idf: Vec<f64>,
    /// Minimum n-gram length
    pub ngram_min: usize,
    /// Maximum n-gram length (inclusive)
    pub ngram_max: usize,
    /// Vocabulary cap
    pub max_features: usize,
}

impl CharNgramVectorizer {
    pub fn new(ngram_min: usize, ngram_max: usize, max_features: usize) -> Self {
        CharNgramVectorizer {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            ngram_min,
            ngram_max,
            max_features,
        }
    }

    /// Fit the vocabulary and IDF table on a collection of texts.
    ///
    /// Vocabulary selection keeps the `max_features` most frequent n-grams by
    /// corpus count; ties are broken lexicographically so refits on the same
    /// corpus are identical.
    pub fn fit(&mut self, texts: &[&str]) {
        let mut corpus_count: HashMap<String, u64> = HashMap::new();
        let mut doc_count: HashMap<String, u64> = HashMap::new();

        for text in texts {
            let counts = ngram_counts(text, self.ngram_min, self.ngram_max);
            for (gram, count) in counts {
                *corpus_count.entry(gram.clone()).or_insert(0) += count;
                *doc_count.entry(gram).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, u64)> = corpus_count.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        self.vocabulary = ranked
            .iter()
            .enumerate()
            .map(|(idx, (gram, _))| (gram.clone(), idx))
            .collect();

        // Smoothed IDF: ln((1 + n_docs) / (1 + df)) + 1
        let n_docs = texts.len() as f64;
        self.idf = vec![0.0; self.vocabulary.len()];
        for (gram, &idx) in &self.vocabulary {
            let df = *doc_count.get(gram).unwrap_or(&1) as f64;
            self.idf[idx] = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
        }
    }

    /// Transform one text into a sparse TF-IDF row, L2-normalized.
    ///
    /// N-grams never seen during `fit` are silently ignored.
    pub fn transform(&self, text: &str) -> SparseRow {
        let mut tf: HashMap<usize, f64> = HashMap::new();
        for (gram, count) in ngram_counts(text, self.ngram_min, self.ngram_max) {
            if let Some(&idx) = self.vocabulary.get(&gram) {
                *tf.entry(idx).or_insert(0.0) += count as f64;
            }
        }

        let mut row: SparseRow = tf
            .into_iter()
            .map(|(idx, count)| (idx, count * self.idf[idx]))
            .collect();
        row.sort_unstable_by_key(|&(idx, _)| idx);

        let norm = row.iter().map(|&(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, v) in &mut row {
                *v /= norm;
            }
        }
        row
    }

    /// Transform a batch of texts.
    pub fn transform_batch(&self, texts: &[&str]) -> Vec<SparseRow> {
        texts.iter().map(|text| self.transform(text)).collect()
    }

    /// Number of fitted features.
    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    /// Save the fitted vectorizer to a JSON file.
    pub fn save(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a fitted vectorizer from a JSON file.
    pub fn load(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let vectorizer = serde_json::from_str(&json)?;
        Ok(vectorizer)
    }
}

/// Count every character n-gram of `text` for n in `min..=max`.
fn ngram_counts(text: &str, min: usize, max: usize) -> HashMap<String, u64> {
    let chars: Vec<char> = text.chars().collect();
    let mut counts = HashMap::new();
    for n in min..=max {
        if chars.len() < n {
            break;
        }
        for window in chars.windows(n) {
            let gram: String = window.iter().collect();
            *counts.entry(gram).or_insert(0) += 1;
        }
    }
    counts
}
