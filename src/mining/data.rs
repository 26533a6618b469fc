//! Dataset records, CSV ingestion, and the training pool.
//!
//! Ingestion reads one or more CSV files, keeps only the configured text and
//! label columns, and silently drops rows that fail the cleaning rules
//! (missing text, missing or non-binary label, over-long text). Everything
//! downstream works on [`Example`] values held in a [`TrainingPool`].

use std::collections::HashSet;
use std::fs::File;

use csv::ReaderBuilder;

use super::config::DataConfig;
use crate::error::{Result, ToxfilterError};

/// A single labeled text snippet. `label` 1 means abusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub text: String,
    pub label: u8,
}

impl Example {
    pub fn new(text: impl Into<String>, label: u8) -> Self {
        Example {
            text: text.into(),
            label,
        }
    }
}

/// Insertion-ordered collection of examples, deduplicated by `(text, label)`.
///
/// The pool only ever grows: the mining loop appends the false negatives of
/// each round and duplicates are ignored. Insertion order is stable, which
/// keeps reruns with the same inputs reproducible.
#[derive(Debug, Clone, Default)]
pub struct TrainingPool {
    examples: Vec<Example>,
    seen: HashSet<(String, u8)>,
}

impl TrainingPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from cleaned examples, dropping duplicates.
    pub fn from_examples(examples: Vec<Example>) -> Self {
        let mut pool = Self::new();
        for example in examples {
            pool.push(example);
        }
        pool
    }

    /// Insert an example unless an identical `(text, label)` pair is present.
    ///
    /// Returns `true` if the pool grew.
    pub fn push(&mut self, example: Example) -> bool {
        let key = (example.text.clone(), example.label);
        if self.seen.contains(&key) {
            return false;
        }
        self.seen.insert(key);
        self.examples.push(example);
        true
    }

    /// Append many examples, deduplicating. Returns how many were new.
    pub fn extend(&mut self, examples: impl IntoIterator<Item = Example>) -> usize {
        examples
            .into_iter()
            .filter(|example| self.push(example.clone()))
            .count()
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Number of examples per label: `(label 0 count, label 1 count)`.
    pub fn label_counts(&self) -> (usize, usize) {
        let ones = self.examples.iter().filter(|e| e.label == 1).count();
        (self.examples.len() - ones, ones)
    }
}

/// Read and clean every configured CSV file into a deduplicated pool.
///
/// Rows are kept when the text cell is non-empty and at most
/// `max_text_chars` characters, and the label cell trims to `"0"` or `"1"`.
/// Everything else is dropped without error.
///
/// # Errors
///
/// Fails if a file cannot be opened, a header is missing one of the
/// configured columns, or the cleaned pool ends up empty.
pub fn load_pool(config: &DataConfig) -> Result<TrainingPool> {
    let mut examples = Vec::new();
    for path in &config.csv_paths {
        read_csv(path, config, &mut examples)?;
    }

    let pool = TrainingPool::from_examples(examples);
    if pool.is_empty() {
        return Err(ToxfilterError::EmptyPool);
    }
    Ok(pool)
}

fn read_csv(path: &str, config: &DataConfig, out: &mut Vec<Example>) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let text_idx = column_index(&headers, &config.text_column)?;
    let label_idx = column_index(&headers, &config.label_column)?;

    for record in reader.records() {
        let record = record?;
        let text = match record.get(text_idx) {
            Some(t) if !t.trim().is_empty() => t,
            _ => continue,
        };
        if text.chars().count() > config.max_text_chars {
            continue;
        }
        let label = match record.get(label_idx).map(str::trim) {
            Some("0") => 0,
            Some("1") => 1,
            _ => continue,
        };
        out.push(Example::new(text, label));
    }
    Ok(())
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| ToxfilterError::MissingColumn(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_data_config(paths: Vec<String>) -> DataConfig {
        DataConfig {
            csv_paths: paths,
            text_column: "문장".to_string(),
            label_column: "혐오 여부".to_string(),
            max_text_chars: 500,
        }
    }

    fn write_temp_csv(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_pool_dedup_idempotent() {
        let mut pool = TrainingPool::new();
        assert!(pool.push(Example::new("씨발", 1)));
        assert!(!pool.push(Example::new("씨발", 1)));
        assert_eq!(pool.len(), 1);

        // Same text with a different label is a distinct pair
        assert!(pool.push(Example::new("씨발", 0)));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_pool_extend_counts_new_only() {
        let mut pool = TrainingPool::from_examples(vec![
            Example::new("a", 1),
            Example::new("b", 0),
        ]);
        let added = pool.extend(vec![Example::new("a", 1), Example::new("c", 1)]);
        assert_eq!(added, 1);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_pool_label_counts() {
        let pool = TrainingPool::from_examples(vec![
            Example::new("a", 1),
            Example::new("b", 0),
            Example::new("c", 1),
        ]);
        assert_eq!(pool.label_counts(), (1, 2));
    }

    #[test]
    fn test_load_pool_filters_bad_rows() {
        let long_text = "가".repeat(501);
        let csv = format!(
            "문장,혐오 여부\n욕설이다,1\n괜찮은 문장,0\n,1\n라벨 없음,\n비정수 라벨,abc\n{},1\n  1 공백 라벨  , 1 \n",
            long_text
        );
        let path = write_temp_csv("toxfilter_ingest_test.csv", &csv);
        let pool = load_pool(&test_data_config(vec![path])).unwrap();
        // Kept: the two clean rows and the whitespace-trimmed label row
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.label_counts(), (1, 2));
    }

    #[test]
    fn test_load_pool_concatenates_files() {
        let a = write_temp_csv("toxfilter_ingest_a.csv", "문장,혐오 여부\nhello,0\n");
        let b = write_temp_csv("toxfilter_ingest_b.csv", "문장,혐오 여부\nworld,1\n");
        let pool = load_pool(&test_data_config(vec![a, b])).unwrap();
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_load_pool_missing_column() {
        let path = write_temp_csv("toxfilter_ingest_c.csv", "text,label\nhello,0\n");
        let err = load_pool(&test_data_config(vec![path])).unwrap_err();
        assert!(matches!(err, ToxfilterError::MissingColumn(_)));
    }
}
