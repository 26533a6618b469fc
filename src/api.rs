//! High-level API for abusive-text detection.
//!
//! Loads the exported model pair once and classifies single texts or
//! batches against a tunable decision threshold.
//!
//! # Quick Start
//!
//! ```no_run
//! use toxfilter::api::Detector;
//!
//! let detector = Detector::new()?;
//! let result = detector.classify("씨 발 왜 저러냐");
//! println!("{} -> {} (score={:.4})", result.text, result.label_name, result.score);
//! # Ok::<(), toxfilter::error::ToxfilterError>(())
//! ```
//!
//! # Threshold Tuning
//!
//! The threshold is a deployment knob, decoupled from training. Scores below
//! it are flagged abusive. Raising it toward zero catches more abuse at the
//! cost of more false flags; lowering it keeps only the most confident hits:
//!
//! ```no_run
//! use toxfilter::api::{Detector, DetectorConfig};
//!
//! let config = DetectorConfig::new()
//!     .with_model_dir("custom_models")
//!     .with_threshold(-1.3);
//! let detector = Detector::with_config(config)?;
//! # Ok::<(), toxfilter::error::ToxfilterError>(())
//! ```

use crate::error::Result;
use crate::mining::predict::{classify_with, Classification, DEFAULT_THRESHOLD};
use crate::mining::scorer::LinearScorer;
use crate::mining::vectorizer::CharNgramVectorizer;
use crate::model_loader::ModelFiles;

/// Configuration for constructing a [`Detector`].
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub model_dir: Option<String>,
    pub threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl DetectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model_dir(mut self, dir: impl Into<String>) -> Self {
        self.model_dir = Some(dir.into());
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Main detection interface: a loaded model pair plus a default threshold.
pub struct Detector {
    vectorizer: CharNgramVectorizer,
    scorer: LinearScorer,
    threshold: f64,
}

impl Detector {
    /// Load the model from the default directory with the default threshold.
    ///
    /// # Errors
    ///
    /// Fails when either exported artifact is missing or corrupt.
    pub fn new() -> Result<Self> {
        Self::with_config(DetectorConfig::default())
    }

    /// Load the model with a custom configuration.
    pub fn with_config(config: DetectorConfig) -> Result<Self> {
        let files = ModelFiles::at(config.model_dir.as_deref());
        let (vectorizer, scorer) = files.load()?;
        Ok(Self {
            vectorizer,
            scorer,
            threshold: config.threshold,
        })
    }

    /// Classify one text at the detector's threshold.
    pub fn classify(&self, text: &str) -> Classification {
        self.classify_batch(&[text]).remove(0)
    }

    /// Classify a batch at the detector's threshold.
    pub fn classify_batch(&self, texts: &[&str]) -> Vec<Classification> {
        classify_with(&self.vectorizer, &self.scorer, texts, self.threshold)
    }

    /// Classify a batch at an explicit threshold, overriding the default.
    pub fn classify_batch_at(&self, texts: &[&str], threshold: f64) -> Vec<Classification> {
        classify_with(&self.vectorizer, &self.scorer, texts, threshold)
    }

    /// Information about the loaded model.
    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            n_features: self.vectorizer.n_features(),
            ngram_range: (self.vectorizer.ngram_min, self.vectorizer.ngram_max),
            threshold: self.threshold,
        }
    }
}

/// Information about the loaded model.
#[derive(Debug)]
pub struct ModelInfo {
    pub n_features: usize,
    pub ngram_range: (usize, usize),
    pub threshold: f64,
}
