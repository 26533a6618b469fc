//! # Toxfilter - Abusive-Text Detection
//!
//! Binary classification of short text snippets as abusive (욕설) or
//! non-abusive (비욕설), built on character n-gram TF-IDF features and a
//! class-weighted linear margin classifier. The trainer improves itself
//! across rounds by mining its own false negatives back into the training
//! pool, and deployment converts raw margin scores into labels through a
//! tunable threshold rather than the classifier's own zero boundary.
//!
//! ## Quick Start
//!
//! ```no_run
//! use toxfilter::api::Detector;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let detector = Detector::new()?;
//!
//!     let result = detector.classify("씨 발 왜 저러냐");
//!     println!("{}: {} (score={:.4})", result.text, result.label_name, result.score);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Batch Classification
//!
//! ```no_run
//! # use toxfilter::api::Detector;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let detector = Detector::new()?;
//!
//! let texts = vec!["진짜 병신 같아", "오늘도 좋은 하루 되세요"];
//! for result in detector.classify_batch(&texts) {
//!     println!("{}: {}", result.text, result.label_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Training
//!
//! ```bash
//! toxfilter train --config config.toml
//! ```
//!
//! The trainer reads the configured CSV datasets, runs the mining rounds,
//! writes per-round hard-case logs to `logs/`, and exports the best
//! `(vectorizer, scorer)` pair to `models/` as two JSON artifacts. Predict
//! against them with a threshold of your choosing:
//!
//! ```bash
//! toxfilter predict --threshold -1.3 "씨 발 왜 저러냐"
//! ```
//!
//! Scores below the threshold are flagged abusive; more negative thresholds
//! flag less, trading recall for precision without retraining.

// Public API modules
pub mod api;
pub mod error;
pub mod model_loader;

// Training and inference pipeline
pub mod mining;

// Re-export commonly used items
pub use api::{Detector, DetectorConfig};
pub use error::{Result, ToxfilterError};
pub use mining::predict::{Classification, DEFAULT_THRESHOLD};
pub use mining::scorer::LinearScorer;
pub use mining::vectorizer::CharNgramVectorizer;
