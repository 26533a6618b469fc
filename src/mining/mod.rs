//! Hard-example-mining training pipeline for the abusive-text classifier.
//!
//! The trainer runs a fixed number of rounds over a growing training pool.
//! Each round tries several seeds, keeps the seed whose stratified
//! train/validation split and fresh `(vectorizer, scorer)` fit reach the best
//! validation accuracy, then feeds the round's false negatives (truly
//! abusive texts the model let through) back into the pool before the next
//! round retrains from scratch. Only the best pair across all rounds is
//! exported.
//!
//! ## Pipeline
//!
//! 1. Ingest and clean the CSV datasets ([`data`])
//! 2. Per round, per seed: stratified split ([`split`]), fit the character
//!    n-gram TF-IDF vectorizer ([`vectorizer`]) and the class-weighted linear
//!    scorer ([`scorer`]), validate at the zero boundary ([`round`])
//! 3. Mine false negatives into the pool, fold the best model ([`train`])
//! 4. Export the best pair and per-round hard-case logs ([`save`])
//! 5. Classify new text against a tunable threshold ([`predict`])
//!
//! ## Decision convention
//!
//! The scorer trains abusive content onto the negative margin side, so lower
//! scores mean "more abusive". Deployment flags a text when its score falls
//! below a configurable threshold (default -1.0), a stricter bar than the
//! zero boundary used for validation accuracy. See [`predict`].
//!
//! ## Module Structure
//!
//! - [`config`] - TOML configuration and defaults
//! - [`data`] - dataset records, ingestion, the training pool
//! - [`vectorizer`] - character n-gram TF-IDF features
//! - [`scorer`] - class-weighted linear margin classifier
//! - [`split`] - seeded stratified splitting
//! - [`round`] - single-round training and hard-case extraction
//! - [`train`] - the multi-round mining loop
//! - [`evaluate`] - accuracy and per-class metrics
//! - [`save`] - model export and round diagnostics
//! - [`predict`] - threshold decision rule
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod data;
pub mod evaluate;
pub mod predict;
pub mod round;
pub mod save;
pub mod scorer;
pub mod split;
pub mod train;
pub mod vectorizer;

pub use cli::main_mining;
