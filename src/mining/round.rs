//! One training round: seeded fit attempts and hard-case extraction.
//!
//! A round tries every configured seed against the current pool, keeps the
//! attempt with the best validation accuracy, then partitions that attempt's
//! validation mistakes into the sets the mining loop and the diagnostic logs
//! consume.

use super::config::Config;
use super::data::{Example, TrainingPool};
use super::evaluate::accuracy;
use super::scorer::{LinearScorer, ScorerConfig};
use super::split::stratified_split;
use super::vectorizer::CharNgramVectorizer;
use crate::error::Result;

/// One seeded fit: the fitted pair plus its validation outcome.
pub struct Attempt {
    pub seed: u64,
    pub vectorizer: CharNgramVectorizer,
    pub scorer: LinearScorer,
    pub accuracy: f64,
    /// Validation examples, in split order
    pub validation: Vec<Example>,
    /// Zero-boundary predictions aligned with `validation`
    pub predictions: Vec<u8>,
}

/// A misclassified validation example with the model's prediction attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardCase {
    pub text: String,
    pub label: u8,
    pub predicted: u8,
}

/// The best attempt of a round plus its error partitions.
pub struct RoundResult {
    pub attempt: Attempt,
    /// Every misclassified validation example
    pub wrong: Vec<HardCase>,
    /// Truth 1, predicted 0: the examples mined back into the pool
    pub false_negatives: Vec<HardCase>,
    /// Truth 0, predicted 1: exported for relabeling review
    pub false_positives: Vec<HardCase>,
}

impl RoundResult {
    /// False negatives as pool examples, ready for augmentation.
    pub fn false_negative_examples(&self) -> Vec<Example> {
        self.false_negatives
            .iter()
            .map(|case| Example::new(case.text.clone(), case.label))
            .collect()
    }
}

/// Run one round over the pool: try every seed, keep the best attempt.
///
/// Selection is by strictly greater validation accuracy, so ties keep the
/// earlier seed's attempt. `round_idx` is only used for console reporting
/// (1-based in the output, matching the round logs).
///
/// # Errors
///
/// Propagates degenerate-split and shape errors; those abort the run.
pub fn run_round(pool: &TrainingPool, round_idx: usize, config: &Config) -> Result<RoundResult> {
    let mut best: Option<Attempt> = None;

    for &seed in &config.training.seeds {
        let attempt = run_attempt(pool, seed, config)?;
        println!(
            "[ROUND {}] seed={} acc={:.4}",
            round_idx + 1,
            seed,
            attempt.accuracy
        );
        let improved = match &best {
            Some(current) => attempt.accuracy > current.accuracy,
            None => true,
        };
        if improved {
            best = Some(attempt);
        }
    }

    // Seeds are validated non-empty at config load
    let attempt = best.expect("at least one seed per round");
    let (wrong, false_negatives, false_positives) =
        partition_errors(&attempt.validation, &attempt.predictions);

    Ok(RoundResult {
        attempt,
        wrong,
        false_negatives,
        false_positives,
    })
}

/// One seeded attempt: split, fit a fresh extractor and scorer, validate.
fn run_attempt(pool: &TrainingPool, seed: u64, config: &Config) -> Result<Attempt> {
    let (train, validation) = stratified_split(pool, config.training.valid_fraction, seed)?;

    let train_texts: Vec<&str> = train.iter().map(|e| e.text.as_str()).collect();
    let train_labels: Vec<u8> = train.iter().map(|e| e.label).collect();
    let valid_texts: Vec<&str> = validation.iter().map(|e| e.text.as_str()).collect();
    let valid_labels: Vec<u8> = validation.iter().map(|e| e.label).collect();

    // Fit on the train split only; validation stays unseen
    let mut vectorizer = CharNgramVectorizer::new(
        config.features.ngram_min,
        config.features.ngram_max,
        config.features.max_features,
    );
    vectorizer.fit(&train_texts);

    let x_train = vectorizer.transform_batch(&train_texts);
    let x_valid = vectorizer.transform_batch(&valid_texts);

    let mut scorer = LinearScorer::new(ScorerConfig {
        epochs: config.training.epochs,
        learning_rate: config.training.learning_rate,
        lambda: config.training.lambda,
        class_weight_negative: config.training.class_weight_negative,
        class_weight_abusive: config.training.class_weight_abusive,
        seed,
    });
    scorer.fit(&x_train, &train_labels, vectorizer.n_features())?;

    let predictions = scorer.predict(&x_valid);
    let acc = accuracy(&valid_labels, &predictions);

    Ok(Attempt {
        seed,
        vectorizer,
        scorer,
        accuracy: acc,
        validation,
        predictions,
    })
}

/// Partition validation mistakes into (all wrong, false negatives, false positives).
fn partition_errors(
    validation: &[Example],
    predictions: &[u8],
) -> (Vec<HardCase>, Vec<HardCase>, Vec<HardCase>) {
    let mut wrong = Vec::new();
    let mut false_negatives = Vec::new();
    let mut false_positives = Vec::new();

    for (example, &predicted) in validation.iter().zip(predictions.iter()) {
        if example.label == predicted {
            continue;
        }
        let case = HardCase {
            text: example.text.clone(),
            label: example.label,
            predicted,
        };
        if example.label == 1 {
            false_negatives.push(case.clone());
        } else {
            false_positives.push(case.clone());
        }
        wrong.push(case);
    }

    (wrong, false_negatives, false_positives)
}
