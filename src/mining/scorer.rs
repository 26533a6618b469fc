//! Class-weighted linear margin classifier.
//!
//! A hinge-loss linear model trained by SGD over sparse TF-IDF rows, with an
//! epoch-level L2 shrink. The margin orientation is fixed by construction: abusive
//! examples (label 1) are trained onto the *negative* side, non-abusive
//! (label 0) onto the positive side, so `decision_function` values below
//! zero always lean abusive. The inference threshold in
//! [`predict`](super::predict) builds on that convention.
//!
//! Training is deterministic for a fixed `(seed, input order)` pair: the only
//! randomness is the per-epoch shuffle, driven by a `ChaCha20Rng` seeded from
//! the scorer's configuration.

use ndarray::Array1;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use super::vectorizer::SparseRow;
use crate::error::{Result, ToxfilterError};

/// Hyperparameters for one scorer fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// SGD epochs
    pub epochs: usize,
    /// Step size for hinge updates
    pub learning_rate: f64,
    /// L2 regularization strength
    pub lambda: f64,
    /// Margin weight for label 0 (non-abusive)
    pub class_weight_negative: f64,
    /// Margin weight for label 1 (abusive)
    pub class_weight_abusive: f64,
    /// Shuffle seed
    pub seed: u64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        ScorerConfig {
            epochs: 10,
            learning_rate: 0.5,
            lambda: 1e-4,
            class_weight_negative: 1.0,
            class_weight_abusive: 1.2,
            seed: 0,
        }
    }
}

/// Fitted linear scorer: weight vector, bias, and the config that fit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearScorer {
    /// Dense weight vector over the vectorizer's feature space
    pub weights: Array1<f64>,
    /// Intercept term
    pub bias: f64,
    /// Hyperparameters used for the fit
    pub config: ScorerConfig,
}

impl LinearScorer {
    /// Create an unfitted scorer. `weights` stays empty until [`fit`](Self::fit).
    pub fn new(config: ScorerConfig) -> Self {
        LinearScorer {
            weights: Array1::zeros(0),
            bias: 0.0,
            config,
        }
    }

    /// Fit on sparse rows and binary labels.
    ///
    /// Label 1 is mapped to the -1 margin side, label 0 to +1. The gradient
    /// step for an example is scaled by its class weight, which is how the
    /// `{0: 1.0, 1: 1.2}` configuration biases the margin toward catching
    /// abusive content.
    ///
    /// # Errors
    ///
    /// Returns [`ToxfilterError::Shape`] when `rows` and `labels` differ in
    /// length.
    pub fn fit(&mut self, rows: &[SparseRow], labels: &[u8], n_features: usize) -> Result<()> {
        if rows.len() != labels.len() {
            return Err(ToxfilterError::Shape {
                rows: rows.len(),
                labels: labels.len(),
            });
        }

        // Margin targets and per-example weights. Abusive goes negative.
        let targets: Vec<f64> = labels
            .iter()
            .map(|&l| if l == 1 { -1.0 } else { 1.0 })
            .collect();
        let weights_per_class: Vec<f64> = labels
            .iter()
            .map(|&l| {
                if l == 1 {
                    self.config.class_weight_abusive
                } else {
                    self.config.class_weight_negative
                }
            })
            .collect();

        let lr = self.config.learning_rate;
        let mut weights = Array1::<f64>::zeros(n_features);
        let mut bias = 0.0_f64;

        let mut rng = ChaCha20Rng::seed_from_u64(self.config.seed);
        let mut order: Vec<usize> = (0..rows.len()).collect();

        for _ in 0..self.config.epochs {
            order.shuffle(&mut rng);
            for &i in &order {
                let score = sparse_dot(&weights, &rows[i]) + bias;
                if targets[i] * score < 1.0 {
                    let step = lr * weights_per_class[i] * targets[i];
                    for &(idx, value) in &rows[i] {
                        weights[idx] += step * value;
                    }
                    bias += step;
                }
            }
            // Epoch-level L2 shrink; the bias stays unregularized
            weights *= 1.0 - lr * self.config.lambda;
        }

        self.weights = weights;
        self.bias = bias;
        Ok(())
    }

    /// Signed margin score per row. Negative leans abusive.
    pub fn decision_function(&self, rows: &[SparseRow]) -> Vec<f64> {
        rows.iter()
            .map(|row| sparse_dot(&self.weights, row) + self.bias)
            .collect()
    }

    /// Zero-boundary prediction: 1 (abusive) iff the score is negative.
    ///
    /// Used for training-time validation accuracy only; deployment goes
    /// through the tunable threshold in the decision rule.
    pub fn predict(&self, rows: &[SparseRow]) -> Vec<u8> {
        self.decision_function(rows)
            .into_iter()
            .map(|score| u8::from(score < 0.0))
            .collect()
    }

    /// Save the fitted scorer to a JSON file.
    pub fn save(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a fitted scorer from a JSON file.
    pub fn load(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let scorer = serde_json::from_str(&json)?;
        Ok(scorer)
    }
}

/// Dot product of a dense weight vector with a sparse row.
///
/// Indices beyond the weight vector (possible when a scorer trained on a
/// smaller feature space scores a wider row) contribute nothing.
fn sparse_dot(weights: &Array1<f64>, row: &SparseRow) -> f64 {
    row.iter()
        .filter(|&&(idx, _)| idx < weights.len())
        .map(|&(idx, value)| weights[idx] * value)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable_data() -> (Vec<SparseRow>, Vec<u8>) {
        // Feature 0 marks abusive text, feature 1 marks clean text
        let rows = vec![
            vec![(0, 1.0)],
            vec![(0, 0.9), (1, 0.1)],
            vec![(1, 1.0)],
            vec![(1, 0.9), (0, 0.1)],
        ];
        let labels = vec![1, 1, 0, 0];
        (rows, labels)
    }

    #[test]
    fn test_fit_learns_separable_data() {
        let (rows, labels) = separable_data();
        let mut scorer = LinearScorer::new(ScorerConfig {
            epochs: 200,
            seed: 41,
            ..ScorerConfig::default()
        });
        scorer.fit(&rows, &labels, 2).unwrap();

        assert_eq!(scorer.predict(&rows), labels);

        // Abusive rows sit on the negative side of the margin
        let scores = scorer.decision_function(&rows);
        assert!(scores[0] < 0.0);
        assert!(scores[2] > 0.0);
    }

    #[test]
    fn test_fit_is_deterministic_per_seed() {
        let (rows, labels) = separable_data();
        let config = ScorerConfig {
            epochs: 20,
            seed: 42,
            ..ScorerConfig::default()
        };

        let mut a = LinearScorer::new(config.clone());
        let mut b = LinearScorer::new(config);
        a.fit(&rows, &labels, 2).unwrap();
        b.fit(&rows, &labels, 2).unwrap();

        assert_eq!(a.weights, b.weights);
        assert!((a.bias - b.bias).abs() < f64::EPSILON);
        assert_eq!(a.decision_function(&rows), b.decision_function(&rows));
    }

    #[test]
    fn test_class_weight_scales_the_update() {
        // One epoch, one example, no shrink: the update is exactly
        // lr * class_weight * y, so the class weight is directly observable.
        let fit_single = |label: u8| {
            let mut scorer = LinearScorer::new(ScorerConfig {
                epochs: 1,
                learning_rate: 0.5,
                lambda: 0.0,
                class_weight_negative: 1.0,
                class_weight_abusive: 1.2,
                seed: 0,
            });
            scorer.fit(&[vec![(0, 1.0)]], &[label], 1).unwrap();
            scorer
        };

        let abusive = fit_single(1);
        assert!((abusive.weights[0] - (0.5 * 1.2 * -1.0)).abs() < 1e-15);
        assert!((abusive.bias - (0.5 * 1.2 * -1.0)).abs() < 1e-15);

        let clean = fit_single(0);
        assert!((clean.weights[0] - 0.5).abs() < 1e-15);
        assert!((clean.bias - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        let mut scorer = LinearScorer::new(ScorerConfig::default());
        let err = scorer.fit(&[vec![(0, 1.0)]], &[1, 0], 1).unwrap_err();
        assert!(matches!(err, ToxfilterError::Shape { rows: 1, labels: 2 }));
    }

    #[test]
    fn test_save_load_roundtrip_is_bit_identical() {
        let (rows, labels) = separable_data();
        let mut scorer = LinearScorer::new(ScorerConfig {
            epochs: 30,
            seed: 43,
            ..ScorerConfig::default()
        });
        scorer.fit(&rows, &labels, 2).unwrap();

        let path = std::env::temp_dir().join("toxfilter_scorer_roundtrip.json");
        let path = path.to_str().unwrap();
        scorer.save(path).unwrap();
        let reloaded = LinearScorer::load(path).unwrap();

        assert_eq!(
            scorer.decision_function(&rows),
            reloaded.decision_function(&rows)
        );
    }

    #[test]
    fn test_unseen_wide_rows_are_ignored_past_dim() {
        let (rows, labels) = separable_data();
        let mut scorer = LinearScorer::new(ScorerConfig::default());
        scorer.fit(&rows, &labels, 2).unwrap();

        // A row referencing features the scorer never saw
        let wide = vec![vec![(0, 1.0), (9, 5.0)]];
        let narrow = vec![vec![(0, 1.0)]];
        assert_eq!(
            scorer.decision_function(&wide),
            scorer.decision_function(&narrow)
        );
    }
}
