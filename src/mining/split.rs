//! Seeded stratified train/validation split.
//!
//! All randomness is derived from the caller's seed, so the same pool and
//! seed always produce the same partition.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::data::{Example, TrainingPool};
use crate::error::{Result, ToxfilterError};

/// Split the pool into `(train, validation)` preserving the class ratio.
///
/// Each class contributes `round(n_class * valid_fraction)` validation rows,
/// clamped so both sides keep at least one row of that class. A class with
/// fewer than two examples cannot satisfy that and the split is degenerate.
///
/// # Errors
///
/// Returns [`ToxfilterError::DegenerateSplit`] when any class has fewer than
/// two examples.
pub fn stratified_split(
    pool: &TrainingPool,
    valid_fraction: f64,
    seed: u64,
) -> Result<(Vec<Example>, Vec<Example>)> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut train = Vec::new();
    let mut validation = Vec::new();

    for label in [0u8, 1u8] {
        let mut indices: Vec<usize> = pool
            .examples()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.label == label)
            .map(|(i, _)| i)
            .collect();

        let count = indices.len();
        if count < 2 {
            return Err(ToxfilterError::DegenerateSplit { label, count });
        }

        indices.shuffle(&mut rng);

        let n_valid = ((count as f64 * valid_fraction).round() as usize).clamp(1, count - 1);
        for (pos, &i) in indices.iter().enumerate() {
            let example = pool.examples()[i].clone();
            if pos < n_valid {
                validation.push(example);
            } else {
                train.push(example);
            }
        }
    }

    Ok((train, validation))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_with(zeros: usize, ones: usize) -> TrainingPool {
        let mut examples = Vec::new();
        for i in 0..zeros {
            examples.push(Example::new(format!("clean {i}"), 0));
        }
        for i in 0..ones {
            examples.push(Example::new(format!("abusive {i}"), 1));
        }
        TrainingPool::from_examples(examples)
    }

    fn label_counts(examples: &[Example]) -> (usize, usize) {
        let ones = examples.iter().filter(|e| e.label == 1).count();
        (examples.len() - ones, ones)
    }

    #[test]
    fn test_split_preserves_class_ratio() {
        let pool = pool_with(80, 20);
        let (train, validation) = stratified_split(&pool, 0.2, 41).unwrap();

        assert_eq!(train.len() + validation.len(), 100);
        assert_eq!(label_counts(&validation), (16, 4));
        assert_eq!(label_counts(&train), (64, 16));
    }

    #[test]
    fn test_split_is_deterministic_per_seed() {
        let pool = pool_with(30, 10);
        let (train_a, valid_a) = stratified_split(&pool, 0.2, 42).unwrap();
        let (train_b, valid_b) = stratified_split(&pool, 0.2, 42).unwrap();
        assert_eq!(train_a, train_b);
        assert_eq!(valid_a, valid_b);

        let (_, valid_c) = stratified_split(&pool, 0.2, 43).unwrap();
        assert_ne!(valid_a, valid_c);
    }

    #[test]
    fn test_split_never_empties_a_side() {
        // 3 abusive rows at 20%: round(0.6) = 1 validation row, 2 train rows
        let pool = pool_with(10, 3);
        let (train, validation) = stratified_split(&pool, 0.2, 7).unwrap();
        assert_eq!(label_counts(&validation).1, 1);
        assert_eq!(label_counts(&train).1, 2);
    }

    #[test]
    fn test_degenerate_split_is_fatal() {
        let pool = pool_with(10, 1);
        let err = stratified_split(&pool, 0.2, 7).unwrap_err();
        assert!(matches!(
            err,
            ToxfilterError::DegenerateSplit { label: 1, count: 1 }
        ));
    }
}
