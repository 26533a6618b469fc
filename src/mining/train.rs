//! The mining loop: rounds of retraining on a growing pool.
//!
//! Each round retrains from scratch on the current pool and mines its false
//! negatives back into the pool for the next round. Only the best
//! `(vectorizer, scorer)` pair seen across all rounds survives; it is folded
//! as an immutable value rather than mutated in place.

use std::path::Path;

use super::config::Config;
use super::data::{load_pool, TrainingPool};
use super::evaluate::classification_report;
use super::round::{run_round, RoundResult};
use super::save::{export_model, write_round_logs};
use super::scorer::LinearScorer;
use super::vectorizer::CharNgramVectorizer;
use crate::error::Result;

/// The best fitted pair across every round so far.
pub struct BestModel {
    pub vectorizer: CharNgramVectorizer,
    pub scorer: LinearScorer,
    pub accuracy: f64,
    /// Round the pair came from (0-based)
    pub round: usize,
    pub seed: u64,
}

/// Keep the candidate only when it strictly beats the current best.
///
/// Ties keep the earlier round's model.
fn better_of(current: Option<BestModel>, candidate: BestModel) -> BestModel {
    match current {
        Some(best) if candidate.accuracy <= best.accuracy => best,
        _ => candidate,
    }
}

fn best_from(result: &RoundResult, round_idx: usize) -> BestModel {
    BestModel {
        vectorizer: result.attempt.vectorizer.clone(),
        scorer: result.attempt.scorer.clone(),
        accuracy: result.attempt.accuracy,
        round: round_idx,
        seed: result.attempt.seed,
    }
}

/// Run the configured number of mining rounds over `pool`.
///
/// Per round: train via [`run_round`], optionally export the round's hard
/// cases to `log_dir`, fold the round's best attempt into the running best,
/// and append the round's false negatives to the pool (deduplicated). The
/// pool never shrinks; an empty false-negative set carries it forward
/// unchanged.
///
/// Returns the best model across all rounds together with the final pool.
pub fn run_loop(
    mut pool: TrainingPool,
    config: &Config,
    log_dir: Option<&Path>,
) -> Result<(BestModel, TrainingPool)> {
    let rounds = config.training.rounds;
    let mut best: Option<BestModel> = None;

    for round_idx in 0..rounds {
        println!("\n========== ROUND {}/{} ==========", round_idx + 1, rounds);

        let result = run_round(&pool, round_idx, config)?;
        report_round(round_idx, &result);

        if let Some(dir) = log_dir {
            write_round_logs(dir, round_idx, &result)?;
        }

        let false_negatives = result.false_negative_examples();
        let candidate = best_from(&result, round_idx);
        let improved = best
            .as_ref()
            .map_or(true, |b| candidate.accuracy > b.accuracy);
        best = Some(better_of(best, candidate));
        if improved {
            println!("[ROUND {}] <-- overall best so far", round_idx + 1);
        }

        if !false_negatives.is_empty() {
            let added = pool.extend(false_negatives);
            println!(
                "[ROUND {}] next round pool size: {} (+{} mined)",
                round_idx + 1,
                pool.len(),
                added
            );
        }
    }

    // rounds >= 1 is validated at config load
    Ok((best.expect("at least one round"), pool))
}

/// Console summary for one finished round.
fn report_round(round_idx: usize, result: &RoundResult) {
    let truth: Vec<u8> = result.attempt.validation.iter().map(|e| e.label).collect();
    println!(
        "[ROUND {}] best seed = {}, acc = {:.4}",
        round_idx + 1,
        result.attempt.seed,
        result.attempt.accuracy
    );
    println!(
        "{}",
        classification_report(&truth, &result.attempt.predictions)
    );
    println!(
        "[ROUND {}] wrong={} missed_label1={} false_label1={}",
        round_idx + 1,
        result.wrong.len(),
        result.false_negatives.len(),
        result.false_positives.len()
    );
}

/// Full training pipeline: ingest, mine for `rounds` rounds, export the best.
pub fn train_model(config: &Config) -> Result<BestModel> {
    println!("=== toxfilter trainer ===");
    println!(
        "rounds={} seeds={:?} max_features={}",
        config.training.rounds, config.training.seeds, config.features.max_features
    );

    let pool = load_pool(&config.data)?;
    let (zeros, ones) = pool.label_counts();
    println!(
        "[INFO] initial pool: {} examples (label 0: {}, label 1: {})",
        pool.len(),
        zeros,
        ones
    );

    let log_dir = Path::new(&config.logs.log_dir);
    let (best, final_pool) = run_loop(pool, config, Some(log_dir))?;

    println!(
        "\n[INFO] overall best acc: {:.4} (round {}, seed {})",
        best.accuracy,
        best.round + 1,
        best.seed
    );
    println!("[INFO] final pool size: {}", final_pool.len());

    export_model(&best, &config.output)?;
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::data::Example;
    use super::super::scorer::ScorerConfig;

    fn dummy_model(accuracy: f64, round: usize) -> BestModel {
        BestModel {
            vectorizer: CharNgramVectorizer::new(1, 3, 10),
            scorer: LinearScorer::new(ScorerConfig::default()),
            accuracy,
            round,
            seed: 41,
        }
    }

    #[test]
    fn test_better_of_replaces_on_strict_improvement() {
        let best = better_of(Some(dummy_model(0.8, 0)), dummy_model(0.9, 1));
        assert_eq!(best.round, 1);
    }

    #[test]
    fn test_better_of_keeps_earlier_on_tie() {
        let best = better_of(Some(dummy_model(0.9, 0)), dummy_model(0.9, 2));
        assert_eq!(best.round, 0);

        let best = better_of(Some(dummy_model(0.9, 0)), dummy_model(0.85, 1));
        assert_eq!(best.round, 0);
    }

    #[test]
    fn test_better_of_accepts_first_candidate() {
        let best = better_of(None, dummy_model(0.1, 0));
        assert_eq!(best.round, 0);
    }

    /// Mining two false negatives where one already sits in the pool
    /// verbatim must grow the pool by exactly one.
    #[test]
    fn test_mined_duplicates_grow_pool_by_unique_only() {
        let mut pool = TrainingPool::from_examples(vec![
            Example::new("이미 있는 욕설", 1),
            Example::new("멀쩡한 문장", 0),
        ]);

        let mined = vec![
            Example::new("이미 있는 욕설", 1),
            Example::new("새로 발견된 욕설", 1),
        ];
        let added = pool.extend(mined);
        assert_eq!(added, 1);
        assert_eq!(pool.len(), 3);
    }

    /// Perfect rounds produce no false negatives, so the pool must come out
    /// of the loop exactly as it went in.
    #[test]
    fn test_empty_false_negatives_leave_pool_unchanged() {
        let mut examples = Vec::new();
        for i in 0..10 {
            examples.push(Example::new(format!("xyz zyx yx{}", "x".repeat(i + 1)), 1));
            examples.push(Example::new(format!("abc cba bc{}", "a".repeat(i + 1)), 0));
        }
        let pool = TrainingPool::from_examples(examples);
        let initial_len = pool.len();

        let mut config = Config::default();
        config.features.max_features = 1000;
        config.training.epochs = 30;
        config.training.seeds = vec![41, 42];
        config.training.rounds = 3;

        let (best, final_pool) = run_loop(pool, &config, None).unwrap();
        assert_eq!(final_pool.len(), initial_len);
        assert!((best.accuracy - 1.0).abs() < f64::EPSILON);
        // All rounds tie at 1.0: the fold keeps the first round's model
        assert_eq!(best.round, 0);
        assert_eq!(best.seed, 41);
    }
}
