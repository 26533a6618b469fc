//! Model export and per-round diagnostic logs.

use std::fs;
use std::path::Path;

use csv::Writer;

use super::round::{HardCase, RoundResult};
use super::config::OutputConfig;
use super::train::BestModel;
use crate::error::Result;

/// Export the best model as two independently loadable JSON artifacts.
///
/// Returns the written `(vectorizer, scorer)` paths.
pub fn export_model(best: &BestModel, output: &OutputConfig) -> Result<(String, String)> {
    fs::create_dir_all(&output.model_dir)?;

    let vectorizer_path = format!("{}/{}", output.model_dir, output.vectorizer_file);
    let scorer_path = format!("{}/{}", output.model_dir, output.scorer_file);

    best.vectorizer.save(&vectorizer_path)?;
    best.scorer.save(&scorer_path)?;

    println!("[INFO] saved best models:");
    println!("  - {}", vectorizer_path);
    println!("  - {}", scorer_path);

    Ok((vectorizer_path, scorer_path))
}

/// Write a round's three hard-case exports: all wrong, missed label 1
/// (the mined false negatives), and false label 1 (relabeling candidates).
///
/// File names are 1-based on the round, matching the console output.
pub fn write_round_logs(dir: &Path, round_idx: usize, result: &RoundResult) -> Result<()> {
    fs::create_dir_all(dir)?;
    let round = round_idx + 1;

    let wrong_path = dir.join(format!("hard_cases_round{round}.csv"));
    write_cases(&wrong_path, &result.wrong)?;
    println!(
        "[ROUND {}] saved all wrong cases -> {} ({} rows)",
        round,
        wrong_path.display(),
        result.wrong.len()
    );

    let missed_path = dir.join(format!("hard_missed_label1_round{round}.csv"));
    write_cases(&missed_path, &result.false_negatives)?;
    println!(
        "[ROUND {}] saved missed label=1 -> {} ({} rows)",
        round,
        missed_path.display(),
        result.false_negatives.len()
    );

    let false_path = dir.join(format!("hard_false_label1_round{round}.csv"));
    write_cases(&false_path, &result.false_positives)?;
    println!(
        "[ROUND {}] saved false label=1 -> {} ({} rows)",
        round,
        false_path.display(),
        result.false_positives.len()
    );

    Ok(())
}

fn write_cases(path: &Path, cases: &[HardCase]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["text", "label", "y_pred"])?;
    for case in cases {
        let label = case.label.to_string();
        let predicted = case.predicted.to_string();
        writer.write_record([case.text.as_str(), label.as_str(), predicted.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
