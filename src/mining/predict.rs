//! The inference-time decision rule.
//!
//! The deployed label does not come from the scorer's own zero boundary.
//! Scores below a caller-chosen threshold are flagged abusive; because the
//! scorer trains abusive content onto the negative margin side, a threshold
//! below zero demands a deep abusive margin before flagging. Tuning the
//! threshold trades recall against precision without retraining.

use super::scorer::LinearScorer;
use super::vectorizer::CharNgramVectorizer;
use crate::error::Result;
use crate::model_loader::ModelFiles;

/// Default decision threshold. More negative flags less.
pub const DEFAULT_THRESHOLD: f64 = -1.0;

/// Human-readable label for abusive text.
pub const LABEL_ABUSIVE: &str = "욕설";
/// Human-readable label for non-abusive text.
pub const LABEL_CLEAN: &str = "비욕설";

/// One classified input.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub text: String,
    /// Raw margin score; negative leans abusive
    pub score: f64,
    /// 1 iff `score < threshold`
    pub label: u8,
    pub label_name: &'static str,
}

/// Classify texts with a fitted pair and an explicit threshold.
///
/// `label = 1` (abusive) exactly when `score < threshold`; a score equal to
/// the threshold stays non-abusive. Raising the threshold can only flip
/// labels toward abusive, lowering it only toward non-abusive.
pub fn classify_with(
    vectorizer: &CharNgramVectorizer,
    scorer: &LinearScorer,
    texts: &[&str],
    threshold: f64,
) -> Vec<Classification> {
    let rows = vectorizer.transform_batch(texts);
    let scores = scorer.decision_function(&rows);

    texts
        .iter()
        .zip(scores)
        .map(|(&text, score)| {
            let label = u8::from(score < threshold);
            Classification {
                text: text.to_string(),
                score,
                label,
                label_name: if label == 1 { LABEL_ABUSIVE } else { LABEL_CLEAN },
            }
        })
        .collect()
}

/// Load the exported model and classify, printing predict-style grouped output.
///
/// # Errors
///
/// Fatal when either artifact is missing or unreadable.
pub fn predict_texts(
    model_dir: Option<&str>,
    texts: &[&str],
    threshold: f64,
) -> Result<Vec<Classification>> {
    let files = ModelFiles::at(model_dir);
    let (vectorizer, scorer) = files.load()?;

    let results = classify_with(&vectorizer, &scorer, texts, threshold);

    println!("=== {} 판정 ===", LABEL_ABUSIVE);
    for r in results.iter().filter(|r| r.label == 1) {
        println!("- {} (score={:.4})", r.text, r.score);
    }
    println!("\n=== {} 판정 ===", LABEL_CLEAN);
    for r in results.iter().filter(|r| r.label == 0) {
        println!("- {} (score={:.4})", r.text, r.score);
    }

    Ok(results)
}
