//! Artifact path management for the exported model pair.
//!
//! The trainer exports two independently loadable JSON files: the fitted
//! character n-gram vectorizer and the fitted linear scorer. Inference needs
//! both; a missing or unreadable file is fatal at load time.
//!
//! # Examples
//!
//! ```no_run
//! use toxfilter::model_loader::ModelFiles;
//!
//! let files = ModelFiles::at(None);
//! if files.exists() {
//!     let (vectorizer, scorer) = files.load()?;
//!     let _ = (vectorizer, scorer);
//! }
//! # Ok::<(), toxfilter::error::ToxfilterError>(())
//! ```

use std::path::{Path, PathBuf};

use crate::error::{Result, ToxfilterError};
use crate::mining::scorer::LinearScorer;
use crate::mining::vectorizer::CharNgramVectorizer;

const DEFAULT_MODEL_DIR: &str = "models";
const VECTORIZER_FILE: &str = "vectorizer_char_1_3.json";
const SCORER_FILE: &str = "scorer_linear.json";

/// Paths of the two model artifacts.
pub struct ModelFiles {
    pub vectorizer: PathBuf,
    pub scorer: PathBuf,
}

impl ModelFiles {
    /// Artifact paths under `model_dir` (default `models/`).
    pub fn at(model_dir: Option<&str>) -> Self {
        let base = model_dir.unwrap_or(DEFAULT_MODEL_DIR);
        Self {
            vectorizer: PathBuf::from(base).join(VECTORIZER_FILE),
            scorer: PathBuf::from(base).join(SCORER_FILE),
        }
    }

    /// Check that both artifacts exist.
    pub fn exists(&self) -> bool {
        self.vectorizer.exists() && self.scorer.exists()
    }

    /// Load both artifacts.
    ///
    /// # Errors
    ///
    /// [`ToxfilterError::ModelNotFound`] when either file is absent; JSON or
    /// I/O errors when a file exists but cannot be parsed.
    pub fn load(&self) -> Result<(CharNgramVectorizer, LinearScorer)> {
        let vectorizer_path = path_str(&self.vectorizer)?;
        let scorer_path = path_str(&self.scorer)?;
        if !self.vectorizer.exists() {
            return Err(ToxfilterError::ModelNotFound(vectorizer_path.to_string()));
        }
        if !self.scorer.exists() {
            return Err(ToxfilterError::ModelNotFound(scorer_path.to_string()));
        }

        let vectorizer = CharNgramVectorizer::load(vectorizer_path)?;
        let scorer = LinearScorer::load(scorer_path)?;
        Ok((vectorizer, scorer))
    }
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| ToxfilterError::ModelNotFound(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let files = ModelFiles::at(None);
        assert_eq!(
            files.vectorizer,
            PathBuf::from("models/vectorizer_char_1_3.json")
        );
        assert_eq!(files.scorer, PathBuf::from("models/scorer_linear.json"));
    }

    #[test]
    fn test_custom_model_dir() {
        let files = ModelFiles::at(Some("/tmp/toxfilter_models"));
        assert_eq!(
            files.vectorizer,
            PathBuf::from("/tmp/toxfilter_models/vectorizer_char_1_3.json")
        );
    }

    #[test]
    fn test_missing_artifacts_are_fatal() {
        let files = ModelFiles::at(Some("/tmp/toxfilter_definitely_missing"));
        assert!(!files.exists());
        let err = files.load().unwrap_err();
        assert!(matches!(err, ToxfilterError::ModelNotFound(_)));
    }
}
