//! Configuration structures for the mining trainer.
//!
//! Strongly-typed configuration loaded from a TOML file. The sections cover
//! data ingestion, feature extraction, the round/seed schedule, and output
//! paths. When no file is present, [`Config::default`] supplies the reference
//! configuration.

use serde::Deserialize;

use crate::error::{Result, ToxfilterError};

/// Main configuration structure loaded from `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Data ingestion configuration
    pub data: DataConfig,
    /// Feature extraction configuration
    pub features: FeaturesConfig,
    /// Round/seed schedule and scorer hyperparameters
    pub training: TrainingConfig,
    /// Model output paths
    pub output: OutputConfig,
    /// Diagnostic log paths
    pub logs: LogsConfig,
}

/// Data ingestion configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// CSV dataset paths, concatenated row-wise
    pub csv_paths: Vec<String>,
    /// Name of the text column
    pub text_column: String,
    /// Name of the binary label column
    pub label_column: String,
    /// Rows whose text exceeds this many characters are dropped
    pub max_text_chars: usize,
}

/// Feature extraction configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturesConfig {
    /// Minimum character n-gram length
    pub ngram_min: usize,
    /// Maximum character n-gram length (inclusive)
    pub ngram_max: usize,
    /// Vocabulary cap; the most frequent n-grams are kept
    pub max_features: usize,
}

/// Round/seed schedule and scorer hyperparameters.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingConfig {
    /// Number of mining rounds
    pub rounds: usize,
    /// Candidate seeds tried within each round
    pub seeds: Vec<u64>,
    /// Fraction of the pool held out for validation
    pub valid_fraction: f64,
    /// SGD epochs per scorer fit
    pub epochs: usize,
    /// SGD step size
    pub learning_rate: f64,
    /// L2 regularization strength
    pub lambda: f64,
    /// Margin weight for non-abusive examples (label 0)
    pub class_weight_negative: f64,
    /// Margin weight for abusive examples (label 1)
    pub class_weight_abusive: f64,
}

/// Model output paths.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the best model is exported to
    pub model_dir: String,
    /// Fitted vectorizer filename
    pub vectorizer_file: String,
    /// Fitted scorer filename
    pub scorer_file: String,
}

/// Diagnostic log paths.
#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    /// Directory per-round hard-case CSVs are written to
    pub log_dir: String,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ToxfilterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the trainer cannot run with.
    fn validate(&self) -> Result<()> {
        if self.training.seeds.is_empty() {
            return Err(ToxfilterError::Config("training.seeds is empty".into()));
        }
        if self.training.rounds == 0 {
            return Err(ToxfilterError::Config("training.rounds must be > 0".into()));
        }
        if !(self.training.valid_fraction > 0.0 && self.training.valid_fraction < 1.0) {
            return Err(ToxfilterError::Config(
                "training.valid_fraction must be in (0, 1)".into(),
            ));
        }
        if self.features.ngram_min == 0 || self.features.ngram_min > self.features.ngram_max {
            return Err(ToxfilterError::Config(
                "features.ngram_min must be >= 1 and <= ngram_max".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    /// Reference configuration, used when `config.toml` is not available.
    fn default() -> Self {
        Config {
            data: DataConfig {
                csv_paths: vec![
                    "dataset/hate_speech_data.csv".to_string(),
                    "dataset/hate_speech_binary_dataset2.csv".to_string(),
                ],
                text_column: "문장".to_string(),
                label_column: "혐오 여부".to_string(),
                max_text_chars: 500,
            },
            features: FeaturesConfig {
                ngram_min: 1,
                ngram_max: 3,
                max_features: 500_000,
            },
            training: TrainingConfig {
                rounds: 3,
                seeds: vec![41, 42, 43, 44, 45],
                valid_fraction: 0.2,
                epochs: 10,
                learning_rate: 0.5,
                lambda: 1e-4,
                class_weight_negative: 1.0,
                class_weight_abusive: 1.2,
            },
            output: OutputConfig {
                model_dir: "models".to_string(),
                vectorizer_file: "vectorizer_char_1_3.json".to_string(),
                scorer_file: "scorer_linear.json".to_string(),
            },
            logs: LogsConfig {
                log_dir: "logs".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.training.rounds, 3);
        assert_eq!(config.training.seeds, vec![41, 42, 43, 44, 45]);
        assert_eq!(config.features.max_features, 500_000);
        assert_eq!(config.data.max_text_chars, 500);
        assert!((config.training.class_weight_abusive - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [data]
            csv_paths = ["a.csv"]
            text_column = "text"
            label_column = "label"
            max_text_chars = 300

            [features]
            ngram_min = 1
            ngram_max = 2
            max_features = 1000

            [training]
            rounds = 2
            seeds = [7, 8]
            valid_fraction = 0.25
            epochs = 5
            learning_rate = 0.1
            lambda = 0.001
            class_weight_negative = 1.0
            class_weight_abusive = 1.5

            [output]
            model_dir = "out"
            vectorizer_file = "vec.json"
            scorer_file = "clf.json"

            [logs]
            log_dir = "out_logs"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data.csv_paths, vec!["a.csv"]);
        assert_eq!(config.training.seeds, vec![7, 8]);
        assert_eq!(config.features.ngram_max, 2);
        assert_eq!(config.output.model_dir, "out");
    }

    #[test]
    fn test_validate_rejects_empty_seeds() {
        let mut config = Config::default();
        config.training.seeds.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_fraction() {
        let mut config = Config::default();
        config.training.valid_fraction = 1.0;
        assert!(config.validate().is_err());
    }
}
