//! Command-line interface for the mining trainer and the classifier.

use std::error::Error;

use super::config::Config;
use super::predict::{predict_texts, DEFAULT_THRESHOLD};
use super::train::train_model;

/// Print command-line usage information.
pub fn print_usage() {
    println!("Usage:");
    println!("  toxfilter [COMMAND] [OPTIONS]\n");
    println!("Commands:");
    println!("  train              Run the mining training loop (saves to models/)");
    println!("  predict TEXT...    Classify texts (requires a trained model)");
    println!("  help               Show this help\n");
    println!("Options:");
    println!("  --config PATH      Training config file (default: config.toml)");
    println!("  --model-dir DIR    Model directory for predict (default: models)");
    println!(
        "  --threshold T      Decision threshold for predict (default: {})",
        DEFAULT_THRESHOLD
    );
    println!("                     Scores below T are flagged abusive\n");
    println!("Examples:");
    println!("  toxfilter train");
    println!("  toxfilter train --config experiment.toml");
    println!("  toxfilter predict --threshold -1.3 \"씨 발 왜 저러냐\"");
}

/// Main entry point for the CLI.
///
/// # Arguments
///
/// * `args` - Command-line arguments (including program name)
pub fn main_mining(args: Vec<String>) -> Result<(), Box<dyn Error>> {
    let command = if args.len() > 1 { args[1].as_str() } else { "help" };

    match command {
        "train" => {
            let config_path = flag_value(&args, "--config").unwrap_or("config.toml");
            let config = Config::load(config_path).unwrap_or_else(|e| {
                eprintln!("Warning: could not load {}: {}", config_path, e);
                eprintln!("Using default configuration\n");
                Config::default()
            });
            train_model(&config)?;
            Ok(())
        }
        "predict" => {
            let threshold = match flag_value(&args, "--threshold") {
                Some(raw) => raw.parse::<f64>()?,
                None => DEFAULT_THRESHOLD,
            };
            let model_dir = flag_value(&args, "--model-dir");

            let texts = positional_args(&args[2..]);
            if texts.is_empty() {
                println!("Error: TEXT argument required\n");
                print_usage();
                return Ok(());
            }
            predict_texts(model_dir, &texts, threshold)?;
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            println!("Unknown command: {}\n", command);
            print_usage();
            Ok(())
        }
    }
}

/// Value following a `--flag`, if present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Arguments that are neither flags nor flag values.
fn positional_args(args: &[String]) -> Vec<&str> {
    let mut texts = Vec::new();
    let mut skip = false;
    for arg in args {
        if skip {
            skip = false;
            continue;
        }
        if arg.starts_with("--") {
            skip = true;
            continue;
        }
        texts.push(arg.as_str());
    }
    texts
}
