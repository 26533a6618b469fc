/// Simple example of using the toxfilter library
///
/// Run with:
/// ```
/// cargo run --example simple
/// ```
use toxfilter::api::Detector;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Toxfilter - Simple Example\n");

    println!("Loading model...");
    let detector = Detector::new()?;

    let info = detector.model_info();
    println!(
        "✓ Model loaded: {} features, char {}..={} n-grams, threshold {}\n",
        info.n_features, info.ngram_range.0, info.ngram_range.1, info.threshold
    );

    let examples = vec![
        "진짜 병신 같아",
        "너 그만해라 진짜",
        "이 영화 진짜 감동이네요",
        "오늘도 좋은 하루 되세요",
    ];

    println!("Classifying...\n");
    println!("{}", "=".repeat(70));

    for text in examples {
        let result = detector.classify(text);
        println!("\nText: \"{}\"", result.text);
        println!("Label: {} (score={:.4})", result.label_name, result.score);
        println!("{}", "-".repeat(70));
    }

    println!("\n✓ Done!");

    Ok(())
}
