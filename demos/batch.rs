/// Batch classification example with a threshold sweep
///
/// Run with:
/// ```
/// cargo run --example batch
/// ```
use std::time::Instant;
use toxfilter::api::Detector;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Toxfilter - Batch Classification Example\n");

    let detector = Detector::new()?;
    println!("✓ Model loaded\n");

    let texts = vec![
        "씨 발 왜 저러냐",
        "개새끼 또 시작이네",
        "지랄은 좀 하지마라",
        "니가 더러운 거야",
        "말이 왜 그렇게 공격적이냐",
        "아쉽네 진짜",
        "정보 감사합니다!",
        "버전 올렸어요 확인 부탁드립니다",
    ];

    println!("Classifying {} texts in batch...\n", texts.len());

    let start = Instant::now();
    let results = detector.classify_batch(&texts);
    let elapsed = start.elapsed();

    println!("{}", "=".repeat(70));
    println!("{:<45} | {:^8} | {:>10}", "Text", "Label", "Score");
    println!("{}", "=".repeat(70));

    for result in &results {
        println!(
            "{:<45} | {:^8} | {:>10.4}",
            result.text, result.label_name, result.score
        );
    }

    println!("{}", "=".repeat(70));
    println!(
        "\n✓ Batch complete: {:.2}ms ({:.2}ms per text)",
        elapsed.as_millis(),
        elapsed.as_millis() as f64 / results.len() as f64
    );

    // The same scores, judged stricter and looser
    println!("\nThreshold sweep on the first text:");
    for threshold in [-0.5, -1.0, -1.3, -2.0] {
        let swept = detector.classify_batch_at(&texts[..1], threshold);
        println!(
            "  threshold {:>5.1} -> {}",
            threshold, swept[0].label_name
        );
    }

    Ok(())
}
