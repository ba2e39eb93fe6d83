//! Parse a lesson and print the document, validation report and stats
//!
//! Run with: cargo run --example parse_lesson [path/to/lesson.html]
//!
//! Without a path a built-in lesson is used.

use lesson_content_parser::{fingerprint, get_stats, parse, validate};

const SAMPLE: &str = r#"
<h1>Binary numbers</h1>
<p>Computers count with two digits: 0 and 1.</p>
<blockquote class="tip">Each extra bit doubles the range.</blockquote>
<pre><code class="language-rust">let five = 0b101;</code></pre>
<figure>
  <img src="bits.png" alt="Eight bits in a row">
  <figcaption>One byte</figcaption>
</figure>
<quiz title="Bits">
  <question>
    <prompt>What is 0b11 in decimal?</prompt>
    <option correct="true">3</option>
    <option>11</option>
  </question>
  <question type="multiple">
    <prompt>Which are powers of two?</prompt>
    <option correct="true">8</option>
    <option>12</option>
  </question>
</quiz>
"#;

fn main() {
    let markup = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(markup) => markup,
            Err(e) => {
                eprintln!("Failed to read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SAMPLE.to_string(),
    };

    println!("=== Lesson Content Parser ===\n");
    println!("Fingerprint: {}\n", fingerprint(&markup));

    let doc = parse(markup.as_str());

    println!("Title: {}", doc.metadata.title);
    println!("Description: {}", doc.metadata.description);
    println!("Read time: {} min\n", doc.metadata.estimated_read_time);

    println!("Blocks:");
    for block in &doc.blocks {
        println!("  {} [{}]", block.id, block.kind.type_name());
    }

    println!("\nQuizzes:");
    for quiz in &doc.quizzes {
        println!(
            "  {} \"{}\" ({} questions, pass at {}%)",
            quiz.id,
            quiz.title,
            quiz.questions.len(),
            quiz.passing_score
        );
    }

    let report = validate(&doc);
    println!("\nValid: {}", report.valid);
    for error in &report.errors {
        println!("  error: {}", error);
    }
    for warning in &report.warnings {
        println!("  warning: {}", warning);
    }

    let stats = get_stats(&doc);
    println!("\nStats: {:?}", stats);

    match serde_json::to_string_pretty(&doc) {
        Ok(json) => println!("\nJSON:\n{}", json),
        Err(e) => eprintln!("Failed to serialize document: {}", e),
    }
}
