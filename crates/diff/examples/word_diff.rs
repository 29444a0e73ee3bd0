use anyhow::Result;
use text_diff::{diff_chars, diff_words, ChangeKind, DiffOutcome};

fn main() -> Result<()> {
    // Sample texts with word-level differences
    let text1 = "This is the first paragraph with some words.\nHere is another line with minor changes.";
    let text2 = "This is the first paragraph with different words.\nHere is another sentence with major changes.";

    println!("=== Word-level diff ===");
    print_inline(diff_words(text1, text2));

    println!("\n\n=== Character-level diff ===");
    print_inline(diff_chars("testing123", "testing456"));
    println!();

    Ok(())
}

/// Render an edit script inline, marking removals and additions
fn print_inline(outcome: DiffOutcome) {
    let script = match outcome {
        DiffOutcome::Complete(script) => script,
        DiffOutcome::Oversized(summary) => {
            println!(
                "input too large: {} vs {} units (ceiling {})",
                summary.old_units, summary.new_units, summary.limit
            );
            return;
        }
    };

    for change in script.changes() {
        match change.kind {
            ChangeKind::Removed => print!("\x1b[31m[-{}]\x1b[0m", change.value),
            ChangeKind::Added => print!("\x1b[32m[+{}]\x1b[0m", change.value),
            ChangeKind::Context => print!("{}", change.value),
        }
    }
}
