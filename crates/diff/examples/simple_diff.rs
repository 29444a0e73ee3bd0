use anyhow::Result;
use text_diff::{generate_unified_diff, ChangeKind, DiffConfig, ListEntry};

fn main() -> Result<()> {
    // Two sample texts to compare
    let text1 = "This is the first line.\nHere is the second line.\nAnd the third line.";
    let text2 = "This is the first line.\nThis is a completely different second line.\nAnd the third line.\nPlus a new fourth line.";

    // Generate a unified diff
    println!("Unified diff:");
    println!("{}", generate_unified_diff(text1, text2));

    // Generate an edit script
    let config = DiffConfig::default();
    let script = config
        .diff(text1, text2)
        .into_script()
        .expect("sample input is under the size ceiling");

    // Print diff statistics
    println!("Diff statistics:");
    println!("  Total entries: {}", script.changes().len());
    println!("  Added lines: {}", script.added_count());
    println!("  Removed lines: {}", script.removed_count());
    println!("  Unchanged lines: {}", script.context_count());

    // Project the script through the configured rendering cap and print
    // color-coded entries
    println!("\nEdit script:");
    for entry in script.render(config.max_rendered_changes()) {
        match entry {
            ListEntry::Change(change) => match change.kind {
                ChangeKind::Removed => print!("\x1b[31m-{}\x1b[0m", ensure_newline(&change.value)),
                ChangeKind::Added => print!("\x1b[32m+{}\x1b[0m", ensure_newline(&change.value)),
                ChangeKind::Context => print!("\x1b[37m {}\x1b[0m", ensure_newline(&change.value)),
            },
            ListEntry::Elided { omitted } => println!("... {} more entries", omitted),
        }
    }

    Ok(())
}

fn ensure_newline(value: &str) -> String {
    if value.ends_with('\n') {
        value.to_string()
    } else {
        format!("{}\n", value)
    }
}
