use crate::change::{ChangeKind, DiffOutcome, EditScript};
use crate::engine::{DiffConfig, DiffLimits};
use crate::tokenizer::Granularity;

/// Context lines kept on each side of a change within a hunk
const CONTEXT_RADIUS: usize = 3;

/// Generate a unified diff between two texts.
///
/// Unified diff is line-oriented by definition, so this always aligns at
/// line granularity no matter what granularity a caller's UI is showing.
/// Identical inputs render to an empty string; input over the line
/// ceiling yields a one-line summary instead of a diff body.
pub fn generate_unified_diff(old_text: &str, new_text: &str) -> String {
    match DiffConfig::default()
        .granularity(Granularity::Line)
        .diff(old_text, new_text)
    {
        DiffOutcome::Complete(script) => format_unified(&script),
        DiffOutcome::Oversized(summary) => format!(
            "input too large for unified diff: {} lines vs {} lines (ceiling {} characters)\n",
            summary.old_units, summary.new_units, summary.limit
        ),
    }
}

/// Generate a unified diff under custom size ceilings
pub fn generate_unified_diff_with_limits(
    old_text: &str,
    new_text: &str,
    limits: DiffLimits,
) -> String {
    match DiffConfig::default()
        .granularity(Granularity::Line)
        .limits(limits)
        .diff(old_text, new_text)
    {
        DiffOutcome::Complete(script) => format_unified(&script),
        DiffOutcome::Oversized(summary) => format!(
            "input too large for unified diff: {} lines vs {} lines (ceiling {} characters)\n",
            summary.old_units, summary.new_units, summary.limit
        ),
    }
}

/// Render a line-granularity edit script as unified diff text: a
/// `--- old` / `+++ new` header, then `@@` hunks with sign-prefixed
/// lines and up to three context lines around each change.
pub fn format_unified(script: &EditScript) -> String {
    if !script.has_changes() {
        return String::new();
    }

    let changes = script.changes();

    // Old/new line numbers (0-based) in effect before each entry
    let mut positions = Vec::with_capacity(changes.len());
    let mut old_line = 0usize;
    let mut new_line = 0usize;
    for change in changes {
        positions.push((old_line, new_line));
        match change.kind {
            ChangeKind::Context => {
                old_line += 1;
                new_line += 1;
            }
            ChangeKind::Removed => old_line += 1,
            ChangeKind::Added => new_line += 1,
        }
    }

    // Expand every change by the context radius; hunks whose context
    // regions touch collapse into one.
    let mut hunks: Vec<(usize, usize)> = Vec::new();
    for (pos, change) in changes.iter().enumerate() {
        if change.kind == ChangeKind::Context {
            continue;
        }
        let start = pos.saturating_sub(CONTEXT_RADIUS);
        let end = (pos + CONTEXT_RADIUS + 1).min(changes.len());
        match hunks.last_mut() {
            Some(last) if start <= last.1 => last.1 = end,
            _ => hunks.push((start, end)),
        }
    }

    let mut out = String::new();
    out.push_str("--- old\n");
    out.push_str("+++ new\n");

    for &(start, end) in &hunks {
        let hunk = &changes[start..end];
        let (old_start, new_start) = positions[start];
        let old_count = hunk.iter().filter(|c| c.kind != ChangeKind::Added).count();
        let new_count = hunk.iter().filter(|c| c.kind != ChangeKind::Removed).count();

        // 1-based starts; an empty side reports the line before it, per
        // the usual unified-diff convention
        out.push_str(&format!(
            "@@ -{},{} +{},{} @@\n",
            if old_count == 0 { old_start } else { old_start + 1 },
            old_count,
            if new_count == 0 { new_start } else { new_start + 1 },
            new_count,
        ));

        for change in hunk {
            let sign = match change.kind {
                ChangeKind::Context => ' ',
                ChangeKind::Removed => '-',
                ChangeKind::Added => '+',
            };
            out.push(sign);
            out.push_str(&change.value);
            // Line tokens carry their own terminator except a final
            // unterminated line
            if !change.value.ends_with('\n') {
                out.push('\n');
            }
        }
    }

    out
}
