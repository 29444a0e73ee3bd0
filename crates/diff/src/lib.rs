// Core text diff engine: tokenize, align, render
// Pure string-in / structure-out; no I/O, no globals, no platform APIs

mod align;
mod change;
mod engine;
mod tokenizer;
mod unified;

pub use change::{
    Change, ChangeKind, DiffOutcome, EditScript, ListEntry, OversizeReason, OversizeSummary,
};
pub use engine::{diff_chars, diff_lines, diff_words, DiffConfig, DiffLimits};
pub use tokenizer::{tokenize, unit_count, Granularity};
pub use unified::{format_unified, generate_unified_diff, generate_unified_diff_with_limits};
