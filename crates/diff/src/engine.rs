use crate::align::align;
use crate::change::{DiffOutcome, EditScript, OversizeReason, OversizeSummary};
use crate::tokenizer::{self, Granularity};

/// Size ceilings for raw input, measured in Unicode scalar values of each
/// input independently, plus the rendering cap for change lists.
///
/// The ceilings bound the O(n*m) aligner: an input over its granularity's
/// ceiling short-circuits into a counts-only summary before tokenization,
/// so callers get bounded latency and a typed signal instead of a hang.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffLimits {
    /// Ceiling for character-granularity input
    pub max_char_input: usize,

    /// Ceiling for word-granularity input
    pub max_word_input: usize,

    /// Ceiling for line-granularity input
    pub max_line_input: usize,

    /// Ceiling on the product of the two sides' token counts. Character
    /// ceilings do not bound token counts at line and word granularity
    /// (all-newline input is one token per character), so this is what
    /// actually caps the aligner's O(n*m) table.
    pub max_token_product: u64,

    /// Cap on entries emitted by the change-list projection
    pub max_rendered_changes: usize,
}

impl Default for DiffLimits {
    fn default() -> Self {
        Self {
            max_char_input: 50_000,
            max_word_input: 500_000,
            max_line_input: 1_000_000,
            // The table the character ceiling already permits: 50k x 50k
            max_token_product: 2_500_000_000,
            max_rendered_changes: 10_000,
        }
    }
}

impl DiffLimits {
    /// The input ceiling that applies at the given granularity
    pub fn ceiling(&self, granularity: Granularity) -> usize {
        match granularity {
            Granularity::Line => self.max_line_input,
            Granularity::Word => self.max_word_input,
            Granularity::Character => self.max_char_input,
        }
    }
}

/// Configuration for a diff operation
#[derive(Debug, Clone, Default)]
pub struct DiffConfig {
    granularity: Granularity,
    limits: DiffLimits,
}

impl DiffConfig {
    /// Set the granularity to diff at
    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Override the size ceilings and rendering cap
    pub fn limits(mut self, limits: DiffLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The rendering cap carried by this configuration
    pub fn max_rendered_changes(&self) -> usize {
        self.limits.max_rendered_changes
    }

    /// Diff two texts under this configuration.
    ///
    /// Inputs over the granularity's ceiling yield `DiffOutcome::Oversized`
    /// without invoking the aligner; everything else yields the full,
    /// untruncated edit script.
    pub fn diff(&self, old_text: &str, new_text: &str) -> DiffOutcome {
        let limit = self.limits.ceiling(self.granularity);
        let over_length = exceeds(old_text, limit) || exceeds(new_text, limit);

        let old_units = tokenizer::unit_count(old_text, self.granularity);
        let new_units = tokenizer::unit_count(new_text, self.granularity);
        let over_product = old_units as u64 * new_units as u64 > self.limits.max_token_product;

        if over_length || over_product {
            return DiffOutcome::Oversized(OversizeSummary {
                granularity: self.granularity,
                limit,
                reason: if over_length {
                    OversizeReason::InputLength
                } else {
                    OversizeReason::TokenProduct
                },
                old_chars: old_text.chars().count(),
                new_chars: new_text.chars().count(),
                old_units,
                new_units,
            });
        }

        let old_tokens = tokenizer::tokenize(old_text, self.granularity);
        let new_tokens = tokenizer::tokenize(new_text, self.granularity);
        DiffOutcome::Complete(EditScript::new(
            self.granularity,
            align(&old_tokens, &new_tokens),
        ))
    }
}

/// A character is at least one byte, so a byte length under the limit can
/// never exceed it in characters; the count only runs for long inputs.
fn exceeds(text: &str, limit: usize) -> bool {
    text.len() > limit && text.chars().count() > limit
}

/// Diff two texts line by line
pub fn diff_lines(old_text: &str, new_text: &str) -> DiffOutcome {
    DiffConfig::default()
        .granularity(Granularity::Line)
        .diff(old_text, new_text)
}

/// Diff two texts word by word
pub fn diff_words(old_text: &str, new_text: &str) -> DiffOutcome {
    DiffConfig::default()
        .granularity(Granularity::Word)
        .diff(old_text, new_text)
}

/// Diff two texts character by character
pub fn diff_chars(old_text: &str, new_text: &str) -> DiffOutcome {
    DiffConfig::default()
        .granularity(Granularity::Character)
        .diff(old_text, new_text)
}
