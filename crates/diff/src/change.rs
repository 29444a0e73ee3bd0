use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tokenizer::Granularity;

/// Classifies a single entry of an edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChangeKind {
    /// Token present in both versions
    #[display(fmt = "Context")]
    Context,

    /// Token only present in the old version
    #[display(fmt = "Removed")]
    Removed,

    /// Token only present in the new version
    #[display(fmt = "Added")]
    Added,
}

/// One entry of an edit script: a token together with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Change {
    /// How this token relates the two versions
    pub kind: ChangeKind,

    /// The token text (a line, a word run, or a single character)
    pub value: String,

    /// Position of the token in its originating sequence: the old token
    /// sequence for `Context` and `Removed`, the new one for `Added`
    pub index: usize,
}

impl Change {
    pub fn context(value: &str, index: usize) -> Self {
        Self {
            kind: ChangeKind::Context,
            value: value.to_string(),
            index,
        }
    }

    pub fn removed(value: &str, index: usize) -> Self {
        Self {
            kind: ChangeKind::Removed,
            value: value.to_string(),
            index,
        }
    }

    pub fn added(value: &str, index: usize) -> Self {
        Self {
            kind: ChangeKind::Added,
            value: value.to_string(),
            index,
        }
    }
}

/// An ordered edit script between two texts at one granularity.
///
/// Invariant: concatenating the values of all `Context` and `Removed`
/// entries reproduces the old text exactly, and the values of all
/// `Context` and `Added` entries reproduce the new text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditScript {
    granularity: Granularity,
    changes: Vec<Change>,
}

impl EditScript {
    pub(crate) fn new(granularity: Granularity, changes: Vec<Change>) -> Self {
        Self {
            granularity,
            changes,
        }
    }

    /// The granularity this script was aligned at
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// The entries of the script, in order
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Consume the script, yielding its entries
    pub fn into_changes(self) -> Vec<Change> {
        self.changes
    }

    /// Check if the script records any difference between the two texts
    pub fn has_changes(&self) -> bool {
        self.changes
            .iter()
            .any(|c| c.kind != ChangeKind::Context)
    }

    /// Get the number of added tokens
    pub fn added_count(&self) -> usize {
        self.count_kind(ChangeKind::Added)
    }

    /// Get the number of removed tokens
    pub fn removed_count(&self) -> usize {
        self.count_kind(ChangeKind::Removed)
    }

    /// Get the number of unchanged tokens
    pub fn context_count(&self) -> usize {
        self.count_kind(ChangeKind::Context)
    }

    fn count_kind(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind == kind).count()
    }

    /// Rebuild the old text from the `Context` and `Removed` entries
    pub fn reconstruct_old(&self) -> String {
        self.reconstruct(ChangeKind::Removed)
    }

    /// Rebuild the new text from the `Context` and `Added` entries
    pub fn reconstruct_new(&self) -> String {
        self.reconstruct(ChangeKind::Added)
    }

    fn reconstruct(&self, side: ChangeKind) -> String {
        self.changes
            .iter()
            .filter(|c| c.kind == ChangeKind::Context || c.kind == side)
            .map(|c| c.value.as_str())
            .collect()
    }

    /// Project the script into a change list capped at `max_entries`.
    ///
    /// When the script is longer than the cap, the list ends with a single
    /// `Elided` marker carrying the number of entries left out.
    pub fn render(&self, max_entries: usize) -> Vec<ListEntry> {
        if self.changes.len() <= max_entries {
            return self.changes.iter().cloned().map(ListEntry::Change).collect();
        }

        let mut entries: Vec<ListEntry> = self.changes[..max_entries]
            .iter()
            .cloned()
            .map(ListEntry::Change)
            .collect();
        entries.push(ListEntry::Elided {
            omitted: self.changes.len() - max_entries,
        });
        entries
    }
}

/// An entry of the capped change-list projection
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ListEntry {
    /// A script entry that made it under the cap
    Change(Change),

    /// Trailing marker: `omitted` entries were cut by the cap
    Elided { omitted: usize },
}

/// Which ceiling an oversized input tripped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OversizeReason {
    /// Raw character count of an input exceeded the granularity's ceiling
    #[display(fmt = "InputLength")]
    InputLength,

    /// The token counts of the two sides multiply out past what the
    /// aligner's table is allowed to hold
    #[display(fmt = "TokenProduct")]
    TokenProduct,
}

/// Counts-only result for inputs that exceed a size ceiling.
///
/// Produced without running the aligner; the unit counts come from the
/// tokenizer alone, so building a summary stays cheap for any input size.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OversizeSummary {
    /// The granularity that was requested
    pub granularity: Granularity,

    /// The character ceiling in effect for that granularity
    pub limit: usize,

    /// Which ceiling was tripped
    pub reason: OversizeReason,

    /// Character count of the old text
    pub old_chars: usize,

    /// Character count of the new text
    pub new_chars: usize,

    /// Tokens the old text would have produced at the requested granularity
    pub old_units: usize,

    /// Tokens the new text would have produced at the requested granularity
    pub new_units: usize,
}

/// Outcome of a diff request: either a full edit script, or a counts-only
/// summary when an input exceeds the granularity's size ceiling
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffOutcome {
    /// The aligner ran to completion
    Complete(EditScript),

    /// An input was over the ceiling; the aligner was never invoked
    Oversized(OversizeSummary),
}

impl DiffOutcome {
    /// Check whether this outcome is the oversized summary variant
    pub fn is_oversized(&self) -> bool {
        matches!(self, DiffOutcome::Oversized(_))
    }

    /// Get the edit script, if the diff ran to completion
    pub fn script(&self) -> Option<&EditScript> {
        match self {
            DiffOutcome::Complete(script) => Some(script),
            DiffOutcome::Oversized(_) => None,
        }
    }

    /// Consume the outcome, yielding the edit script if there is one
    pub fn into_script(self) -> Option<EditScript> {
        match self {
            DiffOutcome::Complete(script) => Some(script),
            DiffOutcome::Oversized(_) => None,
        }
    }

    /// Get the oversize summary, if the input was over the ceiling
    pub fn summary(&self) -> Option<&OversizeSummary> {
        match self {
            DiffOutcome::Complete(_) => None,
            DiffOutcome::Oversized(summary) => Some(summary),
        }
    }
}
