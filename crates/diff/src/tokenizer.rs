use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The token unit used for comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Granularity {
    /// Compare newline-delimited lines (terminators kept on the tokens)
    #[default]
    #[display(fmt = "Line")]
    Line,

    /// Compare word runs, with whitespace and punctuation runs as their
    /// own tokens
    #[display(fmt = "Word")]
    Word,

    /// Compare single Unicode scalar values
    #[display(fmt = "Character")]
    Character,
}

/// Split `text` into comparison tokens at the given granularity.
///
/// Lossless at every granularity: concatenating the returned tokens
/// reproduces `text` exactly. Pure and deterministic.
pub fn tokenize(text: &str, granularity: Granularity) -> Vec<&str> {
    match granularity {
        Granularity::Line => tokenize_lines(text),
        Granularity::Word => tokenize_words(text),
        Granularity::Character => tokenize_chars(text),
    }
}

/// Count the tokens `text` would produce, without allocating them
pub fn unit_count(text: &str, granularity: Granularity) -> usize {
    match granularity {
        Granularity::Line => {
            if text.is_empty() {
                1
            } else {
                text.split_inclusive('\n').count()
            }
        }
        Granularity::Word => {
            let mut count = 0;
            let mut current: Option<CharClass> = None;
            for ch in text.chars() {
                let class = CharClass::of(ch);
                if current != Some(class) {
                    count += 1;
                    current = Some(class);
                }
            }
            count
        }
        Granularity::Character => text.chars().count(),
    }
}

fn tokenize_lines(text: &str) -> Vec<&str> {
    // An empty buffer is one empty line
    if text.is_empty() {
        return vec![""];
    }
    text.split_inclusive('\n').collect()
}

/// Character classes for word tokenization. Runs of the same class merge
/// into one token, so whitespace and punctuation survive as tokens of
/// their own and nothing is dropped.
#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Whitespace,
    Punctuation,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_whitespace() {
            CharClass::Whitespace
        } else if ch.is_alphanumeric() || ch == '_' {
            CharClass::Word
        } else {
            CharClass::Punctuation
        }
    }
}

fn tokenize_words(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut run_class: Option<CharClass> = None;

    for (idx, ch) in text.char_indices() {
        let class = CharClass::of(ch);
        match run_class {
            Some(current) if current == class => {}
            Some(_) => {
                tokens.push(&text[run_start..idx]);
                run_start = idx;
                run_class = Some(class);
            }
            None => run_class = Some(class),
        }
    }

    if run_class.is_some() {
        tokens.push(&text[run_start..]);
    }

    tokens
}

fn tokenize_chars(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(idx, ch)| &text[idx..idx + ch.len_utf8()])
        .collect()
}
