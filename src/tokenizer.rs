//! Word tokenization for overlap scoring
//!
//! Text is split on Unicode whitespace, each fragment loses any leading and
//! trailing non-alphanumeric characters, and the remainder is lowercased.
//! Interior punctuation survives, so "half-asleep" and "russia's" stay single
//! tokens. `str::to_lowercase` is locale-independent, which keeps the output
//! identical for identical input on every machine.

use std::ops::Deref;

/// Normalized word unit
pub type Token = String;

/// Ordered, immutable sequence of tokens produced from one input text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    /// Number of tokens in the sequence
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Borrow the tokens as a slice
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Deref for TokenSequence {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

/// Split raw text into normalized word tokens
///
/// Never fails: empty or punctuation-only input yields an empty sequence.
///
/// # Example
/// ```
/// use rouge_scorer::tokenizer::tokenize;
///
/// let tokens = tokenize("The cat, the \"MAT\"!");
/// assert_eq!(tokens.as_slice(), ["the", "cat", "the", "mat"]);
/// ```
pub fn tokenize(text: &str) -> TokenSequence {
    let tokens = text
        .split_whitespace()
        .map(|fragment| fragment.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect();

    TokenSequence { tokens }
}
