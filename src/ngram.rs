//! N-gram multisets over token sequences
//!
//! An n-gram borrows its window straight out of the token sequence, so
//! counting allocates only the map itself.

use crate::tokenizer::Token;
use fnv::FnvHashMap;

/// N-gram sizes used by the overlap metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NGramOrder {
    Unigram,
    Bigram,
}

impl NGramOrder {
    /// Window length in tokens
    pub fn size(self) -> usize {
        match self {
            NGramOrder::Unigram => 1,
            NGramOrder::Bigram => 2,
        }
    }
}

/// A window of consecutive tokens; equality is token-by-token
pub type NGram<'a> = &'a [Token];

/// Occurrence counts for every n-gram of one sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NGramMultiset<'a> {
    counts: FnvHashMap<NGram<'a>, usize>,
    total: usize,
}

impl<'a> NGramMultiset<'a> {
    /// Occurrences of `ngram` (0 when absent)
    pub fn count(&self, ngram: &[Token]) -> usize {
        self.counts.get(ngram).copied().unwrap_or(0)
    }

    /// Sum of all counts, i.e. the number of windows counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct n-grams
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (NGram<'a>, usize)> + '_ {
        self.counts.iter().map(|(ngram, count)| (*ngram, *count))
    }

    /// Clipped overlap: sum over shared n-grams of the smaller count
    ///
    /// Symmetric in its two operands. Iterates the smaller map.
    pub fn clipped_overlap(&self, other: &NGramMultiset<'_>) -> usize {
        let (small, large) = if self.distinct() <= other.distinct() {
            (&self.counts, &other.counts)
        } else {
            (&other.counts, &self.counts)
        };

        small
            .iter()
            .filter_map(|(ngram, count)| large.get(*ngram).map(|other| (*count).min(*other)))
            .sum()
    }
}

/// Count every contiguous window of `order` tokens
///
/// Returns an empty multiset when the sequence is shorter than the window.
///
/// # Example
/// ```
/// use rouge_scorer::ngram::{count_ngrams, NGramOrder};
/// use rouge_scorer::tokenizer::tokenize;
///
/// let tokens = tokenize("a b a b");
/// let bigrams = count_ngrams(&tokens, NGramOrder::Bigram);
///
/// assert_eq!(bigrams.total(), 3);
/// assert_eq!(bigrams.count(&["a".to_string(), "b".to_string()]), 2);
/// ```
pub fn count_ngrams(tokens: &[Token], order: NGramOrder) -> NGramMultiset<'_> {
    let mut multiset = NGramMultiset::default();
    let n = order.size();

    if tokens.len() < n {
        return multiset;
    }

    for window in tokens.windows(n) {
        *multiset.counts.entry(window).or_insert(0) += 1;
        multiset.total += 1;
    }

    multiset
}
