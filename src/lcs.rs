//! Longest common subsequence over token sequences
//!
//! Uses the textbook recurrence with two rolling rows instead of the full
//! `(len(a)+1) x (len(b)+1)` grid. The row is sized by the shorter sequence.

use crate::tokenizer::Token;

/// Length of the longest common subsequence of `a` and `b`
///
/// Token equality is exact string equality. Either side empty yields 0.
///
/// # Example
/// ```
/// use rouge_scorer::lcs::lcs_length;
/// use rouge_scorer::tokenizer::tokenize;
///
/// let a = tokenize("the cat sat on the mat");
/// let b = tokenize("the cat sat on a mat");
/// assert_eq!(lcs_length(&a, &b), 5);
/// ```
pub fn lcs_length(a: &[Token], b: &[Token]) -> usize {
    // LCS is symmetric; keep the row as short as possible
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if inner.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; inner.len() + 1];
    let mut curr = vec![0usize; inner.len() + 1];

    for x in outer {
        for (j, y) in inner.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}

/// Full-grid reference implementation, used to cross-check the rolling rows
#[cfg(test)]
fn lcs_length_grid(a: &[Token], b: &[Token]) -> usize {
    let mut grid = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            grid[i][j] = if a[i - 1] == b[j - 1] {
                grid[i - 1][j - 1] + 1
            } else {
                grid[i - 1][j].max(grid[i][j - 1])
            };
        }
    }
    grid[a.len()][b.len()]
}
