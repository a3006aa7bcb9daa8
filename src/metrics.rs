//! Precision, recall and F1 for the three ROUGE variants
//!
//! Every division guards its denominator: a zero denominator yields 0.0, so
//! no metric can ever be NaN.

use crate::lcs::lcs_length;
use crate::ngram::NGramMultiset;
use crate::tokenizer::Token;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ROUGE variants reported for every scored pair
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
pub enum Metric {
    #[serde(rename = "rouge-1")]
    #[value(name = "rouge-1")]
    Rouge1,
    #[serde(rename = "rouge-2")]
    #[value(name = "rouge-2")]
    Rouge2,
    #[serde(rename = "rouge-l")]
    #[value(name = "rouge-l")]
    RougeL,
}

impl Metric {
    /// All metrics in report order
    pub const ALL: [Metric; 3] = [Metric::Rouge1, Metric::Rouge2, Metric::RougeL];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Rouge1 => "rouge-1",
            Metric::Rouge2 => "rouge-2",
            Metric::RougeL => "rouge-l",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which component of a [`MetricResult`] to compare on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Statistic {
    #[serde(rename = "p")]
    #[value(name = "p", alias = "precision")]
    Precision,
    #[serde(rename = "r")]
    #[value(name = "r", alias = "recall")]
    Recall,
    #[serde(rename = "f")]
    #[value(name = "f", alias = "f1")]
    F1,
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Precision => write!(f, "p"),
            Statistic::Recall => write!(f, "r"),
            Statistic::F1 => write!(f, "f"),
        }
    }
}

/// Precision, recall and F1 of one metric, each in [0.0, 1.0]
///
/// Serializes with the short keys `p`, `r`, `f`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    #[serde(rename = "p")]
    pub precision: f64,
    #[serde(rename = "r")]
    pub recall: f64,
    #[serde(rename = "f")]
    pub f1: f64,
}

impl MetricResult {
    /// Build from precision and recall, deriving F1 as their harmonic mean
    pub fn from_precision_recall(precision: f64, recall: f64) -> Self {
        Self {
            precision,
            recall,
            f1: f1_score(precision, recall),
        }
    }

    /// Build from a match count and the two denominators
    pub fn from_counts(matched: usize, candidate_total: usize, reference_total: usize) -> Self {
        Self::from_precision_recall(
            ratio(matched, candidate_total),
            ratio(matched, reference_total),
        )
    }

    pub fn get(&self, statistic: Statistic) -> f64 {
        match statistic {
            Statistic::Precision => self.precision,
            Statistic::Recall => self.recall,
            Statistic::F1 => self.f1,
        }
    }
}

/// Harmonic mean of precision and recall; 0.0 when both are 0.0
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    let sum = precision + recall;
    if sum > 0.0 {
        2.0 * precision * recall / sum
    } else {
        0.0
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

/// ROUGE-N from candidate and reference multisets of the same order
pub fn ngram_metric(candidate: &NGramMultiset<'_>, reference: &NGramMultiset<'_>) -> MetricResult {
    let overlap = candidate.clipped_overlap(reference);
    MetricResult::from_counts(overlap, candidate.total(), reference.total())
}

/// ROUGE-L from the candidate and reference token sequences
pub fn lcs_metric(candidate: &[Token], reference: &[Token]) -> MetricResult {
    let lcs = lcs_length(candidate, reference);
    MetricResult::from_counts(lcs, candidate.len(), reference.len())
}
