//! Scoring facade: one call, three metrics
//!
//! Each input is tokenized exactly once and the resulting sequences feed the
//! unigram, bigram and LCS paths. The report always carries all three entries.

use crate::error::{InputRole, Result, ScoreError};
use crate::metrics::{lcs_metric, ngram_metric, Metric, MetricResult};
use crate::ngram::{count_ngrams, NGramOrder};
use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scores for one (candidate, reference) pair
///
/// Serializes as `{"rouge-1": {...}, "rouge-2": {...}, "rouge-l": {...}}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    #[serde(rename = "rouge-1")]
    pub rouge_1: MetricResult,
    #[serde(rename = "rouge-2")]
    pub rouge_2: MetricResult,
    #[serde(rename = "rouge-l")]
    pub rouge_l: MetricResult,
}

impl ScoreReport {
    pub fn get(&self, metric: Metric) -> &MetricResult {
        match metric {
            Metric::Rouge1 => &self.rouge_1,
            Metric::Rouge2 => &self.rouge_2,
            Metric::RougeL => &self.rouge_l,
        }
    }

    /// Entries in report order: rouge-1, rouge-2, rouge-l
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &MetricResult)> + '_ {
        Metric::ALL.into_iter().map(move |metric| (metric, self.get(metric)))
    }
}

/// Score a candidate text against a reference text
///
/// Pure and total: empty inputs produce zeros, never NaN.
///
/// # Example
/// ```
/// use rouge_scorer::scorer::score;
///
/// let report = score("a b c", "a b c");
/// assert_eq!(report.rouge_2.f1, 1.0);
///
/// let empty = score("", "");
/// assert_eq!(empty.rouge_l.f1, 0.0);
/// ```
pub fn score(candidate: &str, reference: &str) -> ScoreReport {
    let candidate_tokens = tokenize(candidate);
    let reference_tokens = tokenize(reference);

    tracing::debug!(
        candidate_tokens = candidate_tokens.len(),
        reference_tokens = reference_tokens.len(),
        "scoring pair"
    );

    let rouge_1 = ngram_metric(
        &count_ngrams(&candidate_tokens, NGramOrder::Unigram),
        &count_ngrams(&reference_tokens, NGramOrder::Unigram),
    );
    let rouge_2 = ngram_metric(
        &count_ngrams(&candidate_tokens, NGramOrder::Bigram),
        &count_ngrams(&reference_tokens, NGramOrder::Bigram),
    );
    let rouge_l = lcs_metric(&candidate_tokens, &reference_tokens);

    ScoreReport {
        rouge_1,
        rouge_2,
        rouge_l,
    }
}

/// Score raw bytes, rejecting anything that is not valid UTF-8
pub fn score_bytes(candidate: &[u8], reference: &[u8]) -> Result<ScoreReport> {
    let candidate = text_from_bytes(candidate, InputRole::Candidate)?;
    let reference = text_from_bytes(reference, InputRole::Reference)?;
    Ok(score(candidate, reference))
}

/// Score two JSON values, which must both be strings
pub fn score_values(candidate: &Value, reference: &Value) -> Result<ScoreReport> {
    let candidate = text_from_value(candidate, InputRole::Candidate)?;
    let reference = text_from_value(reference, InputRole::Reference)?;
    Ok(score(candidate, reference))
}

pub(crate) fn text_from_bytes(bytes: &[u8], role: InputRole) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| ScoreError::invalid(role, e.to_string()))
}

pub(crate) fn text_from_value(value: &Value, role: InputRole) -> Result<&str> {
    match value {
        Value::String(text) => Ok(text.as_str()),
        Value::Null => Err(ScoreError::invalid(role, "value is null")),
        other => Err(ScoreError::invalid(
            role,
            format!("expected a string, found {}", json_kind(other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
