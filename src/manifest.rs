//! JSON input files for the `batch` and `compare` commands
//!
//! Both are parsed through `serde_json::Value` rather than typed structs so
//! that a null or non-string text field is reported as invalid input for the
//! right side of the pair instead of as a generic deserialization failure.

use crate::error::{InputRole, Result, ScoreError};
use crate::scorer::text_from_value;
use serde_json::Value;
use std::path::Path;

/// Candidate and reference lists for batch scoring, index-aligned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchInput {
    pub candidates: Vec<String>,
    pub references: Vec<String>,
}

impl BatchInput {
    /// Parse `[{"candidate": "...", "reference": "..."}, ...]`
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let items = value
            .as_array()
            .ok_or_else(|| structure_error("batch input must be a JSON array"))?;

        let mut input = BatchInput::default();
        for (i, item) in items.iter().enumerate() {
            let object = item
                .as_object()
                .ok_or_else(|| structure_error(format!("pair {} must be an object", i)))?;
            let candidate = field(object.get("candidate"), InputRole::Candidate)?;
            let reference = field(object.get("reference"), InputRole::Reference)?;
            input.candidates.push(candidate.to_string());
            input.references.push(reference.to_string());
        }

        Ok(input)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Several models' summaries of one document plus its reference summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonManifest {
    pub reference: String,
    /// (model, summary) in manifest order
    pub candidates: Vec<(String, String)>,
}

impl ComparisonManifest {
    /// Parse `{"reference": "...", "candidates": [{"model": "...", "summary": "..."}]}`
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let object = value
            .as_object()
            .ok_or_else(|| structure_error("manifest must be a JSON object"))?;

        let reference = field(object.get("reference"), InputRole::Reference)?.to_string();

        let entries = object
            .get("candidates")
            .and_then(Value::as_array)
            .ok_or_else(|| structure_error("manifest needs a \"candidates\" array"))?;

        let mut candidates = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let model = entry.get("model").and_then(Value::as_str).ok_or_else(|| {
                structure_error(format!("candidate {} needs a string \"model\"", i))
            })?;
            let summary = field(entry.get("summary"), InputRole::Candidate)?;
            candidates.push((model.to_string(), summary.to_string()));
        }

        Ok(Self {
            reference,
            candidates,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }
}

static MISSING: Value = Value::Null;

/// A missing field is treated the same as an explicit null
fn field(value: Option<&Value>, role: InputRole) -> Result<&str> {
    text_from_value(value.unwrap_or(&MISSING), role)
}

fn structure_error(reason: impl Into<String>) -> ScoreError {
    ScoreError::Json(serde::de::Error::custom(reason.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_input_parses_pairs() {
        let input = BatchInput::from_json_str(
            r#"[{"candidate": "a b", "reference": "a c"}, {"candidate": "", "reference": "x"}]"#,
        )
        .unwrap();

        assert_eq!(input.len(), 2);
        assert_eq!(input.candidates, ["a b", ""]);
        assert_eq!(input.references, ["a c", "x"]);
    }

    #[test]
    fn test_batch_input_null_candidate() {
        let err = BatchInput::from_json_str(r#"[{"candidate": null, "reference": "x"}]"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ScoreError::InvalidInput {
                role: InputRole::Candidate,
                ..
            }
        ));
    }

    #[test]
    fn test_batch_input_missing_reference_is_invalid() {
        let err = BatchInput::from_json_str(r#"[{"candidate": "x"}]"#).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::InvalidInput {
                role: InputRole::Reference,
                ..
            }
        ));
    }

    #[test]
    fn test_batch_input_must_be_array() {
        let err = BatchInput::from_json_str(r#"{"candidate": "x"}"#).unwrap_err();
        assert!(matches!(err, ScoreError::Json(_)));
    }

    #[test]
    fn test_manifest_parses_in_order() {
        let manifest = ComparisonManifest::from_json_str(
            r#"{
                "reference": "bears wander in a daze",
                "candidates": [
                    {"model": "BART", "summary": "bears wander"},
                    {"model": "T5", "summary": "cubs sleep"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.reference, "bears wander in a daze");
        assert_eq!(manifest.candidates[0].0, "BART");
        assert_eq!(manifest.candidates[1].1, "cubs sleep");
    }

    #[test]
    fn test_manifest_numeric_summary_is_invalid() {
        let err = ComparisonManifest::from_json_str(
            r#"{"reference": "r", "candidates": [{"model": "BART", "summary": 7}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid candidate input"));
    }

    #[test]
    fn test_manifest_null_reference_is_invalid() {
        let err =
            ComparisonManifest::from_json_str(r#"{"reference": null, "candidates": []}"#)
                .unwrap_err();
        assert!(matches!(
            err,
            ScoreError::InvalidInput {
                role: InputRole::Reference,
                ..
            }
        ));
    }

    #[test]
    fn test_manifest_requires_model_name() {
        let err = ComparisonManifest::from_json_str(
            r#"{"reference": "r", "candidates": [{"summary": "s"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ScoreError::Json(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ComparisonManifest::from_json_str("{not json"),
            Err(ScoreError::Json(_))
        ));
    }
}
