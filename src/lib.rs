//! rouge-scorer - ROUGE overlap scoring for generated summaries
//!
//! This library scores a candidate text against a reference text with
//! ROUGE-1 (clipped unigram overlap), ROUGE-2 (clipped bigram overlap) and
//! ROUGE-L (longest common subsequence), each as precision, recall and F1.
//! On top of the core engine it provides a result cache, parallel batch
//! scoring, and model comparison for picking the best summarizer.
//!
//! # Example
//! ```
//! use rouge_scorer::score;
//!
//! let report = score("the cat sat on the mat", "the cat sat on a mat");
//! assert!((report.rouge_1.f1 - 5.0 / 6.0).abs() < 1e-12);
//! ```

pub mod batch;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod lcs;
pub mod manifest;
pub mod metrics;
pub mod ngram;
pub mod output;
pub mod ranking;
pub mod scorer;
pub mod tokenizer;

pub use batch::{average_reports, score_batch, Scorer};
pub use error::{InputRole, Result, ScoreError};
pub use metrics::{Metric, MetricResult, Statistic};
pub use ranking::{best_model, compare_models, ModelScore};
pub use scorer::{score, score_bytes, ScoreReport};
