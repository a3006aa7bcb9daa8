//! Comparing summarization models by their scores
//!
//! A leaderboard is an ordered list of (model, report) pairs. The best model
//! for a metric is the maximum by key, with ties going to the entry that
//! appears first.

use crate::batch::Scorer;
use crate::metrics::{Metric, Statistic};
use crate::scorer::ScoreReport;
use serde::{Deserialize, Serialize};

/// One model's report against the shared reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelScore {
    pub model: String,
    pub report: ScoreReport,
}

impl ModelScore {
    pub fn new(model: impl Into<String>, report: ScoreReport) -> Self {
        Self {
            model: model.into(),
            report,
        }
    }

    /// The value this entry is ranked by
    pub fn value(&self, metric: Metric, statistic: Statistic) -> f64 {
        self.report.get(metric).get(statistic)
    }
}

/// Best model for one metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricWinner<'a> {
    pub metric: Metric,
    pub entry: &'a ModelScore,
}

/// Entry with the highest `statistic` of `metric`
///
/// Returns `None` for an empty leaderboard. On ties the earliest entry wins.
///
/// # Example
/// ```
/// use rouge_scorer::metrics::{Metric, Statistic};
/// use rouge_scorer::ranking::{best_model, ModelScore};
/// use rouge_scorer::scorer::score;
///
/// let reference = "bears wander in a daze";
/// let entries = vec![
///     ModelScore::new("BART", score("bears wander", reference)),
///     ModelScore::new("T5", score("bears wander in a daze", reference)),
/// ];
///
/// let best = best_model(&entries, Metric::Rouge1, Statistic::F1).unwrap();
/// assert_eq!(best.model, "T5");
/// ```
pub fn best_model(
    entries: &[ModelScore],
    metric: Metric,
    statistic: Statistic,
) -> Option<&ModelScore> {
    let key = |entry: &ModelScore| entry.value(metric, statistic);
    let mut best: Option<&ModelScore> = None;

    for entry in entries {
        match best {
            // strictly greater replaces, so the earliest maximum is kept
            Some(current) if key(entry) <= key(current) => {}
            _ => best = Some(entry),
        }
    }

    best
}

/// Best model for each metric, in report order
pub fn best_per_metric(entries: &[ModelScore], statistic: Statistic) -> Vec<MetricWinner<'_>> {
    Metric::ALL
        .into_iter()
        .filter_map(|metric| {
            best_model(entries, metric, statistic).map(|entry| MetricWinner { metric, entry })
        })
        .collect()
}

/// Score each model's candidate against one shared reference
///
/// The leaderboard keeps the order of `candidates`.
pub fn compare_models<M, S>(
    scorer: &Scorer,
    reference: &str,
    candidates: &[(M, S)],
) -> Vec<ModelScore>
where
    M: AsRef<str>,
    S: AsRef<str>,
{
    let entries: Vec<ModelScore> = candidates
        .iter()
        .map(|(model, summary)| {
            ModelScore::new(model.as_ref(), scorer.score(summary.as_ref(), reference))
        })
        .collect();

    tracing::info!(models = entries.len(), "compared models against reference");

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScorerConfig;
    use crate::metrics::MetricResult;

    fn report_with_f1(f1: f64) -> ScoreReport {
        let result = MetricResult {
            precision: f1,
            recall: f1,
            f1,
        };
        ScoreReport {
            rouge_1: result,
            rouge_2: result,
            rouge_l: result,
        }
    }

    #[test]
    fn test_best_model_picks_maximum() {
        let entries = vec![
            ModelScore::new("BART", report_with_f1(0.3)),
            ModelScore::new("T5", report_with_f1(0.5)),
            ModelScore::new("PEGASUS", report_with_f1(0.4)),
        ];
        let best = best_model(&entries, Metric::Rouge1, Statistic::F1).unwrap();
        assert_eq!(best.model, "T5");
    }

    #[test]
    fn test_best_model_tie_goes_to_first() {
        let entries = vec![
            ModelScore::new("BART", report_with_f1(0.5)),
            ModelScore::new("T5", report_with_f1(0.5)),
        ];
        let best = best_model(&entries, Metric::Rouge2, Statistic::F1).unwrap();
        assert_eq!(best.model, "BART");
    }

    #[test]
    fn test_best_model_all_zero_is_first() {
        let entries = vec![
            ModelScore::new("A", ScoreReport::default()),
            ModelScore::new("B", ScoreReport::default()),
        ];
        assert_eq!(
            best_model(&entries, Metric::RougeL, Statistic::Recall)
                .unwrap()
                .model,
            "A"
        );
    }

    #[test]
    fn test_best_model_empty() {
        assert!(best_model(&[], Metric::Rouge1, Statistic::F1).is_none());
    }

    #[test]
    fn test_best_per_metric_can_differ() {
        let mut first = report_with_f1(0.2);
        first.rouge_l.f1 = 0.9;
        let entries = vec![
            ModelScore::new("BART", first),
            ModelScore::new("T5", report_with_f1(0.5)),
        ];

        let winners = best_per_metric(&entries, Statistic::F1);
        let names: Vec<_> = winners
            .iter()
            .map(|w| (w.metric, w.entry.model.as_str()))
            .collect();

        assert_eq!(
            names,
            vec![
                (Metric::Rouge1, "T5"),
                (Metric::Rouge2, "T5"),
                (Metric::RougeL, "BART"),
            ]
        );
    }

    #[test]
    fn test_compare_models_keeps_order() {
        let scorer = Scorer::new(ScorerConfig::default()).unwrap();
        let reference = "bears are wandering around in a daze";
        let candidates = [
            ("BART", "bears are wandering around"),
            ("T5", "cubs sleep"),
            ("PEGASUS", "bears are wandering around in a daze"),
        ];

        let entries = compare_models(&scorer, reference, &candidates);

        let models: Vec<_> = entries.iter().map(|e| e.model.as_str()).collect();
        assert_eq!(models, ["BART", "T5", "PEGASUS"]);
        assert_eq!(entries[2].report.rouge_1.f1, 1.0);
        assert_eq!(entries[1].report.rouge_1.f1, 0.0);
        assert_eq!(
            best_model(&entries, Metric::Rouge1, Statistic::F1)
                .unwrap()
                .model,
            "PEGASUS"
        );
    }
}
