//! Integration tests for comparing summarization models
//!
//! Uses the half-asleep bears article: one human reference summary and three
//! model outputs of the kind BART, T5 and PEGASUS produce for it.

use rouge_scorer::config::ScorerConfig;
use rouge_scorer::ranking::best_per_metric;
use rouge_scorer::{best_model, compare_models, score, Metric, ModelScore, Scorer, Statistic};

const REFERENCE: &str = "Bears that are struggling to hibernate due to abnormally warm weather \
in Russia's Amur region are wandering around in a daze, having suppressed their metabolism in \
preparation for winter.";

const BART: &str = "Bears in Siberia are wandering around \"half-asleep\" following abnormally \
high temperatures this fall. The bears are ready to hibernate, having accumulated the fat \
reserves needed to sleep through the winter.";

const T5: &str = "Bears in the Amur region are wandering around half-asleep because warm \
temperatures in November have kept them up past their bedtime.";

const PEGASUS: &str = "Soggy dens could also be to blame, a zoophysiologist told Live Science.";

fn leaderboard() -> Vec<ModelScore> {
    let scorer = Scorer::new(ScorerConfig::default()).unwrap();
    let candidates = [("BART", BART), ("T5", T5), ("PEGASUS", PEGASUS)];
    compare_models(&scorer, REFERENCE, &candidates)
}

#[test]
fn test_every_model_gets_all_three_metrics() {
    for entry in leaderboard() {
        for metric in Metric::ALL {
            let result = entry.report.get(metric);
            assert!((0.0..=1.0).contains(&result.f1), "{} {}", entry.model, metric);
        }
    }
}

#[test]
fn test_off_topic_summary_ranks_last_on_rouge1() {
    let entries = leaderboard();
    let pegasus = entries.iter().find(|e| e.model == "PEGASUS").unwrap();

    for other in entries.iter().filter(|e| e.model != "PEGASUS") {
        assert!(other.report.rouge_1.f1 > pegasus.report.rouge_1.f1);
    }
}

#[test]
fn test_best_model_matches_manual_maximum() {
    let entries = leaderboard();

    for metric in Metric::ALL {
        let best = best_model(&entries, metric, Statistic::F1).unwrap();
        let max = entries
            .iter()
            .map(|e| e.report.get(metric).f1)
            .fold(f64::MIN, f64::max);
        assert_eq!(best.report.get(metric).f1, max);
    }
}

#[test]
fn test_best_per_metric_covers_all_metrics() {
    let entries = leaderboard();
    let winners = best_per_metric(&entries, Statistic::F1);

    let metrics: Vec<_> = winners.iter().map(|w| w.metric).collect();
    assert_eq!(metrics, Metric::ALL);
}

#[test]
fn test_reference_against_itself_beats_every_model() {
    let scorer = Scorer::new(ScorerConfig::default()).unwrap();
    let candidates = [("BART", BART), ("ORACLE", REFERENCE), ("T5", T5)];
    let entries = compare_models(&scorer, REFERENCE, &candidates);

    for metric in Metric::ALL {
        let best = best_model(&entries, metric, Statistic::F1).unwrap();
        assert_eq!(best.model, "ORACLE");
        assert_eq!(best.report.get(metric).f1, 1.0);
    }
}

#[test]
fn test_duplicate_summaries_tie_to_first_model() {
    let scorer = Scorer::new(ScorerConfig::default()).unwrap();
    let candidates = [("first", T5), ("second", T5)];
    let entries = compare_models(&scorer, REFERENCE, &candidates);

    assert_eq!(entries[0].report, entries[1].report);
    for metric in Metric::ALL {
        for statistic in [Statistic::Precision, Statistic::Recall, Statistic::F1] {
            assert_eq!(best_model(&entries, metric, statistic).unwrap().model, "first");
        }
    }

    // Second lookup of the same pair came from the cache
    let stats = scorer.cache_stats().unwrap();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[test]
fn test_comparison_agrees_with_direct_scoring() {
    let entries = leaderboard();
    assert_eq!(entries[0].report, score(BART, REFERENCE));
    assert_eq!(entries[1].report, score(T5, REFERENCE));
    assert_eq!(entries[2].report, score(PEGASUS, REFERENCE));
}
