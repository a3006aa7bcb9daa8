//! Rendering score reports as text, JSON or CSV
//!
//! Numbers are printed with Rust's shortest round-trip `f64` formatting, so no
//! precision is lost in any format.

use crate::metrics::{Metric, Statistic};
use crate::ranking::{best_model, best_per_metric, ModelScore};
use crate::scorer::ScoreReport;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write;

/// Output format for score reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table (default)
    Text,
    /// JSON for machine parsing
    Json,
    /// CSV for spreadsheet analysis
    Csv,
}

const CSV_HEADER: &str = "id,metric,precision,recall,f1";

/// Escape CSV field (handle commas, quotes, line breaks)
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn text_table(out: &mut String, report: &ScoreReport, indent: &str) {
    let _ = writeln!(
        out,
        "{}{:<9} {:<22} {:<22} {}",
        indent, "metric", "precision", "recall", "f1"
    );
    for (metric, result) in report.iter() {
        let _ = writeln!(
            out,
            "{}{:<9} {:<22} {:<22} {}",
            indent,
            metric.as_str(),
            result.precision,
            result.recall,
            result.f1
        );
    }
}

fn csv_rows(out: &mut String, id: &str, report: &ScoreReport) {
    let id = escape_field(id);
    for (metric, result) in report.iter() {
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            id, metric, result.precision, result.recall, result.f1
        );
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value).map(|mut json| {
        json.push('\n');
        json
    })
}

/// Render a single pair's report
pub fn render_report(report: &ScoreReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => {
            let mut out = String::new();
            text_table(&mut out, report, "");
            Ok(out)
        }
        OutputFormat::Csv => {
            let mut out = format!("{}\n", CSV_HEADER);
            csv_rows(&mut out, "0", report);
            Ok(out)
        }
    }
}

/// Render one report per batch pair, identified by position
pub fn render_batch(reports: &[ScoreReport], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => to_json(reports),
        OutputFormat::Text => {
            let mut out = String::new();
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "Pair {}:", i);
                text_table(&mut out, report, "  ");
            }
            Ok(out)
        }
        OutputFormat::Csv => {
            let mut out = format!("{}\n", CSV_HEADER);
            for (i, report) in reports.iter().enumerate() {
                csv_rows(&mut out, &i.to_string(), report);
            }
            Ok(out)
        }
    }
}

#[derive(Serialize)]
struct JsonWinner<'a> {
    metric: &'static str,
    statistic: Statistic,
    model: &'a str,
    value: f64,
}

impl<'a> JsonWinner<'a> {
    fn new(metric: Metric, statistic: Statistic, entry: &'a ModelScore) -> Self {
        Self {
            metric: metric.as_str(),
            statistic,
            model: &entry.model,
            value: entry.value(metric, statistic),
        }
    }
}

#[derive(Serialize)]
struct JsonComparison<'a> {
    models: &'a [ModelScore],
    #[serde(skip_serializing_if = "Option::is_none")]
    winner: Option<JsonWinner<'a>>,
    best: Vec<JsonWinner<'a>>,
}

/// Render a model comparison
///
/// Lists every model's scores, the overall winner by `rank_metric`, and the
/// best model for each metric.
pub fn render_comparison(
    entries: &[ModelScore],
    rank_metric: Metric,
    statistic: Statistic,
    format: OutputFormat,
) -> serde_json::Result<String> {
    let winner = best_model(entries, rank_metric, statistic);
    let winners = best_per_metric(entries, statistic);

    match format {
        OutputFormat::Json => {
            let best = winners
                .iter()
                .map(|w| JsonWinner::new(w.metric, statistic, w.entry))
                .collect();
            to_json(&JsonComparison {
                models: entries,
                winner: winner.map(|entry| JsonWinner::new(rank_metric, statistic, entry)),
                best,
            })
        }
        OutputFormat::Text => {
            let mut out = String::new();
            if let Some(entry) = winner {
                let _ = writeln!(
                    out,
                    "Best model by {} ({}): {}",
                    rank_metric, statistic, entry.model
                );
            }
            for best in &winners {
                out.push('\n');
                let _ = writeln!(
                    out,
                    "Best {} model ({}): {}",
                    best.metric, statistic, best.entry.model
                );
                for entry in entries {
                    let _ = writeln!(
                        out,
                        "  {}: {}",
                        entry.model,
                        entry.value(best.metric, statistic)
                    );
                }
            }
            Ok(out)
        }
        OutputFormat::Csv => {
            let mut out = format!("{}\n", CSV_HEADER);
            for entry in entries {
                csv_rows(&mut out, &entry.model, &entry.report);
            }
            Ok(out)
        }
    }
}
