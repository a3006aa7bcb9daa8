//! CLI argument parsing for rouge-scorer

use crate::metrics::{Metric, Statistic};
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rouge-scorer")]
#[command(version)]
#[command(about = "ROUGE-1/2/L overlap scoring for generated summaries", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Load scorer settings from a TOML file
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Worker threads for batch scoring (0 = one per core)
    #[arg(short = 'j', long = "threads", value_name = "N", global = true)]
    pub threads: Option<usize>,

    /// Disable the (candidate, reference) result cache
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score one candidate against one reference
    Score(ScoreArgs),
    /// Score a JSON array of {"candidate", "reference"} pairs
    Batch(BatchArgs),
    /// Score several models' summaries against a shared reference
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Candidate text (or path with --files)
    pub candidate: String,

    /// Reference text (or path with --files)
    pub reference: String,

    /// Treat CANDIDATE and REFERENCE as file paths
    #[arg(long = "files")]
    pub files: bool,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file containing the pairs
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Print the per-metric mean instead of one report per pair
    #[arg(long = "average")]
    pub average: bool,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// JSON manifest: {"reference": ..., "candidates": [{"model": ..., "summary": ...}]}
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Metric that decides the overall winner (overrides config)
    #[arg(long = "metric", value_enum)]
    pub metric: Option<Metric>,

    /// Component to rank by: p, r or f
    #[arg(long = "statistic", value_enum)]
    pub statistic: Option<Statistic>,
}
