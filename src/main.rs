use anyhow::{Context, Result};
use clap::Parser;
use rouge_scorer::cli::{BatchArgs, Cli, Command, CompareArgs, ScoreArgs};
use rouge_scorer::config::ScorerConfig;
use rouge_scorer::manifest::{BatchInput, ComparisonManifest};
use rouge_scorer::output::{self, OutputFormat};
use rouge_scorer::{average_reports, compare_models, score_bytes, Scorer};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Merge the optional config file with command-line overrides
fn load_config(args: &Cli) -> Result<ScorerConfig> {
    let mut config = match &args.config {
        Some(path) => ScorerConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ScorerConfig::default(),
    };

    if let Some(threads) = args.threads {
        config.threads = threads;
    }
    if args.no_cache {
        config.cache = false;
    }

    config.validate()?;
    Ok(config)
}

fn run_score(args: &ScoreArgs, format: OutputFormat) -> Result<String> {
    let report = if args.files {
        let candidate = std::fs::read(&args.candidate)
            .with_context(|| format!("Failed to read candidate file {}", args.candidate))?;
        let reference = std::fs::read(&args.reference)
            .with_context(|| format!("Failed to read reference file {}", args.reference))?;
        score_bytes(&candidate, &reference)?
    } else {
        score_bytes(args.candidate.as_bytes(), args.reference.as_bytes())?
    };

    Ok(output::render_report(&report, format)?)
}

fn run_batch(args: &BatchArgs, scorer: &Scorer, format: OutputFormat) -> Result<String> {
    let input = BatchInput::from_file(&args.input)
        .with_context(|| format!("Failed to load batch input {}", args.input.display()))?;

    let reports = scorer.score_batch(&input.candidates, &input.references)?;

    if args.average {
        let mean = average_reports(&reports)?;
        return Ok(output::render_report(&mean, format)?);
    }

    Ok(output::render_batch(&reports, format)?)
}

fn run_compare(args: &CompareArgs, scorer: &Scorer, format: OutputFormat) -> Result<String> {
    let manifest = ComparisonManifest::from_file(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;

    if manifest.candidates.is_empty() {
        anyhow::bail!("Manifest {} lists no candidates", args.manifest.display());
    }

    let metric = args.metric.unwrap_or(scorer.config().rank_metric);
    let statistic = args.statistic.unwrap_or(scorer.config().rank_statistic);

    let entries = compare_models(scorer, &manifest.reference, &manifest.candidates);

    Ok(output::render_comparison(&entries, metric, statistic, format)?)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = load_config(&args)?;
    let scorer = Scorer::new(config)?;

    let rendered = match &args.command {
        Command::Score(score_args) => run_score(score_args, args.format)?,
        Command::Batch(batch_args) => run_batch(batch_args, &scorer, args.format)?,
        Command::Compare(compare_args) => run_compare(compare_args, &scorer, args.format)?,
    };

    print!("{}", rendered);

    if let Some(stats) = scorer.cache_stats() {
        tracing::debug!(
            hits = stats.hits,
            misses = stats.misses,
            entries = stats.entries,
            "score cache"
        );
    }

    Ok(())
}
