//! CLI entry point for data quality scoring.

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use dq_score::{QualityConfig, QualityScorer, ReportGenerator, dataset};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Composite data quality scoring",
    long_about = "Scores a tabular dataset on completeness, uniqueness, consistency,\n\
                  freshness, velocity and criticality, and combines them into one\n\
                  weighted score.\n\n\
                  EXAMPLES:\n  \
                  # Score the built-in sample dataset\n  \
                  dq-score\n\n  \
                  # Score a CSV file against a fixed reference date\n  \
                  dq-score -i customers.csv --as-of 2021-01-20\n\n  \
                  # Custom weights and parameters, JSON output\n  \
                  dq-score -i customers.csv -c quality.json --json"
)]
struct Args {
    /// Path to a CSV file to score
    ///
    /// If not specified, the built-in customer sample is scored
    #[arg(short, long)]
    input: Option<String>,

    /// Path to a JSON configuration file (weights, criticality, parameters)
    #[arg(short, long)]
    config: Option<String>,

    /// Reference time for freshness and velocity
    ///
    /// Accepts YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS; defaults to the local time
    #[arg(long, value_parser = parse_reference_time)]
    as_of: Option<NaiveDateTime>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress informational logs (only warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Output the full JSON report to stdout instead of the text summary
    ///
    /// Disables all logs; only the JSON report is written.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only the report. When `json_output`
/// is true, logging is disabled entirely.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_reference_time(value: &str) -> Result<NaiveDateTime, String> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| format!("expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS, got '{value}'"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            QualityConfig::from_json_file(path)
                .with_context(|| format!("Invalid configuration file {path}"))?
        }
        None => QualityConfig::default(),
    };

    let (df, input_label) = match &args.input {
        Some(path) => (dataset::load_csv(path)?, path.clone()),
        None => {
            info!("No input given, scoring the built-in sample dataset");
            (dataset::sample_customers()?, "sample".to_string())
        }
    };

    let now = args.as_of.unwrap_or_else(|| Local::now().naive_local());
    info!("Reference time: {}", now);

    let scorer = QualityScorer::new(config)?;
    let assessment = match scorer.score(&df, now) {
        Ok(assessment) => assessment,
        Err(e) => {
            error!("Scoring failed: {}", e);
            return Err(anyhow!("Scoring failed: {}", e));
        }
    };

    if args.json {
        let report =
            ReportGenerator::build_report(&input_label, &assessment, &scorer.config().weights);
        println!("{}", ReportGenerator::render_json(&report)?);
    } else {
        print!("{}", ReportGenerator::render_text(&assessment));
    }

    Ok(())
}
