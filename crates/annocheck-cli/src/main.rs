mod cli;
mod output;

use std::io;

use annocheck_core::{load_table, CheckConfig, Criterion, Detector};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, OutputFormat};

const EXIT_FAILURE: i32 = 1;
const EXIT_MISMATCHES: i32 = 2;

fn main() {
    init_tracing();

    match run() {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            error!(error = %err, "check failed");
            for cause in err.chain().skip(1) {
                error!(cause = %cause, "caused by");
            }
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CheckConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CheckConfig::default(),
    };
    // Rows are rendered from the report, not echoed during detection.
    let detector = Detector::new(config.with_echo(false));

    let criteria = if cli.criteria.is_empty() {
        Criterion::ALL.to_vec()
    } else {
        cli.criteria
            .iter()
            .map(|name| name.parse::<Criterion>())
            .collect::<Result<Vec<_>, _>>()?
    };

    let table = load_table(&cli.path)?;
    let report = detector
        .detect_criteria(&table, &criteria)
        .with_context(|| format!("failed to check {}", cli.path.display()))?
        .with_source(&cli.path);

    info!(total = report.total(), "report ready");

    let mut stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Text => output::write_text(&mut stdout, &report, cli.quiet)?,
        OutputFormat::Json => output::write_json(&mut stdout, &report)?,
    }

    if cli.fail_on_errors && !report.is_clean() {
        return Ok(EXIT_MISMATCHES);
    }
    Ok(0)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
