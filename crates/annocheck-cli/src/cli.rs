use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "annocheck",
    version,
    about = "Check that per-sentence annotation ratings match reference sentence counts"
)]
pub struct Cli {
    /// Annotation workbook (single sheet, header in the first row)
    pub path: PathBuf,

    /// YAML or JSON file overriding column names and the sentence delimiter
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only check these criteria (repeatable)
    #[arg(long = "criterion")]
    pub criteria: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print only the per-criterion totals
    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// Exit with status 2 when any mismatch is found
    #[arg(long, default_value_t = false)]
    pub fail_on_errors: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
