//! # annocheck-core
//!
//! Consistency checks for sentence-level human annotations kept in a
//! spreadsheet.
//!
//! Annotators rate each sentence of a text for three criteria
//! (`Informativeness`, `Non-redundancy`, `Fluency`). This crate loads the
//! annotation sheet and reports every row where the number of ratings
//! does not match the number of sentences in the text being rated.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same sheet always produces the same report
//! 2. **Findings are data**: Mismatches are returned, never raised
//! 3. **Misuse fails fast**: Unknown criteria, missing columns and
//!    multi-sheet workbooks are errors
//!
//! ## Example
//!
//! ```rust,ignore
//! use annocheck_core::{detect_annotation_errors, load_table, Criterion};
//!
//! let table = load_table("ratings.xlsx")?;
//! let report = detect_annotation_errors(&table)?;
//!
//! for error in report.get(Criterion::Fluency) {
//!     println!("row {}: {}", error.row, error.reference);
//! }
//! ```

pub mod config;
pub mod criterion;
pub mod detector;
pub mod loader;
pub mod report;
pub mod table;

// Re-export main types at crate root
pub use config::{CheckConfig, ConfigError};
pub use criterion::{Criterion, ReferenceKind};
pub use detector::{Detector, RatingCell, RatingCount};
pub use loader::{load_table, LoadError};
pub use report::{AnnotationError, AnnotationReport};
pub use table::{CellValue, Table, TableBuilder};

use std::path::Path;
use thiserror::Error;

/// Errors that abort a detection pass.
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Unknown criterion: {0:?} (expected Informativeness, Non-redundancy or Fluency)")]
    UnknownCriterion(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),
}

/// Errors from a full load-and-detect run.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Detect(#[from] DetectError),
}

/// Check all three criteria with the default configuration.
///
/// Every mismatch is also printed to stdout as `<row> <reference>` when
/// it is found.
pub fn detect_annotation_errors(table: &Table) -> Result<AnnotationReport, DetectError> {
    Detector::default().detect(table)
}

/// Check one criterion, given by its column name.
///
/// # Errors
///
/// * `DetectError::UnknownCriterion` - `criterion` is not one of the three
///   names; returned before any row is read
/// * `DetectError::MissingColumn` - the table lacks a required column
pub fn detect_criterion_errors(
    table: &Table,
    criterion: &str,
) -> Result<Vec<AnnotationError>, DetectError> {
    Detector::default().detect_named(table, criterion)
}

/// Load a workbook and check every criterion.
pub fn check_file(
    path: impl AsRef<Path>,
    config: &CheckConfig,
) -> Result<AnnotationReport, CheckError> {
    let path = path.as_ref();
    let table = load_table(path)?;
    let report = Detector::new(config.clone()).detect(&table)?;
    Ok(report.with_source(path))
}
