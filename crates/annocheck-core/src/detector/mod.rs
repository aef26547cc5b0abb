//! Annotation error detection.
//!
//! For each criterion the detector walks the rows in order and compares
//! the number of sentences in the row's reference text with the number
//! of ratings recorded in the criterion column.
//!
//! ## Merged cells
//!
//! Reference texts usually span several rows as a merged cell, and only
//! the first row of the block holds the text. Any row whose reference
//! cell is not text continues the last text seen.
//!
//! ## Outcomes per row
//!
//! | Criterion cell | Error when |
//! |----------------|------------|
//! | integer | sentence count is not 1 |
//! | rating list | piece count differs from sentence count |
//! | repeated header | never |
//! | empty | sentence count is not 0 |

mod ratings;
mod sentences;

#[cfg(test)]
mod properties;

pub use ratings::{normalize_ratings, RatingCell, RatingCount};
pub use sentences::{count_sentences, split_sentences};

use tracing::{debug, info};

use crate::config::CheckConfig;
use crate::criterion::Criterion;
use crate::report::{AnnotationError, AnnotationReport};
use crate::table::Table;
use crate::DetectError;

/// Runs sentence/rating consistency checks over a table.
pub struct Detector {
    config: CheckConfig,
}

impl Detector {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Check every criterion.
    pub fn detect(&self, table: &Table) -> Result<AnnotationReport, DetectError> {
        self.detect_criteria(table, &Criterion::ALL)
    }

    /// Check the given criteria; the others stay empty in the report.
    pub fn detect_criteria(
        &self,
        table: &Table,
        criteria: &[Criterion],
    ) -> Result<AnnotationReport, DetectError> {
        let mut report = AnnotationReport::new();

        for &criterion in criteria {
            let errors = self.detect_for(table, criterion)?;
            report.set(criterion, errors);
        }

        info!(
            rows = table.len(),
            errors = report.total(),
            "annotation check finished"
        );

        Ok(report)
    }

    /// Check a criterion given by name.
    ///
    /// Unknown names fail before any row is read.
    pub fn detect_named(
        &self,
        table: &Table,
        criterion: &str,
    ) -> Result<Vec<AnnotationError>, DetectError> {
        let criterion: Criterion = criterion.parse()?;
        self.detect_for(table, criterion)
    }

    /// Check a single criterion.
    pub fn detect_for(
        &self,
        table: &Table,
        criterion: Criterion,
    ) -> Result<Vec<AnnotationError>, DetectError> {
        let reference_column = self.config.column_for(criterion.reference_kind());
        let references = table
            .column(reference_column)
            .ok_or_else(|| DetectError::MissingColumn(reference_column.to_string()))?;
        let ratings = table
            .column(criterion.as_str())
            .ok_or_else(|| DetectError::MissingColumn(criterion.as_str().to_string()))?;

        let mut reference = String::new();
        let mut errors = Vec::new();

        for (row, (reference_cell, rating_cell)) in references.zip(ratings).enumerate() {
            if let Some(text) = reference_cell.as_text() {
                reference = text.to_string();
            }

            let num_sentences = count_sentences(&reference, self.config.sentence_delimiter);

            let matches = match RatingCell::from_cell(rating_cell).count() {
                RatingCount::HeaderRow => {
                    debug!(row, %criterion, "skipping repeated header row");
                    true
                }
                RatingCount::Count(num_ratings) => num_ratings == num_sentences,
            };

            if !matches {
                self.report_mismatch(row, &reference);
                errors.push(AnnotationError::new(row, reference.as_str()));
            }
        }

        debug!(%criterion, errors = errors.len(), "criterion checked");
        Ok(errors)
    }

    fn report_mismatch(&self, row: usize, reference: &str) {
        debug!(row, reference, "rating count does not match sentence count");
        if self.config.echo {
            println!("{} {}", row, reference);
        }
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(CheckConfig::default())
    }
}
