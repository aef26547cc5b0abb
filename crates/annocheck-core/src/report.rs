//! Detection results.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::criterion::Criterion;

/// A row whose rating count disagrees with its sentence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationError {
    /// 0-based data row index (header excluded)
    pub row: usize,

    /// The reference text in effect for the row, after forward-fill
    pub reference: String,
}

impl AnnotationError {
    pub fn new(row: usize, reference: impl Into<String>) -> Self {
        Self {
            row,
            reference: reference.into(),
        }
    }

    /// 1-based row number as shown by a spreadsheet application.
    pub fn sheet_row(&self) -> usize {
        self.row + 2
    }
}

/// Error records for every criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationReport {
    /// Workbook the table was loaded from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    #[serde(rename = "Informativeness")]
    pub informativeness: Vec<AnnotationError>,

    #[serde(rename = "Non-redundancy")]
    pub non_redundancy: Vec<AnnotationError>,

    #[serde(rename = "Fluency")]
    pub fluency: Vec<AnnotationError>,

    pub checked_at: DateTime<Utc>,
}

impl AnnotationReport {
    pub fn new() -> Self {
        Self {
            source: None,
            informativeness: Vec::new(),
            non_redundancy: Vec::new(),
            fluency: Vec::new(),
            checked_at: Utc::now(),
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn get(&self, criterion: Criterion) -> &[AnnotationError] {
        match criterion {
            Criterion::Informativeness => &self.informativeness,
            Criterion::NonRedundancy => &self.non_redundancy,
            Criterion::Fluency => &self.fluency,
        }
    }

    pub fn set(&mut self, criterion: Criterion, errors: Vec<AnnotationError>) {
        let slot = match criterion {
            Criterion::Informativeness => &mut self.informativeness,
            Criterion::NonRedundancy => &mut self.non_redundancy,
            Criterion::Fluency => &mut self.fluency,
        };
        *slot = errors;
    }

    /// Per-criterion error lists in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &[AnnotationError])> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, errors)| errors.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

impl Default for AnnotationReport {
    fn default() -> Self {
        Self::new()
    }
}
