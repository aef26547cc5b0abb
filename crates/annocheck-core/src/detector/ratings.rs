//! Criterion cell classification.
//!
//! A criterion cell holds either a single integer (one rating for a
//! one-sentence text) or a comma-separated list with one rating per
//! sentence. Annotators mix half-width and full-width commas and stray
//! spaces, so list cells are normalised before counting.

use crate::criterion::Criterion;
use crate::table::CellValue;

/// The criterion cell, tagged by its stored type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingCell {
    /// A single aggregate rating
    Integer(i64),
    /// Raw per-sentence rating list, not yet normalised
    Ratings(String),
    /// Nothing recorded
    Missing,
}

/// What a rating cell says about the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingCount {
    /// The cell carries this many ratings
    Count(usize),
    /// The cell repeats a criterion header
    HeaderRow,
}

impl RatingCell {
    pub fn from_cell(cell: &CellValue) -> Self {
        match cell {
            CellValue::Int(v) => RatingCell::Integer(*v),
            CellValue::Text(s) => RatingCell::Ratings(s.clone()),
            CellValue::Empty => RatingCell::Missing,
            other => RatingCell::Ratings(other.to_string()),
        }
    }

    pub fn count(&self) -> RatingCount {
        match self {
            RatingCell::Integer(_) => RatingCount::Count(1),
            RatingCell::Missing => RatingCount::Count(0),
            RatingCell::Ratings(raw) => {
                let normalized = normalize_ratings(raw);
                if Criterion::is_criterion_name(&normalized) {
                    RatingCount::HeaderRow
                } else {
                    RatingCount::Count(normalized.split(',').count())
                }
            }
        }
    }
}

/// Trim, drop embedded spaces and turn full-width commas into `,`.
pub fn normalize_ratings(raw: &str) -> String {
    raw.trim().replace(' ', "").replace('，', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_ratings(" 3, 4，5 "), "3,4,5");
        assert_eq!(normalize_ratings("Non - redundancy"), "Non-redundancy");
    }

    #[test]
    fn test_from_cell() {
        assert_eq!(RatingCell::from_cell(&CellValue::Int(5)), RatingCell::Integer(5));
        assert_eq!(RatingCell::from_cell(&CellValue::Empty), RatingCell::Missing);
        assert_eq!(
            RatingCell::from_cell(&CellValue::Float(4.5)),
            RatingCell::Ratings("4.5".to_string())
        );
    }

    #[test]
    fn test_counts() {
        assert_eq!(RatingCell::Integer(5).count(), RatingCount::Count(1));
        assert_eq!(RatingCell::Missing.count(), RatingCount::Count(0));
        assert_eq!(
            RatingCell::Ratings("3,4，5".to_string()).count(),
            RatingCount::Count(3)
        );
        assert_eq!(
            RatingCell::Ratings("4".to_string()).count(),
            RatingCount::Count(1)
        );
    }

    #[test]
    fn test_repeated_header_detected() {
        for name in ["Informativeness", " Non-redundancy ", "Fluency"] {
            assert_eq!(
                RatingCell::Ratings(name.to_string()).count(),
                RatingCount::HeaderRow
            );
        }
    }

    #[test]
    fn test_empty_text_counts_one_piece() {
        // An empty list still splits into a single (empty) rating.
        assert_eq!(
            RatingCell::Ratings("  ".to_string()).count(),
            RatingCount::Count(1)
        );
    }
}
