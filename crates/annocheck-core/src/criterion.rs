//! Annotation criteria.
//!
//! Each criterion is rated per sentence of a reference text. Which text
//! that is depends on the criterion:
//!
//! | Criterion | Reference column |
//! |-----------|------------------|
//! | `Informativeness` | reference answer |
//! | `Non-redundancy` | summary under test |
//! | `Fluency` | summary under test |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DetectError;

/// One of the three annotation dimensions being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Criterion {
    #[serde(rename = "Informativeness")]
    Informativeness,
    #[serde(rename = "Non-redundancy")]
    NonRedundancy,
    #[serde(rename = "Fluency")]
    Fluency,
}

/// The text column a criterion's ratings are counted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// The summary being rated
    Summary,
    /// The gold reference answer
    ReferenceAnswer,
}

impl Criterion {
    /// All criteria, in report order.
    pub const ALL: [Criterion; 3] = [
        Criterion::Informativeness,
        Criterion::NonRedundancy,
        Criterion::Fluency,
    ];

    /// The literal column header, which doubles as the criterion name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Informativeness => "Informativeness",
            Criterion::NonRedundancy => "Non-redundancy",
            Criterion::Fluency => "Fluency",
        }
    }

    pub fn reference_kind(&self) -> ReferenceKind {
        match self {
            Criterion::NonRedundancy | Criterion::Fluency => ReferenceKind::Summary,
            Criterion::Informativeness => ReferenceKind::ReferenceAnswer,
        }
    }

    /// True if `text` is exactly one of the criterion names.
    pub fn is_criterion_name(text: &str) -> bool {
        Self::ALL.iter().any(|c| c.as_str() == text)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = DetectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DetectError::UnknownCriterion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_criteria() {
        assert_eq!("Informativeness".parse::<Criterion>().unwrap(), Criterion::Informativeness);
        assert_eq!("Non-redundancy".parse::<Criterion>().unwrap(), Criterion::NonRedundancy);
        assert_eq!("Fluency".parse::<Criterion>().unwrap(), Criterion::Fluency);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "fluency".parse::<Criterion>(),
            Err(DetectError::UnknownCriterion(name)) if name == "fluency"
        ));
        assert!("Coherence".parse::<Criterion>().is_err());
    }

    #[test]
    fn test_reference_kind() {
        assert_eq!(Criterion::Informativeness.reference_kind(), ReferenceKind::ReferenceAnswer);
        assert_eq!(Criterion::NonRedundancy.reference_kind(), ReferenceKind::Summary);
        assert_eq!(Criterion::Fluency.reference_kind(), ReferenceKind::Summary);
    }

    #[test]
    fn test_serde_uses_header_names() {
        let json = serde_json::to_string(&Criterion::NonRedundancy).unwrap();
        assert_eq!(json, "\"Non-redundancy\"");
    }
}
