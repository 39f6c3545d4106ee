//! Document category labels
//!
//! The category set is closed: the classifier either returns one of the
//! known labels or the `Uncategorized` sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document category assigned to a segment after classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    MedicalRecord,
    PoliceReport,
    EarningsEvidence,
    MedicalBill,
    PropertyDamageEvidence,

    /// Sentinel for failed or unrecognized classification
    Uncategorized,
}

impl Category {
    /// All real categories, excluding the `Uncategorized` sentinel.
    /// Order matches the classifier prompt.
    pub const ALL: &'static [Category] = &[
        Category::MedicalRecord,
        Category::PoliceReport,
        Category::EarningsEvidence,
        Category::MedicalBill,
        Category::PropertyDamageEvidence,
    ];

    /// The label as it appears in prompts and output filenames
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MedicalRecord => "MedicalRecord",
            Category::PoliceReport => "PoliceReport",
            Category::EarningsEvidence => "EarningsEvidence",
            Category::MedicalBill => "MedicalBill",
            Category::PropertyDamageEvidence => "PropertyDamageEvidence",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    /// Parse a label from the closed set. `Uncategorized` is a result of
    /// classification, not a valid model response, so it does not parse.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}
