// lexaudit-core/src/domain/stats.rs

use serde::{Serialize, Serializer};
use std::fmt;

use crate::domain::jurisdiction::Jurisdiction;

/// Fill rate of one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldCompleteness {
    pub field_name: String,
    pub filled_count: u64,
    pub total_count: u64,
    /// Ratio in `[0, 1]`; `0.0` when there is no record at all.
    pub percentage: f64,
}

impl FieldCompleteness {
    pub fn new(field_name: impl Into<String>, filled_count: u64, total_count: u64) -> Self {
        let percentage = if total_count == 0 {
            0.0
        } else {
            filled_count as f64 / total_count as f64
        };
        Self {
            field_name: field_name.into(),
            filled_count,
            total_count,
            percentage,
        }
    }

    /// `dd.dd%`
    pub fn formatted_percentage(&self) -> String {
        format!("{:.2}%", self.percentage * 100.0)
    }
}

/// Completeness of every tracked field of one record type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeCompleteness {
    pub type_name: String,
    pub table_name: String,
    pub is_embedded: bool,
    pub total_count: u64,
    /// Sorted by field name.
    pub fields: Vec<FieldCompleteness>,
}

/// Fixed-point percentage in hundredths, rounded half-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Percentage {
    hundredths: u64,
}

impl Percentage {
    /// `round(count / total * 100, 2)`, half-up. Zero when `total == 0`.
    pub fn of(count: u64, total: u64) -> Self {
        if total == 0 {
            return Self::default();
        }
        // (2 * count * 10_000 + total) / (2 * total) == floor(x + 0.5)
        let numerator = 2 * u128::from(count) * 10_000 + u128::from(total);
        let denominator = 2 * u128::from(total);
        let hundredths = u64::try_from(numerator / denominator).unwrap_or(u64::MAX);
        Self { hundredths }
    }

    pub fn hundredths(&self) -> u64 {
        self.hundredths
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.hundredths / 100, self.hundredths % 100)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBucket {
    /// `None` for bills whose status was never set.
    pub status: Option<String>,
    pub count: u64,
    pub percentage: Percentage,
}

impl StatusBucket {
    pub fn label(&self) -> &str {
        self.status.as_deref().unwrap_or("null")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct StatusDistribution {
    pub total_count: u64,
    pub buckets: Vec<StatusBucket>,
}

impl StatusDistribution {
    pub fn bucket_sum(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Source page fetched but never turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BacklogEntry {
    pub source_url: String,
    pub jurisdiction: Jurisdiction,
}
