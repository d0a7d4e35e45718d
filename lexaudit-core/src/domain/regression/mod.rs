// lexaudit-core/src/domain/regression/mod.rs

pub mod assertion;
pub mod suites;

pub use assertion::{
    AssertionFailure, AttributeValue, BillAttribute, BillSnapshot, Check, ConsistencyRule,
    LookupKey,
};
pub use suites::suite_for;

use crate::domain::jurisdiction::Jurisdiction;

/// Ordered checks authored for one jurisdiction.
#[derive(Debug, Clone)]
pub struct RegressionSuite {
    pub jurisdiction: Jurisdiction,
    pub checks: Vec<Check>,
}

impl RegressionSuite {
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn assertion_count(&self) -> usize {
        self.checks.iter().map(Check::assertion_count).sum()
    }
}
