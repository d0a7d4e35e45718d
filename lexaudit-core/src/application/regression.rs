// lexaudit-core/src/application/regression.rs

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::domain::jurisdiction::Jurisdiction;
use crate::domain::regression::{AssertionFailure, Check, RegressionSuite};
use crate::error::AuditError;
use crate::ports::gateway::RecordLookup;

/// Outcome of one jurisdiction's suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    pub jurisdiction: Jurisdiction,
    pub total_assertions: usize,
    /// Assertions that held before the run stopped.
    pub passed: usize,
    pub failure: Option<AssertionFailure>,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Nothing was authored for the jurisdiction.
    pub fn is_vacuous(&self) -> bool {
        self.total_assertions == 0
    }
}

/// Runs the checks in order and stops at the first mismatch.
///
/// Store errors abort the run as errors; only value mismatches and
/// missing records count as failures.
#[instrument(skip_all, fields(jurisdiction = %suite.jurisdiction))]
pub async fn run_suite(
    lookup: &dyn RecordLookup,
    suite: &RegressionSuite,
) -> Result<SuiteReport, AuditError> {
    let mut report = SuiteReport {
        jurisdiction: suite.jurisdiction,
        total_assertions: suite.assertion_count(),
        passed: 0,
        failure: None,
    };

    if suite.is_empty() {
        info!("No regression checks authored, passing vacuously");
        return Ok(report);
    }

    println!(
        "🧪 Running {} regression assertions for {}",
        report.total_assertions, suite.jurisdiction
    );

    for check in &suite.checks {
        match run_check(lookup, suite.jurisdiction, check, &mut report.passed).await? {
            None => {}
            Some(failure) => {
                warn!(%failure, "Regression check failed");
                println!("   ❌ FAIL: {}", failure);
                report.failure = Some(failure);
                return Ok(report);
            }
        }
    }

    Ok(report)
}

async fn run_check(
    lookup: &dyn RecordLookup,
    jurisdiction: Jurisdiction,
    check: &Check,
    passed: &mut usize,
) -> Result<Option<AssertionFailure>, AuditError> {
    match check {
        Check::DatePassing { bill_id, date } => {
            if lookup
                .exists_with_date_passing(jurisdiction, bill_id, *date)
                .await?
            {
                *passed += 1;
                println!("   ✅ PASS: {} passed on {}", bill_id, date);
                Ok(None)
            } else {
                Ok(Some(AssertionFailure {
                    subject: bill_id.clone(),
                    attribute: "datePassing".to_string(),
                    expected: date.format("%Y-%m-%d").to_string(),
                    actual: "no matching record".to_string(),
                }))
            }
        }

        Check::Record { key, expectations } => {
            let Some(bill) = lookup.find_bill(jurisdiction, key).await? else {
                return Ok(Some(AssertionFailure {
                    subject: key.to_string(),
                    attribute: "record".to_string(),
                    expected: "present".to_string(),
                    actual: "missing".to_string(),
                }));
            };

            if expectations.is_empty() {
                *passed += 1;
            }
            for (attribute, expected) in expectations {
                let actual = attribute.read(&bill);
                if &actual != expected {
                    return Ok(Some(AssertionFailure {
                        subject: key.to_string(),
                        attribute: attribute.name().to_string(),
                        expected: expected.to_string(),
                        actual: actual.to_string(),
                    }));
                }
                *passed += 1;
            }
            println!("   ✅ PASS: {} ({} attributes)", key, expectations.len());
            Ok(None)
        }

        Check::Consistency(rule) => {
            let violations = lookup.count_violations(jurisdiction, *rule).await?;
            if violations == 0 {
                *passed += 1;
                println!("   ✅ PASS: {}", rule.description());
                Ok(None)
            } else {
                Ok(Some(AssertionFailure {
                    subject: rule.description().to_string(),
                    attribute: "violations".to_string(),
                    expected: "0".to_string(),
                    actual: violations.to_string(),
                }))
            }
        }
    }
}
