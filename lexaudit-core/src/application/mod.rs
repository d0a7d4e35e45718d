// lexaudit-core/src/application/mod.rs

pub mod backlog;
pub mod completeness;
pub mod distribution;
pub mod regression;
pub mod report;

// --- RE-EXPORTS (FACADE PATTERN) ---
// The CLI only needs `use lexaudit_core::application::{generate_report, run_suite, ...}`.

pub use backlog::detect_backlog;
pub use completeness::compute_completeness;
pub use distribution::analyze_status_distribution;
pub use regression::{SuiteReport, run_suite};
pub use report::{DatasetReport, ReportBuilder, ReportOptions, generate_report};
