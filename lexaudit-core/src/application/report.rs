// lexaudit-core/src/application/report.rs

use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::application::backlog::detect_backlog;
use crate::application::completeness::compute_completeness;
use crate::application::distribution::analyze_status_distribution;
use crate::domain::jurisdiction::Jurisdiction;
use crate::domain::schema::SchemaCatalog;
use crate::domain::stats::{BacklogEntry, StatusDistribution, TypeCompleteness};
use crate::error::AuditError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;
use crate::ports::gateway::QueryGateway;

pub const REPORT_FILE: &str = "report.txt";
pub const REPORT_JSON_FILE: &str = "report.json";

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub export_dir: PathBuf,
    pub backlog_jurisdiction: Jurisdiction,
    pub write_json: bool,
}

/// Everything a report run found, in section order.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub backlog_jurisdiction: Jurisdiction,
    pub backlog: Vec<BacklogEntry>,
    pub status_distribution: StatusDistribution,
    pub completeness: Vec<TypeCompleteness>,
}

/// Append-only report text. Owned by one run and flushed once.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    text: String,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backlog_section(&mut self, entries: &[BacklogEntry]) -> &mut Self {
        self.line("Checking for unprocessed page sources...");
        if entries.is_empty() {
            self.line("Found none");
        } else {
            self.line(&format!("Found {} unprocessed bill pages:", entries.len()));
            for entry in entries {
                self.line(&format!("\t - {}", entry.source_url));
            }
        }
        self.blank()
    }

    pub fn distribution_section(&mut self, distribution: &StatusDistribution) -> &mut Self {
        self.line("Bill status distribution:");
        for bucket in &distribution.buckets {
            self.line(&format!(
                " - {}: {} ({}%)",
                bucket.label(),
                bucket.count,
                bucket.percentage
            ));
        }
        self.blank()
    }

    pub fn statistics_banner(&mut self) -> &mut Self {
        self.line("Collecting statistics...");
        self.blank()
    }

    pub fn completeness_section(&mut self, stats: &TypeCompleteness) -> &mut Self {
        let label = if stats.is_embedded {
            self.line(&format!(
                "Found {} records in table {}",
                stats.total_count, stats.table_name
            ));
            &stats.table_name
        } else {
            self.line(&format!(
                "Found {} records for entity {}",
                stats.total_count, stats.type_name
            ));
            &stats.type_name
        };

        self.line(&format!("Percentages of variables filled for '{}':", label));
        for field in &stats.fields {
            self.line(&format!(
                "{}: {}",
                field.field_name,
                field.formatted_percentage()
            ));
        }
        self.blank()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn finish(self) -> String {
        self.text
    }

    fn line(&mut self, line: &str) -> &mut Self {
        self.text.push_str(line);
        self.text.push('\n');
        self
    }

    fn blank(&mut self) -> &mut Self {
        self.text.push('\n');
        self
    }
}

/// Runs every section against the store and writes `report.txt` (and
/// `report.json` when asked) into the export directory.
///
/// The catalog is validated before the first query; nothing is written
/// unless every section succeeded.
#[instrument(skip(gateway, catalog))]
pub async fn generate_report(
    gateway: &dyn QueryGateway,
    catalog: &SchemaCatalog,
    options: &ReportOptions,
) -> Result<DatasetReport, AuditError> {
    catalog.validate()?;

    let mut builder = ReportBuilder::new();

    let backlog = detect_backlog(gateway, options.backlog_jurisdiction).await?;
    builder.backlog_section(&backlog);

    let status_distribution = analyze_status_distribution(gateway).await?;
    builder.distribution_section(&status_distribution);

    builder.statistics_banner();
    let mut completeness = Vec::with_capacity(catalog.record_types().len());
    for record_type in catalog.record_types() {
        let stats = compute_completeness(gateway, record_type).await?;
        info!(
            record_type = %stats.type_name,
            total = stats.total_count,
            "Completeness computed"
        );
        builder.completeness_section(&stats);
        completeness.push(stats);
    }

    let report = DatasetReport {
        backlog_jurisdiction: options.backlog_jurisdiction,
        backlog,
        status_distribution,
        completeness,
    };

    let report_path = options.export_dir.join(REPORT_FILE);
    atomic_write(&report_path, builder.finish())?;
    info!(path = ?report_path, "Report written");

    if options.write_json {
        let json = serde_json::to_string_pretty(&report).map_err(InfrastructureError::from)?;
        let json_path = options.export_dir.join(REPORT_JSON_FILE);
        atomic_write(&json_path, json)?;
        info!(path = ?json_path, "JSON report written");
    }

    Ok(report)
}
