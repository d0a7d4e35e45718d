// lexaudit-core/src/domain/configuration.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::jurisdiction::Jurisdiction;
use crate::domain::schema::SchemaCatalog;

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
#[serde(rename_all = "kebab-case")]
pub struct AuditConfig {
    /// DuckDB file holding the collected dataset.
    #[validate(length(min = 1, message = "Database path cannot be empty"))]
    #[serde(default = "default_database")]
    pub database: String,

    /// Directory receiving report.txt (and report.json).
    #[validate(length(min = 1, message = "Export path cannot be empty"))]
    #[serde(default = "default_export_path")]
    pub export_path: String,

    #[serde(default = "default_backlog_jurisdiction")]
    pub backlog_jurisdiction: Jurisdiction,

    /// Nested types excluded from completeness queries.
    #[serde(default = "SchemaCatalog::default_skip_types")]
    pub skip_types: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            export_path: default_export_path(),
            backlog_jurisdiction: default_backlog_jurisdiction(),
            skip_types: SchemaCatalog::default_skip_types(),
        }
    }
}

impl AuditConfig {
    pub fn catalog(&self) -> SchemaCatalog {
        SchemaCatalog::legislative(&self.skip_types)
    }
}

fn default_database() -> String {
    "legislative.duckdb".to_string()
}
fn default_export_path() -> String {
    "export".to_string()
}
fn default_backlog_jurisdiction() -> Jurisdiction {
    Jurisdiction::Hungary
}
