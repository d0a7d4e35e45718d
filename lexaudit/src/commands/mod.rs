// lexaudit/src/commands/mod.rs

pub mod catalog;
pub mod regress;
pub mod report;

use anyhow::Context;
use std::path::Path;

use lexaudit_core::domain::configuration::AuditConfig;
use lexaudit_core::infrastructure::adapters::DuckDBStore;
use lexaudit_core::infrastructure::config::load_audit_config;

pub(crate) fn load_config(project_dir: &Path) -> anyhow::Result<AuditConfig> {
    println!("⚙️  Loading configuration...");
    load_audit_config(project_dir).with_context(|| {
        format!(
            "Failed to load audit configuration from {:?}",
            project_dir
        )
    })
}

/// Opens the configured store, relative to the project directory.
pub(crate) fn open_store(project_dir: &Path, config: &AuditConfig) -> anyhow::Result<DuckDBStore> {
    let db_path = project_dir.join(&config.database);
    if !db_path.exists() {
        anyhow::bail!(
            "❌ Database not found at: {}\n👉 Check 'database' in lexaudit.yaml or LEXAUDIT_DATABASE",
            db_path.display()
        );
    }
    println!("   Store: {} 🦆", db_path.display());

    let db_path = db_path.to_string_lossy();
    DuckDBStore::open(&db_path)
        .with_context(|| format!("Failed to open DuckDB at {}", db_path))
}
