// lexaudit-core/src/infrastructure/config/project.rs

use anyhow::Context;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::configuration::AuditConfig;
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 2] = ["lexaudit.yaml", "lexaudit_project.yaml"];

/// Loads `lexaudit.yaml` from `project_dir`, falling back to defaults when
/// no file exists, then applies `LEXAUDIT_*` environment overrides.
#[instrument(skip(project_dir))]
pub fn load_audit_config(project_dir: &Path) -> Result<AuditConfig, InfrastructureError> {
    let mut config = match find_main_config(project_dir) {
        Some(path) => {
            info!(path = ?path, "Loading audit configuration");
            load_fragment::<AuditConfig>(&path)?
        }
        None => {
            info!(dir = ?project_dir, "No configuration file found, using defaults");
            AuditConfig::default()
        }
    };

    apply_env_overrides(&mut config);
    config.validate()?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
}

fn load_fragment<T: DeserializeOwned>(path: &Path) -> Result<T, InfrastructureError> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {:?}", path))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML config at {:?}", path))
        .map_err(Into::into)
}

fn apply_env_overrides(config: &mut AuditConfig) {
    if let Ok(val) = std::env::var("LEXAUDIT_DATABASE") {
        info!(old = ?config.database, new = ?val, "Overriding database via ENV");
        config.database = val;
    }
    if let Ok(val) = std::env::var("LEXAUDIT_EXPORT_PATH") {
        info!(old = ?config.export_path, new = ?val, "Overriding export path via ENV");
        config.export_path = val;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::jurisdiction::Jurisdiction;
    use anyhow::Result;
    use tempfile::tempdir;

    // Env overrides are process-wide; these tests only touch files.

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = load_fragment_or_default(dir.path())?;
        assert_eq!(config.database, "legislative.duckdb");
        assert_eq!(config.export_path, "export");
        assert_eq!(config.backlog_jurisdiction, Jurisdiction::Hungary);
        assert!(config.skip_types.contains(&"ColombiaOriginatorVariables".to_string()));
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("lexaudit.yaml"),
            "database: data/hu.duckdb\nbacklog-jurisdiction: SWEDEN\n",
        )?;
        let config = load_fragment_or_default(dir.path())?;
        assert_eq!(config.database, "data/hu.duckdb");
        assert_eq!(config.export_path, "export");
        assert_eq!(config.backlog_jurisdiction, Jurisdiction::Sweden);
        Ok(())
    }

    #[test]
    fn test_second_candidate_is_found() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("lexaudit_project.yaml"), "skip-types: []\n")?;
        let config = load_fragment_or_default(dir.path())?;
        assert!(config.skip_types.is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_database_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("lexaudit.yaml"), "database: \"\"\n")?;
        let config = load_fragment_or_default(dir.path())?;
        assert!(config.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_broken_yaml_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("lexaudit.yaml"), "database: [unclosed\n")?;
        let err = load_fragment_or_default(dir.path()).unwrap_err();
        assert!(matches!(err, InfrastructureError::ConfigError(_)));
        Ok(())
    }

    fn load_fragment_or_default(dir: &Path) -> Result<AuditConfig, InfrastructureError> {
        match find_main_config(dir) {
            Some(path) => load_fragment(&path),
            None => Ok(AuditConfig::default()),
        }
    }
}
