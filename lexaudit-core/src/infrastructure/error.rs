// lexaudit-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(lexaudit::infra::database::duckdb),
        help("An error occurred inside the SQL engine.")
    )]
    DuckDB(#[from] duckdb::Error),

    #[error("Unexpected aggregate result for `{query}`: {detail}")]
    #[diagnostic(
        code(lexaudit::infra::database::aggregate),
        help("Count queries must return a single non-negative integer.")
    )]
    UnexpectedAggregate { query: String, detail: String },

    #[error("DuckDB connection mutex poisoned")]
    #[diagnostic(code(lexaudit::infra::database::poisoned))]
    LockPoisoned,
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(lexaudit::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / OUTPUT ---
    #[error("JSON Serialization Error: {0}")]
    #[diagnostic(code(lexaudit::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(
        code(lexaudit::infra::config),
        help("Check lexaudit.yaml syntax (indentation, kebab-case keys).")
    )]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(lexaudit::infra::config_invalid))]
    Validation(#[from] validator::ValidationErrors),
}

// Manual implementation for shortcuts (e.g. `?` operator on duckdb calls)
impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}

impl From<anyhow::Error> for InfrastructureError {
    fn from(err: anyhow::Error) -> Self {
        InfrastructureError::ConfigError(format!("{:#}", err))
    }
}
