// lexaudit-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    // --- DOMAIN ERRORS (catalog configuration, jurisdictions) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (store, IO, config) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        AuditError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<duckdb::Error> for AuditError {
    fn from(err: duckdb::Error) -> Self {
        AuditError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(err)))
    }
}
