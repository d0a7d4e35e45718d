// lexaudit-core/src/application/backlog.rs

use tracing::{info, instrument};

use crate::domain::jurisdiction::Jurisdiction;
use crate::domain::stats::BacklogEntry;
use crate::error::AuditError;
use crate::ports::gateway::QueryGateway;

/// Bill pages fetched for `jurisdiction` that no record was built from.
#[instrument(skip(gateway))]
pub async fn detect_backlog(
    gateway: &dyn QueryGateway,
    jurisdiction: Jurisdiction,
) -> Result<Vec<BacklogEntry>, AuditError> {
    let entries = gateway.unprocessed_sources(jurisdiction).await?;
    info!(count = entries.len(), "Unprocessed bill pages");
    Ok(entries)
}
