// lexaudit-core/src/ports/gateway.rs

// What the audit needs from the persistence store, without knowing which
// engine answers. Every method is a read; nothing here writes.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::jurisdiction::Jurisdiction;
use crate::domain::regression::{BillSnapshot, ConsistencyRule, LookupKey};
use crate::domain::schema::{FieldDescriptor, RecordTypeDescriptor};
use crate::domain::stats::BacklogEntry;
use crate::error::AuditError;

#[async_trait]
pub trait QueryGateway: Send + Sync {
    /// Records of a logical type whose field is non-null (scalar) or
    /// non-empty (collection).
    async fn count_where_field_present(
        &self,
        record_type: &RecordTypeDescriptor,
        field: &FieldDescriptor,
    ) -> Result<u64, AuditError>;

    /// Rows of `table` where `column` is not null.
    async fn count_where_column_not_null(
        &self,
        table: &str,
        column: &str,
    ) -> Result<u64, AuditError>;

    async fn total_count(&self, table: &str) -> Result<u64, AuditError>;

    /// `(group value, count)` pairs, in the engine's natural order.
    async fn group_count(
        &self,
        table: &str,
        column: &str,
    ) -> Result<Vec<(Option<String>, u64)>, AuditError>;

    /// Bill pages fetched for `jurisdiction` with no record built from them.
    async fn unprocessed_sources(
        &self,
        jurisdiction: Jurisdiction,
    ) -> Result<Vec<BacklogEntry>, AuditError>;
}

#[async_trait]
pub trait RecordLookup: Send + Sync {
    async fn find_bill(
        &self,
        jurisdiction: Jurisdiction,
        key: &LookupKey,
    ) -> Result<Option<BillSnapshot>, AuditError>;

    async fn exists_with_date_passing(
        &self,
        jurisdiction: Jurisdiction,
        bill_id: &str,
        date_passing: NaiveDate,
    ) -> Result<bool, AuditError>;

    async fn count_violations(
        &self,
        jurisdiction: Jurisdiction,
        rule: ConsistencyRule,
    ) -> Result<u64, AuditError>;
}
