// lexaudit-core/src/application/completeness.rs

use tracing::{debug, instrument, warn};

use crate::domain::schema::{FillStrategy, RecordTypeDescriptor};
use crate::domain::stats::{FieldCompleteness, TypeCompleteness};
use crate::error::AuditError;
use crate::ports::gateway::QueryGateway;

/// Fill rate of every tracked field of `record_type`, sorted by field name.
///
/// Skipped fields issue no query. The denominator is the row count of the
/// type's own table, for top-level and embedded types alike. Counts are
/// reported as read, even when drift between queries breaks `filled <= total`.
#[instrument(skip_all, fields(record_type = %record_type.type_name))]
pub async fn compute_completeness(
    gateway: &dyn QueryGateway,
    record_type: &RecordTypeDescriptor,
) -> Result<TypeCompleteness, AuditError> {
    let total = gateway.total_count(&record_type.table_name).await?;
    let strategy = record_type.strategy();
    debug!(total, ?strategy, "Computing completeness");

    let mut fields = Vec::new();
    for field in record_type.tracked_fields() {
        let filled = match strategy {
            FillStrategy::LogicalPredicate => {
                gateway.count_where_field_present(record_type, field).await?
            }
            FillStrategy::RawColumn => {
                gateway
                    .count_where_column_not_null(&record_type.table_name, &field.storage_column)
                    .await?
            }
        };

        if filled > total {
            // Counts are sequential round trips; a concurrent writer can land between them
            warn!(
                field = %field.name,
                filled,
                total,
                "Filled count exceeds the record total, store changed mid-run?"
            );
        }

        fields.push(FieldCompleteness::new(field.name.clone(), filled, total));
    }

    fields.sort_by(|a, b| a.field_name.cmp(&b.field_name));

    Ok(TypeCompleteness {
        type_name: record_type.type_name.clone(),
        table_name: record_type.table_name.clone(),
        is_embedded: record_type.is_embedded,
        total_count: total,
        fields,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::jurisdiction::Jurisdiction;
    use crate::domain::schema::{FieldDescriptor, RecordTypeBuilder, SchemaCatalog};
    use crate::domain::stats::BacklogEntry;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // --- MOCK GATEWAY ---
    #[derive(Default)]
    pub(crate) struct MockGateway {
        pub totals: HashMap<String, u64>,
        /// Keyed by storage column; missing entries count as zero.
        pub filled: HashMap<String, u64>,
        pub groups: Vec<(Option<String>, u64)>,
        pub backlog: Vec<String>,
        pub queried: Mutex<Vec<String>>,
    }

    impl MockGateway {
        fn record(&self, what: String) {
            self.queried.lock().unwrap().push(what);
        }
    }

    #[async_trait]
    impl QueryGateway for MockGateway {
        async fn count_where_field_present(
            &self,
            _record_type: &RecordTypeDescriptor,
            field: &FieldDescriptor,
        ) -> Result<u64, AuditError> {
            self.record(format!("present:{}", field.storage_column));
            Ok(*self.filled.get(&field.storage_column).unwrap_or(&0))
        }

        async fn count_where_column_not_null(
            &self,
            table: &str,
            column: &str,
        ) -> Result<u64, AuditError> {
            self.record(format!("not_null:{}.{}", table, column));
            Ok(*self.filled.get(column).unwrap_or(&0))
        }

        async fn total_count(&self, table: &str) -> Result<u64, AuditError> {
            self.record(format!("total:{}", table));
            Ok(*self.totals.get(table).unwrap_or(&0))
        }

        async fn group_count(
            &self,
            _table: &str,
            _column: &str,
        ) -> Result<Vec<(Option<String>, u64)>, AuditError> {
            Ok(self.groups.clone())
        }

        async fn unprocessed_sources(
            &self,
            jurisdiction: Jurisdiction,
        ) -> Result<Vec<BacklogEntry>, AuditError> {
            Ok(self
                .backlog
                .iter()
                .map(|url| BacklogEntry {
                    source_url: url.clone(),
                    jurisdiction,
                })
                .collect())
        }
    }

    fn small_type(skip: &[String]) -> RecordTypeDescriptor {
        RecordTypeBuilder::entity("Bill", "bills", skip)
            .scalar("title")
            .scalar("billStatus")
            .collection("originators", "originators")
            .nested("extras", "ExtraVariables")
            .build()
    }

    #[tokio::test]
    async fn test_sorted_by_field_name_with_percentages() -> anyhow::Result<()> {
        let gateway = MockGateway {
            totals: HashMap::from([("bills".to_string(), 4)]),
            filled: HashMap::from([
                ("title".to_string(), 4),
                ("bill_status".to_string(), 3),
                ("originators".to_string(), 1),
            ]),
            ..Default::default()
        };
        let rt = small_type(&["ExtraVariables".to_string()]);

        let result = compute_completeness(&gateway, &rt).await?;

        let names: Vec<&str> = result.fields.iter().map(|f| f.field_name.as_str()).collect();
        assert_eq!(names, ["billStatus", "originators", "title"]);
        let pcts: Vec<String> = result.fields.iter().map(|f| f.formatted_percentage()).collect();
        assert_eq!(pcts, ["75.00%", "25.00%", "100.00%"]);
        assert_eq!(result.total_count, 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_skipped_fields_issue_no_query() -> anyhow::Result<()> {
        let gateway = MockGateway::default();
        let rt = small_type(&["ExtraVariables".to_string()]);

        let result = compute_completeness(&gateway, &rt).await?;

        assert!(result.fields.iter().all(|f| f.field_name != "extras"));
        let queried = gateway.queried.lock().unwrap();
        assert!(queried.iter().all(|q| !q.contains("extras")));
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_table_gives_zero_percentages() -> anyhow::Result<()> {
        let gateway = MockGateway::default();
        let rt = small_type(&[]);

        let result = compute_completeness(&gateway, &rt).await?;

        assert_eq!(result.total_count, 0);
        assert_eq!(result.fields.len(), 4);
        assert!(result.fields.iter().all(|f| f.percentage == 0.0));
        Ok(())
    }

    #[tokio::test]
    async fn test_embedded_types_use_raw_columns() -> anyhow::Result<()> {
        let gateway = MockGateway {
            totals: HashMap::from([("committees".to_string(), 3)]),
            filled: HashMap::from([("committee_role".to_string(), 2)]),
            ..Default::default()
        };
        let catalog = SchemaCatalog::default();
        let committee = catalog.record_type("Committee")?;

        let result = compute_completeness(&gateway, committee).await?;

        assert!(result.is_embedded);
        let role = result.fields.iter().find(|f| f.field_name == "role").unwrap();
        assert_eq!(role.formatted_percentage(), "66.67%");
        let queried = gateway.queried.lock().unwrap();
        assert!(queried.contains(&"not_null:committees.committee_role".to_string()));
        assert!(queried.iter().all(|q| !q.starts_with("present:")));
        Ok(())
    }

    #[tokio::test]
    async fn test_drift_above_total_is_reported_as_read() -> anyhow::Result<()> {
        let gateway = MockGateway {
            totals: HashMap::from([("bills".to_string(), 2)]),
            filled: HashMap::from([("title".to_string(), 3)]),
            ..Default::default()
        };
        let rt = small_type(&[]);

        let result = compute_completeness(&gateway, &rt).await?;

        let title = result.fields.iter().find(|f| f.field_name == "title").unwrap();
        assert_eq!(title.filled_count, 3);
        assert_eq!(title.total_count, 2);
        assert_eq!(title.formatted_percentage(), "150.00%");
        // the remaining fields were still computed
        assert_eq!(result.fields.len(), 4);
        Ok(())
    }
}
