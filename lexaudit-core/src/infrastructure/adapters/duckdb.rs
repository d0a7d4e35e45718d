// lexaudit-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use duckdb::{AccessMode, Config, Connection, ToSql, params};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tracing::{debug, error, instrument};

use crate::domain::jurisdiction::Jurisdiction;
use crate::domain::query::CountQuery;
use crate::domain::regression::{BillSnapshot, ConsistencyRule, LookupKey};
use crate::domain::schema::{FieldDescriptor, RecordTypeDescriptor};
use crate::domain::stats::BacklogEntry;
use crate::error::AuditError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::gateway::{QueryGateway, RecordLookup};

const UNPROCESSED_BILL_PAGES: &str = "SELECT s.page_url FROM page_source s \
     LEFT JOIN bill_main_table r ON s.page_url = r.bill_page_url \
     WHERE s.country = ? AND s.page_type = 'BILL' AND r.id IS NULL \
     ORDER BY s.id";

const DATE_PASSING_EXISTS: &str = "SELECT COUNT(*) FROM bill_main_table \
     WHERE country = ? AND bill_id = ? AND date_passing = CAST(? AS DATE)";

const BILL_SNAPSHOT_COLUMNS: &str = "SELECT b.bill_id, b.bill_page_url, b.bill_status, \
     CAST(b.stages_count AS BIGINT), CAST(b.committee_count AS BIGINT), \
     CAST(b.committee_hearing_count AS BIGINT), CAST(b.final_vote_for AS BIGINT), \
     CAST(b.final_vote_against AS BIGINT), CAST(b.final_vote_abst AS BIGINT), \
     CAST(b.date_introduction AS VARCHAR), CAST(b.date_passing AS VARCHAR), \
     b.original_law, CAST(b.modified_laws_count AS BIGINT), \
     CAST(b.affecting_laws_count AS BIGINT), CAST(b.affecting_laws_first_date AS VARCHAR), \
     (SELECT COUNT(*) FROM originators o WHERE o.record_id = b.id) \
     FROM bill_main_table b WHERE b.country = ?";

fn consistency_sql(rule: ConsistencyRule) -> &'static str {
    match rule {
        ConsistencyRule::AmendingLawsModifiedByOthers => {
            "SELECT COUNT(*) FROM bill_main_table WHERE country = ? \
             AND original_law = false \
             AND (affecting_laws_count > 0 OR affecting_laws_first_date IS NOT NULL)"
        }
        ConsistencyRule::OriginalLawsModifyingOthers => {
            "SELECT COUNT(*) FROM bill_main_table WHERE country = ? \
             AND original_law = true AND modified_laws_count > 0"
        }
        ConsistencyRule::RejectedBillsWithLawLinks => {
            "SELECT COUNT(*) FROM bill_main_table WHERE country = ? \
             AND bill_status = 'REJECT' \
             AND (modified_laws_count > 0 OR affecting_laws_count > 0)"
        }
        ConsistencyRule::PassedAmendingBillsNotModifyingOneLaw => {
            "SELECT COUNT(*) FROM bill_main_table WHERE country = ? \
             AND bill_status = 'PASS' AND original_law = false \
             AND modified_laws_count <> 1"
        }
    }
}

fn to_count(query: &str, value: i64) -> Result<u64, AuditError> {
    u64::try_from(value).map_err(|_| unexpected(query, format!("negative count {}", value)))
}

fn unexpected(query: &str, detail: String) -> AuditError {
    AuditError::Infrastructure(InfrastructureError::Database(
        DatabaseError::UnexpectedAggregate {
            query: query.to_string(),
            detail,
        },
    ))
}

fn parse_date(query: &str, raw: Option<String>) -> Result<Option<NaiveDate>, AuditError> {
    raw.map(|s| {
        NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|e| unexpected(query, format!("bad date '{}': {}", s, e)))
    })
    .transpose()
}

pub struct DuckDBStore {
    conn: Arc<Mutex<Connection>>,
}

impl DuckDBStore {
    /// Opens the dataset. Audit runs only read, so files are opened read-only.
    pub fn open(db_path: &str) -> Result<Self, InfrastructureError> {
        let conn = if db_path == ":memory:" {
            Connection::open_in_memory_with_flags(Config::default())?
        } else {
            let config = Config::default().access_mode(AccessMode::ReadOnly)?;
            Connection::open_with_flags(db_path, config)?
        };
        Ok(Self::from_connection(conn))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, AuditError> {
        self.conn
            .lock()
            .map_err(|_| InfrastructureError::Database(DatabaseError::LockPoisoned).into())
    }

    /// Single `COUNT(*)`-shaped round trip, timed.
    #[instrument(skip(self, params))]
    fn scalar_count(&self, sql: &str, params: &[&dyn ToSql]) -> Result<u64, AuditError> {
        let start = Instant::now();
        debug!("⚡ Executing count");

        let conn = self.lock()?;
        let result = conn.query_row(sql, params, |row| row.get::<_, i64>(0));

        match result {
            Ok(value) => {
                debug!("✅ Count finished in {:.2?}", start.elapsed());
                to_count(sql, value)
            }
            Err(e) => {
                error!("❌ Count failed after {:.2?}: {}", start.elapsed(), e);
                Err(e.into())
            }
        }
    }

    fn execute_count(&self, query: &CountQuery) -> Result<u64, AuditError> {
        self.scalar_count(&query.to_sql(), &[])
    }
}

#[async_trait]
impl QueryGateway for DuckDBStore {
    async fn count_where_field_present(
        &self,
        record_type: &RecordTypeDescriptor,
        field: &FieldDescriptor,
    ) -> Result<u64, AuditError> {
        let query = CountQuery::field_present(record_type, field)?;
        self.execute_count(&query)
    }

    async fn count_where_column_not_null(
        &self,
        table: &str,
        column: &str,
    ) -> Result<u64, AuditError> {
        let query = CountQuery::column_not_null(table, column)?;
        self.execute_count(&query)
    }

    async fn total_count(&self, table: &str) -> Result<u64, AuditError> {
        self.execute_count(&CountQuery::total(table))
    }

    async fn group_count(
        &self,
        table: &str,
        column: &str,
    ) -> Result<Vec<(Option<String>, u64)>, AuditError> {
        let sql = CountQuery::group_by(table, column).to_sql();
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, Option<String>>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut groups = Vec::new();
        for row in rows {
            let (value, count) = row?;
            groups.push((value, to_count(&sql, count)?));
        }
        Ok(groups)
    }

    async fn unprocessed_sources(
        &self,
        jurisdiction: Jurisdiction,
    ) -> Result<Vec<BacklogEntry>, AuditError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(UNPROCESSED_BILL_PAGES)?;
        let rows = stmt.query_map(params![jurisdiction.as_str()], |row| {
            row.get::<_, String>(0)
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(BacklogEntry {
                source_url: row?,
                jurisdiction,
            });
        }
        Ok(entries)
    }
}

#[async_trait]
impl RecordLookup for DuckDBStore {
    async fn find_bill(
        &self,
        jurisdiction: Jurisdiction,
        key: &LookupKey,
    ) -> Result<Option<BillSnapshot>, AuditError> {
        let (column, value) = match key {
            LookupKey::BillId(id) => ("bill_id", id.as_str()),
            LookupKey::BillPageUrl(url) => ("bill_page_url", url.as_str()),
        };
        let sql = format!(
            "{} AND b.{} = ? ORDER BY b.id LIMIT 1",
            BILL_SNAPSHOT_COLUMNS, column
        );

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query(params![jurisdiction.as_str(), value])?;

        let Some(row) = rows.next()? else {
            return Ok(None);
        };

        let snapshot = BillSnapshot {
            bill_id: row.get(0)?,
            bill_page_url: row.get(1)?,
            bill_status: row.get(2)?,
            stages_count: row.get(3)?,
            committee_count: row.get(4)?,
            committee_hearing_count: row.get(5)?,
            final_vote_for: row.get(6)?,
            final_vote_against: row.get(7)?,
            final_vote_abst: row.get(8)?,
            date_introduction: parse_date(&sql, row.get(9)?)?,
            date_passing: parse_date(&sql, row.get(10)?)?,
            original_law: row.get(11)?,
            modified_laws_count: row.get(12)?,
            affecting_laws_count: row.get(13)?,
            affecting_laws_first_date: parse_date(&sql, row.get(14)?)?,
            originators_count: row.get(15)?,
        };
        Ok(Some(snapshot))
    }

    async fn exists_with_date_passing(
        &self,
        jurisdiction: Jurisdiction,
        bill_id: &str,
        date_passing: NaiveDate,
    ) -> Result<bool, AuditError> {
        let date = date_passing.format("%Y-%m-%d").to_string();
        let found = self.scalar_count(
            DATE_PASSING_EXISTS,
            params![jurisdiction.as_str(), bill_id, date],
        )?;
        Ok(found > 0)
    }

    async fn count_violations(
        &self,
        jurisdiction: Jurisdiction,
        rule: ConsistencyRule,
    ) -> Result<u64, AuditError> {
        self.scalar_count(consistency_sql(rule), params![jurisdiction.as_str()])
    }
}
