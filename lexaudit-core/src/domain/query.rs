// lexaudit-core/src/domain/query.rs
//
// Structured count queries. Identifiers are always rendered quoted; values
// never appear in the SQL text.

use sqlparser::ast::Ident;
use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::schema::naming::is_plain_identifier;
use crate::domain::schema::{FieldDescriptor, RecordTypeDescriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    NotNull {
        column: String,
    },
    /// At least one row of `collection_table` points at the record.
    NotEmpty {
        collection_table: String,
        child_key: String,
        key_column: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountQuery {
    Total {
        table: String,
    },
    Filled {
        table: String,
        predicate: Predicate,
    },
    GroupBy {
        table: String,
        column: String,
    },
}

fn quoted(ident: &str) -> String {
    Ident::with_quote('"', ident).to_string()
}

fn checked(record_type: &str, field: &str, ident: &str) -> Result<String, DomainError> {
    if is_plain_identifier(ident) {
        Ok(ident.to_string())
    } else {
        Err(DomainError::UnresolvableColumn {
            record_type: record_type.to_string(),
            field: field.to_string(),
            reason: format!("'{}' is not a valid identifier", ident),
        })
    }
}

impl CountQuery {
    pub fn total(table: &str) -> Self {
        Self::Total {
            table: table.to_string(),
        }
    }

    pub fn group_by(table: &str, column: &str) -> Self {
        Self::GroupBy {
            table: table.to_string(),
            column: column.to_string(),
        }
    }

    /// Logical strategy: the predicate follows the field's shape.
    pub fn field_present(
        record_type: &RecordTypeDescriptor,
        field: &FieldDescriptor,
    ) -> Result<Self, DomainError> {
        let rt = record_type.type_name.as_str();
        let table = checked(rt, &field.name, &record_type.table_name)?;
        let predicate = if field.multi_valued {
            Predicate::NotEmpty {
                collection_table: checked(rt, &field.name, &field.storage_column)?,
                child_key: checked(rt, &field.name, &record_type.child_key)?,
                key_column: checked(rt, &field.name, &record_type.key_column)?,
            }
        } else {
            Predicate::NotNull {
                column: checked(rt, &field.name, &field.storage_column)?,
            }
        };
        Ok(Self::Filled { table, predicate })
    }

    /// Raw-column strategy for tables not addressed as logical records.
    pub fn column_not_null(table: &str, column: &str) -> Result<Self, DomainError> {
        Ok(Self::Filled {
            table: checked(table, column, table)?,
            predicate: Predicate::NotNull {
                column: checked(table, column, column)?,
            },
        })
    }

    pub fn to_sql(&self) -> String {
        match self {
            Self::Total { table } => format!("SELECT COUNT(*) FROM {}", quoted(table)),
            Self::Filled {
                table,
                predicate: Predicate::NotNull { column },
            } => format!(
                "SELECT COUNT(*) FROM {} AS r WHERE r.{} IS NOT NULL",
                quoted(table),
                quoted(column)
            ),
            Self::Filled {
                table,
                predicate:
                    Predicate::NotEmpty {
                        collection_table,
                        child_key,
                        key_column,
                    },
            } => format!(
                "SELECT COUNT(*) FROM {} AS r WHERE EXISTS (SELECT 1 FROM {} AS c WHERE c.{} = r.{})",
                quoted(table),
                quoted(collection_table),
                quoted(child_key),
                quoted(key_column)
            ),
            Self::GroupBy { table, column } => format!(
                "SELECT CAST({col} AS VARCHAR), COUNT(*) FROM {} GROUP BY {col}",
                quoted(table),
                col = quoted(column)
            ),
        }
    }
}

impl fmt::Display for CountQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
