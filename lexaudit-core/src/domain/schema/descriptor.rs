// lexaudit-core/src/domain/schema/descriptor.rs

use serde::Serialize;

/// One tracked attribute of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Column for scalar fields, child collection table for multi-valued ones.
    pub storage_column: String,
    pub multi_valued: bool,
    /// Enumerable but excluded from completeness queries.
    pub skip: bool,
    /// Declared value type of a nested field. Its columns are spread by the
    /// persistence mapping, so `storage_column` is only the derived name.
    pub nested_type: Option<String>,
}

/// How the "is this field filled" count is obtained for a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStrategy {
    /// Predicate over the logical record (NOT NULL / non-empty collection).
    LogicalPredicate,
    /// NOT NULL count straight on the backing table's column.
    RawColumn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordTypeDescriptor {
    pub type_name: String,
    pub table_name: String,
    pub fields: Vec<FieldDescriptor>,
    pub is_embedded: bool,
    /// Primary key of `table_name`.
    pub key_column: String,
    /// Column of child collection tables pointing back at `key_column`.
    pub child_key: String,
}

impl RecordTypeDescriptor {
    pub fn strategy(&self) -> FillStrategy {
        if self.is_embedded {
            FillStrategy::RawColumn
        } else {
            FillStrategy::LogicalPredicate
        }
    }

    /// Fields that take part in completeness computation, declaration order.
    pub fn tracked_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.skip)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Label used in report headers.
    pub fn display_name(&self) -> &str {
        if self.is_embedded {
            &self.table_name
        } else {
            &self.type_name
        }
    }
}
