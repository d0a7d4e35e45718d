// lexaudit-core/src/domain/schema/mod.rs

pub mod catalog;
pub mod descriptor;
pub mod naming;

pub use catalog::{BILL_TABLE, RecordTypeBuilder, SchemaCatalog};
pub use descriptor::{FieldDescriptor, FillStrategy, RecordTypeDescriptor};
pub use naming::{snake_case, table_name};
