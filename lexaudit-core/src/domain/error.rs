// lexaudit-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Cannot resolve storage column for field '{field}' of '{record_type}': {reason}")]
    #[diagnostic(
        code(lexaudit::domain::unresolvable_column),
        help("Check the column override declared for this field in the schema catalog.")
    )]
    UnresolvableColumn {
        record_type: String,
        field: String,
        reason: String,
    },

    #[error("Record type '{0}' is not declared in the schema catalog")]
    #[diagnostic(code(lexaudit::domain::unknown_record_type))]
    UnknownRecordType(String),

    #[error("Unknown jurisdiction: {0}")]
    #[diagnostic(
        code(lexaudit::domain::jurisdiction),
        help("Use a country name (HUNGARY) or its code (HU).")
    )]
    UnknownJurisdiction(String),
}
