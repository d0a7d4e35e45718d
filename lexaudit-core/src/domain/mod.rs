// lexaudit-core/src/domain/mod.rs

pub mod configuration;
pub mod error;
pub mod jurisdiction;
pub mod query;
pub mod regression;
pub mod schema;
pub mod stats;

// Re-exports to keep imports short elsewhere
pub use error::DomainError;
pub use jurisdiction::Jurisdiction;
