// lexaudit-core/src/lib.rs

// 1. Documentation is not enforced yet
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts towards the persistence store (QueryGateway, RecordLookup).
pub mod ports;

// 2. Domain
// Schema catalog, query builder, statistics values, regression suites.
// Depends on NOTHING else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// DuckDB store, config files, atomic report writes.
pub mod infrastructure;

// 4. Application (Use Cases)
// Report generation and regression runs.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// use lexaudit_core::AuditError;
pub use error::AuditError;
