// lexaudit-core/src/ports/mod.rs

pub mod gateway;

pub use gateway::{QueryGateway, RecordLookup};
