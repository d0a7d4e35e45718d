pub mod project;

pub use project::load_audit_config;
