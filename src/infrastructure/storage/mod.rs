//! Storage bootstrap and schema migrations

pub mod bootstrap;
pub mod migrations;

pub use bootstrap::ensure_database_exists;
pub use migrations::PostgresMigrator;
