/// SQLite pool setup and schema initialization
pub mod connection;
/// Row types and query functions
pub mod models;
