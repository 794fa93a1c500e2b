//! Storage layer
//!
//! Two `EmployeeStore` implementations: SQLite (embedded, durable) and an
//! in-memory DashMap store used by tests.

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::MemoryStore;
