//! Employee Directory Core Library
//!
//! Domain types, error type, and the storage port for the employee
//! directory service.

pub mod error;
pub mod ports;
pub mod types;

pub use error::{EmployeeError, Result};
pub use ports::EmployeeStore;
pub use types::Employee;
