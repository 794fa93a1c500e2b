//! Ports (trait interfaces) implemented by the server

pub mod storage;

pub use storage::EmployeeStore;
