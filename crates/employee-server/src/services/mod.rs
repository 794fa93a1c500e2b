//! Business logic services

pub mod employees;

pub use employees::{EmployeeManager, EmployeeService};
