//! Error types for the employee directory

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmployeeError>;

#[derive(Error, Debug)]
pub enum EmployeeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for EmployeeError {
    fn from(e: serde_json::Error) -> Self {
        EmployeeError::Serialization(e.to_string())
    }
}
