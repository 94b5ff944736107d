//! Liveboard SQL error types

use thiserror::Error;
use shared::SharedError;

/// Result type for liveboard SQL operations
pub type LiveboardSqlResult<T> = Result<T, LiveboardSqlError>;

/// Liveboard SQL error types
#[derive(Error, Debug)]
pub enum LiveboardSqlError {
    #[error("{0}")]
    Shared(#[from] SharedError),

    #[error("Failed to write output: {0}")]
    OutputError(#[from] std::io::Error),
}

impl LiveboardSqlError {
    /// True when the failure came from the server rather than local setup or output
    pub fn is_api_error(&self) -> bool {
        match self {
            Self::Shared(e) => e.is_api_error(),
            _ => false,
        }
    }

    /// Response body of the failed API call, if the error carries one
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Shared(e) => e.response_body(),
            _ => None,
        }
    }
}
