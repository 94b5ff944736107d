//! Shared error types for the ThoughtSpot REST tools

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request to {endpoint} failed with status {status}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Invalid API response: {message}")]
    InvalidResponse { message: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid GUID: {input}")]
    InvalidGuid { input: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SharedError {
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    pub fn invalid_config(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn missing_config(field: impl Into<String>) -> Self {
        Self::MissingConfig {
            field: field.into(),
        }
    }

    /// True when the failure came from talking to the server
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Api { .. } | Self::InvalidResponse { .. } | Self::Json(_)
        )
    }

    /// Response body captured from a failed API call, if any
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
