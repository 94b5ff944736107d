//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult};

/// Command line tools built on the shared client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    LiveboardSql,
    LiveboardPermissions,
}

impl Tool {
    /// Crate name used as the tracing target for this tool
    pub fn target(&self) -> &'static str {
        match self {
            Tool::LiveboardSql => "liveboard_sql",
            Tool::LiveboardPermissions => "liveboard_permissions",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::LiveboardSql => write!(f, "liveboard-sql"),
            Tool::LiveboardPermissions => write!(f, "liveboard-permissions"),
        }
    }
}

/// GUID of a liveboard; empty when a name lookup found nothing
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiveboardGuid(String);

impl LiveboardGuid {
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Parse a user supplied GUID, rejecting anything that is not a UUID
    pub fn parse(input: &str) -> SharedResult<Self> {
        let trimmed = input.trim();
        Uuid::parse_str(trimmed).map_err(|_| SharedError::InvalidGuid {
            input: input.to_string(),
        })?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LiveboardGuid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for LiveboardGuid {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for LiveboardGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata object types understood by the v2 API
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetadataType {
    Liveboard,
    Answer,
    LogicalTable,
    LogicalColumn,
    Connection,
    Tag,
    User,
    UserGroup,
}

impl fmt::Display for MetadataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetadataType::Liveboard => "LIVEBOARD",
            MetadataType::Answer => "ANSWER",
            MetadataType::LogicalTable => "LOGICAL_TABLE",
            MetadataType::LogicalColumn => "LOGICAL_COLUMN",
            MetadataType::Connection => "CONNECTION",
            MetadataType::Tag => "TAG",
            MetadataType::User => "USER",
            MetadataType::UserGroup => "USER_GROUP",
        };
        write!(f, "{name}")
    }
}

/// Kind of principal a permission is granted to
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrincipalType {
    User,
    UserGroup,
    #[serde(other)]
    Other,
}
