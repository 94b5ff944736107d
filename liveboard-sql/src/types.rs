//! Liveboard SQL data types

use std::fmt;

use shared::LiveboardGuid;

/// Which liveboard to extract SQL from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveboardTarget {
    /// Resolve by display name, first match wins
    Name(String),
    /// Already known GUID, no lookup needed
    Guid(LiveboardGuid),
}

impl fmt::Display for LiveboardTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiveboardTarget::Name(name) => write!(f, "'{name}'"),
            LiveboardTarget::Guid(guid) => write!(f, "{guid}"),
        }
    }
}
