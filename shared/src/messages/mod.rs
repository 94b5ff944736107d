//! Request and response bodies for the ThoughtSpot REST API v2
//!
//! Grouped by endpoint family:
//! - `auth`: bearer token acquisition
//! - `metadata`: metadata search and liveboard SQL
//! - `security`: principal permissions on metadata objects

pub mod auth;
pub mod metadata;
pub mod security;

pub use auth::{FullTokenRequest, TokenResponse};

pub use metadata::{
    LiveboardSqlRequest, LiveboardSqlResponse, MetadataHeader, MetadataIdentifier,
    SearchMetadataRequest, VisualizationQuery,
};

pub use security::{
    FetchPermissionsRequest, MetadataPermissionDetail, PermissionsResponse, PrincipalPermission,
    PrincipalPermissionInfo,
};
