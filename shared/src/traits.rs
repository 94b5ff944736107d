//! Trait definitions for dependency injection

use async_trait::async_trait;

use crate::errors::SharedResult;
use crate::messages::{
    FetchPermissionsRequest, LiveboardSqlRequest, LiveboardSqlResponse, MetadataHeader,
    PermissionsResponse, SearchMetadataRequest,
};

/// Authenticated calls against the REST API v2
#[mockall::automock]
#[async_trait]
pub trait RestApi: Send + Sync {
    /// Search metadata objects matching the request identifiers
    async fn search_metadata(&self, request: &SearchMetadataRequest) -> SharedResult<Vec<MetadataHeader>>;

    /// Fetch the generated SQL for the visualizations of a liveboard
    async fn liveboard_sql(&self, request: &LiveboardSqlRequest) -> SharedResult<LiveboardSqlResponse>;

    /// Fetch user and group permissions on metadata objects
    async fn fetch_permissions(&self, request: &FetchPermissionsRequest) -> SharedResult<PermissionsResponse>;
}

/// Source of bearer tokens for the REST client
#[mockall::automock]
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Obtain a fresh bearer token
    async fn fetch_token(&self) -> SharedResult<String>;
}
