//! Shared client plumbing for the ThoughtSpot REST tools
//!
//! Holds everything the command line tools have in common: the REST API v2
//! client and its message types, bearer token acquisition, connection
//! configuration, liveboard name resolution and logging.

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod logging;
pub mod messages;
pub mod resolve;
pub mod traits;
pub mod types;

pub use errors::*;
pub use types::*;

pub use auth::{create_api_client, authenticate, FullAccessTokenSource, TrustedServerTokenSource};
pub use client::RestApiClient;
pub use config::{ConnectionOverrides, ConnectionSettings, Credentials};
pub use resolve::resolve_liveboard_guid;
pub use traits::{MockRestApi, MockTokenSource, RestApi, TokenSource};

pub use messages::{
    FetchPermissionsRequest, LiveboardSqlRequest, LiveboardSqlResponse, MetadataHeader,
    MetadataIdentifier, PermissionsResponse, SearchMetadataRequest, VisualizationQuery,
};
