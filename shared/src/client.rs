//! REST API v2 client
//!
//! Thin wrapper over `reqwest` that knows the v2 endpoint layout, the headers
//! the server expects and how to turn non-success responses into
//! [`SharedError::Api`] with the response body preserved for diagnostics.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

use crate::errors::{SharedError, SharedResult};
use crate::messages::{
    FetchPermissionsRequest, FullTokenRequest, LiveboardSqlRequest, LiveboardSqlResponse,
    MetadataHeader, PermissionsResponse, SearchMetadataRequest, TokenResponse,
};
use crate::traits::RestApi;

/// Path prefix shared by every v2 endpoint
pub const API_PREFIX: &str = "api/rest/2.0/";

pub const AUTH_TOKEN_FULL: &str = "auth/token/full";
pub const METADATA_SEARCH: &str = "metadata/search";
pub const METADATA_LIVEBOARD_SQL: &str = "metadata/liveboard/sql";
pub const FETCH_PERMISSIONS: &str = "security/principals/fetch-permissions";

/// Client for the REST API v2 of a single server
#[derive(Clone, Debug)]
pub struct RestApiClient {
    base_url: Url,
    client: reqwest::Client,
    bearer_token: Option<String>,
}

impl RestApiClient {
    /// Create an unauthenticated client for `server_url`
    pub fn new(server_url: &str, timeout: Option<Duration>) -> SharedResult<Self> {
        let base_url = normalize_server_url(server_url)?;
        let client = http_client(timeout)?;

        Ok(Self {
            base_url,
            client,
            bearer_token: None,
        })
    }

    pub fn server_url(&self) -> &Url {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer_token.is_some()
    }

    pub fn set_bearer_token(&mut self, token: impl Into<String>) {
        self.bearer_token = Some(token.into());
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.set_bearer_token(token);
        self
    }

    /// Absolute URL of a v2 endpoint such as `metadata/search`
    pub fn endpoint_url(&self, endpoint: &str) -> SharedResult<Url> {
        Ok(self.base_url.join(API_PREFIX)?.join(endpoint)?)
    }

    /// `POST auth/token/full`
    pub async fn auth_token_full(&self, request: &FullTokenRequest) -> SharedResult<TokenResponse> {
        self.post(AUTH_TOKEN_FULL, request).await
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> SharedResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        debug!(%url, "POST");

        let mut request = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .header("X-Requested-By", "ThoughtSpot")
            .json(body);

        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SharedError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        trace!(endpoint, bytes = bytes.len(), "Response received");

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl RestApi for RestApiClient {
    async fn search_metadata(&self, request: &SearchMetadataRequest) -> SharedResult<Vec<MetadataHeader>> {
        self.post(METADATA_SEARCH, request).await
    }

    async fn liveboard_sql(&self, request: &LiveboardSqlRequest) -> SharedResult<LiveboardSqlResponse> {
        self.post(METADATA_LIVEBOARD_SQL, request).await
    }

    async fn fetch_permissions(&self, request: &FetchPermissionsRequest) -> SharedResult<PermissionsResponse> {
        self.post(FETCH_PERMISSIONS, request).await
    }
}

/// Build the underlying HTTP client; without a timeout requests may wait indefinitely
pub fn http_client(timeout: Option<Duration>) -> SharedResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Parse a server URL and make sure relative joins keep its path
pub fn normalize_server_url(server_url: &str) -> SharedResult<Url> {
    let mut url = Url::parse(server_url.trim())?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
