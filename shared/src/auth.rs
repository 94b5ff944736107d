//! Bearer token acquisition
//!
//! Two token sources are supported: a full access token requested with
//! username and password, and a token handed out by a trusted authentication
//! server. [`create_api_client`] picks one from the connection settings.

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::client::{http_client, normalize_server_url, RestApiClient};
use crate::config::{ConnectionSettings, Credentials};
use crate::errors::{SharedError, SharedResult};
use crate::messages::FullTokenRequest;
use crate::traits::TokenSource;

/// Requests a full access token from `auth/token/full`
pub struct FullAccessTokenSource {
    client: RestApiClient,
    request: FullTokenRequest,
}

impl FullAccessTokenSource {
    pub fn new(client: RestApiClient, request: FullTokenRequest) -> Self {
        Self { client, request }
    }
}

#[async_trait]
impl TokenSource for FullAccessTokenSource {
    async fn fetch_token(&self) -> SharedResult<String> {
        debug!(username = %self.request.username, org_id = ?self.request.org_id, "Requesting full access token");
        let response = self.client.auth_token_full(&self.request).await?;
        Ok(response.token)
    }
}

/// Fetches a token from a trusted authentication server via `GET /token`
pub struct TrustedServerTokenSource {
    client: reqwest::Client,
    token_server: Url,
    username: String,
    passcode: String,
}

impl TrustedServerTokenSource {
    pub fn new(
        client: reqwest::Client,
        token_server: &str,
        username: impl Into<String>,
        passcode: impl Into<String>,
    ) -> SharedResult<Self> {
        Ok(Self {
            client,
            token_server: normalize_server_url(token_server)?,
            username: username.into(),
            passcode: passcode.into(),
        })
    }
}

#[async_trait]
impl TokenSource for TrustedServerTokenSource {
    async fn fetch_token(&self) -> SharedResult<String> {
        let url = self.token_server.join("token")?;
        debug!(%url, username = %self.username, "Requesting token from token server");

        let response = self
            .client
            .get(url)
            .query(&[("username", self.username.as_str()), ("passcode", self.passcode.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SharedError::Api {
                endpoint: "token".to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        parse_token_body(&text)
    }
}

/// Token servers answer with a JSON string; a bare string or `{"token": ..}` is accepted too
fn parse_token_body(text: &str) -> SharedResult<String> {
    let token = match serde_json::from_str::<serde_json::Value>(text) {
        Ok(serde_json::Value::String(token)) => token,
        Ok(serde_json::Value::Object(map)) => map
            .get("token")
            .and_then(|t| t.as_str())
            .map(str::to_string)
            .ok_or_else(|| SharedError::invalid_response("token server reply has no token field"))?,
        Ok(_) => return Err(SharedError::invalid_response("token server reply is not a string")),
        Err(_) => text.trim().to_string(),
    };

    if token.is_empty() {
        return Err(SharedError::invalid_response("token server returned an empty token"));
    }

    Ok(token)
}

/// Attach a token from `source` to `client`
pub async fn authenticate(mut client: RestApiClient, source: &dyn TokenSource) -> SharedResult<RestApiClient> {
    let token = source.fetch_token().await?;
    client.set_bearer_token(token);
    Ok(client)
}

/// Build a client for the configured server and authenticate it
pub async fn create_api_client(settings: &ConnectionSettings) -> SharedResult<RestApiClient> {
    info!(server = %settings.server_url, "🔗 Connecting to ThoughtSpot");

    let client = RestApiClient::new(&settings.server_url, settings.timeout)?;

    let client = match &settings.credentials {
        Credentials::Password { username, password } => {
            let source = FullAccessTokenSource::new(
                client.clone(),
                FullTokenRequest {
                    username: username.clone(),
                    password: password.clone(),
                    validity_time_in_sec: settings.token_validity_secs,
                    org_id: settings.org_id,
                },
            );
            authenticate(client, &source).await?
        }
        Credentials::TrustedServer {
            token_server,
            username,
            passcode,
        } => {
            let http = http_client(settings.timeout)?;
            let source = TrustedServerTokenSource::new(http, token_server, username.clone(), passcode.clone())?;
            authenticate(client, &source).await?
        }
    };

    info!(username = %settings.credentials.username(), "✅ Authenticated");
    Ok(client)
}
