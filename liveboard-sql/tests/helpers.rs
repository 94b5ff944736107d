//! Test helper utilities for liveboard SQL integration tests

#![allow(dead_code)]

use std::time::Duration;

use serde_json::json;
use shared::{ConnectionSettings, Credentials};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Settings that point at the mock server with password credentials
pub fn settings_for(server: &MockServer) -> ConnectionSettings {
    ConnectionSettings {
        server_url: server.uri(),
        credentials: Credentials::Password {
            username: "userxyz".to_string(),
            password: "password123".to_string(),
        },
        org_id: None,
        token_validity_secs: 3000,
        timeout: Some(Duration::from_secs(5)),
    }
}

/// Start a mock server that accepts the login
pub async fn start_authenticated_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/rest/2.0/auth/token/full"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "test-bearer-token",
            "creation_time_in_millis": 1700000000000u64,
            "expiration_time_in_millis": 1700003000000u64,
            "valid_for_username": "userxyz"
        })))
        .expect(1)
        .mount(&server)
        .await;

    server
}

/// Error body in the shape the server uses
pub fn api_error_json(message: &str) -> serde_json::Value {
    json!({"error": {"message": {"debug": message}}})
}
