//! Connection configuration
//!
//! Settings are resolved in this order, first match wins:
//! 1. Command line overrides
//! 2. Process environment variables
//! 3. `.env` file in the current directory or parent directories (if present)
//! 4. Built-in defaults
//!
//! ## Variables
//! - `TS_URL`: server URL (default `https://training.thoughtspot.cloud`)
//! - `TS_USERNAME`: user to authenticate as (required)
//! - `TS_PASSWORD`: password (required unless a token server is set)
//! - `TS_ORG_ID`: org to scope the token to
//! - `TS_TOKEN_VALIDITY_SECS`: requested token lifetime (default 3000)
//! - `TS_TOKEN_SERVER`: trusted authentication token server
//! - `TS_PASSCODE`: passcode for the token server
//! - `TS_TIMEOUT_SECS`: HTTP request timeout (unset means no timeout)

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::errors::{SharedError, SharedResult};
use crate::messages::auth::DEFAULT_TOKEN_VALIDITY_SECS;

pub const DEFAULT_SERVER_URL: &str = "https://training.thoughtspot.cloud";

pub const ENV_URL: &str = "TS_URL";
pub const ENV_USERNAME: &str = "TS_USERNAME";
pub const ENV_PASSWORD: &str = "TS_PASSWORD";
pub const ENV_ORG_ID: &str = "TS_ORG_ID";
pub const ENV_TOKEN_VALIDITY: &str = "TS_TOKEN_VALIDITY_SECS";
pub const ENV_TOKEN_SERVER: &str = "TS_TOKEN_SERVER";
pub const ENV_PASSCODE: &str = "TS_PASSCODE";
pub const ENV_TIMEOUT: &str = "TS_TIMEOUT_SECS";

/// How the client obtains its bearer token
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Full access token from username and password
    Password { username: String, password: String },
    /// Token issued by a trusted authentication server
    TrustedServer {
        token_server: String,
        username: String,
        passcode: String,
    },
}

impl Credentials {
    pub fn username(&self) -> &str {
        match self {
            Credentials::Password { username, .. } => username,
            Credentials::TrustedServer { username, .. } => username,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Credentials::TrustedServer {
                token_server,
                username,
                ..
            } => f
                .debug_struct("TrustedServer")
                .field("token_server", token_server)
                .field("username", username)
                .field("passcode", &"***")
                .finish(),
        }
    }
}

/// Everything needed to build an authenticated client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub server_url: String,
    pub credentials: Credentials,
    pub org_id: Option<i64>,
    pub token_validity_secs: u32,
    /// Request timeout, `None` keeps the HTTP client default of no timeout
    pub timeout: Option<Duration>,
}

/// Values supplied on the command line; these win over the environment
#[derive(Clone, Debug, Default)]
pub struct ConnectionOverrides {
    pub server_url: Option<String>,
    pub username: Option<String>,
    pub org_id: Option<i64>,
    pub token_server: Option<String>,
}

impl ConnectionOverrides {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            ENV_URL => self.server_url.clone(),
            ENV_USERNAME => self.username.clone(),
            ENV_ORG_ID => self.org_id.map(|id| id.to_string()),
            ENV_TOKEN_SERVER => self.token_server.clone(),
            _ => None,
        }
    }
}

impl ConnectionSettings {
    /// Load settings from `.env` and the process environment
    pub fn from_env(overrides: &ConnectionOverrides) -> SharedResult<Self> {
        // Missing .env is fine, variables may come from the shell
        let _ = dotenv::dotenv();

        Self::from_lookup(|key| overrides.get(key).or_else(|| std::env::var(key).ok()))
    }

    /// Load settings from a specific env file without touching the process environment
    pub fn from_env_file(path: impl AsRef<Path>, overrides: &ConnectionOverrides) -> SharedResult<Self> {
        let path = path.as_ref();
        let iter = dotenv::from_path_iter(path)
            .map_err(|e| SharedError::invalid_config("env_file", format!("{}: {e}", path.display())))?;

        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) = item
                .map_err(|e| SharedError::invalid_config("env_file", format!("{}: {e}", path.display())))?;
            vars.insert(key, value);
        }

        Self::from_lookup(|key| {
            overrides
                .get(key)
                .or_else(|| std::env::var(key).ok())
                .or_else(|| vars.get(key).cloned())
        })
    }

    /// Build settings from an arbitrary key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> SharedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let server_url = get(ENV_URL).unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let username = get(ENV_USERNAME).ok_or_else(|| SharedError::missing_config(ENV_USERNAME))?;

        let credentials = match get(ENV_TOKEN_SERVER) {
            Some(token_server) => Credentials::TrustedServer {
                token_server,
                username,
                passcode: get(ENV_PASSCODE).ok_or_else(|| SharedError::missing_config(ENV_PASSCODE))?,
            },
            None => Credentials::Password {
                username,
                password: get(ENV_PASSWORD).ok_or_else(|| SharedError::missing_config(ENV_PASSWORD))?,
            },
        };

        let org_id = get(ENV_ORG_ID)
            .map(|v| v.parse::<i64>().map_err(|_| SharedError::invalid_config(ENV_ORG_ID, v)))
            .transpose()?;

        let token_validity_secs = get(ENV_TOKEN_VALIDITY)
            .map(|v| v.parse::<u32>().map_err(|_| SharedError::invalid_config(ENV_TOKEN_VALIDITY, v)))
            .transpose()?
            .unwrap_or(DEFAULT_TOKEN_VALIDITY_SECS);

        let timeout = get(ENV_TIMEOUT)
            .map(|v| v.parse::<u64>().map_err(|_| SharedError::invalid_config(ENV_TIMEOUT, v)))
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            server_url,
            credentials,
            org_id,
            token_validity_secs,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_password_credentials_with_defaults() {
        let settings = ConnectionSettings::from_lookup(lookup_from(&[
            (ENV_USERNAME, "userxyz"),
            (ENV_PASSWORD, "password123"),
        ]))
        .unwrap();

        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert_eq!(settings.org_id, None);
        assert_eq!(settings.token_validity_secs, 3000);
        assert_eq!(settings.timeout, None);
        assert_eq!(
            settings.credentials,
            Credentials::Password {
                username: "userxyz".to_string(),
                password: "password123".to_string(),
            }
        );
    }

    #[test]
    fn test_token_server_selects_trusted_auth() {
        let settings = ConnectionSettings::from_lookup(lookup_from(&[
            (ENV_USERNAME, "userNNN"),
            (ENV_TOKEN_SERVER, "https://tokens.example.com"),
            (ENV_PASSCODE, "secret"),
            (ENV_ORG_ID, "1613534286"),
        ]))
        .unwrap();

        assert_eq!(settings.org_id, Some(1613534286));
        assert!(matches!(settings.credentials, Credentials::TrustedServer { .. }));
        assert_eq!(settings.credentials.username(), "userNNN");
    }

    #[test]
    fn test_missing_password_is_reported() {
        let result = ConnectionSettings::from_lookup(lookup_from(&[(ENV_USERNAME, "userxyz")]));
        match result {
            Err(SharedError::MissingConfig { field }) => assert_eq!(field, ENV_PASSWORD),
            other => panic!("expected missing password, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_username_counts_as_missing() {
        let result = ConnectionSettings::from_lookup(lookup_from(&[
            (ENV_USERNAME, "   "),
            (ENV_PASSWORD, "password123"),
        ]));
        assert!(matches!(result, Err(SharedError::MissingConfig { .. })));
    }

    #[test]
    fn test_invalid_org_id_names_the_field() {
        let result = ConnectionSettings::from_lookup(lookup_from(&[
            (ENV_USERNAME, "userxyz"),
            (ENV_PASSWORD, "password123"),
            (ENV_ORG_ID, "abc"),
        ]));
        match result {
            Err(SharedError::InvalidConfig { field, value }) => {
                assert_eq!(field, ENV_ORG_ID);
                assert_eq!(value, "abc");
            }
            other => panic!("expected invalid org id, got {other:?}"),
        }
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = ConnectionOverrides {
            server_url: Some("https://override.example.com".to_string()),
            org_id: Some(7),
            ..Default::default()
        };
        let base = lookup_from(&[
            (ENV_URL, "https://env.example.com"),
            (ENV_USERNAME, "userxyz"),
            (ENV_PASSWORD, "password123"),
        ]);

        let settings =
            ConnectionSettings::from_lookup(|key| overrides.get(key).or_else(|| base(key))).unwrap();

        assert_eq!(settings.server_url, "https://override.example.com");
        assert_eq!(settings.org_id, Some(7));
    }

    #[test]
    fn test_timeout_only_when_configured() {
        let settings = ConnectionSettings::from_lookup(lookup_from(&[
            (ENV_USERNAME, "userxyz"),
            (ENV_PASSWORD, "password123"),
            (ENV_TIMEOUT, "45"),
        ]))
        .unwrap();
        assert_eq!(settings.timeout, Some(Duration::from_secs(45)));

        let result = ConnectionSettings::from_lookup(lookup_from(&[
            (ENV_USERNAME, "userxyz"),
            (ENV_PASSWORD, "password123"),
            (ENV_TIMEOUT, "soon"),
        ]));
        assert!(matches!(result, Err(SharedError::InvalidConfig { field, .. }) if field == ENV_TIMEOUT));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let credentials = Credentials::Password {
            username: "userxyz".to_string(),
            password: "password123".to_string(),
        };
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("userxyz"));
        assert!(!rendered.contains("password123"));
    }

    #[test]
    fn test_env_file_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "TS_USERNAME=file-user\nTS_PASSWORD=file-pass\nTS_TOKEN_VALIDITY_SECS=600\n",
        )
        .unwrap();

        let settings = ConnectionSettings::from_env_file(&path, &ConnectionOverrides::default()).unwrap();

        assert_eq!(settings.credentials.username(), "file-user");
        assert_eq!(settings.token_validity_secs, 600);
    }

    #[test]
    fn test_missing_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConnectionSettings::from_env_file(dir.path().join("nope.env"), &ConnectionOverrides::default());
        assert!(matches!(result, Err(SharedError::InvalidConfig { .. })));
    }
}
