use crate::constants::{DEFAULT_API_SERVER, DEFAULT_TOKEN_PATH, TOKEN_STORAGE_KEY};
use crate::storage::config::TokenStorageConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How the access token is attached to outgoing requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuthMode {
    /// `access_token`: sent as the `AccessToken` header
    #[default]
    AccessToken,
    /// `access_token_in_params`: sent as the `AccessToken` query parameter
    AccessTokenInParams,
    /// Any other value: no token is attached
    Disabled,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::AccessToken => "access_token",
            AuthMode::AccessTokenInParams => "access_token_in_params",
            AuthMode::Disabled => "disabled",
        }
    }
}

impl FromStr for AuthMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "access_token" => AuthMode::AccessToken,
            "access_token_in_params" => AuthMode::AccessTokenInParams,
            _ => AuthMode::Disabled,
        })
    }
}

impl From<String> for AuthMode {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(mode) => mode,
            Err(never) => match never {},
        }
    }
}

impl From<AuthMode> for String {
    fn from(mode: AuthMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the forum API client
pub struct Config {
    /// Remote server settings
    pub remote: RemoteConfig,
    /// Access token persistence
    pub storage: TokenStorageConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the remote REST API
pub struct RemoteConfig {
    /// Base URL of the API server, without the `/api` suffix
    pub api_server: String,
    /// How the access token is attached
    pub auth_mode: AuthMode,
    /// Transport timeout in seconds; no timeout when absent
    pub timeout: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment, loading `.env` first
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `API_SERVER` | `http://localhost:9999` |
    /// | `API_AUTH_MODE` | `access_token` |
    /// | `API_TIMEOUT` | none |
    /// | `API_TOKEN_PATH` | `.forum_api_token.json` |
    /// | `API_TOKEN_KEY` | `t` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            remote: RemoteConfig {
                api_server: get_env_or_default("API_SERVER", String::from(DEFAULT_API_SERVER)),
                auth_mode: get_env_or_default("API_AUTH_MODE", AuthMode::AccessToken),
                timeout: get_env_or_none("API_TIMEOUT"),
            },
            storage: TokenStorageConfig {
                path: get_env_or_default("API_TOKEN_PATH", String::from(DEFAULT_TOKEN_PATH)),
                key: get_env_or_default("API_TOKEN_KEY", String::from(TOKEN_STORAGE_KEY)),
            },
        }
    }

    /// Creates a configuration for `api_server` without reading the environment
    pub fn with_server(api_server: impl Into<String>, auth_mode: AuthMode) -> Self {
        Config {
            remote: RemoteConfig {
                api_server: api_server.into(),
                auth_mode,
                timeout: None,
            },
            storage: TokenStorageConfig {
                path: String::from(DEFAULT_TOKEN_PATH),
                key: String::from(TOKEN_STORAGE_KEY),
            },
        }
    }
}
