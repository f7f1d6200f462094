//! Access token attachment
//!
//! `Auth` pairs the configured [`AuthMode`] with the injected token store and
//! decides, per request, whether the token travels as a header, as a query
//! parameter, or not at all.

use crate::application::config::AuthMode;
use crate::constants::ACCESS_TOKEN_KEY;
use crate::error::AppError;
use crate::model::requests::Params;
use crate::storage::token_store::TokenStore;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Where the token ended up for one request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Authorization {
    /// Value for the `AccessToken` header, if the mode sends one
    pub header: Option<String>,
    /// Query parameters, with the token injected when the mode requires it
    pub params: Option<Params>,
}

/// Authentication manager: the attachment policy plus the token store
#[derive(Debug, Clone)]
pub struct Auth {
    mode: AuthMode,
    token_store: Arc<dyn TokenStore>,
}

impl Auth {
    /// Creates the policy for `mode` over the given token store
    pub fn new(mode: AuthMode, token_store: Arc<dyn TokenStore>) -> Self {
        Self { mode, token_store }
    }

    /// How the token is attached to requests
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// The currently stored access token
    pub fn token(&self) -> Result<Option<String>, AppError> {
        self.token_store.get()
    }

    /// Persists a new access token, replacing any previous one
    pub fn save_token(&self, token: &str) -> Result<(), AppError> {
        self.token_store.set(token)?;
        info!("Access token saved");
        Ok(())
    }

    /// Applies the attachment policy to one request's parameters
    ///
    /// The store is only read when the mode sends a token. A missing token is
    /// not an error here; the request simply goes out without one and the
    /// server decides.
    pub fn authorize(&self, params: Option<Params>) -> Result<Authorization, AppError> {
        match self.mode {
            AuthMode::AccessToken => {
                let header = self.token()?;
                if header.is_none() {
                    debug!("No access token stored; sending request without one");
                }
                Ok(Authorization { header, params })
            }
            AuthMode::AccessTokenInParams => {
                let params = match self.token()? {
                    Some(token) => {
                        let mut params = params.unwrap_or_default();
                        params.insert(ACCESS_TOKEN_KEY.to_string(), Value::String(token));
                        Some(params)
                    }
                    None => {
                        debug!("No access token stored; sending request without one");
                        params
                    }
                };
                Ok(Authorization {
                    header: None,
                    params,
                })
            }
            AuthMode::Disabled => Ok(Authorization {
                header: None,
                params,
            }),
        }
    }
}
