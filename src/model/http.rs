//! Request executor
//!
//! Builds and sends a single HTTP request: JSON accept header, cookies,
//! access token per the configured mode, optional `Role` header, query string
//! and multipart body. The response body is decoded as an [`Envelope`]
//! whatever the HTTP status; interpreting `code` is the caller's job.

use crate::application::auth::Auth;
use crate::application::config::RemoteConfig;
use crate::constants::{ACCESS_TOKEN_KEY, ROLE_HEADER, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::{FormData, Params};
use crate::model::responses::Envelope;
use crate::utils::encoding::{encode_body, encode_query};
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, Request};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// HTTP request executor shared by every resource client
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    auth: Arc<Auth>,
}

impl HttpClient {
    /// Creates an executor for the given remote settings
    ///
    /// Cookies are kept across requests, the equivalent of sending
    /// credentials with every call.
    pub fn new(remote: &RemoteConfig, auth: Arc<Auth>) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT).cookie_store(true);
        if let Some(timeout) = remote.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        Ok(Self {
            http_client: builder.build()?,
            auth,
        })
    }

    /// The authentication policy applied to every request
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Builds the request without sending it
    ///
    /// Only `POST` carries a body; for any other method `body` is dropped.
    pub fn build_request(
        &self,
        method: Method,
        url: &str,
        params: Option<Params>,
        body: Option<FormData>,
        role: Option<&str>,
    ) -> Result<Request, AppError> {
        let authorization = self.auth.authorize(params)?;

        let url = match authorization.params.filter(|p| !p.is_empty()) {
            Some(params) => format!("{url}?{}", encode_query(&params)),
            None => url.to_string(),
        };

        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json");

        if let Some(token) = authorization.header {
            request = request.header(ACCESS_TOKEN_KEY, token);
        }
        if let Some(role) = role {
            request = request.header(ROLE_HEADER, role);
        }

        if method == Method::POST {
            if let Some(form) = encode_body(body)? {
                request = request.multipart(form);
            }
        } else if body.is_some() {
            debug!("Dropping body for {} {}", method, url);
        }

        Ok(request.build()?)
    }

    /// Sends one request and decodes the envelope
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        params: Option<Params>,
        body: Option<FormData>,
        role: Option<&str>,
    ) -> Result<Envelope, AppError> {
        let request = self.build_request(method, url, params, body, role)?;
        debug!("{} {}", request.method(), request.url().path());

        let response = self.http_client.execute(request).await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            AppError::from(e)
        })?;

        let status = response.status();
        debug!("Response status: {}", status);

        let text = response.text().await?;
        serde_json::from_str::<Envelope>(&text).map_err(|e| {
            error!("Failed to decode response from {} ({}): {}", url, status, e);
            AppError::Deserialization(format!("invalid envelope from {url} ({status}): {e}"))
        })
    }

    /// Makes a GET request
    pub async fn get(
        &self,
        url: &str,
        params: Option<Params>,
        role: Option<&str>,
    ) -> Result<Envelope, AppError> {
        self.execute(Method::GET, url, params, None, role).await
    }

    /// Makes a POST request with an optional multipart body
    pub async fn post(
        &self,
        url: &str,
        params: Option<Params>,
        body: Option<FormData>,
        role: Option<&str>,
    ) -> Result<Envelope, AppError> {
        self.execute(Method::POST, url, params, body, role).await
    }
}
