//! Facade over every resource client
//!
//! # Example
//! ```ignore
//! use forum_api_client::prelude::*;
//!
//! let client = Client::from_env()?;
//! let info = client.misc().await?;
//! let unread = client.notif().count().await?;
//! ```

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::services::{NotificationClient, ResourceClient, UploadClient, UserClient};
use crate::constants::API_PREFIX;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::responses::{Envelope, retinfo};
use crate::storage::token_store::{FileTokenStore, TokenStore};
use std::sync::Arc;
use tracing::debug;

/// One client per resource, sharing a single executor and token store
#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<Config>,
    http_client: Arc<HttpClient>,
    user: UserClient,
    board: ResourceClient,
    topic: ResourceClient,
    comment: ResourceClient,
    notif: NotificationClient,
    upload: UploadClient,
    log_manage: NotificationClient,
}

impl Client {
    /// Creates the facade with an explicit configuration and token store
    pub fn new(config: Config, token_store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::new(config.remote.auth_mode, token_store));
        let http_client = Arc::new(HttpClient::new(&config.remote, auth)?);

        let server = config.remote.api_server.as_str();
        let resource = |path: &str| ResourceClient::new(path, server, http_client.clone());

        debug!(
            "Creating forum client for {} (auth mode {})",
            server, config.remote.auth_mode
        );

        Ok(Self {
            user: UserClient::new(resource("user")),
            board: resource("board"),
            topic: resource("topic"),
            comment: resource("comment"),
            notif: NotificationClient::new(resource("notif")),
            upload: UploadClient::new(resource("upload")),
            log_manage: NotificationClient::new(resource("log/manage")),
            http_client,
            config,
        })
    }

    /// Creates the facade from the environment with a file-backed token store
    pub fn from_env() -> Result<Self, AppError> {
        let config = Config::new();
        let token_store = Arc::new(FileTokenStore::from_config(&config.storage));
        Self::new(config, token_store)
    }

    /// User resource, with the account operations
    pub fn user(&self) -> &UserClient {
        &self.user
    }

    /// Board resource (`<server>/api/board`)
    pub fn board(&self) -> &ResourceClient {
        &self.board
    }

    /// Topic resource
    pub fn topic(&self) -> &ResourceClient {
        &self.topic
    }

    /// Comment resource
    pub fn comment(&self) -> &ResourceClient {
        &self.comment
    }

    /// Notifications of the signed-in user
    pub fn notif(&self) -> &NotificationClient {
        &self.notif
    }

    /// Upload resource and upload token issuance
    pub fn upload(&self) -> &UploadClient {
        &self.upload
    }

    /// Management log, shaped like notifications under `log/manage`
    pub fn log_manage(&self) -> &NotificationClient {
        &self.log_manage
    }

    /// The configuration the facade was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets server-wide information from `<server>/api/misc/info`
    pub async fn misc(&self) -> Result<Envelope, AppError> {
        let url = format!("{}/{API_PREFIX}/misc/info", self.config.remote.api_server);
        self.http_client.get(&url, None, None).await
    }

    /// Persists an access token obtained elsewhere
    pub fn save_access_token(&self, token: &str) -> Result<(), AppError> {
        self.http_client.auth().save_token(token)
    }

    /// The currently stored access token
    pub fn token(&self) -> Result<Option<String>, AppError> {
        self.http_client.auth().token()
    }

    /// Message for a result code, `None` when the code is unrecognized
    pub fn retinfo(code: i64) -> Option<&'static str> {
        retinfo(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthMode;
    use crate::storage::token_store::MemoryTokenStore;

    fn client() -> Client {
        let config = Config::with_server("http://forum.test", AuthMode::AccessToken);
        Client::new(config, Arc::new(MemoryTokenStore::new())).unwrap()
    }

    #[test]
    fn every_resource_has_its_path() {
        let client = client();
        assert_eq!(client.user().path(), "user");
        assert_eq!(client.board().path(), "board");
        assert_eq!(client.topic().path(), "topic");
        assert_eq!(client.comment().path(), "comment");
        assert_eq!(client.notif().path(), "notif");
        assert_eq!(client.upload().path(), "upload");
        assert_eq!(client.log_manage().url_prefix(), "http://forum.test/api/log/manage");
    }

    #[test]
    fn saved_token_is_shared_by_all_resources() {
        let client = client();
        assert_eq!(client.token().unwrap(), None);
        client.save_access_token("shared").unwrap();
        assert_eq!(client.token().unwrap().as_deref(), Some("shared"));
        assert_eq!(
            client.board().http().auth().token().unwrap().as_deref(),
            Some("shared")
        );
    }

    #[test]
    fn result_code_table_is_exposed() {
        assert!(Client::retinfo(0).is_some());
        assert!(Client::retinfo(404).is_none());
    }
}
