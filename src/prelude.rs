//! # Forum API Client Prelude
//!
//! Re-exports the types needed for most interactions with the forum API.
//!
//! ## Usage
//!
//! ```rust
//! use forum_api_client::prelude::*;
//!
//! let config = Config::with_server("http://localhost:9999", AuthMode::AccessToken);
//! let client = Client::new(config, std::sync::Arc::new(MemoryTokenStore::new())).unwrap();
//! assert_eq!(client.board().url_prefix(), "http://localhost:9999/api/board");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{AuthMode, Config, RemoteConfig};
pub use crate::constants::DEFAULT_PAGE;
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND TOKEN STORAGE
// ============================================================================

pub use crate::application::auth::{Auth, Authorization};
pub use crate::storage::config::TokenStorageConfig;
pub use crate::storage::token_store::{FileTokenStore, MemoryTokenStore, TokenStore};

// ============================================================================
// SERVICES
// ============================================================================

pub use crate::application::client::Client;
pub use crate::application::interfaces::notification::NotificationService;
pub use crate::application::interfaces::resource::ResourceService;
pub use crate::application::interfaces::upload::UploadService;
pub use crate::application::interfaces::user::UserService;
pub use crate::application::services::{
    NotificationClient, ResourceClient, UploadClient, UserClient,
};

// ============================================================================
// TRANSPORT AND MODELS
// ============================================================================

pub use crate::model::http::HttpClient;
pub use crate::model::requests::{
    ChangePasswordRequest, FilterSpec, FormData, FormValue, Params, filter_values,
};
pub use crate::model::responses::{Envelope, retcode, retinfo};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::encoding::{encode_body, encode_query, serialize_loadfk};
pub use crate::utils::logger::setup_logger;
