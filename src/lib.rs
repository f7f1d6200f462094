//! # Forum API Client
//!
//! A client-side data access layer for the forum REST API. Every resource
//! (users, boards, topics, comments, notifications, uploads, logs) is served
//! under the same convention:
//!
//! ```text
//! <server>/api/<resource>/<verb>[/<page>[/<size>]]
//! ```
//!
//! This crate centralizes request construction, access token attachment and
//! response decoding so callers never build URLs or headers by hand.
//!
//! ## Features
//!
//! - Generic resource client with `get`, `list`, `update`/`set`, `create` and `delete`
//! - Specialized clients for users (sign-in, activation, password reset),
//!   notifications and uploads
//! - Three authentication modes: header, query parameter, or disabled
//! - Pluggable token storage with a durable file-backed default
//! - Multipart form bodies and `{code, data}` envelope decoding
//!
//! ## Example
//!
//! ```ignore
//! use forum_api_client::prelude::*;
//!
//! let client = Client::from_env()?;
//!
//! let credentials = FormData::new()
//!     .with("email", "alice@example.com")
//!     .with("password", "hunter2");
//! let envelope = client.user().signin(credentials).await?;
//!
//! if envelope.is_success() {
//!     let topics = client.topic().list(None, DEFAULT_PAGE, Some(20), None).await?;
//!     println!("{}", topics.data);
//! }
//! ```

/// Application layer: configuration, authentication, resource clients and facade
pub mod application;
/// Library wide constants
pub mod constants;
/// Error types
pub mod error;
/// Request and response models plus the HTTP request executor
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Access token persistence
pub mod storage;
/// Encoding, configuration and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
