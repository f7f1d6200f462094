/// Module containing token storage configuration
pub mod config;
/// Token store trait plus in-memory and file-backed implementations
pub mod token_store;

pub use config::TokenStorageConfig;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
