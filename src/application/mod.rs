/// Access token attachment policy
pub mod auth;
/// Facade aggregating every resource client
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits for the standard and resource-specific operations
pub mod interfaces;
/// Resource client implementations
pub mod services;
