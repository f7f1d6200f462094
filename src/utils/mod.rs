/// Module containing environment variable helpers
pub mod config;
/// Module containing query string and multipart body encoders
pub mod encoding;
/// Module containing logging utilities
pub mod logger;

pub use encoding::*;
pub use logger::*;
