use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Configuration for access token persistence
#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenStorageConfig {
    /// JSON file holding the persisted entries
    pub path: String,
    /// Entry key under which the access token is stored
    pub key: String,
}
