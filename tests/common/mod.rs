// Shared helpers for the integration tests

#![allow(dead_code)]

use forum_api_client::prelude::*;
use mockito::ServerGuard;
use std::sync::Arc;

pub const JSON: &str = "application/json";

/// Builds a facade pointed at the mock server, backed by an in-memory token store
pub fn client_for(
    server: &ServerGuard,
    mode: AuthMode,
    token: Option<&str>,
) -> (Client, Arc<MemoryTokenStore>) {
    let store = Arc::new(match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    });
    let config = Config::with_server(server.url(), mode);
    let client = Client::new(config, store.clone()).expect("client");
    (client, store)
}

/// Turns a JSON object literal into query parameters
pub fn params(value: serde_json::Value) -> Params {
    value.as_object().cloned().expect("object literal")
}
