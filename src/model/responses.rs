use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result codes carried in the `code` field of every envelope
pub mod retcode {
    /// The operation completed successfully
    pub const SUCCESS: i64 = 0;
}

/// Looks up the human readable message for a result code
///
/// Returns `None` for codes this client does not know about; callers treat
/// those as unrecognized.
pub fn retinfo(code: i64) -> Option<&'static str> {
    match code {
        retcode::SUCCESS => Some("The operation completed successfully"),
        _ => None,
    }
}

/// The `{code, data, ...}` wrapper returned by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    /// Result code, `retcode::SUCCESS` on success
    pub code: i64,
    /// Payload, `null` when the server sent none
    #[serde(default)]
    pub data: Value,
    /// Any other top-level fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Envelope {
    /// True when `code` is [`retcode::SUCCESS`]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == retcode::SUCCESS
    }

    /// Message for this envelope's code, if the code is known
    pub fn message(&self) -> Option<&'static str> {
        retinfo(self.code)
    }

    /// Decodes `data` into a typed value
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(T::deserialize(&self.data)?)
    }

    /// `data.access_token` as returned by a successful sign-in
    pub fn access_token(&self) -> Option<&str> {
        self.data.get("access_token").and_then(Value::as_str)
    }
}
