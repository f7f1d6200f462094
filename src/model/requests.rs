use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Query parameters for a request
///
/// `serde_json` is built with `preserve_order`, so iteration follows insertion order.
pub type Params = Map<String, Value>;

/// A single multipart form value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Plain text field
    Text(String),
    /// Binary field, sent as a file part
    File {
        /// Raw content
        bytes: Vec<u8>,
        /// File name reported in the `Content-Disposition` header
        file_name: Option<String>,
        /// MIME type of the content, `application/octet-stream` when absent
        mime: Option<String>,
    },
}

impl FormValue {
    /// Creates a binary value with a file name
    pub fn file(bytes: impl Into<Vec<u8>>, file_name: impl Into<String>) -> Self {
        FormValue::File {
            bytes: bytes.into(),
            file_name: Some(file_name.into()),
            mime: None,
        }
    }

    /// Returns the text content, `None` for binary values
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(text) => Some(text),
            FormValue::File { .. } => None,
        }
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<&String> for FormValue {
    fn from(value: &String) -> Self {
        FormValue::Text(value.clone())
    }
}

impl From<i64> for FormValue {
    fn from(value: i64) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<i32> for FormValue {
    fn from(value: i32) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<u64> for FormValue {
    fn from(value: u64) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<Vec<u8>> for FormValue {
    fn from(bytes: Vec<u8>) -> Self {
        FormValue::File {
            bytes,
            file_name: None,
            mime: None,
        }
    }
}

/// Request body: an insertion-ordered mapping of field names to form values
///
/// Inserting an existing key replaces its value in place, keeping the key's
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, FormValue)>,
}

impl FormData {
    /// Creates an empty body
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces a field, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FormValue>) -> Option<FormValue> {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((key, value));
                None
            }
        }
    }

    /// Returns the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Removes a field, returning its value
    pub fn remove(&mut self, key: &str) -> Option<FormValue> {
        let index = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(index).1)
    }

    /// Whether a field named `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Field names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keeps only the fields for which `keep` returns `true`, preserving order
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &FormValue) -> bool) {
        self.fields.retain(|(k, v)| keep(k, v));
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when there are no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<FormValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (key, value) in iter {
            data.insert(key, value);
        }
        data
    }
}

impl IntoIterator for FormData {
    type Item = (String, FormValue);
    type IntoIter = std::vec::IntoIter<(String, FormValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Predicate used by [`FilterSpec::Predicate`]
pub type FilterFn = Arc<dyn Fn(FormData) -> FormData + Send + Sync>;

/// Restricts which fields of a body are transmitted
#[derive(Clone)]
pub enum FilterSpec {
    /// Only fields whose names are in the set survive, in the body's original order
    Keys(HashSet<String>),
    /// Replaces filtering entirely; the body becomes whatever the function returns
    Predicate(FilterFn),
}

impl FilterSpec {
    /// Builds a key filter from any list of field names
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterSpec::Keys(keys.into_iter().map(Into::into).collect())
    }

    /// Builds a predicate filter
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(FormData) -> FormData + Send + Sync + 'static,
    {
        FilterSpec::Predicate(Arc::new(f))
    }

    /// Applies the filter to `data`
    pub fn apply(&self, mut data: FormData) -> FormData {
        match self {
            FilterSpec::Keys(keys) => {
                data.retain(|key, _| keys.contains(key));
                data
            }
            FilterSpec::Predicate(f) => f(data),
        }
    }
}

impl fmt::Debug for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSpec::Keys(keys) => {
                let mut keys: Vec<&String> = keys.iter().collect();
                keys.sort();
                f.debug_tuple("Keys").field(&keys).finish()
            }
            FilterSpec::Predicate(_) => f.write_str("Predicate(<fn>)"),
        }
    }
}

/// Applies an optional filter, passing the body through untouched when absent
pub fn filter_values(filter: Option<&FilterSpec>, data: FormData) -> FormData {
    match filter {
        Some(filter) => filter.apply(data),
        None => data,
    }
}

/// Body of the `change_password` call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    /// Current password
    pub old_password: String,
    /// New password
    pub password: String,
}

impl ChangePasswordRequest {
    /// Pairs the current password with the new one
    pub fn new(old_password: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            old_password: old_password.into(),
            password: password.into(),
        }
    }
}

impl From<ChangePasswordRequest> for FormData {
    fn from(request: ChangePasswordRequest) -> Self {
        FormData::new()
            .with("old_password", request.old_password)
            .with("password", request.password)
    }
}
