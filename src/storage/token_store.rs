//! Access token persistence
//!
//! The access token is a single opaque string. It is read before every
//! authenticated request and written after a successful sign-in. Writes replace
//! the whole value under a lock, so concurrent sign-ins race but the last
//! writer wins without corrupting anything.

use crate::error::AppError;
use crate::storage::config::TokenStorageConfig;
use once_cell::sync::OnceCell;
use serde_json::{Map, Value};
use std::fmt::{self, Debug};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

/// Storage capability for the access token
pub trait TokenStore: Send + Sync + Debug {
    /// Returns the stored token, `None` if nothing was ever saved
    fn get(&self) -> Result<Option<String>, AppError>;

    /// Replaces the stored token
    fn set(&self, token: &str) -> Result<(), AppError>;
}

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::Storage("token lock poisoned".to_string())
}

/// In-process token store; nothing survives a restart
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

/// Debug stand-in for a token slot that never shows the value
struct Redacted<'a>(&'a RwLock<Option<String>>);

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_read() {
            Ok(token) if token.is_some() => f.write_str("Some(<redacted>)"),
            Ok(_) => f.write_str("None"),
            Err(_) => f.write_str("<locked>"),
        }
    }
}

impl fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTokenStore")
            .field("token", &Redacted(&self.token))
            .finish()
    }
}

impl MemoryTokenStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Forgets the stored token
    pub fn clear(&self) -> Result<(), AppError> {
        *self.token.write().map_err(poisoned)? = None;
        Ok(())
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<String>, AppError> {
        Ok(self.token.read().map_err(poisoned)?.clone())
    }

    fn set(&self, token: &str) -> Result<(), AppError> {
        *self.token.write().map_err(poisoned)? = Some(token.to_string());
        Ok(())
    }
}

/// Durable token store backed by a small JSON file of string entries
///
/// The file is read lazily on first access and cached. Other entries in the
/// file are preserved on write. Writes go to a temporary sibling file that is
/// then renamed over the original.
pub struct FileTokenStore {
    path: PathBuf,
    key: String,
    cache: OnceCell<RwLock<Option<String>>>,
}

impl fmt::Debug for FileTokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("FileTokenStore");
        out.field("path", &self.path).field("key", &self.key);
        match self.cache.get() {
            Some(token) => out.field("token", &Redacted(token)),
            None => out.field("token", &format_args!("<not loaded>")),
        };
        out.finish()
    }
}

impl FileTokenStore {
    /// Creates a store for entry `key` in the file at `path`; nothing is read yet
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
            cache: OnceCell::new(),
        }
    }

    /// Creates a store from the storage section of the configuration
    pub fn from_config(config: &TokenStorageConfig) -> Self {
        Self::new(&config.path, &config.key)
    }

    /// Location of the token file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the token entry from the file and the cache
    pub fn clear(&self) -> Result<(), AppError> {
        let mut guard = self.write_cache()?;
        let mut entries = read_entries(&self.path)?;
        if entries.remove(&self.key).is_some() {
            write_entries(&self.path, &entries)?;
        }
        *guard = None;
        info!("Access token cleared from {}", self.path.display());
        Ok(())
    }

    fn cache(&self) -> Result<&RwLock<Option<String>>, AppError> {
        self.cache.get_or_try_init(|| {
            let entries = read_entries(&self.path)?;
            let token = match entries.get(&self.key) {
                Some(Value::String(token)) => Some(token.clone()),
                Some(other) => {
                    warn!(
                        "Ignoring non-string token entry '{}' in {}: {}",
                        self.key,
                        self.path.display(),
                        other
                    );
                    None
                }
                None => None,
            };
            debug!(
                "Token store loaded from {} (token present: {})",
                self.path.display(),
                token.is_some()
            );
            Ok(RwLock::new(token))
        })
    }

    fn read_cache(&self) -> Result<RwLockReadGuard<'_, Option<String>>, AppError> {
        self.cache()?.read().map_err(poisoned)
    }

    fn write_cache(&self) -> Result<RwLockWriteGuard<'_, Option<String>>, AppError> {
        self.cache()?.write().map_err(poisoned)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<String>, AppError> {
        Ok(self.read_cache()?.clone())
    }

    fn set(&self, token: &str) -> Result<(), AppError> {
        // Held across the file write so writers are serialized.
        let mut guard = self.write_cache()?;
        let mut entries = read_entries(&self.path)?;
        entries.insert(self.key.clone(), Value::String(token.to_string()));
        write_entries(&self.path, &entries)?;
        *guard = Some(token.to_string());
        debug!("Access token persisted to {}", self.path.display());
        Ok(())
    }
}

/// Reads the entry map
///
/// A missing or blank file is empty. So is a file that does not parse as a
/// JSON object, so the next write replaces it instead of failing forever.
fn read_entries(path: &Path) -> Result<Map<String, Value>, AppError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
        Err(e) => return Err(e.into()),
    };
    if raw.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(entries)) => Ok(entries),
        Ok(_) => {
            warn!(
                "{} does not contain a JSON object, treating it as empty",
                path.display()
            );
            Ok(Map::new())
        }
        Err(e) => {
            warn!(
                "{} is not valid JSON ({}), treating it as empty",
                path.display(),
                e
            );
            Ok(Map::new())
        }
    }
}

fn write_entries(path: &Path, entries: &Map<String, Value>) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(format!(".{}.tmp", nanoid::nanoid!(8)));
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}
