//! Settings capability, value model and backends.

/// Volatile hash-map backend.
pub mod memory;
/// SQLite settings-file backend.
pub mod sqlite;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value kinds understood natively by a settings backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KvValue {
    /// Opaque blob, used for structured records.
    Bytes(Vec<u8>),
    /// Single text value.
    Text(String),
    /// Ordered list of text values.
    TextList(Vec<String>),
}

impl KvValue {
    /// Short name of the value kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            KvValue::Bytes(_) => "bytes",
            KvValue::Text(_) => "text",
            KvValue::TextList(_) => "text list",
        }
    }
}

/// Failures raised while reading or writing settings.
#[derive(Debug)]
pub enum PersistError {
    /// A value could not be serialized.
    Encode(serde_json::Error),
    /// A stored value could not be read back.
    Decode(String),
    /// Backend database failure.
    Sqlite(rusqlite::Error),
    /// Any other backend failure.
    Message(String),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Encode(err) => write!(f, "encode failed: {err}"),
            PersistError::Decode(msg) => write!(f, "decode failed: {msg}"),
            PersistError::Sqlite(err) => write!(f, "sqlite error: {err}"),
            PersistError::Message(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistError {}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Key-value settings capability injected into the stores.
///
/// A `set` must be visible to the next `get` on the same instance.
pub trait KvStore {
    /// Reads `key`, or `None` when it was never set.
    fn get(&self, key: &str) -> PersistResult<Option<KvValue>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: KvValue) -> PersistResult<()>;
    /// Removes `key`, returning whether it was present.
    fn remove(&mut self, key: &str) -> PersistResult<bool>;
}

impl<K: KvStore + ?Sized> KvStore for Box<K> {
    fn get(&self, key: &str) -> PersistResult<Option<KvValue>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: KvValue) -> PersistResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> PersistResult<bool> {
        (**self).remove(key)
    }
}

impl<K: KvStore + ?Sized> KvStore for &mut K {
    fn get(&self, key: &str) -> PersistResult<Option<KvValue>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: KvValue) -> PersistResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> PersistResult<bool> {
        (**self).remove(key)
    }
}
