//! Meet list persisted as one serialized blob.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    meet::Meet,
    persist::{KvStore, KvValue, PersistError, PersistResult},
    types::MEETS_KEY,
};

/// Version number for serialized meet list payloads.
pub const MEETS_FORMAT_VERSION: u16 = 1;

#[derive(Serialize)]
struct MeetsEnvelopeRef<'a> {
    format_version: u16,
    meets: &'a [Meet],
}

#[derive(Deserialize)]
struct MeetsEnvelope {
    format_version: u16,
    meets: Vec<Meet>,
}

/// Saves and loads the full meet list under a single key.
///
/// Every [`MeetStore::save`] replaces the stored list wholesale; there is no
/// merge with what was there before.
pub struct MeetStore<K> {
    kv: K,
    key: String,
}

impl<K: KvStore> MeetStore<K> {
    /// Store using the default `meets` key.
    pub fn new(kv: K) -> Self {
        Self::with_key(kv, MEETS_KEY)
    }

    /// Store using a custom key.
    pub fn with_key(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    /// Key the list is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Serializes `meets` and overwrites the stored blob.
    pub fn save(&mut self, meets: &[Meet]) -> PersistResult<()> {
        let payload = encode_meets(meets)?;
        self.kv.set(&self.key, KvValue::Bytes(payload))?;
        debug!(key = %self.key, count = meets.len(), "saved meets");
        Ok(())
    }

    /// Reads the stored list. A missing key yields an empty list; a present
    /// but unreadable value is a [`PersistError::Decode`].
    pub fn load(&self) -> PersistResult<Vec<Meet>> {
        let meets = match self.kv.get(&self.key)? {
            None => Vec::new(),
            Some(KvValue::Bytes(payload)) => decode_meets(&payload)?,
            Some(other) => {
                return Err(PersistError::Decode(format!(
                    "key '{}' holds {}, expected bytes",
                    self.key,
                    other.kind()
                )));
            }
        };
        debug!(key = %self.key, count = meets.len(), "loaded meets");
        Ok(meets)
    }

    /// Like [`MeetStore::save`], but logs failures instead of returning them.
    pub fn save_or_log(&mut self, meets: &[Meet]) {
        if let Err(err) = self.save(meets) {
            warn!(key = %self.key, error = %err, "error saving meets");
        }
    }

    /// Like [`MeetStore::load`], but logs failures and falls back to an
    /// empty list.
    pub fn load_or_default(&self) -> Vec<Meet> {
        self.load().unwrap_or_else(|err| {
            warn!(key = %self.key, error = %err, "error loading meets");
            Vec::new()
        })
    }

    /// Returns the backend.
    pub fn into_inner(self) -> K {
        self.kv
    }
}

/// Encodes a meet list into the versioned JSON payload.
pub fn encode_meets(meets: &[Meet]) -> PersistResult<Vec<u8>> {
    let env = MeetsEnvelopeRef {
        format_version: MEETS_FORMAT_VERSION,
        meets,
    };
    serde_json::to_vec(&env).map_err(PersistError::Encode)
}

/// Decodes a payload written by [`encode_meets`].
pub fn decode_meets(payload: &[u8]) -> PersistResult<Vec<Meet>> {
    let env_err = match serde_json::from_slice::<MeetsEnvelope>(payload) {
        Ok(env) => {
            if env.format_version != MEETS_FORMAT_VERSION {
                return Err(PersistError::Decode(format!(
                    "unsupported meets format version: {}",
                    env.format_version
                )));
            }
            return Ok(env.meets);
        }
        Err(err) => err,
    };

    // Older payloads stored the bare list.
    serde_json::from_slice::<Vec<Meet>>(payload)
        .map_err(|_| PersistError::Decode(format!("meets payload decode failed: {env_err}")))
}
