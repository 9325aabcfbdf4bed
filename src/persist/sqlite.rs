//! SQLite-backed settings file.

use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

use super::{KvStore, KvValue, PersistError, PersistResult};

const KIND_BYTES: i64 = 1;
const KIND_TEXT: i64 = 2;
const KIND_TEXT_LIST: i64 = 3;

/// Durable [`KvStore`] keeping one row per key.
pub struct SqliteKv {
    conn: Connection,
}

impl SqliteKv {
    /// Opens or creates a settings database at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        let conn = Connection::open(path)?;
        Self::init_connection(conn)
    }

    /// Opens an in-memory settings database.
    pub fn open_in_memory() -> PersistResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> PersistResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self { conn })
    }

    /// Stored keys in ascending order.
    pub fn keys(&self) -> PersistResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM settings ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Writes a raw row, bypassing value encoding. Lets callers plant
    /// payloads written by other tools.
    pub fn set_raw(&mut self, key: &str, kind: i64, payload: &[u8]) -> PersistResult<()> {
        self.conn.execute(
            "INSERT INTO settings(key, kind, payload, updated_ms) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(key) DO UPDATE SET
                kind = excluded.kind,
                payload = excluded.payload,
                updated_ms = excluded.updated_ms",
            params![key, kind, payload, Utc::now().timestamp_millis()],
        )?;
        Ok(())
    }
}

impl KvStore for SqliteKv {
    fn get(&self, key: &str) -> PersistResult<Option<KvValue>> {
        let row: Option<(i64, Vec<u8>)> = self
            .conn
            .query_row(
                "SELECT kind, payload FROM settings WHERE key = ?1",
                params![key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((kind, payload)) = row else {
            return Ok(None);
        };
        decode_value(key, kind, payload).map(Some)
    }

    fn set(&mut self, key: &str, value: KvValue) -> PersistResult<()> {
        let (kind, payload) = encode_value(value)?;
        self.set_raw(key, kind, &payload)
    }

    fn remove(&mut self, key: &str) -> PersistResult<bool> {
        let count = self
            .conn
            .execute("DELETE FROM settings WHERE key = ?1", params![key])?;
        Ok(count > 0)
    }
}

fn encode_value(value: KvValue) -> PersistResult<(i64, Vec<u8>)> {
    match value {
        KvValue::Bytes(bytes) => Ok((KIND_BYTES, bytes)),
        KvValue::Text(text) => Ok((KIND_TEXT, text.into_bytes())),
        KvValue::TextList(list) => {
            let payload = serde_json::to_vec(&list).map_err(PersistError::Encode)?;
            Ok((KIND_TEXT_LIST, payload))
        }
    }
}

fn decode_value(key: &str, kind: i64, payload: Vec<u8>) -> PersistResult<KvValue> {
    match kind {
        KIND_BYTES => Ok(KvValue::Bytes(payload)),
        KIND_TEXT => String::from_utf8(payload)
            .map(KvValue::Text)
            .map_err(|e| PersistError::Decode(format!("key '{key}' holds invalid utf-8: {e}"))),
        KIND_TEXT_LIST => serde_json::from_slice::<Vec<String>>(&payload)
            .map(KvValue::TextList)
            .map_err(|e| PersistError::Decode(format!("key '{key}' holds a bad text list: {e}"))),
        other => Err(PersistError::Decode(format!(
            "key '{key}' has unknown value kind {other}"
        ))),
    }
}
