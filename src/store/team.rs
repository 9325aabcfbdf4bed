//! Team name and roster, stored as native settings values.

use tracing::{debug, warn};

use crate::{
    config::StoreConfig,
    persist::{KvStore, KvValue, PersistError, PersistResult},
};

/// Team name and member list under two independent keys.
pub struct TeamStore<K> {
    kv: K,
    name_key: String,
    members_key: String,
}

impl<K: KvStore> TeamStore<K> {
    /// Store using the default `teamName` / `teamMembers` keys.
    pub fn new(kv: K) -> Self {
        Self::with_config(kv, &StoreConfig::default())
    }

    /// Store using the team keys from `config`.
    pub fn with_config(kv: K, config: &StoreConfig) -> Self {
        Self {
            kv,
            name_key: config.team_name_key.clone(),
            members_key: config.team_members_key.clone(),
        }
    }

    /// Stored team name, or an empty string when never set.
    pub fn team_name(&self) -> PersistResult<String> {
        match self.kv.get(&self.name_key)? {
            None => Ok(String::new()),
            Some(KvValue::Text(name)) => Ok(name),
            Some(other) => Err(wrong_kind(&self.name_key, &other, "text")),
        }
    }

    /// Overwrites the stored team name.
    pub fn set_team_name(&mut self, name: &str) -> PersistResult<()> {
        self.kv.set(&self.name_key, KvValue::Text(name.to_string()))?;
        debug!(key = %self.name_key, "saved team name");
        Ok(())
    }

    /// Stored members in insertion order, or empty when never set.
    pub fn members(&self) -> PersistResult<Vec<String>> {
        match self.kv.get(&self.members_key)? {
            None => Ok(Vec::new()),
            Some(KvValue::TextList(members)) => Ok(members),
            Some(other) => Err(wrong_kind(&self.members_key, &other, "text list")),
        }
    }

    /// Overwrites the stored member list.
    pub fn set_members(&mut self, members: &[String]) -> PersistResult<()> {
        self.kv
            .set(&self.members_key, KvValue::TextList(members.to_vec()))?;
        debug!(key = %self.members_key, count = members.len(), "saved team members");
        Ok(())
    }

    /// Appends `name` to the stored roster. Empty names are ignored and
    /// `false` is returned; duplicates are kept. An unreadable stored list is
    /// a [`PersistError::Decode`] and nothing is written.
    pub fn add_member(&mut self, name: &str) -> PersistResult<bool> {
        if name.is_empty() {
            return Ok(false);
        }
        let mut members = self.members()?;
        members.push(name.to_string());
        self.set_members(&members)?;
        Ok(true)
    }

    /// Like [`TeamStore::add_member`], but an unreadable stored list is
    /// treated as empty and overwritten, and write failures are logged.
    pub fn add_member_or_log(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let mut members = self.members_or_default();
        members.push(name.to_string());
        if let Err(err) = self.set_members(&members) {
            warn!(key = %self.members_key, error = %err, "error saving team members");
        }
        true
    }

    /// Writes name and members together.
    pub fn save(&mut self, name: &str, members: &[String]) -> PersistResult<()> {
        self.set_team_name(name)?;
        self.set_members(members)
    }

    /// Like [`TeamStore::save`], but logs failures instead of returning them.
    pub fn save_or_log(&mut self, name: &str, members: &[String]) {
        if let Err(err) = self.save(name, members) {
            warn!(error = %err, "error saving team data");
        }
    }

    /// Like [`TeamStore::team_name`], but logs failures and falls back to
    /// an empty name.
    pub fn team_name_or_default(&self) -> String {
        self.team_name().unwrap_or_else(|err| {
            warn!(key = %self.name_key, error = %err, "error loading team name");
            String::new()
        })
    }

    /// Like [`TeamStore::members`], but logs failures and falls back to an
    /// empty list.
    pub fn members_or_default(&self) -> Vec<String> {
        self.members().unwrap_or_else(|err| {
            warn!(key = %self.members_key, error = %err, "error loading team members");
            Vec::new()
        })
    }

    /// Returns the backend.
    pub fn into_inner(self) -> K {
        self.kv
    }
}

fn wrong_kind(key: &str, value: &KvValue, expected: &str) -> PersistError {
    PersistError::Decode(format!(
        "key '{key}' holds {}, expected {expected}",
        value.kind()
    ))
}
