//! In-memory session over the meet and team stores.

use tracing::info;

use crate::{
    config::StoreConfig,
    meet::{EventSheet, LaneSelection, Meet, MeetDraft, MeetError, STANDARD_EVENTS},
    persist::{KvStore, PersistResult},
    store::{MeetStore, TeamStore},
    types::MeetId,
};

/// Working copy of all persisted state.
///
/// State is loaded once on [`Roster::open`]. Each mutation updates the
/// in-memory lists first and then writes the affected keys, so the lists
/// stay current even when a write fails.
pub struct Roster<K> {
    kv: K,
    config: StoreConfig,
    meets: Vec<Meet>,
    team_name: String,
    members: Vec<String>,
}

impl<K: KvStore> Roster<K> {
    /// Loads meets, team name and members from `kv`. Missing or unreadable
    /// values start out empty.
    pub fn open(kv: K, config: StoreConfig) -> Self {
        let mut roster = Self {
            kv,
            config,
            meets: Vec::new(),
            team_name: String::new(),
            members: Vec::new(),
        };
        roster.reload();
        roster
    }

    /// Re-reads every key from the backend, discarding in-memory state.
    pub fn reload(&mut self) {
        let meets = MeetStore::with_key(&mut self.kv, self.config.meets_key.as_str())
            .load_or_default();
        let team = TeamStore::with_config(&mut self.kv, &self.config);
        let team_name = team.team_name_or_default();
        let members = team.members_or_default();
        info!(
            meets = meets.len(),
            members = members.len(),
            "roster loaded"
        );
        self.meets = meets;
        self.team_name = team_name;
        self.members = members;
    }

    /// Keys this session reads and writes.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Meets in creation order.
    pub fn meets(&self) -> &[Meet] {
        &self.meets
    }

    /// Meet with `id`, if known.
    pub fn meet(&self, id: MeetId) -> Option<&Meet> {
        self.meets.iter().find(|m| m.id == id)
    }

    /// Creates a meet from `draft`, appends it and saves the whole list.
    pub fn add_meet(&mut self, draft: MeetDraft) -> PersistResult<MeetId> {
        let meet = draft.into_meet();
        let id = meet.id;
        self.meets.push(meet);
        MeetStore::with_key(&mut self.kv, self.config.meets_key.as_str()).save(&self.meets)?;
        Ok(id)
    }

    /// Current team name, empty when unset.
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    /// Title for the team screen: the team name, or `"Team"` when unset.
    pub fn team_title(&self) -> &str {
        if self.team_name.is_empty() {
            "Team"
        } else {
            &self.team_name
        }
    }

    /// Replaces the team name and saves team data.
    pub fn set_team_name(&mut self, name: &str) -> PersistResult<()> {
        self.team_name = name.to_string();
        self.save_team()
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Appends a member and saves team data. Empty names are ignored.
    pub fn add_member(&mut self, name: &str) -> PersistResult<bool> {
        if name.is_empty() {
            return Ok(false);
        }
        self.members.push(name.to_string());
        self.save_team()?;
        Ok(true)
    }

    /// Names offered when picking a swimmer for a lane.
    pub fn swimmer_choices(&self) -> &[String] {
        &self.members
    }

    /// Opens a blank result sheet for one event of a known meet.
    pub fn open_event_sheet(
        &self,
        meet_id: MeetId,
        event: &str,
        selection: LaneSelection,
    ) -> Result<EventSheet, MeetError> {
        if self.meet(meet_id).is_none() {
            return Err(MeetError::UnknownMeet(meet_id));
        }
        Ok(EventSheet::open(meet_id, event, selection))
    }

    /// Opens one blank sheet per standard event, in program order.
    pub fn open_meet_program(
        &self,
        meet_id: MeetId,
        selection: &LaneSelection,
    ) -> Result<Vec<EventSheet>, MeetError> {
        STANDARD_EVENTS
            .iter()
            .map(|event| self.open_event_sheet(meet_id, event, selection.clone()))
            .collect()
    }

    /// Returns the backend.
    pub fn into_inner(self) -> K {
        self.kv
    }

    fn save_team(&mut self) -> PersistResult<()> {
        TeamStore::with_config(&mut self.kv, &self.config).save(&self.team_name, &self.members)
    }
}
