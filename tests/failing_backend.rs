use chrono::{TimeZone, Utc};

use swimpal::{
    config::StoreConfig,
    meet::{Meet, MeetDraft},
    persist::{KvStore, KvValue, PersistError, PersistResult},
    roster::Roster,
    store::{MeetStore, TeamStore},
};

/// Backend whose every call fails.
struct Unavailable;

impl KvStore for Unavailable {
    fn get(&self, _key: &str) -> PersistResult<Option<KvValue>> {
        Err(PersistError::Message("settings unavailable".to_string()))
    }

    fn set(&mut self, _key: &str, _value: KvValue) -> PersistResult<()> {
        Err(PersistError::Message("settings unavailable".to_string()))
    }

    fn remove(&mut self, _key: &str) -> PersistResult<bool> {
        Err(PersistError::Message("settings unavailable".to_string()))
    }
}

fn meet() -> Meet {
    Meet::new("Central High", Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
}

#[test]
fn meet_save_failure_is_swallowed_and_load_defaults_to_empty() {
    let mut store = MeetStore::new(Unavailable);
    store.save_or_log(&[meet()]);

    assert!(matches!(store.save(&[meet()]), Err(PersistError::Message(_))));
    assert!(matches!(store.load(), Err(PersistError::Message(_))));
    assert!(store.load_or_default().is_empty());
}

#[test]
fn team_save_failure_is_swallowed_and_reads_default_to_empty() {
    let mut team = TeamStore::new(Unavailable);
    team.save_or_log("Bullsharks", &["Alice".to_string()]);

    assert!(team.team_name().is_err());
    assert!(team.members().is_err());
    assert_eq!(team.team_name_or_default(), "");
    assert!(team.members_or_default().is_empty());
}

#[test]
fn lenient_member_append_survives_failed_write() {
    let mut team = TeamStore::new(Unavailable);
    assert!(team.add_member("Alice").is_err());
    assert!(team.add_member_or_log("Alice"));
    assert!(!team.add_member_or_log(""));
}

#[test]
fn roster_keeps_in_memory_state_when_writes_fail() {
    let mut roster = Roster::open(Unavailable, StoreConfig::default());
    assert!(roster.meets().is_empty());

    let draft = MeetDraft {
        opponent: "Central High".to_string(),
        date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
    };
    assert!(roster.add_meet(draft).is_err());
    assert_eq!(roster.meets().len(), 1);

    assert!(roster.add_member("Alice").is_err());
    assert_eq!(roster.members(), ["Alice"]);
}
