use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use swimpal::{
    meet::Meet,
    persist::sqlite::SqliteKv,
    store::{MeetStore, TeamStore},
};

#[test]
fn meets_and_team_survive_reopen() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("settings.db");

    let meets = vec![
        Meet::new("Central High", Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
        Meet::new("São Paulo SC", Utc.with_ymd_and_hms(2024, 3, 8, 18, 0, 0).unwrap()),
    ];

    {
        let mut kv = SqliteKv::open(&db_path).expect("open sqlite");
        MeetStore::new(&mut kv).save(&meets).expect("save meets");
        let mut team = TeamStore::new(&mut kv);
        team.set_team_name("Bullsharks").expect("name");
        team.add_member("Alice").expect("alice");
        team.add_member("Bob").expect("bob");
    }

    let mut kv = SqliteKv::open(&db_path).expect("reopen");
    assert_eq!(MeetStore::new(&mut kv).load().expect("load"), meets);
    let team = TeamStore::new(&mut kv);
    assert_eq!(team.team_name().expect("name"), "Bullsharks");
    assert_eq!(team.members().expect("members"), vec!["Alice", "Bob"]);
}

#[test]
fn corrupt_row_on_disk_falls_back_to_empty() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("corrupt.db");

    {
        let mut kv = SqliteKv::open(&db_path).expect("open sqlite");
        kv.set_raw("meets", 1, b"{not json").expect("plant");
    }

    let mut kv = SqliteKv::open(&db_path).expect("reopen");
    let store = MeetStore::new(&mut kv);
    assert!(store.load().is_err());
    assert!(store.load_or_default().is_empty());
}
