//! Swim-meet roster state with pluggable key-value persistence.
//!
//! # Examples
//!
//! Saving and loading meets with the in-memory backend:
//! ```
//! use chrono::{TimeZone, Utc};
//! use swimpal::{
//!     meet::Meet,
//!     persist::memory::MemoryKv,
//!     store::MeetStore,
//! };
//!
//! let mut store = MeetStore::new(MemoryKv::new());
//! assert!(store.load().expect("load").is_empty());
//!
//! let date = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
//! store.save(&[Meet::new("Central High", date)]).expect("save");
//! let meets = store.load().expect("load");
//! assert_eq!(meets[0].opponent, "Central High");
//! ```
//!
//! A roster session on a SQLite settings file:
//! ```no_run
//! use chrono::Utc;
//! use swimpal::{
//!     config::StoreConfig,
//!     meet::MeetDraft,
//!     persist::sqlite::SqliteKv,
//!     roster::Roster,
//! };
//!
//! let kv = SqliteKv::open("swimpal.db").expect("open sqlite");
//! let mut roster = Roster::open(kv, StoreConfig::default());
//! roster.set_team_name("Bullsharks").expect("team name");
//! roster.add_member("Alice").expect("member");
//! let _id = roster
//!     .add_meet(MeetDraft { opponent: "Central High".to_string(), date: Utc::now() })
//!     .expect("meet");
//! ```
#![warn(missing_docs)]

/// Storage key configuration.
pub mod config;
/// Meet records, event sheets and lane selection.
pub mod meet;
/// Key-value capability and its backends.
pub mod persist;
/// In-memory session over the stores.
pub mod roster;
/// Meet and team stores.
pub mod store;
/// Shared identifiers and constants.
pub mod types;
