use chrono::{DateTime, TimeZone, Utc};

use swimpal::{
    meet::Meet,
    persist::{KvStore, KvValue, PersistError, memory::MemoryKv},
    store::MeetStore,
};

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[test]
fn load_before_any_save_is_empty() {
    let store = MeetStore::new(MemoryKv::new());
    assert!(store.load().expect("load").is_empty());
    assert!(store.load_or_default().is_empty());
}

#[test]
fn central_high_round_trips_with_id() {
    let mut store = MeetStore::new(MemoryKv::new());
    let meet = Meet::new("Central High", day(2024, 3, 1));
    store.save(std::slice::from_ref(&meet)).expect("save");

    let loaded = store.load().expect("load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].opponent, "Central High");
    assert_eq!(loaded[0].date, day(2024, 3, 1));
    assert!(!loaded[0].id.to_string().is_empty());
    assert_eq!(loaded[0].id, meet.id);
}

#[test]
fn many_meets_keep_order_and_text() {
    let mut store = MeetStore::new(MemoryKv::new());
    let meets = vec![
        Meet::new("Westview", day(2024, 1, 12)),
        Meet::new("Lycée Français", day(2023, 12, 2)),
        Meet::new("北高校", day(2024, 2, 29)),
        Meet::new("", day(1999, 12, 31)),
    ];
    store.save(&meets).expect("save");
    assert_eq!(store.load().expect("load"), meets);
}

#[test]
fn saving_empty_list_round_trips() {
    let mut store = MeetStore::new(MemoryKv::new());
    store.save(&[Meet::new("Westview", day(2024, 1, 12))]).expect("save");
    store.save(&[]).expect("save empty");
    assert!(store.load().expect("load").is_empty());
}

#[test]
fn second_save_replaces_first() {
    let mut store = MeetStore::new(MemoryKv::new());
    let a = vec![Meet::new("A", day(2024, 1, 1)), Meet::new("A2", day(2024, 1, 2))];
    let b = vec![Meet::new("B", day(2024, 2, 1))];
    store.save(&a).expect("save a");
    store.save(&b).expect("save b");
    assert_eq!(store.load().expect("load"), b);
}

#[test]
fn corrupt_blob_is_a_decode_error_and_defaults_to_empty() {
    let mut kv = MemoryKv::new();
    kv.set("meets", KvValue::Bytes(b"\xde\xad\xbe\xef".to_vec())).unwrap();
    let store = MeetStore::new(kv);

    assert!(matches!(store.load(), Err(PersistError::Decode(_))));
    assert!(store.load_or_default().is_empty());
}

#[test]
fn wrong_value_kind_is_a_decode_error() {
    let mut kv = MemoryKv::new();
    kv.set("meets", KvValue::Text("[]".into())).unwrap();
    let store = MeetStore::new(kv);
    assert!(matches!(store.load(), Err(PersistError::Decode(_))));
    assert!(store.load_or_default().is_empty());
}

#[test]
fn custom_key_leaves_default_key_untouched() {
    let mut store = MeetStore::with_key(MemoryKv::new(), "jv.meets");
    store.save_or_log(&[Meet::new("Eastside", day(2024, 4, 5))]);
    assert_eq!(store.key(), "jv.meets");

    let kv = store.into_inner();
    assert!(kv.get("meets").unwrap().is_none());
    assert!(matches!(kv.get("jv.meets").unwrap(), Some(KvValue::Bytes(_))));
}
