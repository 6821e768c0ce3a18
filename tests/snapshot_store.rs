use tally::persist::SnapshotStore;

fn store_in_tempdir() -> (SnapshotStore, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = SnapshotStore::new(dir.path().join("snapshot.json"));
    (store, dir)
}

#[test]
fn fresh_store_has_no_count() {
    let (store, _dir) = store_in_tempdir();
    assert_eq!(store.read_count().unwrap(), None);
}

#[test]
fn write_then_read_round_trips() {
    let (store, _dir) = store_in_tempdir();
    store.write_count(-42).unwrap();
    assert_eq!(store.read_count().unwrap(), Some(-42));
}

#[test]
fn write_overwrites_previous_value() {
    let (store, _dir) = store_in_tempdir();
    store.write_count(1).unwrap();
    store.write_count(2).unwrap();
    assert_eq!(store.read_count().unwrap(), Some(2));
}

#[test]
fn remove_leaves_key_absent_but_file_in_place() {
    let (store, _dir) = store_in_tempdir();
    store.write_count(7).unwrap();
    store.remove_count().unwrap();
    assert_eq!(store.read_count().unwrap(), None);
    assert!(store.path().exists());
}

#[test]
fn remove_before_any_write_is_a_noop() {
    let (store, _dir) = store_in_tempdir();
    store.remove_count().unwrap();
    assert_eq!(store.read_count().unwrap(), None);
}

#[test]
fn file_is_a_json_object_keyed_by_count() {
    let (store, _dir) = store_in_tempdir();
    store.write_count(5).unwrap();

    let content = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["count"], serde_json::json!(5));
}

#[test]
fn write_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = SnapshotStore::new(dir.path().join("nested").join("deeper").join("s.json"));
    store.write_count(3).unwrap();
    assert_eq!(store.read_count().unwrap(), Some(3));
}

#[test]
fn corrupt_file_reports_a_parse_error() {
    let (store, _dir) = store_in_tempdir();
    std::fs::write(store.path(), "not json").unwrap();
    assert!(store.read_count().is_err());
}
