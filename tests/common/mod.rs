//! Shared test utilities.

#![allow(dead_code)]

use tally::config::Config;
use tally::persist::SnapshotStore;
use tally::ui::app::App;
use tempfile::TempDir;

/// App wired to a snapshot file inside a fresh temp dir. The TempDir
/// must outlive the app or the store writes into a vanished path.
pub fn test_app() -> (App, SnapshotStore, TempDir) {
    test_app_with(Config::default())
}

pub fn test_app_with(config: Config) -> (App, SnapshotStore, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = SnapshotStore::new(dir.path().join("snapshot.json"));
    let app = App::new(&config, store.clone());
    (app, store, dir)
}

/// Drive every armed debounce timer to completion, as though each
/// slept out its full window with no further changes.
pub fn flush_saves(app: &mut App) {
    for generation in app.drain_armed_saves() {
        app.on_save_elapsed(generation);
    }
}
