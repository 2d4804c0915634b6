//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::time::Duration;

use itemflow::backend::{DataStore, Record};
use itemflow::config::Config;
use itemflow::effects::ItemEffects;
use itemflow::items::{ItemsAction, ItemsReducer};
use itemflow::mvi::Dispatcher;
use itemflow::runtime::Store;
use itemflow::shutdown::ShutdownCoordinator;
use tempfile::TempDir;
use tokio::sync::mpsc;

pub const DELAY: Duration = Duration::from_millis(4000);

/// Backend with the two demo records.
pub fn demo_backend() -> DataStore {
    DataStore::from_values(["one", "two"])
}

pub fn demo_records() -> Vec<Record> {
    vec![Record::new(0, "one"), Record::new(1, "two")]
}

/// Effects wired to a bare channel, without the store loop.
pub fn effects_harness(
    backend: DataStore,
) -> (
    ItemEffects,
    Dispatcher<ItemsAction>,
    mpsc::UnboundedReceiver<ItemsAction>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let effects = ItemEffects::new(backend, &Config::default());
    (effects, Dispatcher::new(tx), rx)
}

/// Drain everything currently queued on the receiver.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<ItemsAction>) -> Vec<ItemsAction> {
    let mut out = Vec::new();
    while let Ok(action) = rx.try_recv() {
        out.push(action);
    }
    out
}

/// Running store over the demo backend.
pub fn spawn_store(backend: DataStore) -> (Store<ItemsReducer>, ShutdownCoordinator) {
    let shutdown = ShutdownCoordinator::new();
    let effects = ItemEffects::new(backend, &Config::default());
    let store = Store::<ItemsReducer>::spawn(effects, shutdown.handle());
    (store, shutdown)
}

/// Write a temporary config file.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}
