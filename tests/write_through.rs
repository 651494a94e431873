mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::FailingStore;
use favprimes::prefs::{FileStore, MemoryStore, PreferenceStore};
use favprimes::store::{AppStore, Snapshot};
use favprimes::ui::counter::{CounterIntent, CounterState};
use favprimes::AppError;
use tempfile::TempDir;

fn persisted(prefs: &MemoryStore) -> CounterState {
    let record = prefs
        .read("state")
        .unwrap()
        .expect("snapshot should be persisted");
    CounterState::from(Snapshot::from_record(&record))
}

#[test]
fn every_mutation_writes_the_full_snapshot() {
    let prefs = MemoryStore::new();
    let mut store = AppStore::load(prefs.clone(), "state");

    store.increment().unwrap();
    assert_eq!(persisted(&prefs), *store.state());

    store.increment().unwrap();
    store.add_to_favourites().unwrap();
    assert_eq!(persisted(&prefs), CounterState::new(2, [2]));

    store.decrement().unwrap();
    assert_eq!(persisted(&prefs), CounterState::new(1, [2]));

    store.remove_from_favourites().unwrap();
    assert_eq!(persisted(&prefs), *store.state());
}

#[test]
fn noop_remove_still_persists() {
    let prefs = MemoryStore::new();
    let mut store = AppStore::load(prefs.clone(), "state");

    store.remove_from_favourites().unwrap();

    assert_eq!(prefs.len(), 1);
    assert_eq!(persisted(&prefs), CounterState::default());
}

#[test]
fn reload_restores_previous_state() {
    let prefs = MemoryStore::new();
    {
        let mut store = AppStore::load(prefs.clone(), "state");
        for _ in 0..7 {
            store.increment().unwrap();
        }
        store.add_to_favourites().unwrap();
        store.decrement().unwrap();
    }

    let store = AppStore::load(prefs, "state");
    assert_eq!(store.count(), 6);
    assert!(store.favourite_primes().contains(&7));
    assert!(!store.is_favourite_prime());
}

#[test]
fn count_may_go_negative() {
    let mut store = AppStore::load(MemoryStore::new(), "state");
    store.decrement().unwrap();
    store.decrement().unwrap();
    assert_eq!(store.count(), -2);
    assert!(!store.is_prime());
}

#[test]
fn record_key_isolates_snapshots() {
    let prefs = MemoryStore::new();
    let mut first = AppStore::load(prefs.clone(), "first");
    first.increment().unwrap();

    let second = AppStore::load(prefs.clone(), "second");
    assert_eq!(second.count(), 0);
    assert_eq!(AppStore::load(prefs, "first").count(), 1);
}

#[test]
fn persistence_failure_is_reported_but_state_and_observers_advance() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = AppStore::load(FailingStore { initial: None }, "state");
    let sink = Rc::clone(&seen);
    store.subscribe(move |state| sink.borrow_mut().push(state.count));

    let result = store.increment();

    assert!(matches!(result, Err(AppError::Persist(_))));
    assert_eq!(store.count(), 1);
    assert_eq!(*seen.borrow(), vec![1]);
}

#[test]
fn failing_store_still_loads_existing_snapshot() {
    let initial = Snapshot {
        count: 13,
        favourite_primes: vec![13],
    }
    .to_record();
    let store = AppStore::load(
        FailingStore {
            initial: Some(initial),
        },
        "state",
    );
    assert_eq!(store.count(), 13);
    assert!(store.is_favourite_prime());
    assert!(store.is_prime());
}

#[test]
fn file_store_round_trip_through_container() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.toml");

    let mut store = AppStore::load(FileStore::new(&path), "state");
    store
        .dispatch(CounterIntent::Replace {
            state: CounterState::new(3, [2, 3]),
        })
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[state]"));
    assert!(content.contains("count = 3"));
    assert!(content.contains("favouritePrimes = [2, 3]"));

    let reloaded = AppStore::load(FileStore::new(&path), "state");
    assert_eq!(reloaded.state(), &CounterState::new(3, [2, 3]));
}

#[test]
fn file_store_preserves_other_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "[theme]\nname = \"dark\"\n").unwrap();

    let mut store = AppStore::load(FileStore::new(&path), "state");
    store.increment().unwrap();

    let document: toml::Table = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        document["theme"]["name"],
        toml::Value::String("dark".to_string())
    );
    assert_eq!(document["state"]["count"], toml::Value::Integer(1));
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "not toml at all [[[").unwrap();

    let mut store = AppStore::load(FileStore::new(&path), "state");
    assert_eq!(store.state(), &CounterState::default());

    store.increment().unwrap();
    let reloaded = AppStore::load(FileStore::new(&path), "state");
    assert_eq!(reloaded.count(), 1);
}

#[test]
fn partially_malformed_record_keeps_valid_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "[state]\ncount = \"five\"\nfavouritePrimes = [5, 7]\n").unwrap();

    let store = AppStore::load(FileStore::new(&path), "state");
    assert_eq!(store.state(), &CounterState::new(0, [5, 7]));
}
