//! Integration tests for preference and history persistence

use skywalker_core::i18n::Language;
use skywalker_core::store::{PreferenceStore, HISTORY_CAP};
use tempfile::TempDir;

#[test]
fn test_preferences_persist_across_reopen() {
    let temp = TempDir::new().expect("should create temp dir");
    let db_path = temp.path().join("skywalker.db");

    {
        let store = PreferenceStore::open(&db_path).expect("should open store");
        store.set_language(Language::Az).expect("should set language");
        store.accept_disclaimer().expect("should accept disclaimer");
        store.record_scan("example.com", 73.0).expect("should record scan");
    }

    // Reopen, simulating app restart
    let store = PreferenceStore::open(&db_path).expect("should reopen store");
    assert_eq!(store.language().expect("should read"), Some(Language::Az));
    assert!(store.disclaimer_accepted().expect("should read"));

    let history = store.history().expect("should read history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].url, "example.com");
    assert_eq!(history[0].score, 73.0);
}

#[test]
fn test_fresh_store_behaves_like_first_run() {
    let temp = TempDir::new().expect("should create temp dir");
    let store = PreferenceStore::open(temp.path().join("fresh.db")).expect("should open");

    assert_eq!(store.language().expect("should read"), None);
    assert!(!store.disclaimer_accepted().expect("should read"));
    assert!(store.history().expect("should read").is_empty());
}

#[test]
fn test_open_creates_missing_parent_dirs() {
    let temp = TempDir::new().expect("should create temp dir");
    let nested = temp.path().join("a").join("b").join("skywalker.db");
    PreferenceStore::open(&nested).expect("should create parents and open");
    assert!(nested.exists());
}

#[test]
fn test_history_cap_survives_reopen() {
    let temp = TempDir::new().expect("should create temp dir");
    let db_path = temp.path().join("skywalker.db");

    {
        let store = PreferenceStore::open(&db_path).expect("should open");
        for i in 0..12 {
            store
                .record_scan(&format!("host-{i}.com"), 50.0 + i as f64)
                .expect("should record");
        }
    }

    let store = PreferenceStore::open(&db_path).expect("should reopen");
    let history = store.history().expect("should read history");
    assert_eq!(history.len(), HISTORY_CAP);
    assert_eq!(history[0].url, "host-11.com");
    assert_eq!(history[HISTORY_CAP - 1].url, "host-2.com");
}

#[test]
fn test_purge_clears_history_only() {
    let temp = TempDir::new().expect("should create temp dir");
    let store = PreferenceStore::open(temp.path().join("skywalker.db")).expect("should open");

    store.accept_disclaimer().expect("should accept");
    store.record_scan("a.com", 10.0).expect("should record");
    store.record_scan("b.com", 20.0).expect("should record");

    store.clear_history().expect("should clear");

    assert!(store.history().expect("should read").is_empty());
    assert!(store.disclaimer_accepted().expect("should read"));
}
