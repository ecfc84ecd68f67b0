//! Durable user preferences and scan history.
//!
//! Backed by a single SQLite database. Preferences are a key/value table;
//! scan history is capped at the ten newest records, enforced on every
//! insert. Missing keys fall back to defaults rather than erroring, so a
//! fresh or partially corrupted database behaves like a first run.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::i18n::Language;
use crate::models::ScanHistoryEntry;
use crate::store::run_migrations;
use crate::Result;

const KEY_LANGUAGE: &str = "language";
const KEY_DISCLAIMER: &str = "disclaimer_accepted";

/// Most recent records kept in scan history
pub const HISTORY_CAP: usize = 10;

/// Persistent preference and history store
pub struct PreferenceStore {
    conn: Connection,
}

impl PreferenceStore {
    /// Open (or create) the store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        run_migrations(&conn)?;
        debug!(path = %path.display(), "opened preference store");
        Ok(Self { conn })
    }

    /// In-memory store, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    }

    /// Stored interface language; `None` until one has been chosen
    pub fn language(&self) -> Result<Option<Language>> {
        Ok(self.get(KEY_LANGUAGE)?.and_then(|v| Language::from_code(&v)))
    }

    pub fn set_language(&self, lang: Language) -> Result<()> {
        self.set(KEY_LANGUAGE, lang.code())
    }

    /// Whether the usage agreement has been accepted; defaults to false
    pub fn disclaimer_accepted(&self) -> Result<bool> {
        Ok(self.get(KEY_DISCLAIMER)?.as_deref() == Some("true"))
    }

    pub fn accept_disclaimer(&self) -> Result<()> {
        self.set(KEY_DISCLAIMER, "true")
    }

    /// Record a completed scan and return the stored entry. Identity is the
    /// completion timestamp in milliseconds, bumped when two scans land in
    /// the same millisecond so ordering stays strict.
    pub fn record_scan(&self, url: &str, score: f64) -> Result<ScanHistoryEntry> {
        let now = Utc::now();
        let max_id: Option<i64> = self
            .conn
            .query_row("SELECT MAX(id) FROM scan_history", [], |row| row.get(0))?;
        let id = now.timestamp_millis().max(max_id.unwrap_or(0) + 1);
        let date = now.format("%Y-%m-%d %H:%M").to_string();

        self.conn.execute(
            "INSERT INTO scan_history (id, url, score, date) VALUES (?1, ?2, ?3, ?4)",
            params![id, url, score, date],
        )?;
        // Keep only the newest records
        self.conn.execute(
            "DELETE FROM scan_history WHERE id NOT IN
             (SELECT id FROM scan_history ORDER BY id DESC LIMIT ?1)",
            params![HISTORY_CAP as i64],
        )?;

        Ok(ScanHistoryEntry {
            id,
            url: url.to_string(),
            score,
            date,
        })
    }

    /// Scan history, newest first
    pub fn history(&self) -> Result<Vec<ScanHistoryEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, url, score, date FROM scan_history ORDER BY id DESC",
        )?;
        let entries = stmt
            .query_map([], |row| {
                Ok(ScanHistoryEntry {
                    id: row.get(0)?,
                    url: row.get(1)?,
                    score: row.get(2)?,
                    date: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// Delete all scan history; preferences are untouched
    pub fn clear_history(&self) -> Result<()> {
        self.conn.execute("DELETE FROM scan_history", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_defaults_to_none() {
        let store = PreferenceStore::open_in_memory().unwrap();
        assert_eq!(store.language().unwrap(), None);
    }

    #[test]
    fn test_language_round_trip() {
        let store = PreferenceStore::open_in_memory().unwrap();
        store.set_language(Language::Az).unwrap();
        assert_eq!(store.language().unwrap(), Some(Language::Az));
        store.set_language(Language::En).unwrap();
        assert_eq!(store.language().unwrap(), Some(Language::En));
    }

    #[test]
    fn test_disclaimer_defaults_to_false() {
        let store = PreferenceStore::open_in_memory().unwrap();
        assert!(!store.disclaimer_accepted().unwrap());
        store.accept_disclaimer().unwrap();
        assert!(store.disclaimer_accepted().unwrap());
    }

    #[test]
    fn test_history_is_capped_newest_first() {
        let store = PreferenceStore::open_in_memory().unwrap();
        for i in 0..15 {
            store.record_scan(&format!("site-{i}.com"), i as f64).unwrap();
        }
        let history = store.history().unwrap();
        assert_eq!(history.len(), HISTORY_CAP);
        // Newest first: site-14 down to site-5
        assert_eq!(history[0].url, "site-14.com");
        assert_eq!(history[9].url, "site-5.com");
    }

    #[test]
    fn test_history_ids_strictly_increase() {
        let store = PreferenceStore::open_in_memory().unwrap();
        let a = store.record_scan("a.com", 10.0).unwrap();
        let b = store.record_scan("b.com", 20.0).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn test_clear_history_keeps_preferences() {
        let store = PreferenceStore::open_in_memory().unwrap();
        store.set_language(Language::Az).unwrap();
        store.record_scan("a.com", 50.0).unwrap();
        store.clear_history().unwrap();
        assert!(store.history().unwrap().is_empty());
        assert_eq!(store.language().unwrap(), Some(Language::Az));
    }
}
