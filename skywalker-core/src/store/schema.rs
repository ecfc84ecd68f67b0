//! Database schema definitions

/// SQL to create all tables
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS preferences (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS scan_history (
    id INTEGER PRIMARY KEY,
    url TEXT NOT NULL,
    score REAL NOT NULL,
    date TEXT NOT NULL
);
"#;
