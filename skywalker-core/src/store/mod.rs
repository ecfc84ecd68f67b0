//! Local persistence: preferences and scan history

mod migrations;
mod preferences;
mod schema;

pub use migrations::run_migrations;
pub use preferences::{PreferenceStore, HISTORY_CAP};
