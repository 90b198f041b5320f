use anyhow::{Context, Result};
use tracing::debug;
use vicecrm_core::{SettingsStore, paths};

/// Open the settings store, resolving the database location from the CLI
/// flag, the environment, or the default state directory.
pub fn open_store(db_path: Option<&str>) -> Result<SettingsStore> {
    let db_path = match db_path {
        Some(path) => path.to_string(),
        None => paths::ensure_database_path_string()?,
    };

    debug!("Opening settings database at {db_path}");
    SettingsStore::open(&db_path)
        .with_context(|| format!("Failed to open settings database at {db_path}"))
}
