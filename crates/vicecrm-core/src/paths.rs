use anyhow::Result;
use std::path::PathBuf;

const VICECRM_DIR: &str = ".vicecrm";
const DB_FILE: &str = "vicecrm.db";
const LOGS_DIR: &str = "logs";

/// Environment variable to override the Vice CRM state directory.
const VICECRM_DIR_ENV: &str = "VICECRM_DIR";

/// Resolve the Vice CRM state directory.
/// Priority: VICECRM_DIR env var > ~/.vicecrm/
pub fn resolve_vicecrm_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(VICECRM_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|h| h.join(VICECRM_DIR))
        .ok_or_else(|| anyhow::anyhow!("Failed to determine home directory"))
}

/// Ensure the state directory exists and return its path.
pub fn ensure_vicecrm_dir() -> Result<PathBuf> {
    let dir = resolve_vicecrm_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the database path: ~/.vicecrm/vicecrm.db
pub fn database_path() -> Result<PathBuf> {
    Ok(resolve_vicecrm_dir()?.join(DB_FILE))
}

/// Ensure the state directory exists and return the database path.
pub fn ensure_database_path() -> Result<PathBuf> {
    Ok(ensure_vicecrm_dir()?.join(DB_FILE))
}

/// Convenience helper returning the database path as a UTF-8 string.
pub fn ensure_database_path_string() -> Result<String> {
    Ok(ensure_database_path()?.to_string_lossy().into_owned())
}

/// Get the logs directory: ~/.vicecrm/logs/
pub fn logs_dir() -> Result<PathBuf> {
    let dir = resolve_vicecrm_dir()?.join(LOGS_DIR);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
