//! Error taxonomy for the settings service.
//!
//! Every variant is recoverable. The worst outcome anywhere in the cycle is
//! a change that was not saved; the in-memory record is never corrupted
//! because writes to it only happen after validation succeeds.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    /// The stored document is not valid JSON. Recovered by falling back to
    /// the default record; logged, never fatal.
    #[error("stored settings are not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// An imported backup document is not valid JSON.
    #[error("backup document is not valid JSON: {0}")]
    Import(#[source] serde_json::Error),

    /// The storage write failed. The in-memory record is retained, so no
    /// data is lost beyond the persistence step itself.
    #[error("failed to persist settings: {0}")]
    Persist(anyhow::Error),

    /// Input rejected at the boundary; the prior value is preserved.
    #[error("{0}")]
    Validation(String),
}
