//! Vice CRM Storage - persistence layer for the settings service
//!
//! This crate provides the persistence layer for Vice CRM, using redb as the
//! embedded database. It owns the configuration data model and the raw
//! read/write path; the settings lifecycle (load, merge, export, import) is
//! driven by the vicecrm-core crate.
//!
//! # Tables
//!
//! - `settings` - the configuration record, one JSON document under the
//!   `crmSettings` key

pub mod settings;

use anyhow::Result;
use redb::Database;
use std::sync::Arc;

pub use settings::{
    BackupFrequency, BackupSettings, BrandingSettings, CrmSettings, GeneralSettings,
    SETTINGS_KEY, SecuritySettings, SettingsStorage, is_valid_hex_color, merge_over,
};

/// Central storage manager that initializes all storage subsystems
pub struct Storage {
    db: Arc<Database>,
    pub settings: SettingsStorage,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will create the database file if it doesn't exist and initialize
    /// all required tables.
    pub fn new(path: &str) -> Result<Self> {
        let db = Arc::new(Database::create(path)?);
        let settings = SettingsStorage::new(db.clone())?;

        Ok(Self { db, settings })
    }

    /// Get a reference to the underlying database
    pub fn get_db(&self) -> Arc<Database> {
        self.db.clone()
    }
}
