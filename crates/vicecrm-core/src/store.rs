//! The settings store - single source of truth for the configuration record.
//!
//! The record is read once when the store opens, mutated only through the
//! explicit update paths, and persisted only when `save` is called. `reset`
//! clears the stored entry without touching the in-memory record; the next
//! `reload` (or a fresh open) then yields the default record.

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

use crate::error::SettingsError;
use crate::fields::SettingField;
use crate::logo;
use crate::snapshot::{self, SnapshotEnvelope};
use vicecrm_storage::{CrmSettings, SettingsStorage, Storage, merge_over};

pub struct SettingsStore {
    storage: SettingsStorage,
    settings: CrmSettings,
}

impl SettingsStore {
    /// Open the store against a database file, loading the current record.
    pub fn open(db_path: &str) -> Result<Self> {
        let storage = Storage::new(db_path)?;
        Self::new(storage.settings)
    }

    /// Build a store over an existing settings table, loading the record.
    pub fn new(storage: SettingsStorage) -> Result<Self> {
        let settings = load_settings(&storage)?;
        Ok(Self { storage, settings })
    }

    /// The current in-memory record. All mutation goes through the update
    /// paths; callers never receive a mutable reference to keep.
    pub fn settings(&self) -> &CrmSettings {
        &self.settings
    }

    /// Apply a scoped mutation to the record without validation. `save`
    /// validates before anything reaches storage.
    pub fn update(&mut self, mutate: impl FnOnce(&mut CrmSettings)) {
        mutate(&mut self.settings);
    }

    /// Apply a raw field change from the UI layer. Parsing and validation
    /// happen at this boundary; the record is untouched when the value is
    /// rejected.
    pub fn apply_field_change(&mut self, path: &str, raw: &str) -> Result<(), SettingsError> {
        let field: SettingField = path.parse()?;
        field.apply(&mut self.settings, raw)
    }

    /// Read one leaf field as its wire string.
    pub fn field(&self, path: &str) -> Result<String, SettingsError> {
        let field: SettingField = path.parse()?;
        Ok(field.read(&self.settings))
    }

    /// Validate and persist the current record.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.settings
            .validate()
            .map_err(|err| SettingsError::Validation(err.to_string()))?;
        self.storage
            .save_settings(&self.settings)
            .map_err(SettingsError::Persist)?;
        info!("Settings saved");
        Ok(())
    }

    /// Export the current record as a backup envelope stamped with the
    /// current time.
    pub fn export_snapshot(&self) -> SnapshotEnvelope {
        SnapshotEnvelope::new(self.settings.clone(), Utc::now())
    }

    /// Merge a backup document (envelope or bare record) over the current
    /// record at section granularity. The result is not persisted; call
    /// `save` to commit.
    pub fn import_snapshot(&mut self, raw: &[u8]) -> Result<&CrmSettings, SettingsError> {
        let doc: Value = serde_json::from_slice(raw).map_err(SettingsError::Import)?;
        let body = match doc.get("settings") {
            Some(settings) if !settings.is_null() => settings,
            _ => &doc,
        };
        self.settings = merge_over(&self.settings, body);
        Ok(&self.settings)
    }

    /// Write a backup file, then stamp `backup.lastBackup` and save.
    pub fn create_backup(&mut self, path: &Path) -> Result<(), SettingsError> {
        let now = Utc::now();
        let envelope = SnapshotEnvelope::new(self.settings.clone(), now);
        let json = envelope.to_json_pretty().map_err(SettingsError::Persist)?;
        std::fs::write(path, json).map_err(|err| {
            SettingsError::Persist(anyhow::anyhow!(
                "Failed to write backup file {}: {err}",
                path.display()
            ))
        })?;

        self.settings.backup.last_backup = Some(snapshot::iso_timestamp(now));
        self.save()
    }

    /// Store an uploaded logo as a data URI after type and size checks.
    /// The result is not persisted; call `save` to commit.
    pub fn set_logo(&mut self, path: &Path) -> Result<(), SettingsError> {
        let uri = logo::data_uri_from_file(path)?;
        self.settings.branding.logo_url = Some(uri);
        Ok(())
    }

    /// Drop the stored logo. Not persisted until `save`.
    pub fn clear_logo(&mut self) {
        self.settings.branding.logo_url = None;
    }

    /// Remove the persisted entry. The in-memory record stays as it is
    /// until the next `reload`.
    pub fn reset(&self) -> Result<(), SettingsError> {
        self.storage.clear().map_err(SettingsError::Persist)?;
        info!("Stored settings cleared");
        Ok(())
    }

    /// Re-read the record from storage, discarding unsaved changes.
    pub fn reload(&mut self) -> Result<()> {
        self.settings = load_settings(&self.storage)?;
        Ok(())
    }
}

/// Read the stored document and merge it over defaults. Absent or
/// unparsable documents degrade to the default record.
fn load_settings(storage: &SettingsStorage) -> Result<CrmSettings> {
    let defaults = CrmSettings::default();
    let Some(raw) = storage.get_raw().context("Failed to read stored settings")? else {
        return Ok(defaults);
    };

    match serde_json::from_slice::<Value>(&raw) {
        Ok(doc) => Ok(merge_over(&defaults, &doc)),
        Err(err) => {
            warn!("{}, falling back to defaults", SettingsError::Parse(err));
            Ok(defaults)
        }
    }
}
