//! Settings storage - the persisted configuration record.
//!
//! The record is stored as a single camelCase JSON document so that backup
//! files exported by earlier releases stay interchangeable with this build.

use anyhow::Result;
use once_cell::sync::Lazy;
use redb::{Database, ReadableDatabase, TableDefinition};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

const SETTINGS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("settings");

/// Storage key holding the serialized configuration record.
pub const SETTINGS_KEY: &str = "crmSettings";

// Default configuration constants
const DEFAULT_SYSTEM_NAME: &str = "Profit CRM";
const DEFAULT_SYSTEM_VERSION: &str = "الإصدار 5";
const DEFAULT_SYSTEM_DESCRIPTION: &str = "إصدار قادة السوق العقاري";
const DEFAULT_LANGUAGE: &str = "ar";
const DEFAULT_TIMEZONE: &str = "Asia/Riyadh";
const DEFAULT_DATE_FORMAT: &str = "dd-mm-yyyy";
const DEFAULT_COMPANY_NAME: &str = "Vice";
const DEFAULT_SYSTEM_BADGE: &str = "CRM";
const DEFAULT_PRIMARY_COLOR: &str = "#667eea";
const DEFAULT_SECONDARY_COLOR: &str = "#764ba2";
const DEFAULT_BACKGROUND_COLOR: &str = "#f8f9fa";
const DEFAULT_MIN_PASSWORD_LENGTH: u32 = 8;
const DEFAULT_PASSWORD_EXPIRY_DAYS: u32 = 90;
const DEFAULT_SESSION_TIMEOUT_MINUTES: u32 = 60;
const DEFAULT_BACKUP_LOCATION: &str = "local";

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex color pattern is valid")
});

/// Check a `#RGB` / `#RRGGBB` color string.
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// General section: identity and locale of the installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    pub system_name: String,
    pub system_version: String,
    pub system_description: String,
    pub default_language: String,
    pub timezone: String,
    pub date_format: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            system_name: DEFAULT_SYSTEM_NAME.to_string(),
            system_version: DEFAULT_SYSTEM_VERSION.to_string(),
            system_description: DEFAULT_SYSTEM_DESCRIPTION.to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Branding section: names, colors and the optional logo data URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingSettings {
    pub company_name: String,
    pub system_badge: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub logo_url: Option<String>,
}

impl Default for BrandingSettings {
    fn default() -> Self {
        Self {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            system_badge: DEFAULT_SYSTEM_BADGE.to_string(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            logo_url: None,
        }
    }
}

/// Security section. `password_expiry` is in days (0 = never),
/// `session_timeout` in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub require_strong_password: bool,
    pub min_password_length: u32,
    pub password_expiry: u32,
    pub session_timeout: u32,
    pub enable_two_factor: bool,
    pub log_login_attempts: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            require_strong_password: true,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            password_expiry: DEFAULT_PASSWORD_EXPIRY_DAYS,
            session_timeout: DEFAULT_SESSION_TIMEOUT_MINUTES,
            enable_two_factor: false,
            log_login_attempts: true,
        }
    }
}

/// How often automatic backups run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl BackupFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl std::str::FromStr for BackupFrequency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(anyhow::anyhow!("Unknown backup frequency: {other}")),
        }
    }
}

/// Backup section. `last_backup` is an ISO-8601 timestamp string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSettings {
    pub auto_backup_frequency: BackupFrequency,
    pub last_backup: Option<String>,
    pub backup_location: String,
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            auto_backup_frequency: BackupFrequency::Weekly,
            last_backup: None,
            backup_location: DEFAULT_BACKUP_LOCATION.to_string(),
        }
    }
}

/// The full configuration record. All four sections are always present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CrmSettings {
    pub general: GeneralSettings,
    pub branding: BrandingSettings,
    pub security: SecuritySettings,
    pub backup: BackupSettings,
}

impl CrmSettings {
    /// Validate invariants that must hold before the record is persisted.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("branding.primaryColor", &self.branding.primary_color),
            ("branding.secondaryColor", &self.branding.secondary_color),
            ("branding.backgroundColor", &self.branding.background_color),
        ] {
            if !is_valid_hex_color(value) {
                return Err(anyhow::anyhow!("{field} is not a valid hex color: {value}"));
            }
        }

        if self.security.min_password_length == 0 {
            return Err(anyhow::anyhow!(
                "security.minPasswordLength must be at least 1"
            ));
        }

        Ok(())
    }
}

/// Merge a stored or imported JSON document over `base` at section
/// granularity. A section is taken from `doc` only when it deserializes
/// completely; otherwise the base section is kept whole, so no sparse
/// per-field mixing can occur.
pub fn merge_over(base: &CrmSettings, doc: &Value) -> CrmSettings {
    CrmSettings {
        general: section_or(doc, "general", &base.general),
        branding: section_or(doc, "branding", &base.branding),
        security: section_or(doc, "security", &base.security),
        backup: section_or(doc, "backup", &base.backup),
    }
}

fn section_or<T>(doc: &Value, key: &str, fallback: &T) -> T
where
    T: DeserializeOwned + Clone,
{
    match doc.get(key) {
        Some(section) => match serde_json::from_value(section.clone()) {
            Ok(section) => section,
            Err(err) => {
                warn!("Ignoring incomplete `{key}` section: {err}");
                fallback.clone()
            }
        },
        None => fallback.clone(),
    }
}

/// Raw storage for the configuration record.
#[derive(Debug, Clone)]
pub struct SettingsStorage {
    db: Arc<Database>,
}

impl SettingsStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(SETTINGS_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Read the stored document, if any.
    pub fn get_raw(&self) -> Result<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SETTINGS_TABLE)?;

        if let Some(data) = table.get(SETTINGS_KEY)? {
            Ok(Some(data.value().to_vec()))
        } else {
            Ok(None)
        }
    }

    /// Write the stored document.
    pub fn put_raw(&self, data: &[u8]) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SETTINGS_TABLE)?;
            table.insert(SETTINGS_KEY, data)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Persist the full configuration record.
    pub fn save_settings(&self, settings: &CrmSettings) -> Result<()> {
        let json = serde_json::to_vec(settings)?;
        self.put_raw(&json)
    }

    /// Remove the stored entry, returns true if one existed.
    pub fn clear(&self) -> Result<bool> {
        let write_txn = self.db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(SETTINGS_TABLE)?;
            table.remove(SETTINGS_KEY)?.is_some()
        };
        write_txn.commit()?;
        Ok(existed)
    }

    /// Check if a stored entry exists.
    pub fn exists(&self) -> Result<bool> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SETTINGS_TABLE)?;
        Ok(table.get(SETTINGS_KEY)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn setup() -> (SettingsStorage, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let storage = SettingsStorage::new(db).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_default_record() {
        let settings = CrmSettings::default();

        assert_eq!(settings.branding.company_name, "Vice");
        assert_eq!(settings.security.min_password_length, 8);
        assert_eq!(settings.backup.auto_backup_frequency, BackupFrequency::Weekly);
        assert_eq!(settings.branding.logo_url, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_hex_color_validation() {
        assert!(is_valid_hex_color("#fff"));
        assert!(is_valid_hex_color("#FFAA00"));
        assert!(!is_valid_hex_color("fff"));
        assert!(!is_valid_hex_color("#ffaa0"));
        assert!(!is_valid_hex_color("#gggggg"));
    }

    #[test]
    fn test_validate_rejects_bad_color() {
        let mut settings = CrmSettings::default();
        settings.branding.primary_color = "#ffaa0".to_string();

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_save_and_read_round_trip() {
        let (storage, _temp_dir) = setup();

        let mut settings = CrmSettings::default();
        settings.branding.primary_color = "#123456".to_string();
        storage.save_settings(&settings).unwrap();

        let raw = storage.get_raw().unwrap().unwrap();
        let doc: Value = serde_json::from_slice(&raw).unwrap();
        let loaded = merge_over(&CrmSettings::default(), &doc);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(CrmSettings::default()).unwrap();

        assert_eq!(json["general"]["systemName"], "Profit CRM");
        assert_eq!(json["security"]["minPasswordLength"], 8);
        assert_eq!(json["backup"]["autoBackupFrequency"], "weekly");
        assert_eq!(json["branding"]["logoUrl"], Value::Null);
    }

    #[test]
    fn test_merge_takes_whole_sections() {
        let defaults = CrmSettings::default();
        let doc = json!({
            "security": {
                "requireStrongPassword": false,
                "minPasswordLength": 12,
                "passwordExpiry": 30,
                "sessionTimeout": 15,
                "enableTwoFactor": true,
                "logLoginAttempts": false
            }
        });

        let merged = merge_over(&defaults, &doc);

        assert_eq!(merged.security.min_password_length, 12);
        assert!(merged.security.enable_two_factor);
        // Sections absent from the document come from the base record.
        assert_eq!(merged.general, defaults.general);
        assert_eq!(merged.branding, defaults.branding);
        assert_eq!(merged.backup, defaults.backup);
    }

    #[test]
    fn test_merge_ignores_sparse_section() {
        let defaults = CrmSettings::default();
        let doc = json!({
            "branding": { "companyName": "Acme" }
        });

        let merged = merge_over(&defaults, &doc);

        // The sparse section does not deserialize, so the base section wins.
        assert_eq!(merged.branding, defaults.branding);
    }

    #[test]
    fn test_clear_removes_entry() {
        let (storage, _temp_dir) = setup();

        assert!(!storage.exists().unwrap());
        storage.save_settings(&CrmSettings::default()).unwrap();
        assert!(storage.exists().unwrap());

        assert!(storage.clear().unwrap());
        assert!(!storage.exists().unwrap());
        assert!(!storage.clear().unwrap());
    }

    #[test]
    fn test_backup_frequency_parsing() {
        assert_eq!(
            "daily".parse::<BackupFrequency>().unwrap(),
            BackupFrequency::Daily
        );
        assert!("hourly".parse::<BackupFrequency>().is_err());
    }
}
