//! Backup snapshot envelope.
//!
//! Exported documents wrap the record with timestamp and format metadata so
//! a restore can tell what it is looking at. Import also accepts a bare
//! record for hand-written documents.

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use vicecrm_storage::CrmSettings;

/// Envelope format version.
pub const SNAPSHOT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEnvelope {
    pub settings: CrmSettings,
    pub timestamp: String,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl SnapshotEnvelope {
    /// Wrap a record as a manual backup taken at `at`.
    pub fn new(settings: CrmSettings, at: DateTime<Utc>) -> Self {
        Self {
            settings,
            timestamp: iso_timestamp(at),
            version: SNAPSHOT_VERSION.to_string(),
            kind: "manual".to_string(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// ISO-8601 timestamp with millisecond precision and a `Z` suffix.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Default backup file name for a given moment: `crm-backup-<date>.json`.
pub fn backup_file_name(at: DateTime<Utc>) -> String {
    format!("crm-backup-{}.json", at.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_envelope_shape() {
        let envelope = SnapshotEnvelope::new(CrmSettings::default(), fixed_clock());
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["version"], "1.0");
        assert_eq!(json["type"], "manual");
        assert_eq!(json["timestamp"], "2024-03-05T10:30:00.000Z");
        assert_eq!(json["settings"]["branding"]["companyName"], "Vice");
    }

    #[test]
    fn test_envelope_is_deterministic_for_fixed_clock() {
        let a = SnapshotEnvelope::new(CrmSettings::default(), fixed_clock());
        let b = SnapshotEnvelope::new(CrmSettings::default(), fixed_clock());
        assert_eq!(a.to_json_pretty().unwrap(), b.to_json_pretty().unwrap());
    }

    #[test]
    fn test_backup_file_name() {
        assert_eq!(backup_file_name(fixed_clock()), "crm-backup-2024-03-05.json");
    }
}
