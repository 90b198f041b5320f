//! Vice CRM Core - the settings domain layer
//!
//! Owns the in-memory configuration record and the load / update / save /
//! export / import cycle around it. Consumers (the CLI, or any other front
//! end) drive the record exclusively through [`SettingsStore`] and the fixed
//! field binding table in [`fields`]; nothing here touches a UI.

pub mod error;
pub mod fields;
pub mod logo;
pub mod paths;
pub mod snapshot;
pub mod store;

pub use error::SettingsError;
pub use fields::SettingField;
pub use snapshot::SnapshotEnvelope;
pub use store::SettingsStore;

pub use vicecrm_storage::{BackupFrequency, CrmSettings};
