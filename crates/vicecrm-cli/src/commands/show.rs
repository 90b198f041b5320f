use anyhow::Result;

use crate::cli::OutputFormat;
use vicecrm_core::{SettingField, SettingsStore};

pub fn run(store: &SettingsStore, format: OutputFormat) -> Result<()> {
    let settings = store.settings();

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(settings)?);
        return Ok(());
    }

    for field in SettingField::ALL {
        println!("{:34} {}", field.wire_path(), field.read(settings));
    }
    Ok(())
}
