use anyhow::Result;

use crate::commands::utils::confirm;
use vicecrm_core::SettingsStore;

pub fn run(store: &SettingsStore, yes: bool) -> Result<()> {
    if !yes && !confirm("Reset all settings to their defaults?")? {
        println!("Aborted.");
        return Ok(());
    }

    store.reset()?;
    println!("Settings reset. The next load returns the default record.");
    Ok(())
}
