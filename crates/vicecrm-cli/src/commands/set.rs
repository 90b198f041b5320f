use anyhow::Result;
use colored::Colorize;

use vicecrm_core::SettingsStore;

pub fn run(store: &mut SettingsStore, path: &str, value: &str) -> Result<()> {
    store.apply_field_change(path, value)?;
    store.save()?;

    println!("{} {path} = {value}", "Saved".green().bold());
    Ok(())
}
