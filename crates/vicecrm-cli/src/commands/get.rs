use anyhow::Result;

use vicecrm_core::SettingsStore;

pub fn run(store: &SettingsStore, path: &str) -> Result<()> {
    println!("{}", store.field(path)?);
    Ok(())
}
