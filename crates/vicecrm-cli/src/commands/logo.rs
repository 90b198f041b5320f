use anyhow::Result;
use colored::Colorize;

use crate::cli::LogoCommands;
use vicecrm_core::SettingsStore;

pub fn run(store: &mut SettingsStore, command: LogoCommands) -> Result<()> {
    match command {
        LogoCommands::Set { file } => {
            store.set_logo(&file)?;
            store.save()?;

            println!("{} {}", "Logo stored from".green().bold(), file.display());
            Ok(())
        }
        LogoCommands::Clear => {
            store.clear_logo();
            store.save()?;

            println!("Logo removed.");
            Ok(())
        }
    }
}
