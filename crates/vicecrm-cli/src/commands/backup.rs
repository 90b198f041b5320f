use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::BackupCommands;
use crate::commands::utils::confirm;
use vicecrm_core::{SettingsStore, snapshot};

pub fn run(store: &mut SettingsStore, command: BackupCommands) -> Result<()> {
    match command {
        BackupCommands::Create { output } => {
            let path = output
                .unwrap_or_else(|| PathBuf::from(snapshot::backup_file_name(Utc::now())));
            store.create_backup(&path)?;

            println!("{} {}", "Backup written to".green().bold(), path.display());
            Ok(())
        }
        BackupCommands::Restore { file, yes } => {
            if !yes && !confirm("Restore this backup? Current settings will be replaced.")? {
                println!("Aborted.");
                return Ok(());
            }

            let raw = std::fs::read(&file)
                .with_context(|| format!("Failed to read backup file {}", file.display()))?;
            store.import_snapshot(&raw)?;
            store.save()?;

            println!("{}", "Backup restored.".green().bold());
            Ok(())
        }
    }
}
