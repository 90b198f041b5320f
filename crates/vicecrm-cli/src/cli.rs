use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

#[derive(Parser)]
#[command(name = "vicecrm")]
#[command(version, about = "Vice CRM - settings administration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path (defaults to ~/.vicecrm/vicecrm.db)
    #[arg(long, global = true, env = "VICECRM_DB_PATH")]
    pub db_path: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the full settings record
    Show,

    /// Read one settings field by path (e.g. branding.primaryColor)
    Get {
        /// Field path, section.fieldName
        path: String,
    },

    /// Change one settings field and save
    Set {
        /// Field path, section.fieldName
        path: String,
        /// New value
        value: String,
    },

    /// Clear stored settings so the next load returns defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Backup management
    Backup {
        #[command(subcommand)]
        command: BackupCommands,
    },

    /// Logo management
    Logo {
        #[command(subcommand)]
        command: LogoCommands,
    },
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// Export the current settings to a backup file
    Create {
        /// Output file (defaults to crm-backup-<date>.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Restore settings from a backup file
    Restore {
        /// Backup file to import
        file: PathBuf,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum LogoCommands {
    /// Store a logo file (PNG, JPG or SVG, up to 2 MiB)
    Set {
        /// Image file to store as the logo
        file: PathBuf,
    },

    /// Remove the stored logo
    Clear,
}
