mod cli;
mod commands;
mod error;
mod setup;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use vicecrm_core::paths;

fn main() {
    let cli = Cli::parse();

    // Configure logging: write to a rolling file so command output stays clean
    let _guard = init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        error::handle_error(err);
    }
}

fn init_logging(verbose: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = paths::logs_dir().ok()?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "vicecrm.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "info" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();

    Some(guard)
}

fn run(cli: Cli) -> Result<()> {
    let mut store = setup::open_store(cli.db_path.as_deref())?;

    match cli.command {
        Commands::Show => commands::show::run(&store, cli.format),
        Commands::Get { path } => commands::get::run(&store, &path),
        Commands::Set { path, value } => commands::set::run(&mut store, &path, &value),
        Commands::Reset { yes } => commands::reset::run(&store, yes),
        Commands::Backup { command } => commands::backup::run(&mut store, command),
        Commands::Logo { command } => commands::logo::run(&mut store, command),
    }
}
