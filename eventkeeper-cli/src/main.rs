//! eventkeeper CLI - event log and backup freshness from the terminal

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{add, backup, count, list, serve, status, GlobalOpts};

/// eventkeeper - timestamped event log with backup freshness reporting
#[derive(Parser)]
#[command(name = "ek", version, about, long_about = None)]
struct Cli {
    /// Event database file (overrides DB_PATH)
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    /// Directory holding app-<epoch>.db backups (overrides BACKUP_DIR)
    #[arg(long, global = true)]
    backup_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Listen address (overrides BIND_ADDR)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },

    /// Record an event
    Add {
        /// Event message
        #[arg(default_value = "hello")]
        message: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the most recent events
    List {
        /// Number of events to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count recorded events
    Count {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show event totals and backup freshness
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect backups
    Backup {
        #[command(subcommand)]
        command: backup::BackupCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.command {
        Commands::Serve { .. } => "info",
        _ => "warn",
    };
    commands::init_tracing(default_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOpts {
        db_path: cli.db_path,
        backup_dir: cli.backup_dir,
    };

    match cli.command {
        Commands::Serve { bind } => serve::run(&opts, bind),
        Commands::Add { message, json } => add::run(&opts, &message, json),
        Commands::List { limit, json } => list::run(&opts, limit, json),
        Commands::Count { json } => count::run(&opts, json),
        Commands::Status { json } => status::run(&opts, json),
        Commands::Backup { command } => backup::run(&opts, command),
    }
}
