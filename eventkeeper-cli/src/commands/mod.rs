//! CLI command implementations

pub mod add;
pub mod backup;
pub mod count;
pub mod list;
pub mod serve;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use eventkeeper_core::config::Config;
use eventkeeper_core::EventKeeperContext;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Options shared by every subcommand
pub struct GlobalOpts {
    pub db_path: Option<PathBuf>,
    pub backup_dir: Option<PathBuf>,
}

/// Initialize logging to stderr, honoring RUST_LOG
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve configuration: environment first, then command-line overrides
pub fn get_config(opts: &GlobalOpts) -> Result<Config> {
    let mut config = Config::from_env().context("Invalid environment configuration")?;
    if let Some(db_path) = &opts.db_path {
        config = config.with_db_path(db_path);
    }
    if let Some(backup_dir) = &opts.backup_dir {
        config = config.with_backup_dir(backup_dir);
    }
    debug!(
        db_path = %config.db_path.display(),
        backup_dir = %config.backup_dir.display(),
        "resolved configuration"
    );
    Ok(config)
}

/// Open the event database and wire services
pub fn get_context(opts: &GlobalOpts) -> Result<EventKeeperContext> {
    let config = get_config(opts)?;
    let db_path = config.db_path.clone();
    EventKeeperContext::new(config)
        .with_context(|| format!("Failed to open event database {}", db_path.display()))
}
