//! Configuration management
//!
//! The service is configured through environment variables, compatible with
//! the container setup the backup producer already uses:
//!
//! | variable     | default          |
//! |--------------|------------------|
//! | `DB_PATH`    | `/data/app.db`   |
//! | `BACKUP_DIR` | `/backup`        |
//! | `BIND_ADDR`  | `0.0.0.0:8080`   |
//!
//! Nothing below this module reads the environment; components receive the
//! resolved values explicitly.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::result::{Error, Result};

pub const DB_PATH_VAR: &str = "DB_PATH";
pub const BACKUP_DIR_VAR: &str = "BACKUP_DIR";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

pub const DEFAULT_DB_PATH: &str = "/data/app.db";
pub const DEFAULT_BACKUP_DIR: &str = "/backup";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Resolved eventkeeper configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Event database file
    pub db_path: PathBuf,
    /// Directory scanned for `app-<epoch>.db` backups
    pub backup_dir: PathBuf,
    /// HTTP listen address
    pub bind_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

impl Config {
    /// Load config from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config from an arbitrary variable source
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind_addr = match get(BIND_ADDR_VAR) {
            Some(raw) => raw.trim().parse().map_err(|e| {
                Error::config(format!("{} '{}' is not a socket address: {}", BIND_ADDR_VAR, raw, e))
            })?,
            None => defaults.bind_addr,
        };

        Ok(Self {
            db_path: get(DB_PATH_VAR).map(PathBuf::from).unwrap_or(defaults.db_path),
            backup_dir: get(BACKUP_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.backup_dir),
            bind_addr,
        })
    }

    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    pub fn with_backup_dir(mut self, backup_dir: impl Into<PathBuf>) -> Self {
        self.backup_dir = backup_dir.into();
        self
    }

    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }
}
