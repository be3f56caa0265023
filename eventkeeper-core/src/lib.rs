//! eventkeeper core - timestamped event log and backup freshness
//!
//! This crate follows a hexagonal layout:
//!
//! - **domain**: Core entities (Event, BackupInfo, BackupLookup)
//! - **ports**: Trait definitions for external dependencies (EventRepository)
//! - **services**: Use cases (backup locator, events, status)
//! - **adapters**: Concrete implementations (DuckDB)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::sync::Arc;

use anyhow::Result;

use adapters::duckdb::DuckDbRepository;
use config::Config;
use ports::EventRepository;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{BackupInfo, BackupLookup, BackupReport, BackupSource, Event};

/// Main context for eventkeeper operations
///
/// Holds the configuration, the event store and all services.
pub struct EventKeeperContext {
    pub config: Config,
    pub repository: Arc<dyn EventRepository>,
    pub event_service: EventService,
    pub status_service: StatusService,
    pub backup_locator: BackupLocator,
}

impl EventKeeperContext {
    /// Open the configured database, create the schema and wire services
    pub fn new(config: Config) -> Result<Self> {
        let repository: Arc<dyn EventRepository> =
            Arc::new(DuckDbRepository::new(&config.db_path)?);
        Self::with_repository(config, repository)
    }

    /// Build a context around an existing repository (e.g. in-memory for tests)
    pub fn with_repository(config: Config, repository: Arc<dyn EventRepository>) -> Result<Self> {
        repository.ensure_schema()?;

        let backup_locator = BackupLocator::new(config.backup_dir.clone());
        let event_service = EventService::new(Arc::clone(&repository));
        let status_service = StatusService::new(Arc::clone(&repository), backup_locator.clone());

        Ok(Self {
            config,
            repository,
            event_service,
            status_service,
            backup_locator,
        })
    }
}
