//! Status service - event totals and backup freshness

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use crate::domain::{BackupReport, Event};
use crate::ports::EventRepository;
use crate::services::BackupLocator;

/// Status service combining the event store and the backup directory
pub struct StatusService {
    repository: Arc<dyn EventRepository>,
    locator: BackupLocator,
}

impl StatusService {
    pub fn new(repository: Arc<dyn EventRepository>, locator: BackupLocator) -> Self {
        Self {
            repository,
            locator,
        }
    }

    /// Get overall status summary
    pub fn get_status(&self) -> Result<StatusSummary> {
        let event_count = self.repository.count_events()?;
        let latest_event = self.repository.recent_events(1)?.into_iter().next();
        let backup = self.locator.locate()?.to_report();

        Ok(StatusSummary {
            event_count,
            latest_event,
            backup,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub event_count: i64,
    pub latest_event: Option<Event>,
    pub backup: BackupReport,
}
