//! Event service - record and read timestamped events

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::domain::{format_timestamp, Event};
use crate::ports::EventRepository;

/// Number of events returned by `recent` when no limit is given
pub const DEFAULT_RECENT_LIMIT: usize = 50;

/// Upper bound for a single `recent` read
pub const MAX_RECENT_LIMIT: usize = 500;

/// Event service for recording and listing events
pub struct EventService {
    repository: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    /// Record a message stamped with the current UTC time
    pub fn record(&self, message: &str) -> Result<Event> {
        let timestamp = format_timestamp(Utc::now());
        let event = self.repository.insert_event(&timestamp, message)?;
        info!(id = event.id, "event recorded");
        Ok(event)
    }

    /// Most recent events, newest first
    ///
    /// `None` reads `DEFAULT_RECENT_LIMIT` events; explicit limits are
    /// clamped to `1..=MAX_RECENT_LIMIT`.
    pub fn recent(&self, limit: Option<usize>) -> Result<Vec<Event>> {
        let limit = limit
            .unwrap_or(DEFAULT_RECENT_LIMIT)
            .clamp(1, MAX_RECENT_LIMIT);
        self.repository.recent_events(limit)
    }

    /// Total number of events
    pub fn count(&self) -> Result<i64> {
        self.repository.count_events()
    }
}
