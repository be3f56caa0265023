//! Repository port - event store abstraction

use anyhow::Result;

use crate::domain::Event;

/// Event store abstraction
///
/// Implementations (adapters) provide the actual database access. The store
/// holds a single `events` table; there is no migration tracking.
pub trait EventRepository: Send + Sync {
    /// Create the events table if it does not exist
    fn ensure_schema(&self) -> Result<()>;

    /// Insert an event and return it with its assigned id
    fn insert_event(&self, timestamp: &str, message: &str) -> Result<Event>;

    /// Most recent events, newest first
    fn recent_events(&self, limit: usize) -> Result<Vec<Event>>;

    /// Total number of stored events
    fn count_events(&self) -> Result<i64>;
}
