//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case.

mod backup;
mod event;
mod status;

pub use backup::{parse_backup_epoch, BackupLocator};
pub use event::{EventService, DEFAULT_RECENT_LIMIT, MAX_RECENT_LIMIT};
pub use status::{StatusService, StatusSummary};
