//! Core domain entities
//!
//! Pure data structures with formatting helpers - no I/O.

mod backup;
mod event;
pub mod result;

pub use backup::{BackupInfo, BackupLookup, BackupReport, BackupSource};
pub use event::{format_timestamp, Event, DEFAULT_MESSAGE};
