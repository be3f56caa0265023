//! Backup domain model

use serde::{Deserialize, Serialize};

/// How the reference time of a backup was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackupSource {
    /// Parsed from an `app-<epoch>.db` filename
    Named { epoch: u64 },
    /// No file followed the naming convention; taken from the file mtime
    Modified,
}

/// The most recent backup found in a backup directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupInfo {
    /// Backup filename (e.g., "app-1700000000.db")
    pub name: String,
    /// Seconds elapsed since the backup's reference time, floored at zero
    pub age_seconds: u64,
    pub source: BackupSource,
    /// File size in bytes
    pub size_bytes: u64,
}

impl BackupInfo {
    pub fn new(
        name: impl Into<String>,
        age_seconds: u64,
        source: BackupSource,
        size_bytes: u64,
    ) -> Self {
        Self {
            name: name.into(),
            age_seconds,
            source,
            size_bytes,
        }
    }

    /// Format size for human display
    pub fn size_display(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if self.size_bytes >= GB {
            format!("{:.1} GB", self.size_bytes as f64 / GB as f64)
        } else if self.size_bytes >= MB {
            format!("{:.1} MB", self.size_bytes as f64 / MB as f64)
        } else if self.size_bytes >= KB {
            format!("{:.1} KB", self.size_bytes as f64 / KB as f64)
        } else {
            format!("{} bytes", self.size_bytes)
        }
    }

    /// Format age for human display, two most significant units
    pub fn age_display(&self) -> String {
        const MINUTE: u64 = 60;
        const HOUR: u64 = MINUTE * 60;
        const DAY: u64 = HOUR * 24;

        let age = self.age_seconds;
        if age >= DAY {
            format!("{}d {}h", age / DAY, (age % DAY) / HOUR)
        } else if age >= HOUR {
            format!("{}h {}m", age / HOUR, (age % HOUR) / MINUTE)
        } else if age >= MINUTE {
            format!("{}m {}s", age / MINUTE, age % MINUTE)
        } else {
            format!("{}s", age)
        }
    }
}

/// Outcome of looking for the latest backup.
///
/// A directory that cannot be read is reported through the surrounding
/// `Result`, never as `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupLookup {
    Found(BackupInfo),
    /// The directory is missing, or holds no regular files
    NotFound,
}

impl BackupLookup {
    pub fn info(&self) -> Option<&BackupInfo> {
        match self {
            BackupLookup::Found(info) => Some(info),
            BackupLookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, BackupLookup::Found(_))
    }

    /// True when a backup exists and is no older than `max_age_seconds`
    pub fn is_fresh(&self, max_age_seconds: u64) -> bool {
        self.info()
            .is_some_and(|info| info.age_seconds <= max_age_seconds)
    }

    /// Flatten into the `{"name": ..., "age_seconds": ...}` wire shape
    pub fn to_report(&self) -> BackupReport {
        match self {
            BackupLookup::Found(info) => BackupReport {
                name: Some(info.name.clone()),
                age_seconds: Some(info.age_seconds),
            },
            BackupLookup::NotFound => BackupReport::default(),
        }
    }
}

/// Serialized backup freshness, both fields null when nothing was found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupReport {
    pub name: Option<String>,
    pub age_seconds: Option<u64>,
}

impl From<BackupLookup> for BackupReport {
    fn from(lookup: BackupLookup) -> Self {
        lookup.to_report()
    }
}
