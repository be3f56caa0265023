//! Backup service - backup freshness reporting
//!
//! Backups are written into the backup directory by an external producer
//! using the `app-<epoch>.db` naming convention. The locator picks the
//! newest one by the epoch in its name; when no file follows the convention
//! it falls back to the most recently modified file.
//!
//! The directory is only ever read.

use std::fs::{self, Metadata};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use regex::Regex;
use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::domain::{BackupInfo, BackupLookup, BackupSource};

/// Anchored on both ends, ASCII digits only.
fn backup_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^app-([0-9]+)\.db$").expect("backup name pattern is valid"))
}

/// Parse the epoch out of an `app-<epoch>.db` filename.
///
/// Returns `None` when the name does not follow the convention, or when the
/// digits do not fit in a `u64` or beyond what `SystemTime` can represent.
pub fn parse_backup_epoch(name: &str) -> Option<u64> {
    let captures = backup_name_pattern().captures(name)?;
    let epoch: u64 = captures[1].parse().ok()?;
    epoch_to_system_time(epoch)?;
    Some(epoch)
}

fn epoch_to_system_time(epoch: u64) -> Option<SystemTime> {
    UNIX_EPOCH.checked_add(Duration::from_secs(epoch))
}

/// Whole seconds from `reference` to `now`, zero if `reference` is in the future
fn age_seconds(now: SystemTime, reference: SystemTime) -> u64 {
    now.duration_since(reference)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}

/// A regular file directly inside the backup directory
#[derive(Debug)]
struct Candidate {
    name: String,
    path: PathBuf,
    metadata: Metadata,
}

/// Locates the most recent backup in a directory
#[derive(Debug, Clone)]
pub struct BackupLocator {
    backup_dir: PathBuf,
}

impl BackupLocator {
    pub fn new(backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            backup_dir: backup_dir.into(),
        }
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Find the latest backup, measuring its age against the current time
    pub fn locate(&self) -> Result<BackupLookup> {
        self.locate_at(SystemTime::now())
    }

    /// Find the latest backup, measuring its age against `now`
    ///
    /// Ties (same epoch, or same mtime in the fallback case) go to the
    /// lexicographically smallest filename.
    pub fn locate_at(&self, now: SystemTime) -> Result<BackupLookup> {
        let Some(candidates) = self.candidates()? else {
            debug!(dir = %self.backup_dir.display(), "backup directory missing");
            return Ok(BackupLookup::NotFound);
        };
        if candidates.is_empty() {
            debug!(dir = %self.backup_dir.display(), "backup directory has no files");
            return Ok(BackupLookup::NotFound);
        }

        let named = candidates
            .iter()
            .filter_map(|c| parse_backup_epoch(&c.name).map(|epoch| (epoch, c)))
            .max_by(|(epoch_a, a), (epoch_b, b)| {
                epoch_a.cmp(epoch_b).then_with(|| b.name.cmp(&a.name))
            });

        if let Some((epoch, candidate)) = named {
            let reference = epoch_to_system_time(epoch).unwrap_or(UNIX_EPOCH);
            let info = BackupInfo::new(
                candidate.name.clone(),
                age_seconds(now, reference),
                BackupSource::Named { epoch },
                candidate.metadata.len(),
            );
            debug!(name = %info.name, epoch, age = info.age_seconds, "selected named backup");
            return Ok(BackupLookup::Found(info));
        }

        let mut by_mtime = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            let modified = candidate
                .metadata
                .modified()
                .map_err(|e| Error::backup_scan(&candidate.path, e))?;
            by_mtime.push((modified, candidate));
        }

        let latest = by_mtime
            .into_iter()
            .max_by(|(mtime_a, a), (mtime_b, b)| {
                mtime_a.cmp(mtime_b).then_with(|| b.name.cmp(&a.name))
            });

        Ok(match latest {
            Some((modified, candidate)) => {
                let info = BackupInfo::new(
                    candidate.name.clone(),
                    age_seconds(now, modified),
                    BackupSource::Modified,
                    candidate.metadata.len(),
                );
                debug!(
                    name = %info.name,
                    age = info.age_seconds,
                    "no named backup, selected newest file"
                );
                BackupLookup::Found(info)
            }
            None => BackupLookup::NotFound,
        })
    }

    /// List regular files in the backup directory.
    ///
    /// `None` when the directory does not exist or is not a directory,
    /// including a path that runs through a regular file. Symlinks are
    /// followed; entries that vanish between listing and stat, and links that
    /// never resolve (dangling or cyclic), are skipped.
    fn candidates(&self) -> Result<Option<Vec<Candidate>>> {
        let dir = &self.backup_dir;
        match fs::metadata(dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Ok(None),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                return Ok(None);
            }
            Err(e) => return Err(Error::backup_scan(dir, e)),
        }

        let mut candidates = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| Error::backup_scan(dir, e))? {
            let entry = entry.map_err(|e| Error::backup_scan(dir, e))?;
            let path = entry.path();

            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(path = %path.display(), "skipping vanished entry");
                    continue;
                }
                Err(e) if is_symlink(&path) => {
                    debug!(path = %path.display(), error = %e, "skipping unresolvable link");
                    continue;
                }
                Err(e) => return Err(Error::backup_scan(&path, e)),
            };
            if !metadata.is_file() {
                continue;
            }

            candidates.push(Candidate {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
                metadata,
            });
        }

        Ok(Some(candidates))
    }
}
