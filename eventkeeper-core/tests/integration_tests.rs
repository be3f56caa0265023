//! Integration tests for eventkeeper-core services
//!
//! These tests run the services against a real DuckDB file and a real
//! backup directory.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::fs::File;
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

use tempfile::TempDir;

use eventkeeper_core::adapters::duckdb::DuckDbRepository;
use eventkeeper_core::config::Config;
use eventkeeper_core::ports::EventRepository;
use eventkeeper_core::EventKeeperContext;

// ============================================================================
// Test Helpers
// ============================================================================

/// Config pointing at a database and backup directory inside the TempDir
fn test_config(temp_dir: &TempDir) -> Config {
    Config::default()
        .with_db_path(temp_dir.path().join("data").join("app.db"))
        .with_backup_dir(temp_dir.path().join("backup"))
}

fn create_context(temp_dir: &TempDir) -> EventKeeperContext {
    EventKeeperContext::new(test_config(temp_dir)).expect("Failed to create context")
}

// ============================================================================
// Event Tests
// ============================================================================

#[test]
fn test_record_list_and_count() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = create_context(&temp_dir);

    let first = ctx.event_service.record("first").unwrap();
    let second = ctx.event_service.record("second").unwrap();

    let events = ctx.event_service.recent(None).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], second, "newest event comes first");
    assert_eq!(events[1], first);
    assert_eq!(ctx.event_service.count().unwrap(), 2);
}

#[test]
fn test_events_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let ctx = create_context(&temp_dir);
        ctx.event_service.record("persisted").unwrap();
    }

    let ctx = create_context(&temp_dir);
    let events = ctx.event_service.recent(Some(10)).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "persisted");
}

#[test]
fn test_context_creates_database_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    let db_path = config.db_path.clone();

    let _ctx = EventKeeperContext::new(config).unwrap();
    assert!(db_path.parent().unwrap().is_dir());
    assert!(db_path.exists());
}

#[test]
fn test_messages_are_stored_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = create_context(&temp_dir);

    for message in ["", "it's \"quoted\"", "ligne accentuée é", "'; DROP TABLE events; --"] {
        ctx.event_service.record(message).unwrap();
    }

    let mut stored: Vec<String> = ctx
        .event_service
        .recent(None)
        .unwrap()
        .into_iter()
        .map(|e| e.message)
        .collect();
    stored.reverse();
    assert_eq!(
        stored,
        vec!["", "it's \"quoted\"", "ligne accentuée é", "'; DROP TABLE events; --"]
    );
    assert_eq!(ctx.event_service.count().unwrap(), 4);
}

// ============================================================================
// Status Tests
// ============================================================================

#[test]
fn test_status_without_backups() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = create_context(&temp_dir);

    let status = ctx.status_service.get_status().unwrap();
    assert_eq!(status.event_count, 0);
    assert!(status.latest_event.is_none());
    assert_eq!(status.backup.name, None);
    assert_eq!(status.backup.age_seconds, None);
}

#[test]
fn test_status_reports_latest_event_and_backup() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = create_context(&temp_dir);
    std::fs::create_dir_all(&ctx.config.backup_dir).unwrap();
    File::create(ctx.config.backup_dir.join("app-1700000000.db"))
        .unwrap()
        .set_modified(UNIX_EPOCH + Duration::from_secs(1))
        .unwrap();

    ctx.event_service.record("one").unwrap();
    let latest = ctx.event_service.record("two").unwrap();

    let status = ctx.status_service.get_status().unwrap();
    assert_eq!(status.event_count, 2);
    assert_eq!(status.latest_event, Some(latest));
    assert_eq!(status.backup.name.as_deref(), Some("app-1700000000.db"));
    assert!(status.backup.age_seconds.unwrap() > 0);

    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["backup"]["name"], "app-1700000000.db");
    assert_eq!(json["latest_event"]["message"], "two");
}

#[test]
fn test_context_with_in_memory_repository() {
    let temp_dir = TempDir::new().unwrap();
    let repository: Arc<dyn EventRepository> = Arc::new(DuckDbRepository::in_memory().unwrap());

    let ctx = EventKeeperContext::with_repository(test_config(&temp_dir), repository).unwrap();
    ctx.event_service.record("in memory").unwrap();

    assert_eq!(ctx.repository.count_events().unwrap(), 1);
    assert!(!ctx.config.db_path.exists(), "in-memory context never touches the db path");
}
