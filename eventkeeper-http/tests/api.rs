use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};

use eventkeeper_core::{config::Config, EventKeeperContext};
use eventkeeper_http::{serve, AppState};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::task::JoinHandle;

struct TestServer {
    base: String,
    backup_dir: PathBuf,
    _dir: TempDir,
    _handle: JoinHandle<()>,
}

async fn start_server() -> TestServer {
    start_server_with(|root| root.join("backup")).await
}

/// Start a server whose backup directory is derived from the temp root
async fn start_server_with(backup_dir: impl FnOnce(&Path) -> PathBuf) -> TestServer {
    let dir = TempDir::new().unwrap();
    let backup_dir = backup_dir(dir.path());
    let config = Config::default()
        .with_db_path(dir.path().join("data").join("app.db"))
        .with_backup_dir(&backup_dir);
    let ctx = EventKeeperContext::new(config).expect("open context");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        serve(listener, AppState::new(ctx), std::future::pending())
            .await
            .unwrap();
    });

    TestServer {
        base: format!("http://{}", addr),
        backup_dir,
        _dir: dir,
        _handle: handle,
    }
}

async fn get_json(url: String) -> (reqwest::StatusCode, Value) {
    let res = reqwest::get(url).await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

fn touch(dir: &Path, name: &str, secs: u64) {
    std::fs::create_dir_all(dir).unwrap();
    File::create(dir.join(name))
        .unwrap()
        .set_modified(UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

#[tokio::test]
async fn index_and_health() {
    let srv = start_server().await;

    let (status, body) = get_json(format!("{}/", srv.base)).await;
    assert!(status.is_success());
    assert_eq!(body, json!({"status": "Bonjour tout le monde !"}));

    let (status, body) = get_json(format!("{}/health", srv.base)).await;
    assert!(status.is_success());
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn add_then_consult_and_count() {
    let srv = start_server().await;

    let (status, added) = get_json(format!("{}/add?message=deploy%20done", srv.base)).await;
    assert!(status.is_success());
    assert_eq!(added["status"], "added");
    assert_eq!(added["message"], "deploy done");
    let ts = added["timestamp"].as_str().unwrap().to_string();
    assert!(ts.ends_with('Z'));

    let (_, defaulted) = get_json(format!("{}/add", srv.base)).await;
    assert_eq!(defaulted["message"], "hello");

    let (status, rows) = get_json(format!("{}/consultation", srv.base)).await;
    assert!(status.is_success());
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["message"], "hello");
    assert_eq!(rows[1]["message"], "deploy done");
    assert_eq!(rows[1]["timestamp"], ts.as_str());
    assert!(rows[0]["id"].as_i64().unwrap() > rows[1]["id"].as_i64().unwrap());

    let (status, count) = get_json(format!("{}/count", srv.base)).await;
    assert!(status.is_success());
    assert_eq!(count, json!({"count": 2}));
}

#[tokio::test]
async fn empty_message_is_stored_verbatim() {
    let srv = start_server().await;

    let (status, added) = get_json(format!("{}/add?message=", srv.base)).await;
    assert!(status.is_success());
    assert_eq!(added["message"], "");

    let (_, rows) = get_json(format!("{}/consultation", srv.base)).await;
    assert_eq!(rows[0]["message"], "");
}

#[tokio::test]
async fn consultation_caps_at_fifty() {
    let srv = start_server().await;
    let client = reqwest::Client::new();
    for i in 0..55 {
        let res = client
            .get(format!("{}/add", srv.base))
            .query(&[("message", format!("m{}", i))])
            .send()
            .await
            .unwrap();
        assert!(res.status().is_success());
    }

    let (_, rows) = get_json(format!("{}/consultation", srv.base)).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 50);
    assert_eq!(rows[0]["message"], "m54");

    let (_, rows) = get_json(format!("{}/consultation?limit=5", srv.base)).await;
    assert_eq!(rows.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn backup_not_found_is_null_report() {
    let srv = start_server().await;

    let (status, body) = get_json(format!("{}/backup", srv.base)).await;
    assert!(status.is_success());
    assert_eq!(body, json!({"name": null, "age_seconds": null}));
}

#[tokio::test]
async fn backup_dir_below_a_file_is_null_report() {
    let srv = start_server_with(|root| root.join("data").join("app.db").join("backup")).await;

    let (status, body) = get_json(format!("{}/backup", srv.base)).await;
    assert!(status.is_success());
    assert_eq!(body, json!({"name": null, "age_seconds": null}));
}

#[tokio::test]
async fn unusable_backup_dir_is_server_error() {
    let srv = start_server_with(|root| root.join("back\0ups")).await;

    let (status, body) = get_json(format!("{}/backup", srv.base)).await;
    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("backup directory"));

    let (status, _) = get_json(format!("{}/status", srv.base)).await;
    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn backup_reports_latest_named_file() {
    let srv = start_server().await;
    touch(&srv.backup_dir, "app-100.db", 5_000);
    touch(&srv.backup_dir, "app-200.db", 1);
    touch(&srv.backup_dir, "notes.txt", 9_000);

    let (status, body) = get_json(format!("{}/backup", srv.base)).await;
    assert!(status.is_success());
    assert_eq!(body["name"], "app-200.db");
    assert!(body["age_seconds"].as_u64().unwrap() > 1_000_000);
}

#[tokio::test]
async fn status_summarizes_events_and_backup() {
    let srv = start_server().await;
    touch(&srv.backup_dir, "dump.sql", 10);
    get_json(format!("{}/add?message=one", srv.base)).await;

    let (status, body) = get_json(format!("{}/status", srv.base)).await;
    assert!(status.is_success());
    assert_eq!(body["event_count"], 1);
    assert_eq!(body["latest_event"]["message"], "one");
    assert_eq!(body["backup"]["name"], "dump.sql");
}

#[cfg(unix)]
#[tokio::test]
async fn unreadable_backup_dir_is_server_error() {
    use std::os::unix::fs::PermissionsExt;

    let srv = start_server().await;
    touch(&srv.backup_dir, "app-1.db", 1);
    std::fs::set_permissions(&srv.backup_dir, std::fs::Permissions::from_mode(0o000)).unwrap();
    let readable = std::fs::read_dir(&srv.backup_dir).is_ok();

    let res = reqwest::get(format!("{}/backup", srv.base)).await.unwrap();
    let status = res.status();
    let body: Value = res.json().await.unwrap();
    std::fs::set_permissions(&srv.backup_dir, std::fs::Permissions::from_mode(0o755)).unwrap();

    if readable {
        eprintln!("skipping permission check: directory is readable without permission bits");
        return;
    }
    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("backup directory"));
}
