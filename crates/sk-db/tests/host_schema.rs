//! Opening an existing host store must leave its schema untouched.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use sk_config::{LogsConfig, SkConfig};
use sk_core::dates::FixedClock;
use sk_core::enums::PurgeStatus;
use sk_core::errors::ErrorKind;
use sk_core::purge::{LogPurge, PurgeReporter, PurgeRequest};
use sk_db::error::DatabaseError;
use sk_db::service::StoreService;

/// The host's own tables, without any of the indexes shopkeep would create.
const HOST_SCHEMA: &str = "
CREATE TABLE wp_posts (ID INTEGER PRIMARY KEY, post_type TEXT, post_title TEXT, post_parent INTEGER, post_date TEXT);
CREATE TABLE wp_postmeta (meta_id INTEGER PRIMARY KEY, post_id INTEGER, meta_key TEXT, meta_value TEXT);
CREATE TABLE wp_terms (term_id INTEGER PRIMARY KEY, name TEXT, slug TEXT);
CREATE TABLE wp_term_taxonomy (term_taxonomy_id INTEGER PRIMARY KEY, term_id INTEGER, taxonomy TEXT, count INTEGER);
CREATE TABLE wp_term_relationships (object_id INTEGER, term_taxonomy_id INTEGER);

INSERT INTO wp_terms (term_id, name, slug) VALUES (7, 'API Requests', 'api_requests');
INSERT INTO wp_term_taxonomy (term_taxonomy_id, term_id, taxonomy, count) VALUES (7, 7, 'edd_log_type', 2);
INSERT INTO wp_posts (ID, post_type, post_title, post_parent, post_date) VALUES (10, 'edd_log', 'API request', 0, '2022-03-01 10:00:00');
INSERT INTO wp_posts (ID, post_type, post_title, post_parent, post_date) VALUES (11, 'edd_log', 'API request', 0, '2023-06-01 10:00:00');
INSERT INTO wp_term_relationships (object_id, term_taxonomy_id) VALUES (10, 7);
INSERT INTO wp_term_relationships (object_id, term_taxonomy_id) VALUES (11, 7);
";

struct Silent;

impl PurgeReporter for Silent {
    fn success(&self, _message: &str) {}

    fn line(&self, _message: &str) {}

    fn warning(&self, _message: &str) {}

    fn confirm(&self, _prompt: &str) -> bool {
        false
    }

    fn progress_start(&self, _message: &str, _total: u64) {}

    fn progress_tick(&self, _done: u64, _total: u64) {}

    fn progress_finish(&self) {}

    fn progress_abandon(&self, _message: &str) {}
}

async fn create_host_store(path: &str) {
    let db = libsql::Builder::new_local(path).build().await.unwrap();
    let conn = db.connect().unwrap();
    conn.execute_batch(HOST_SCHEMA).await.unwrap();
}

async fn schema_snapshot(store: &StoreService) -> Vec<(String, String)> {
    let mut rows = store
        .db()
        .conn()
        .query(
            "SELECT type, name FROM sqlite_master WHERE name NOT LIKE 'sqlite_%' ORDER BY type, name",
            (),
        )
        .await
        .unwrap();
    let mut entries = Vec::new();
    while let Some(row) = rows.next().await.unwrap() {
        entries.push((row.get::<String>(0).unwrap(), row.get::<String>(1).unwrap()));
    }
    entries
}

fn config_for(path: &str) -> SkConfig {
    SkConfig::default().with_database_path(path)
}

fn request(action: &str, log_type: &str) -> PurgeRequest {
    PurgeRequest {
        action: Some(action.into()),
        log_type: Some(log_type.into()),
        before: Some("2023-01-01".into()),
        after: None,
        assume_yes: false,
    }
}

#[tokio::test]
async fn count_and_rejected_runs_leave_host_schema_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("host.db");
    let path = path.to_str().unwrap();
    create_host_store(path).await;

    let store = Arc::new(StoreService::open(&config_for(path)).await.unwrap());
    let before = schema_snapshot(&store).await;
    assert!(before.iter().all(|(kind, _)| kind == "table"));

    let purge = LogPurge::new(store.clone(), store.clone()).with_clock(Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    )));

    let counted = purge
        .execute(&request("count", "api_requests"), &Silent)
        .await
        .unwrap();
    assert_eq!(counted.status, PurgeStatus::Counted);
    assert_eq!(counted.matched, 1);

    let err = purge
        .execute(&request("count", "bogus"), &Silent)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let declined = purge
        .execute(&request("prune", "api_requests"), &Silent)
        .await
        .unwrap();
    assert_eq!(declined.status, PurgeStatus::Aborted);

    drop(purge);
    let reopened = StoreService::new_local(path, "wp_", LogsConfig::default())
        .await
        .unwrap();
    assert_eq!(schema_snapshot(&reopened).await, before);
    assert!(reopened.get_log(10).await.unwrap().is_some());
}

#[tokio::test]
async fn missing_store_file_is_not_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typo.db");

    let result = StoreService::open(&config_for(path.to_str().unwrap())).await;

    assert!(matches!(result, Err(DatabaseError::StoreNotFound(_))));
    assert!(!path.exists());
}

#[tokio::test]
async fn store_without_content_tables_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("other.db");
    let path = path.to_str().unwrap();
    {
        let db = libsql::Builder::new_local(path).build().await.unwrap();
        db.connect()
            .unwrap()
            .execute("CREATE TABLE notes (id INTEGER PRIMARY KEY)", ())
            .await
            .unwrap();
    }

    let result = StoreService::new_local(path, "wp_", LogsConfig::default()).await;

    let Err(DatabaseError::MissingTables(missing)) = result else {
        panic!("expected missing tables");
    };
    assert!(missing.contains("wp_posts"));
}

#[tokio::test]
async fn in_memory_config_gets_a_fresh_schema() {
    let store = StoreService::open(&config_for(":memory:")).await.unwrap();
    let tables: Vec<String> = schema_snapshot(&store)
        .await
        .into_iter()
        .filter(|(kind, _)| kind == "table")
        .map(|(_, name)| name)
        .collect();
    assert_eq!(
        tables,
        vec![
            "wp_postmeta",
            "wp_posts",
            "wp_term_relationships",
            "wp_term_taxonomy",
            "wp_terms",
        ]
    );
}
