//! Database configuration tests
//!
//! Tests for `load_database`, which reads `DATABASE_URL` from the process
//! environment. The tests mutate that variable, so they are serialized.

use serial_test::serial;

use codecollab::backend::server::config::load_database;

#[tokio::test]
#[serial]
async fn test_load_database_without_url_is_none() {
    std::env::remove_var("DATABASE_URL");

    assert!(load_database().await.is_none());
}

#[tokio::test]
#[serial]
async fn test_load_database_creates_file_and_schema() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("collab.db");
    std::env::set_var("DATABASE_URL", format!("sqlite://{}", db_path.display()));

    let pool = load_database().await.expect("pool should be created");
    std::env::remove_var("DATABASE_URL");

    assert!(db_path.exists());

    // Schema is in place and queryable
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[tokio::test]
#[serial]
async fn test_load_database_with_invalid_url_is_none() {
    std::env::set_var("DATABASE_URL", "postgres://not-sqlite/db");

    assert!(load_database().await.is_none());

    std::env::remove_var("DATABASE_URL");
}
