//! Database test fixtures and utilities
//!
//! Provides utilities for setting up test databases with the application
//! schema. Tests run against in-memory SQLite so nothing touches disk and
//! every test starts from a clean database.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use codecollab::backend::server::config::init_schema;

/// Create a test database connection pool
///
/// A single connection is required: every connection to `sqlite::memory:`
/// opens its own database, so a larger pool would scatter tables across
/// databases.
pub async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool")
}

/// Test database fixture
///
/// This struct manages an in-memory test database with the application
/// schema applied. The database disappears when the pool is dropped.
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new test database fixture
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        init_schema(&pool)
            .await
            .expect("Failed to initialize schema");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
