/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration,
 * focusing on the optional SQLite database connection.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible defaults
 * for local development when possible.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * Services that fail to initialize are set to `None` and the server
 * continues without them. The realtime relay has no external dependencies
 * and always runs; only the persistence endpoints go dark without a
 * database.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<SqlitePool>;

/// Load and initialize database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from environment
/// 2. Creates a SQLite connection pool, creating the file if missing
/// 3. Creates the schema tables if they do not exist
///
/// # Returns
///
/// - `Some(SqlitePool)` if database is successfully configured
/// - `None` if `DATABASE_URL` is not set or connection fails
///
/// # Errors
///
/// Errors are logged but do not prevent server startup. The function
/// returns `None` on any error, allowing the server to run without
/// database features.
///
/// # Example
///
/// ```rust,no_run
/// use codecollab::backend::server::config::load_database;
///
/// # async fn example() {
/// let db_pool = load_database().await;
/// if let Some(pool) = &db_pool {
///     // Database is available
/// } else {
///     // Persistence endpoints disabled, relay still runs
/// }
/// # }
/// ```
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let options = match SqliteConnectOptions::from_str(&database_url) {
        Ok(options) => options.create_if_missing(true),
        Err(e) => {
            tracing::error!("Invalid DATABASE_URL: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    let pool = match SqlitePoolOptions::new().connect_with(options).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Initializing database schema...");
    match init_schema(&pool).await {
        Ok(_) => {
            tracing::info!("Database schema initialized successfully");
        }
        Err(e) => {
            tracing::error!("Failed to initialize database schema: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    }

    Some(pool)
}

/// Create the schema tables if they do not exist
///
/// Idempotent; safe to run on every startup. Also used by tests to set up
/// in-memory databases.
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` if a statement fails.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            username TEXT UNIQUE NOT NULL,
            email TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            name TEXT PRIMARY KEY,
            password_hash TEXT NOT NULL,
            owner_id TEXT NOT NULL,
            code TEXT NOT NULL,
            created_at TEXT NOT NULL,
            FOREIGN KEY (owner_id) REFERENCES users(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
