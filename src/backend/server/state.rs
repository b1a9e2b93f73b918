/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The realtime relay state (connections, rooms)
 * - Optional services (database)
 *
 * # Thread Safety
 *
 * All state is designed to be thread-safe:
 * - `RelayState` is an `Arc<Mutex<..>>` handle and can be cloned freely
 * - `SqlitePool` is internally reference counted
 * - `Option<T>` for optional services that may not be configured
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`. This follows
 * Axum's recommended pattern for state management.
 *
 * # Example
 *
 * ```rust,no_run
 * use codecollab::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let connections = state.relay.connection_count().await;
 *     // ...
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::realtime::RelayState;

/// Application state shared by every handler
///
/// This struct serves as the central state container for the Axum
/// application. It implements `FromRef` for its parts so handlers can
/// extract only what they need.
///
/// # Fields
///
/// * `db_pool` - Optional SQLite database connection pool
/// * `relay` - Shared realtime relay state
///
/// # Thread Safety
///
/// Both fields are cheap to clone and safe for concurrent access.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database is not configured (e.g., if the
    /// `DATABASE_URL` environment variable is not set). Handlers should
    /// check for `None` before using the database.
    pub db_pool: Option<SqlitePool>,

    /// Realtime relay state
    ///
    /// Holds the live WebSocket connections and room membership. The relay
    /// is always available, even without a database.
    pub relay: RelayState,
}

/// Implement FromRef for Option<SqlitePool>
///
/// This allows Axum handlers to extract the optional database pool
/// directly from `AppState`.
///
/// # Example
///
/// ```rust,no_run
/// use axum::extract::State;
/// use sqlx::SqlitePool;
///
/// async fn handler(State(pool): State<Option<SqlitePool>>) {
///     if let Some(pool) = pool {
///         // Use the pool
///     }
/// }
/// ```
impl FromRef<AppState> for Option<SqlitePool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for RelayState
///
/// This allows the WebSocket handler to extract the relay state directly
/// from `AppState`.
impl FromRef<AppState> for RelayState {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.relay.clone()
    }
}
