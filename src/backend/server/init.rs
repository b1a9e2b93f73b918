/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * The server initialization follows these steps:
 * 1. Create the realtime relay state
 * 2. Load optional services (database)
 * 3. Create and configure the router
 *
 * # Degraded Mode
 *
 * Without a database the server still starts: the relay and the fetch-code
 * route stay up and the persistence handlers answer 503. This keeps local
 * relay development possible with nothing but a port.
 */

use axum::Router;

use crate::backend::realtime::RelayState;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// This function sets up the Axum HTTP server with:
/// - Realtime relay state
/// - Database connection pool (if configured)
/// - Route configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Initialization Steps
///
/// 1. **Create Relay State**: Empty connection registry and room map
/// 2. **Load Services**: Attempts to load database from configuration
/// 3. **Create Router**: Configures all routes and middleware
///
/// # Error Handling
///
/// The function is designed to be resilient:
/// - Missing database: Server continues without persistence features
/// - Schema failures: Logged, persistence disabled, relay still runs
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing CodeCollab backend server");

    // Step 1: Create the realtime relay state
    // Connections and rooms live purely in memory
    let relay = RelayState::new();

    tracing::info!("Relay state initialized");

    // Step 2: Load optional services
    let db_pool = load_database().await;

    // Step 3: Create app state
    let app_state = AppState { db_pool, relay };

    // Step 4: Create router with all routes
    let app = create_router(app_state);

    tracing::info!("Router configured");

    app
}
