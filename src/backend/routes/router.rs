/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * Routes are added in a specific order to ensure proper matching:
 * 1. WebSocket relay route
 * 2. API routes (auth, projects)
 * 3. Fallback handler (404)
 *
 * # CORS
 *
 * A single browser origin is allowed, read from `CORS_ORIGIN` with a
 * localhost default for development. Only the methods and headers the
 * editor frontend sends are permitted.
 */

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::backend::realtime::websocket_handler;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Default browser origin allowed by CORS
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Create the Axum router with all routes configured
///
/// This function sets up all HTTP routes for the application in the
/// following order:
///
/// 1. **Relay Route**: WebSocket upgrade endpoint
/// 2. **API Routes**: Authentication, projects
/// 3. **Fallback Handler**: 404 errors
///
/// # Arguments
///
/// * `app_state` - Application state containing the relay and services
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// ## Relay Route
///
/// - `GET /ws` - WebSocket upgrade for the realtime relay
///
/// ## API Routes
///
/// - `POST /api/auth/signup` - User registration
/// - `POST /api/auth/login` - User login
/// - `GET /api/auth/me` - Get current user
/// - `POST /api/projects/create` - Create a project
/// - `POST /api/projects/join` - Join a project
/// - `POST /api/projects/saveCode` - Persist code
/// - `POST /api/projects/unsaveCode` - Revert code
/// - `GET /api/projects/{projectName}/{pjpassword}` - Fetch code
///
/// ## Fallback
///
/// The fallback handler returns 404 for unknown routes.
pub fn create_router(app_state: AppState) -> Router<()> {
    // Start with the relay route
    let router = Router::new().route("/ws", axum::routing::get(websocket_handler));

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    // Use AppState as router state
    router.layer(cors_layer()).with_state(app_state)
}

/// Build the CORS layer from the configured origin
fn cors_layer() -> CorsLayer {
    let origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());
    let origin = match origin.parse::<HeaderValue>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                "Invalid CORS_ORIGIN '{}', falling back to {}",
                origin,
                DEFAULT_CORS_ORIGIN
            );
            HeaderValue::from_static(DEFAULT_CORS_ORIGIN)
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}
