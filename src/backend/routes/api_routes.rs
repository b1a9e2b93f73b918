/**
 * API Route Handlers
 *
 * This module defines route handlers for API endpoints, including:
 * - Authentication endpoints (signup, login, get current user)
 * - Project endpoints (create, join, save code, revert code, fetch code)
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/me` - Get current user info
 *
 * ## Projects
 * - `POST /api/projects/create` - Create a project
 * - `POST /api/projects/join` - Join a project with its password
 * - `POST /api/projects/saveCode` - Persist a project's code
 * - `POST /api/projects/unsaveCode` - Revert a project's code
 * - `GET /api/projects/{projectName}/{pjpassword}` - Fetch a project's code
 */

use axum::middleware;
use axum::Router;

use crate::backend::auth::{get_me, login, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::projects::{create_project, fetch_code, join_project, save_code, unsave_code};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// This function adds the following routes to the router:
///
/// ## Authentication Routes
/// - `POST /api/auth/signup` - User registration
/// - `POST /api/auth/login` - User login
/// - `GET /api/auth/me` - Get current user info (requires authentication)
///
/// ## Project Routes
/// - `POST /api/projects/create` - Create a project (requires authentication)
/// - `POST /api/projects/join` - Join a project (requires authentication)
/// - `POST /api/projects/saveCode` - Persist code (requires authentication)
/// - `POST /api/projects/unsaveCode` - Revert code (requires authentication)
/// - `GET /api/projects/{projectName}/{pjpassword}` - Fetch code (public)
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
///
/// # Authentication
///
/// Protected routes reject requests without a valid JWT in the
/// `Authorization` header before the handler runs. The fetch-code route is
/// public on purpose: the project password in the path is its gate, so an
/// editor can load code before its user logs in.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    // Routes gated by the JWT middleware
    let protected = Router::new()
        .route("/api/auth/me", axum::routing::get(get_me))
        .route(
            "/api/projects/create",
            axum::routing::post(create_project),
        )
        .route("/api/projects/join", axum::routing::post(join_project))
        .route("/api/projects/saveCode", axum::routing::post(save_code))
        .route(
            "/api/projects/unsaveCode",
            axum::routing::post(unsave_code),
        )
        .route_layer(middleware::from_fn(auth_middleware));

    router
        .merge(protected)
        // Public authentication endpoints
        .route("/api/auth/signup", axum::routing::post(signup))
        .route("/api/auth/login", axum::routing::post(login))
        // Public code fetch, gated by the project password in the path
        .route(
            "/api/projects/{project_name}/{pjpassword}",
            axum::routing::get(fetch_code),
        )
}
