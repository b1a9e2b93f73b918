//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Architecture
//!
//! The routes module is organized into focused submodules:
//!
//! - **`router`** - Main router creation, CORS and route assembly
//! - **`api_routes`** - API endpoints (auth, projects)
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation and CORS
//! └── api_routes.rs - API endpoint wiring
//! ```
//!
//! # Route Organization
//!
//! Routes are added in a specific order to ensure proper matching:
//!
//! 1. **Relay Route** - WebSocket upgrade endpoint
//! 2. **API Routes** - Authentication, projects
//! 3. **Fallback Handler** - 404 errors
//!
//! # Route Types
//!
//! ## Relay Route
//!
//! - `GET /ws` - WebSocket upgrade for the realtime relay
//!
//! ## API Routes
//!
//! - `POST /api/auth/signup` - User registration
//! - `POST /api/auth/login` - User login
//! - `GET /api/auth/me` - Get current user
//! - `POST /api/projects/create` - Create a project
//! - `POST /api/projects/join` - Join a project
//! - `POST /api/projects/saveCode` - Persist code
//! - `POST /api/projects/unsaveCode` - Revert code
//! - `GET /api/projects/{projectName}/{pjpassword}` - Fetch code
//!
//! # Example
//!
//! ```rust,no_run
//! use codecollab::backend::routes::create_router;
//! use codecollab::backend::realtime::RelayState;
//! use codecollab::backend::server::state::AppState;
//!
//! # async fn example() {
//! let app_state = AppState {
//!     db_pool: None,
//!     relay: RelayState::new(),
//! };
//! let router = create_router(app_state);
//! # }
//! ```
//!
//! # Dependencies
//!
//! - `backend::server::state` - Application state
//! - `backend::auth` - Authentication handlers
//! - `backend::projects` - Project handlers
//! - `backend::realtime` - WebSocket handler
//! - `backend::middleware` - JWT middleware

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
