//! Backend Module
//!
//! This module contains all server-side code for the CodeCollab application.
//! It provides a complete Axum HTTP server with JWT authentication,
//! project persistence, and a realtime WebSocket relay.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - WebSocket relay for code, chat and presence events
//! - Route configuration and middleware
//! - Authentication and user management
//! - Project storage (SQLite)
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Authentication, JWT tokens, user management
//! - **`projects`** - Project storage and handlers
//! - **`realtime`** - WebSocket relay for live collaboration
//! - **`middleware`** - Request processing middleware
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs       - Module exports and documentation
//! ├── main.rs      - Binary entry point
//! ├── server/      - Server initialization and state
//! ├── routes/      - Route configuration
//! ├── auth/        - Authentication
//! ├── projects/    - Project storage and handlers
//! ├── realtime/    - WebSocket relay
//! ├── middleware/  - Request middleware
//! └── error/       - Error types
//! ```
//!
//! # State Management
//!
//! The backend uses shared state (`AppState`) that contains:
//! - The realtime relay state (connections, rooms)
//! - Optional services (database)
//!
//! Relay state lives behind an async mutex; the database pool is internally
//! reference counted. Both are cheap to clone into handlers.
//!
//! # Protocol Support
//!
//! The relay speaks a small JSON protocol over one WebSocket endpoint:
//!
//! - **Client frames**: `joinProject`, `leaveProject`, `codeChange`,
//!   `sendMessage`
//! - **Server frames**: `userJoined`, `userLeft`, `receiveCode`,
//!   `receiveMessage`
//!
//! Every frame is an envelope of the form `{"event": .., "data": ..}`.
//! Code and chat payloads are forwarded verbatim; the relay holds no
//! document state and performs no merging.
//!
//! # Thread Safety
//!
//! All backend code is designed for concurrent access:
//! - `Arc<Mutex<>>` guards the relay maps
//! - Axum handlers are `Send + Sync`
//! - Database pool is thread-safe
//!
//! # Error Handling
//!
//! The backend uses standard HTTP status codes and custom error types:
//! - `BackendError` for handler errors, serialized as `{"error": ..}`
//! - Proper error propagation with `?` operator
//!
//! # Example
//!
//! ```rust,no_run
//! use codecollab::backend::server::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Real-time WebSocket relay
pub mod realtime;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Project storage and handlers
pub mod projects;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use realtime::{websocket_handler, RelayState};
pub use server::create_app;
