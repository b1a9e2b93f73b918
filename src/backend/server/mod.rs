//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server. It provides the foundation for the application's
//! backend infrastructure.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration loading and schema initialization
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Database loading and schema setup
//! └── init.rs   - Server initialization and app creation
//! ```
//!
//! # State Management
//!
//! The server uses `AppState` as the central state container, which holds:
//! - The realtime relay state (connections, rooms)
//! - Optional services (database)
//!
//! State is cheap to clone and shared across all request handlers.
//!
//! # Initialization Flow
//!
//! 1. **Relay Creation**: Creates the empty relay state
//! 2. **Configuration Loading**: Loads the database if `DATABASE_URL` is set
//! 3. **Router Creation**: Configures all routes and middleware
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
//!
//! # Dependencies
//!
//! - `backend::realtime` - Relay state
//! - `backend::routes` - Route configuration

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
