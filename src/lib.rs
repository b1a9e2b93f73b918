// Increase recursion limit for complex async operations
#![recursion_limit = "256"]

//! CodeCollab - Main Library
//!
//! CodeCollab is a collaborative code-editing backend built with Rust. It
//! authenticates users, manages password-protected projects that each hold a
//! single shared code document, and relays real-time code and chat events
//! between the clients connected to a project room.
//!
//! # Overview
//!
//! This library provides the core functionality for CodeCollab, including:
//! - User accounts with JWT-based authentication
//! - Project create/join/save/revert/fetch over HTTP
//! - SQLite persistence for users and project code
//! - A WebSocket relay for code changes, chat messages, and room presence
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared between the server and its clients
//!   - Realtime event envelopes and payload schemas
//!   - Error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes, and middleware
//!   - Authentication and project persistence
//!   - Realtime relay state and broadcasting
//!
//! # Usage
//!
//! ```rust,no_run
//! use codecollab::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with Axum server
//! # }
//! ```
//!
//! # Architecture
//!
//! The application follows a modular architecture:
//!
//! - **Shared Types**: Platform-agnostic types for serialization
//! - **Backend**: Axum server with HTTP handlers and a WebSocket relay
//!
//! The relay keeps all connection and room state in memory. Persistence is
//! limited to user accounts and project documents; realtime events are
//! forwarded to connected peers and never stored.
//!
//! # Thread Safety
//!
//! All server state is thread-safe using `Arc<Mutex<>>` and per-connection
//! `mpsc` channels. Handlers receive state through Axum extractors.
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - `Option<T>` for optional values
//! - Custom error types in `shared::error` and `backend::error`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
