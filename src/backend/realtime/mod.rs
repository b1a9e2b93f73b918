//! Real-time Relay Module
//!
//! This module is the realtime heart of the backend: a WebSocket relay that
//! forwards code changes, chat messages and presence signals between every
//! connected editor session.
//!
//! # Architecture
//!
//! The realtime module is organized into focused submodules:
//!
//! - **`state`** - Connection registry, room membership and relay operations
//! - **`broadcast`** - Target selection and frame delivery helpers
//! - **`socket`** - WebSocket upgrade handler and per-connection task loop
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs       - Module exports and documentation
//! ├── state.rs     - Relay state and operations
//! ├── broadcast.rs - Fan-out helpers
//! └── socket.rs    - WebSocket connection handling
//! ```
//!
//! # Relay Model
//!
//! Every connection registers with the shared [`RelayState`] and gets an
//! unbounded outbox channel. Client events mutate room membership or fan
//! frames out to other outboxes; a send task per connection drains the
//! outbox into the socket. The relay holds no document state and performs
//! no merging: frames are forwarded verbatim, last write wins.
//!
//! # Scopes
//!
//! Presence notifications (`userJoined`, `userLeft`) are scoped to the
//! project room they concern. Code changes reach every other connection and
//! chat messages reach every connection, regardless of rooms.
//!
//! # Example
//!
//! ```rust,no_run
//! use codecollab::backend::realtime::RelayState;
//!
//! # async fn example() {
//! let relay = RelayState::new();
//! let (connection_id, mut outbox) = relay.register().await;
//! relay.join_room(connection_id, "alice", "demo").await;
//!
//! // The join notification lands in the joiner's own outbox too
//! let frame = outbox.recv().await.unwrap();
//! println!("received: {}", frame);
//! # }
//! ```
//!
//! # Dependencies
//!
//! - `shared::event` - Wire envelopes for client and server events

/// Relay state and operations
pub mod state;

/// Target selection and frame delivery helpers
pub mod broadcast;

/// WebSocket connection handling
pub mod socket;

// Re-export commonly used types and functions
pub use socket::websocket_handler;
pub use state::{ConnectionHandle, RelayState};
