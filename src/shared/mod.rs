//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and its clients. These types are used for serialization and
//! communication over the WebSocket relay and the HTTP API.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. All types are designed for serialization
//! and transmission over the wire.

/// Real-time event system
pub mod event;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use event::{ChatPayload, ClientEvent, CodePayload, PresenceSignal, RoomSignal, ServerEvent};
pub use error::SharedError;
