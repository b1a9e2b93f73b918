/**
 * Real-time Event System
 *
 * This module defines the wire contract for the realtime relay. Every frame
 * is a tagged JSON envelope of the form {"event": ..., "data": ...}.
 * Join/leave signals carry typed room data; code and chat events carry an
 * opaque JSON value that the relay forwards without interpreting it.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Event sent by a client to the relay
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Join a project room and announce the user to its members
    JoinProject(RoomSignal),
    /// Leave a project room and announce the departure to remaining members
    LeaveProject(RoomSignal),
    /// Code edit, forwarded to every other connected client
    CodeChange(serde_json::Value),
    /// Chat message, forwarded to all connected clients
    SendMessage(serde_json::Value),
}

/// Event sent by the relay to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    /// A user joined the room this client is a member of
    UserJoined(PresenceSignal),
    /// A user left the room this client is a member of
    UserLeft(PresenceSignal),
    /// Code edit forwarded from another client
    ReceiveCode(serde_json::Value),
    /// Chat message forwarded from a client
    ReceiveMessage(serde_json::Value),
}

/// Room join/leave data sent by clients
///
/// Field presence is not validated; a missing `username` or `pjname`
/// deserializes to an empty string and the relay proceeds with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomSignal {
    /// Display name announced to the room
    #[serde(default)]
    pub username: String,
    /// Project name identifying the room
    #[serde(default)]
    pub pjname: String,
}

/// Presence notification payload for `userJoined` / `userLeft`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresenceSignal {
    /// Display name of the user who joined or left
    pub username: String,
}

/// Schema clients are expected to use for `codeChange` data
///
/// The relay does not enforce this shape; it forwards the value verbatim.
/// The type exists so clients on both ends agree on the contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CodePayload {
    /// Display name of the editing user
    pub author: String,
    /// Full contents of the shared document after the edit
    pub content: String,
    /// Client-side edit counter, informational only
    pub revision: u64,
}

/// Schema clients are expected to use for `sendMessage` data
///
/// The relay does not enforce this shape; it forwards the value verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatPayload {
    /// Display name of the message author
    pub author: String,
    /// Message text
    pub content: String,
    /// RFC3339 timestamp set by the sending client
    pub sent_at: String,
}

impl ClientEvent {
    /// Parse a client event from a raw text frame
    pub fn from_frame(text: &str) -> Result<Self, SharedError> {
        serde_json::from_str(text)
            .map_err(|e| SharedError::serialization(format!("Invalid client event: {}", e)))
    }
}

impl ServerEvent {
    /// Create a `userJoined` notification
    pub fn user_joined(username: String) -> Self {
        Self::UserJoined(PresenceSignal { username })
    }

    /// Create a `userLeft` notification
    pub fn user_left(username: String) -> Self {
        Self::UserLeft(PresenceSignal { username })
    }

    /// Serialize this event to a text frame
    pub fn to_frame(&self) -> Result<String, SharedError> {
        serde_json::to_string(self)
            .map_err(|e| SharedError::serialization(format!("Invalid server event: {}", e)))
    }
}
