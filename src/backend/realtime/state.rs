/**
 * Relay Connection and Room State
 *
 * This module owns the in-memory state of the realtime relay: the registry
 * of live WebSocket connections and the room membership sets. Rooms are keyed
 * by project name and exist only while they have members; nothing here is
 * persisted.
 *
 * # Locking
 *
 * Both maps live behind a single async mutex. Every relay operation takes
 * the lock once, mutates membership and fans out its frames before releasing
 * it, so a join's notification always reflects the membership at the moment
 * of the join. Outbox sends are unbounded and never block under the lock.
 *
 * # Broadcast Scopes
 *
 * Join and leave notifications are scoped to the named room. Code and chat
 * events are deliberately global: code changes go to every other connection
 * and chat messages go to every connection, regardless of room membership.
 * Room-scoping those two would be the obvious alternative, but clients rely
 * on the relay forwarding them globally, so changing the scope is a breaking
 * protocol change and not done here.
 */

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, Mutex};
use uuid::Uuid;

use crate::backend::realtime::broadcast::{all_targets, deliver, room_targets, targets_except};
use crate::shared::event::ServerEvent;

/// Handle to one live relay connection
#[derive(Debug)]
pub struct ConnectionHandle {
    /// Outbox for frames destined to this connection
    pub sender: mpsc::UnboundedSender<String>,
    /// When the connection was registered
    pub connected_at: DateTime<Utc>,
}

/// Mutable relay state: connection registry and room membership
#[derive(Debug, Default)]
pub struct RelayInner {
    /// Live connections keyed by connection ID
    pub connections: HashMap<Uuid, ConnectionHandle>,
    /// Room membership sets keyed by project name
    pub rooms: HashMap<String, HashSet<Uuid>>,
}

/// Shared handle to the relay state
///
/// Cheap to clone; all clones refer to the same connection registry and
/// rooms. One of these lives in the application state and is handed to
/// every WebSocket task.
#[derive(Clone, Debug, Default)]
pub struct RelayState {
    inner: Arc<Mutex<RelayInner>>,
}

impl RelayState {
    /// Create an empty relay
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new connection
    ///
    /// Allocates a connection ID and an outbox channel. The returned receiver
    /// is the connection's outbox; the send half is stored in the registry so
    /// broadcasts can reach this connection.
    pub async fn register(&self) -> (Uuid, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let connection_id = Uuid::new_v4();

        let mut inner = self.inner.lock().await;
        inner.connections.insert(
            connection_id,
            ConnectionHandle {
                sender: tx,
                connected_at: Utc::now(),
            },
        );

        tracing::info!("New WebSocket connection");
        tracing::debug!(
            "[Realtime] Registered connection {} ({} total)",
            connection_id,
            inner.connections.len()
        );

        (connection_id, rx)
    }

    /// Remove a connection and sweep it from every room
    ///
    /// No leave notification is sent; a vanished connection disappears
    /// silently, unlike an explicit leave.
    pub async fn unregister(&self, connection_id: Uuid) {
        let mut inner = self.inner.lock().await;
        inner.connections.remove(&connection_id);
        for members in inner.rooms.values_mut() {
            members.remove(&connection_id);
        }
        inner.rooms.retain(|_, members| !members.is_empty());

        tracing::info!("User disconnected");
        tracing::debug!(
            "[Realtime] Unregistered connection {} ({} remaining)",
            connection_id,
            inner.connections.len()
        );
    }

    /// Add a connection to a room and announce the user to its members
    ///
    /// The notification goes to every current member of the room, the new
    /// member included. A connection may be a member of any number of rooms
    /// at once; joining a second room does not leave the first.
    pub async fn join_room(&self, connection_id: Uuid, username: &str, room: &str) {
        let mut inner = self.inner.lock().await;
        inner
            .rooms
            .entry(room.to_string())
            .or_default()
            .insert(connection_id);

        tracing::info!("{} has joined the project", username);

        let event = ServerEvent::user_joined(username.to_string());
        match event.to_frame() {
            Ok(frame) => {
                if let Some(members) = inner.rooms.get(room) {
                    let targets = room_targets(&inner.connections, members);
                    let delivered = deliver(&targets, &frame);
                    tracing::debug!(
                        "[Realtime] userJoined for '{}' delivered to {} members of '{}'",
                        username,
                        delivered,
                        room
                    );
                }
            }
            Err(e) => tracing::warn!("[Realtime] Failed to encode userJoined: {}", e),
        }
    }

    /// Remove a connection from a room and announce the departure
    ///
    /// The notification goes to the members that remain after the removal.
    /// Membership is not checked first: leaving a room this connection never
    /// joined still notifies that room's members.
    pub async fn leave_room(&self, connection_id: Uuid, username: &str, room: &str) {
        let mut inner = self.inner.lock().await;

        let mut emptied = false;
        if let Some(members) = inner.rooms.get_mut(room) {
            members.remove(&connection_id);
            emptied = members.is_empty();
        }
        if emptied {
            inner.rooms.remove(room);
        }

        tracing::info!("{} has left the project", username);

        let event = ServerEvent::user_left(username.to_string());
        match event.to_frame() {
            Ok(frame) => {
                if let Some(members) = inner.rooms.get(room) {
                    let targets = room_targets(&inner.connections, members);
                    let delivered = deliver(&targets, &frame);
                    tracing::debug!(
                        "[Realtime] userLeft for '{}' delivered to {} members of '{}'",
                        username,
                        delivered,
                        room
                    );
                }
            }
            Err(e) => tracing::warn!("[Realtime] Failed to encode userLeft: {}", e),
        }
    }

    /// Forward a code change to every other connection
    ///
    /// Global scope: every live connection except the sender receives the
    /// payload, whether or not it shares a room with the sender. The sender
    /// never sees its own edit echoed back.
    pub async fn broadcast_code(&self, sender_id: Uuid, payload: serde_json::Value) {
        let inner = self.inner.lock().await;

        let event = ServerEvent::ReceiveCode(payload);
        match event.to_frame() {
            Ok(frame) => {
                let targets = targets_except(&inner.connections, sender_id);
                let delivered = deliver(&targets, &frame);
                tracing::debug!(
                    "[Realtime] receiveCode delivered to {} connections",
                    delivered
                );
            }
            Err(e) => tracing::warn!("[Realtime] Failed to encode receiveCode: {}", e),
        }
    }

    /// Forward a chat message to every connection, the sender included
    pub async fn broadcast_message(&self, payload: serde_json::Value) {
        let inner = self.inner.lock().await;

        let event = ServerEvent::ReceiveMessage(payload);
        match event.to_frame() {
            Ok(frame) => {
                let targets = all_targets(&inner.connections);
                let delivered = deliver(&targets, &frame);
                tracing::debug!(
                    "[Realtime] receiveMessage delivered to {} connections",
                    delivered
                );
            }
            Err(e) => tracing::warn!("[Realtime] Failed to encode receiveMessage: {}", e),
        }
    }

    /// Number of live connections
    pub async fn connection_count(&self) -> usize {
        self.inner.lock().await.connections.len()
    }

    /// Number of members in a room (0 when the room does not exist)
    pub async fn room_size(&self, room: &str) -> usize {
        self.inner
            .lock()
            .await
            .rooms
            .get(room)
            .map(|members| members.len())
            .unwrap_or(0)
    }

    /// Whether a connection is a member of a room
    pub async fn is_room_member(&self, room: &str, connection_id: Uuid) -> bool {
        self.inner
            .lock()
            .await
            .rooms
            .get(room)
            .is_some_and(|members| members.contains(&connection_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;

    fn frame_event(frame: &str) -> serde_json::Value {
        serde_json::from_str(frame).unwrap()
    }

    #[tokio::test]
    async fn test_register_and_unregister() {
        let relay = RelayState::new();
        let (a, _rx_a) = relay.register().await;
        assert_eq!(relay.connection_count().await, 1);

        relay.unregister(a).await;
        assert_eq!(relay.connection_count().await, 0);
    }

    #[tokio::test]
    async fn test_join_notifies_all_members_including_joiner() {
        let relay = RelayState::new();
        let (a, mut rx_a) = relay.register().await;
        let (b, mut rx_b) = relay.register().await;

        relay.join_room(a, "alice", "demo").await;
        let frame = frame_event(&rx_a.recv().await.unwrap());
        assert_eq!(frame["event"], "userJoined");
        assert_eq!(frame["data"]["username"], "alice");

        relay.join_room(b, "bob", "demo").await;
        let to_a = frame_event(&rx_a.recv().await.unwrap());
        assert_eq!(to_a["data"]["username"], "bob");
        let to_b = frame_event(&rx_b.recv().await.unwrap());
        assert_eq!(to_b["data"]["username"], "bob");
    }

    #[tokio::test]
    async fn test_join_does_not_reach_other_rooms() {
        let relay = RelayState::new();
        let (a, _rx_a) = relay.register().await;
        let (b, mut rx_b) = relay.register().await;
        let (c, mut rx_c) = relay.register().await;

        relay.join_room(b, "bob", "other").await;
        let _ = rx_b.recv().await.unwrap();

        relay.join_room(a, "alice", "demo").await;
        assert_eq!(rx_b.try_recv().unwrap_err(), TryRecvError::Empty);
        assert_eq!(rx_c.try_recv().unwrap_err(), TryRecvError::Empty);
        assert!(relay.is_room_member("demo", a).await);
        assert!(!relay.is_room_member("demo", c).await);
    }

    #[tokio::test]
    async fn test_leave_notifies_remaining_members_only() {
        let relay = RelayState::new();
        let (a, mut rx_a) = relay.register().await;
        let (b, mut rx_b) = relay.register().await;

        relay.join_room(a, "alice", "demo").await;
        relay.join_room(b, "bob", "demo").await;
        while rx_a.try_recv().is_ok() {}
        while rx_b.try_recv().is_ok() {}

        relay.leave_room(a, "alice", "demo").await;
        let to_b = frame_event(&rx_b.recv().await.unwrap());
        assert_eq!(to_b["event"], "userLeft");
        assert_eq!(to_b["data"]["username"], "alice");
        assert_eq!(rx_a.try_recv().unwrap_err(), TryRecvError::Empty);
        assert!(!relay.is_room_member("demo", a).await);
    }

    #[tokio::test]
    async fn test_leave_without_join_still_broadcasts() {
        let relay = RelayState::new();
        let (a, mut rx_a) = relay.register().await;
        let (b, mut rx_b) = relay.register().await;

        relay.join_room(a, "alice", "demo").await;
        let _ = rx_a.recv().await.unwrap();

        // b never joined demo, yet its leave still notifies the room
        relay.leave_room(b, "bob", "demo").await;
        let to_a = frame_event(&rx_a.recv().await.unwrap());
        assert_eq!(to_a["event"], "userLeft");
        assert_eq!(to_a["data"]["username"], "bob");
        assert_eq!(rx_b.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[tokio::test]
    async fn test_code_change_is_global_and_skips_sender() {
        let relay = RelayState::new();
        let (a, mut rx_a) = relay.register().await;
        let (_b, mut rx_b) = relay.register().await;
        let (c, mut rx_c) = relay.register().await;

        // c is in an unrelated room; a and b joined nothing
        relay.join_room(c, "carol", "other").await;
        let _ = rx_c.recv().await.unwrap();

        let payload = serde_json::json!({"author": "alice", "content": "fn main() {}"});
        relay.broadcast_code(a, payload.clone()).await;

        let to_b = frame_event(&rx_b.recv().await.unwrap());
        assert_eq!(to_b["event"], "receiveCode");
        assert_eq!(to_b["data"], payload);
        let to_c = frame_event(&rx_c.recv().await.unwrap());
        assert_eq!(to_c["data"], payload);
        assert_eq!(rx_a.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[tokio::test]
    async fn test_chat_message_reaches_everyone_including_sender() {
        let relay = RelayState::new();
        let (_a, mut rx_a) = relay.register().await;
        let (_b, mut rx_b) = relay.register().await;

        let payload = serde_json::json!({"author": "alice", "content": "hello"});
        relay.broadcast_message(payload.clone()).await;

        let to_a = frame_event(&rx_a.recv().await.unwrap());
        assert_eq!(to_a["event"], "receiveMessage");
        assert_eq!(to_a["data"], payload);
        let to_b = frame_event(&rx_b.recv().await.unwrap());
        assert_eq!(to_b["data"], payload);
    }

    #[tokio::test]
    async fn test_multi_room_membership() {
        let relay = RelayState::new();
        let (a, mut rx_a) = relay.register().await;

        relay.join_room(a, "alice", "one").await;
        relay.join_room(a, "alice", "two").await;
        assert!(relay.is_room_member("one", a).await);
        assert!(relay.is_room_member("two", a).await);

        // One notification per join
        let _ = rx_a.recv().await.unwrap();
        let _ = rx_a.recv().await.unwrap();
        assert_eq!(rx_a.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[tokio::test]
    async fn test_unregister_sweeps_rooms_silently() {
        let relay = RelayState::new();
        let (a, mut rx_a) = relay.register().await;
        let (b, mut rx_b) = relay.register().await;

        relay.join_room(a, "alice", "demo").await;
        relay.join_room(b, "bob", "demo").await;
        while rx_a.try_recv().is_ok() {}
        while rx_b.try_recv().is_ok() {}

        relay.unregister(a).await;
        assert_eq!(relay.room_size("demo").await, 1);
        assert_eq!(rx_b.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[tokio::test]
    async fn test_empty_room_is_pruned() {
        let relay = RelayState::new();
        let (a, _rx_a) = relay.register().await;

        relay.join_room(a, "alice", "demo").await;
        assert_eq!(relay.room_size("demo").await, 1);

        relay.leave_room(a, "alice", "demo").await;
        assert_eq!(relay.room_size("demo").await, 0);
    }
}
