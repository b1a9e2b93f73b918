/**
 * Real-time Frame Fan-out
 *
 * This module provides the target selection and delivery helpers used by the
 * relay state. Target selection is pure: given the connection registry (and
 * optionally a room's membership set) it returns the connections a frame
 * should reach. Delivery pushes the encoded frame into each target's outbox.
 *
 * # Scopes
 *
 * Three scopes cover every server event:
 * - `room_targets`: members of one room (presence notifications)
 * - `targets_except`: every connection but one (code changes)
 * - `all_targets`: every connection (chat messages)
 *
 * # Delivery
 *
 * Outboxes are unbounded channels, so delivery never blocks. A send fails
 * only when the receiving task has already shut down; such targets are
 * skipped with a warning and do not affect the other deliveries.
 */

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::backend::realtime::state::ConnectionHandle;

/// Select the connections that are members of a room
///
/// Membership entries without a live connection are skipped; they can occur
/// briefly while a disconnect sweep is pending.
pub fn room_targets<'a>(
    connections: &'a HashMap<Uuid, ConnectionHandle>,
    members: &HashSet<Uuid>,
) -> Vec<(Uuid, &'a ConnectionHandle)> {
    members
        .iter()
        .filter_map(|id| connections.get(id).map(|handle| (*id, handle)))
        .collect()
}

/// Select every connection except one
pub fn targets_except(
    connections: &HashMap<Uuid, ConnectionHandle>,
    exclude: Uuid,
) -> Vec<(Uuid, &ConnectionHandle)> {
    connections
        .iter()
        .filter(|(id, _)| **id != exclude)
        .map(|(id, handle)| (*id, handle))
        .collect()
}

/// Select every connection
pub fn all_targets(
    connections: &HashMap<Uuid, ConnectionHandle>,
) -> Vec<(Uuid, &ConnectionHandle)> {
    connections
        .iter()
        .map(|(id, handle)| (*id, handle))
        .collect()
}

/// Push a frame into each target's outbox
///
/// # Returns
///
/// Number of targets the frame was delivered to (0 if there were none)
pub fn deliver(targets: &[(Uuid, &ConnectionHandle)], frame: &str) -> usize {
    let mut delivered = 0;
    for (id, handle) in targets {
        match handle.sender.send(frame.to_string()) {
            Ok(()) => delivered += 1,
            Err(_) => {
                // Receiver task already gone; the disconnect sweep will
                // remove this entry shortly
                tracing::warn!("[Realtime] Dropped frame for closed connection {}", id);
            }
        }
    }
    delivered
}
