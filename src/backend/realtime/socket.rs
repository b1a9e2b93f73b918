/**
 * WebSocket Connection Handling
 *
 * This module accepts WebSocket upgrades and runs the per-connection task
 * loop. Each connection gets two tasks: one reads client frames off the
 * socket and dispatches them to the relay, the other drains the connection's
 * outbox into the socket. When either side ends the other is aborted and the
 * connection is swept from the relay.
 *
 * # Frame Handling
 *
 * Incoming text frames are decoded as client events. Frames that do not
 * decode are dropped with a debug log; the connection stays open. Close
 * frames end the read loop, and binary frames are ignored.
 */

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use uuid::Uuid;

use crate::backend::realtime::state::RelayState;
use crate::shared::event::ClientEvent;

/// Accept a WebSocket upgrade and hand the socket to the relay
///
/// Mounted unauthenticated; identity on the relay is whatever username the
/// client presents in its join signals.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(relay): State<RelayState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, relay))
}

/// Run one connection until either side closes
async fn handle_socket(socket: WebSocket, relay: RelayState) {
    let (connection_id, mut outbox) = relay.register().await;
    let (mut socket_tx, mut socket_rx) = socket.split();

    // Reads client frames and dispatches them to the relay
    let recv_relay = relay.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = socket_rx.next().await {
            let message = match result {
                Ok(message) => message,
                Err(e) => {
                    tracing::debug!("[Realtime] Socket error on {}: {}", connection_id, e);
                    break;
                }
            };
            match message {
                Message::Text(text) => match ClientEvent::from_frame(&text) {
                    Ok(event) => dispatch_event(&recv_relay, connection_id, event).await,
                    Err(e) => {
                        tracing::debug!(
                            "[Realtime] Dropping unparseable frame from {}: {}",
                            connection_id,
                            e
                        );
                    }
                },
                Message::Close(_) => break,
                Message::Ping(_) | Message::Pong(_) => {}
                _ => {}
            }
        }
    });

    // Drains the outbox into the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = outbox.recv().await {
            if socket_tx.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    });

    // Whichever task finishes first ends the connection
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    }

    relay.unregister(connection_id).await;
}

/// Route one decoded client event to the relay operation it names
async fn dispatch_event(relay: &RelayState, connection_id: Uuid, event: ClientEvent) {
    match event {
        ClientEvent::JoinProject(signal) => {
            relay
                .join_room(connection_id, &signal.username, &signal.pjname)
                .await;
        }
        ClientEvent::LeaveProject(signal) => {
            relay
                .leave_room(connection_id, &signal.username, &signal.pjname)
                .await;
        }
        ClientEvent::CodeChange(payload) => {
            relay.broadcast_code(connection_id, payload).await;
        }
        ClientEvent::SendMessage(payload) => {
            relay.broadcast_message(payload).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::event::RoomSignal;

    #[tokio::test]
    async fn test_dispatch_join_adds_membership() {
        let relay = RelayState::new();
        let (id, _rx) = relay.register().await;

        let event = ClientEvent::JoinProject(RoomSignal {
            username: "alice".to_string(),
            pjname: "demo".to_string(),
        });
        dispatch_event(&relay, id, event).await;

        assert!(relay.is_room_member("demo", id).await);
    }

    #[tokio::test]
    async fn test_dispatch_leave_removes_membership() {
        let relay = RelayState::new();
        let (id, _rx) = relay.register().await;

        let join = ClientEvent::JoinProject(RoomSignal {
            username: "alice".to_string(),
            pjname: "demo".to_string(),
        });
        dispatch_event(&relay, id, join).await;

        let leave = ClientEvent::LeaveProject(RoomSignal {
            username: "alice".to_string(),
            pjname: "demo".to_string(),
        });
        dispatch_event(&relay, id, leave).await;

        assert!(!relay.is_room_member("demo", id).await);
    }

    #[tokio::test]
    async fn test_dispatch_code_change_skips_sender() {
        let relay = RelayState::new();
        let (a, mut rx_a) = relay.register().await;
        let (_b, mut rx_b) = relay.register().await;

        let event = ClientEvent::CodeChange(serde_json::json!({"content": "let x = 1;"}));
        dispatch_event(&relay, a, event).await;

        assert!(rx_a.try_recv().is_err());
        let frame: serde_json::Value = serde_json::from_str(&rx_b.recv().await.unwrap()).unwrap();
        assert_eq!(frame["event"], "receiveCode");
    }
}
