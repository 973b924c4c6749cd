use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::{
    core::{pieces, ClientSender},
    models::{ClientMessage, ServerMessage},
    services,
    state::AppState,
};

/// WebSocket endpoint for real-time room updates
///
/// # Arguments
///
/// * `room_key` - The room identifier from path
/// * `player_name` - The player's name from path
/// * `ws` - WebSocket upgrade request
/// * `state` - Shared application state
///
/// # Flow
///
/// 1. Upgrade the connection
/// 2. Register the session and send the initial `game_state`
/// 3. Forward queued outbound messages to the socket
/// 4. Dispatch inbound `place_piece` / `rotate_piece` messages
/// 5. On close, mark the session disconnected and announce `player_left`
pub async fn websocket_handler(
    Path((room_key, player_name)): Path<(String, String)>,
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    tracing::debug!(
        "WebSocket connection attempt: room={}, player={}",
        room_key,
        player_name
    );

    ws.on_upgrade(move |socket| handle_socket(socket, room_key, player_name, state))
}

/// Handle one WebSocket connection for the life of the session.
async fn handle_socket(socket: WebSocket, room_key: String, player_name: String, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    // Register the session and announce it. The write guard is held for
    // the whole operation; queue sends never suspend, so the snapshot
    // and the join broadcast are atomic with the roster update.
    {
        let mut manager = state.room_manager.write().await;
        services::connect(&mut manager, &room_key, &player_name, tx.clone());
    }

    tracing::info!("WebSocket accepted: player={} room={}", player_name, room_key);

    // Drain the outbound queue into the socket.
    let mut send_task = tokio::spawn(async move {
        while let Some(text) = rx.recv().await {
            if sender.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    // Read inbound messages and dispatch the ones we understand.
    let recv_state = state.clone();
    let recv_room_key = room_key.clone();
    let recv_player_name = player_name.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    dispatch_message(
                        &recv_state,
                        &recv_room_key,
                        &recv_player_name,
                        &tx,
                        &text,
                    )
                    .await;
                }
                Message::Close(_) => {
                    tracing::debug!("Close message from player={}", recv_player_name);
                    break;
                }
                Message::Ping(_) | Message::Pong(_) => {
                    // Axum handles WebSocket ping/pong frames automatically
                }
                Message::Binary(_) => {
                    tracing::warn!(
                        "Unexpected binary message from player={}",
                        recv_player_name
                    );
                }
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    // Abrupt closure is a normal lifecycle transition, not an error.
    {
        let mut manager = state.room_manager.write().await;
        services::disconnect(&mut manager, &room_key, &player_name);
    }

    tracing::info!(
        "WebSocket connection closed: player={} room={}",
        player_name,
        room_key
    );
}

/// Decode one inbound frame and route it.
///
/// Unknown types and unparsable payloads are dropped without a reply and
/// without touching the connection.
async fn dispatch_message(
    state: &AppState,
    room_key: &str,
    player_name: &str,
    reply: &ClientSender,
    text: &str,
) {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(err) => {
            tracing::debug!(
                "Ignoring unparsable message from player={}: {}",
                player_name,
                err
            );
            return;
        }
    };

    match message {
        ClientMessage::PlacePiece(request) => {
            let mut manager = state.room_manager.write().await;
            services::place_piece(&mut manager, room_key, player_name, &request);
        }
        ClientMessage::RotatePiece(request) => {
            // Rotation previews are private to the requester and touch no
            // room state.
            let rotated = ServerMessage::PieceRotated {
                shape: pieces::rotate_clockwise(&request.shape),
            };
            if let Ok(text) = serde_json::to_string(&rotated) {
                let _ = reply.send(text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[tokio::test]
    async fn test_dispatch_rotate_replies_only_to_requester() {
        let state = AppState::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        {
            let mut manager = state.room_manager.write().await;
            services::connect(&mut manager, "r1", "Alice", tx.clone());
        }
        rx.try_recv().unwrap(); // snapshot

        let text = r#"{"type": "rotate_piece", "data": {"shape": [[1, 1, 1, 1]]}}"#;
        dispatch_message(&state, "r1", "Alice", &tx, text).await;

        let reply: Value = serde_json::from_str(&rx.try_recv().unwrap()).unwrap();
        assert_eq!(reply["type"], "piece_rotated");
        assert_eq!(
            reply["data"]["shape"],
            serde_json::json!([[1], [1], [1], [1]])
        );
    }

    #[tokio::test]
    async fn test_dispatch_place_piece_updates_room() {
        let state = AppState::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        {
            let mut manager = state.room_manager.write().await;
            services::connect(&mut manager, "r1", "Alice", tx.clone());
        }
        rx.try_recv().unwrap(); // snapshot

        let text = r##"{
            "type": "place_piece",
            "data": {
                "shape": [[1, 1], [1, 1]],
                "position": {"x": 0, "y": 0},
                "color": "#FFFF00"
            }
        }"##;
        dispatch_message(&state, "r1", "Alice", &tx, text).await;

        let update: Value = serde_json::from_str(&rx.try_recv().unwrap()).unwrap();
        assert_eq!(update["type"], "piece_placed");
        assert_eq!(update["data"]["score"], 40);

        let manager = state.room_manager.read().await;
        assert_eq!(manager.get_room("r1").unwrap().score, 40);
    }

    #[tokio::test]
    async fn test_dispatch_ignores_unknown_and_malformed() {
        let state = AppState::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        {
            let mut manager = state.room_manager.write().await;
            services::connect(&mut manager, "r1", "Alice", tx.clone());
        }
        rx.try_recv().unwrap(); // snapshot

        dispatch_message(&state, "r1", "Alice", &tx, "not json").await;
        dispatch_message(&state, "r1", "Alice", &tx, r#"{"type": "chat", "data": {}}"#).await;

        // No replies, no state change
        assert!(rx.try_recv().is_err());
        let manager = state.room_manager.read().await;
        assert_eq!(manager.get_room("r1").unwrap().score, 0);
    }
}
