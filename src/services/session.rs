//! Session lifecycle: binding connections to (room, player) pairs.

use crate::core::{ClientSender, RoomManager};
use crate::models::{Roster, ServerMessage};

/// Bind a new connection to `(room_key, player_name)`.
///
/// Creates the room on first use, upserts the roster slot, sends the
/// full `game_state` snapshot to the joining connection only, then
/// broadcasts `player_joined` to everyone else. Existing players never
/// receive the grid again at join time; they track it incrementally.
///
/// The transport handshake is assumed to have already succeeded.
pub fn connect(manager: &mut RoomManager, room_key: &str, player_name: &str, sender: ClientSender) {
    let room = manager.get_or_create(room_key);
    let color = room.join(player_name, sender);

    tracing::info!(
        "Player {} joined room {} with color {}",
        player_name,
        room_key,
        color
    );

    let roster = Roster::from_players(&room.players);

    let snapshot = ServerMessage::GameState {
        grid: room.grid.clone(),
        players: roster.clone(),
        score: room.score,
        next_piece: room.next_piece.clone(),
        player_name: player_name.to_string(),
        player_color: color,
    };
    if let Some(player) = room.player(player_name) {
        if let Ok(text) = serde_json::to_string(&snapshot) {
            player.send(&text);
        }
    }

    let announce = ServerMessage::PlayerJoined {
        player_name: player_name.to_string(),
        players: roster,
    };
    room.broadcast(&announce, Some(player_name));
}

/// Mark a player disconnected and tell the remaining sessions.
///
/// The roster slot is retained with `connected = false`, so the
/// `player_left` roster still carries the departed name. Absent rooms or
/// players are a no-op.
pub fn disconnect(manager: &mut RoomManager, room_key: &str, player_name: &str) {
    if let Some(room) = manager.get_room_mut(room_key) {
        if room.mark_disconnected(player_name) {
            tracing::info!("Player {} left room {}", player_name, room_key);

            let message = ServerMessage::PlayerLeft {
                player_name: player_name.to_string(),
                players: Roster::from_players(&room.players),
            };
            room.broadcast(&message, None);
        }
    }
}
