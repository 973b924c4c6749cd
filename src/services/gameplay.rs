//! Placement handling: validate, mutate, fan out.

use crate::core::RoomManager;
use crate::models::{PlacePieceRequest, ServerMessage};

/// Apply a placement request for `player_name` in `room_key`.
///
/// On success the whole room, placer included, receives `piece_placed`
/// with the updated grid, score, and freshly drawn next piece. On
/// failure nothing is mutated and nothing is sent; the client gets no
/// explicit rejection notice.
///
/// # Returns
///
/// True if the piece was placed.
pub fn place_piece(
    manager: &mut RoomManager,
    room_key: &str,
    player_name: &str,
    request: &PlacePieceRequest,
) -> bool {
    let room = match manager.get_room_mut(room_key) {
        Some(room) => room,
        None => return false,
    };

    if let Err(err) = room.place_piece(
        player_name,
        &request.shape,
        request.position.x,
        request.position.y,
        &request.color,
    ) {
        tracing::debug!(
            "Rejected placement from player {} in room {}: {}",
            player_name,
            room_key,
            err
        );
        return false;
    }

    let update = ServerMessage::PiecePlaced {
        grid: room.grid.clone(),
        score: room.score,
        next_piece: room.next_piece.clone(),
        placed_by: player_name.to_string(),
    };
    manager.broadcast_to_room(room_key, &update, None);

    true
}
