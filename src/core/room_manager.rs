use serde::Serialize;
use std::collections::HashMap;

use super::room::GameRoom;

/// Registry of all live rooms, keyed by room key.
///
/// Rooms are created lazily on first join and retained for the life of
/// the process; there is no eviction and no capacity limit. The registry
/// is owned by `AppState` and injected into handlers rather than living
/// in a module-level singleton.
#[derive(Debug, Default)]
pub struct RoomManager {
    rooms: HashMap<String, GameRoom>,
}

impl RoomManager {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    /// Fetch the room for `room_key`, creating a fresh one on first use.
    ///
    /// A fresh room has an empty grid, score 0, and a random first piece.
    pub fn get_or_create(&mut self, room_key: &str) -> &mut GameRoom {
        self.rooms
            .entry(room_key.to_string())
            .or_insert_with(|| GameRoom::new(room_key.to_string()))
    }

    /// Retrieve a room by key.
    pub fn get_room(&self, room_key: &str) -> Option<&GameRoom> {
        self.rooms.get(room_key)
    }

    /// Retrieve a mutable room by key.
    pub fn get_room_mut(&mut self, room_key: &str) -> Option<&mut GameRoom> {
        self.rooms.get_mut(room_key)
    }

    /// Number of rooms ever created in this process.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Fan `message` out to a room's roster, no-op if the room is absent.
    pub fn broadcast_to_room<T: Serialize>(
        &self,
        room_key: &str,
        message: &T,
        exclude: Option<&str>,
    ) {
        if let Some(room) = self.rooms.get(room_key) {
            room.broadcast(message, exclude);
        }
    }
}
