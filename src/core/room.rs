use serde::Serialize;

use super::constants::{PLAYER_PALETTE, POINTS_PER_CELL};
use super::grid::{self, Cell, Grid, InvalidPlacement};
use super::pieces::{self, Piece};
use super::player::{ClientSender, PlayerSession};

/// The shared game state for one room key.
///
/// A room is created on first join and lives for the rest of the
/// process. The grid is owned exclusively by the room; occupied cells
/// are never cleared.
#[derive(Debug)]
pub struct GameRoom {
    pub room_key: String,
    pub grid: Grid,
    /// Non-negative and monotonically non-decreasing.
    pub score: u32,
    /// Current piece offered to all players in the room.
    pub next_piece: Piece,
    /// Roster in join order. Slots are upserted, never removed.
    pub players: Vec<PlayerSession>,
}

impl GameRoom {
    /// Create a fresh room with an empty grid and a random first piece.
    pub fn new(room_key: String) -> Self {
        Self {
            room_key,
            grid: grid::empty_grid(),
            score: 0,
            next_piece: pieces::generate_random_piece(),
            players: Vec::new(),
        }
    }

    pub fn player(&self, name: &str) -> Option<&PlayerSession> {
        self.players.iter().find(|p| p.player_name == name)
    }

    pub fn player_mut(&mut self, name: &str) -> Option<&mut PlayerSession> {
        self.players.iter_mut().find(|p| p.player_name == name)
    }

    /// Upsert a roster slot for `name`, returning the assigned color.
    ///
    /// A returning name keeps its slot and color; only the connection is
    /// replaced and `connected` flipped back on. New names get the
    /// palette entry for the current roster size, so colors repeat once
    /// more than six players have ever joined.
    pub fn join(&mut self, name: &str, sender: ClientSender) -> String {
        if let Some(existing) = self.player_mut(name) {
            existing.sender = sender;
            existing.connected = true;
            return existing.color.clone();
        }

        let color = PLAYER_PALETTE[self.players.len() % PLAYER_PALETTE.len()].to_string();
        self.players
            .push(PlayerSession::new(name.to_string(), color.clone(), sender));
        color
    }

    /// Mark a player disconnected, keeping the roster slot and its stale
    /// sender.
    ///
    /// # Returns
    ///
    /// True if the slot existed.
    pub fn mark_disconnected(&mut self, name: &str) -> bool {
        match self.player_mut(name) {
            Some(player) => {
                player.connected = false;
                true
            }
            None => false,
        }
    }

    /// Write a piece into the grid and advance the shared state.
    ///
    /// On success every set cell of `shape` is painted with the
    /// client-supplied `color`, the score grows by ten points per cell,
    /// and a new random piece is drawn. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlacement` if any set cell falls outside the grid
    /// or overlaps an occupied cell.
    pub fn place_piece(
        &mut self,
        player_name: &str,
        shape: &[Vec<u8>],
        x: i32,
        y: i32,
        color: &str,
    ) -> Result<(), InvalidPlacement> {
        if !grid::is_valid_placement(&self.grid, shape, x, y) {
            return Err(InvalidPlacement);
        }

        let mut cells_filled = 0u32;
        for (row_idx, row) in shape.iter().enumerate() {
            for (col_idx, &cell) in row.iter().enumerate() {
                if cell != 1 {
                    continue;
                }
                let grid_y = (y + row_idx as i32) as usize;
                let grid_x = (x + col_idx as i32) as usize;
                self.grid[grid_y][grid_x] = Some(Cell {
                    color: color.to_string(),
                    player: player_name.to_string(),
                });
                cells_filled += 1;
            }
        }

        self.score += cells_filled * POINTS_PER_CELL;
        self.next_piece = pieces::generate_random_piece();

        Ok(())
    }

    /// Best-effort fan-out of `message` to every roster slot except
    /// `exclude`.
    ///
    /// Delivery is attempted on whatever sender a slot holds, connected
    /// or not; a stale sender fails silently. One recipient's failure
    /// never aborts delivery to the others.
    pub fn broadcast<T: Serialize>(&self, message: &T, exclude: Option<&str>) {
        if let Ok(text) = serde_json::to_string(message) {
            for player in &self.players {
                if exclude == Some(player.player_name.as_str()) {
                    continue;
                }
                player.send(&text);
            }
        }
    }
}
