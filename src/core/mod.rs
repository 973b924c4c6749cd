pub mod constants;
pub mod grid;
pub mod pieces;
pub mod player;
pub mod room;
pub mod room_manager;

pub use constants::*;
pub use grid::{empty_grid, is_valid_placement, Cell, Grid, InvalidPlacement};
pub use pieces::{generate_random_piece, rotate_clockwise, Piece, PieceKind};
pub use player::{ClientSender, PlayerSession};
pub use room::GameRoom;
pub use room_manager::RoomManager;
