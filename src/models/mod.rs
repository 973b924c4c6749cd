pub mod requests;
pub mod responses;

pub use requests::{ClientMessage, PlacePieceRequest, Position, RotatePieceRequest, StatusCheckCreate};
pub use responses::{PublicPlayer, Roster, ServerMessage, StatusCheck};
