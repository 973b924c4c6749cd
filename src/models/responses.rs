use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::core::{Grid, Piece, PlayerSession};

/// Public view of a roster slot. Connection handles never leave the
/// server.
#[derive(Debug, Clone, Serialize)]
pub struct PublicPlayer {
    pub color: String,
    pub connected: bool,
}

impl PublicPlayer {
    pub fn from_session(session: &PlayerSession) -> Self {
        Self {
            color: session.color.clone(),
            connected: session.connected,
        }
    }
}

/// Wire view of a room roster: a JSON map keyed by player name, in join
/// order.
#[derive(Debug, Clone)]
pub struct Roster(Vec<(String, PublicPlayer)>);

impl Roster {
    pub fn from_players(players: &[PlayerSession]) -> Self {
        Self(
            players
                .iter()
                .map(|p| (p.player_name.clone(), PublicPlayer::from_session(p)))
                .collect(),
        )
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, player) in &self.0 {
            map.serialize_entry(name, player)?;
        }
        map.end()
    }
}

/// Outbound WebSocket envelope: `{"type": ..., "data": {...}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Full state snapshot, sent once to a newly connected session.
    GameState {
        grid: Grid,
        players: Roster,
        score: u32,
        next_piece: Piece,
        player_name: String,
        player_color: String,
    },
    /// Broadcast to the room, excluding the joiner.
    PlayerJoined { player_name: String, players: Roster },
    /// Broadcast to the remaining sessions.
    PlayerLeft { player_name: String, players: Roster },
    /// Broadcast to the whole room, placer included.
    PiecePlaced {
        grid: Grid,
        score: u32,
        next_piece: Piece,
        placed_by: String,
    },
    /// Reply to the requesting connection only.
    PieceRotated { shape: Vec<Vec<u8>> },
}

/// One liveness ping record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl StatusCheck {
    /// Create a record for `client_name` stamped with the current time.
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}
