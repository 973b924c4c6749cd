use tokio::sync::mpsc;

/// Sending half of a connection's outbound message queue.
///
/// The WebSocket task owns the receiving half and forwards queued text
/// frames to the socket. Sends never block; a send into a closed queue
/// fails and the caller ignores it.
pub type ClientSender = mpsc::UnboundedSender<String>;

/// A player's slot in a room roster.
///
/// Slots are never removed: a disconnect flips `connected` to false and
/// leaves the stale sender in place.
#[derive(Debug, Clone)]
pub struct PlayerSession {
    /// Unique key within the room.
    pub player_name: String,
    /// Palette color assigned at first join.
    pub color: String,
    pub connected: bool,
    /// Opaque transport handle; never serialized.
    pub sender: ClientSender,
}

impl PlayerSession {
    /// Create a connected session bound to `sender`.
    pub fn new(player_name: String, color: String, sender: ClientSender) -> Self {
        Self {
            player_name,
            color,
            connected: true,
            sender,
        }
    }

    /// Queue a message on this player's connection, ignoring failures.
    pub fn send(&self, text: &str) {
        let _ = self.sender.send(text.to_string());
    }
}
