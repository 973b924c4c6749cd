use crate::core::RoomManager;
use crate::models::StatusCheck;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub room_manager: Arc<RwLock<RoomManager>>,
    /// Append-only log of liveness pings.
    pub status_log: Arc<RwLock<Vec<StatusCheck>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            room_manager: Arc::new(RwLock::new(RoomManager::new())),
            status_log: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
