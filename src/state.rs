//! Shared server state
//!
//! The server hosts exactly one live game. It sits behind a single
//! `parking_lot::Mutex` so requests are serialized and every handler sees a
//! consistent match.

use std::sync::Arc;

use chess_rules::Match;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, MutexGuard};
use tracing::info;
use uuid::Uuid;

/// The live game plus its identity
#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub game: Match,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            game: Match::new(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Axum state shared by every route
#[derive(Clone, Default)]
pub struct AppState {
    session: Arc<Mutex<GameSession>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the live session for the duration of the returned guard
    pub fn session(&self) -> MutexGuard<'_, GameSession> {
        self.session.lock()
    }

    /// Replace the live session with a fresh game, returning its id
    pub fn reset(&self) -> Uuid {
        let mut session = self.session.lock();
        *session = GameSession::new();
        info!("[API] Game reset, new session {}", session.id);
        session.id
    }
}
