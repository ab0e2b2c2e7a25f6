//! Chess API
//!
//! A thin HTTP layer over the [`chess_rules`] engine. It hosts one live game,
//! translates player-facing coordinates (`e2`, `e4`) into engine squares and
//! renders engine errors as JSON.
//!
//! # Module Structure
//!
//! - `api` - axum router and request/response types
//! - `config` - clap configuration with environment fallbacks
//! - `coords` - file letter and rank number to engine square mapping
//! - `error` - request layer error type and its HTTP rendering
//! - `state` - the shared game session

pub mod api;
pub mod config;
pub mod coords;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::{AppState, GameSession};
