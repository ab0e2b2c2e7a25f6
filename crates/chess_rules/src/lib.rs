//! Chess rules engine
//!
//! Owns board state, enforces legal movement per piece kind, detects check,
//! checkmate and stalemate, tracks captures and advances turns.
//!
//! # Module Structure
//!
//! - `square` - validated `(row, col)` coordinates
//! - `types` - sides, piece kinds and placed pieces
//! - `board` - mechanical 8x8 storage with no rule knowledge
//! - `move_gen` - movement shapes per piece kind, attack detection and the
//!   check-safety filter
//! - `game` - the [`Match`] state machine, sole entry point for callers
//! - `captured`, `outcome`, `record` - bookkeeping exposed read-only
//!
//! # Example
//!
//! ```
//! use chess_rules::{Match, Side, Square};
//!
//! let mut game = Match::new();
//! let e2 = Square::new(6, 4).unwrap();
//! let e4 = Square::new(4, 4).unwrap();
//!
//! game.attempt_move(e2, e4, None).unwrap();
//! assert_eq!(game.side_to_move(), Side::Black);
//! ```

pub mod board;
pub mod captured;
pub mod error;
pub mod game;
mod make_move;
pub mod move_gen;
pub mod outcome;
pub mod record;
pub mod square;
pub mod types;


// Re-export commonly used items
pub use board::Board;
pub use captured::CapturedPieces;
pub use error::{RulesError, RulesResult};
pub use game::Match;
pub use move_gen::MoveGrid;
pub use outcome::MatchOutcome;
pub use record::{MoveRecord, SpecialMove};
pub use square::{Square, BOARD_SIZE};
pub use types::{Piece, PieceKind, Side};
