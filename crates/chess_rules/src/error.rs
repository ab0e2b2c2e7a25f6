//! Error types for the rules engine
//!
//! Provides the closed set of failure reasons the engine reports. The board
//! only ever produces [`RulesError::OutOfBounds`]; every other variant comes
//! from [`crate::game::Match`] while validating or executing a move.
//!
//! All variants are recoverable. A failed call leaves the match exactly as it
//! was before the call.

use thiserror::Error;

use crate::square::Square;
use crate::types::Side;

/// Errors that can occur in the rules engine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    /// Coordinates outside the 8x8 grid
    #[error("Square ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// No piece on the selected origin
    #[error("No piece at {square}")]
    EmptySquare { square: Square },

    /// The selected piece belongs to the side that is not on move
    #[error("Piece at {square} belongs to {side}, but it is not {side}'s turn")]
    WrongSideToMove { square: Square, side: Side },

    /// The selected piece has nowhere to go
    #[error("Piece at {square} has no legal moves")]
    NoLegalMoves { square: Square },

    /// The destination is not reachable by the selected piece
    #[error("Piece at {from} cannot move to {to}")]
    IllegalDestination { from: Square, to: Square },

    /// Execution requested for a move that did not pass validation
    #[error("Illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },
}

impl RulesError {
    /// Stable snake_case tag for the error kind
    ///
    /// Request layers surface this verbatim so clients can match on the
    /// reason without parsing the human-readable message.
    pub fn kind(&self) -> &'static str {
        match self {
            RulesError::OutOfBounds { .. } => "out_of_bounds",
            RulesError::EmptySquare { .. } => "empty_square",
            RulesError::WrongSideToMove { .. } => "wrong_side_to_move",
            RulesError::NoLegalMoves { .. } => "no_legal_moves",
            RulesError::IllegalDestination { .. } => "illegal_destination",
            RulesError::IllegalMove { .. } => "illegal_move",
        }
    }
}

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, RulesError>;
