//! Executed move records
//!
//! Every successful move appends one [`MoveRecord`] to the match history.
//! Records are never removed; there is no undo.

use serde::Serialize;

use crate::square::Square;
use crate::types::{Piece, PieceKind};

/// Side effects beyond a plain relocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpecialMove {
    /// Pawn advanced two squares and armed en passant for one turn
    DoubleStep,
    /// Pawn captured the passed pawn beside it
    EnPassant,
    /// King moved two squares and the rook jumped over it
    Castle,
    /// Pawn reached the far row and became this kind
    Promotion(PieceKind),
}

/// One executed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// Half-move number this move was played on, starting at 1
    pub ply: u32,
    /// The moving piece as it stood before the move
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub special: Option<SpecialMove>,
    /// Whether the move left the opponent in check
    pub gives_check: bool,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
