//! Capture lists keyed by captor
//!
//! Every capturing move appends the removed piece to the list of the side
//! that made the capture. [`CapturedPieces::by`] reads one side's list and
//! [`CapturedPieces::material_advantage`] compares them using
//! [`crate::types::PieceKind::value`], so a positive score favours White.

use serde::Serialize;

use crate::types::{Piece, Side};

/// Append-only capture lists for both sides
///
/// # Fields
///
/// - `by_white`: Black pieces that White has captured, in capture order
/// - `by_black`: White pieces that Black has captured, in capture order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CapturedPieces {
    by_white: Vec<Piece>,
    by_black: Vec<Piece>,
}

impl CapturedPieces {
    /// Record a capture made by `captor`
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // White takes Black's queen
    /// captured.record(Side::White, black_queen);
    /// assert_eq!(captured.by(Side::White).len(), 1);
    /// ```
    pub(crate) fn record(&mut self, captor: Side, piece: Piece) {
        match captor {
            Side::White => self.by_white.push(piece),
            Side::Black => self.by_black.push(piece),
        }
    }

    /// Pieces captured by `captor`, oldest first
    pub fn by(&self, captor: Side) -> &[Piece] {
        match captor {
            Side::White => &self.by_white,
            Side::Black => &self.by_black,
        }
    }

    /// White's haul minus Black's haul, in pawn units
    pub fn material_advantage(&self) -> i32 {
        haul(&self.by_white) - haul(&self.by_black)
    }

    pub fn total(&self) -> usize {
        self.by_white.len() + self.by_black.len()
    }
}

fn haul(pieces: &[Piece]) -> i32 {
    pieces.iter().map(|piece| piece.kind.value()).sum()
}
