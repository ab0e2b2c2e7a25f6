//! Move generation
//!
//! Two layers:
//! - [`movement_shape`] marks every square a piece could reach if only its
//!   geometric movement pattern mattered
//! - [`legal_moves`] drops the shape destinations that would leave the
//!   mover's own king attacked, by playing each one on a scratch board
//!
//! Per-kind generators live in the submodules and are dispatched on
//! [`PieceKind`].

pub mod attack;
pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;
pub mod tables;

use serde::Serialize;

use crate::board::Board;
use crate::make_move::apply_move;
use crate::square::{Square, BOARD_SIZE};
use crate::types::{PieceKind, Side};

/// 8x8 boolean grid of candidate destinations
///
/// Serializes as eight rows of eight booleans, row 0 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct MoveGrid {
    cells: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl MoveGrid {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mark(&mut self, square: Square) {
        self.cells[square.row()][square.col()] = true;
    }

    #[inline]
    pub fn unmark(&mut self, square: Square) {
        self.cells[square.row()][square.col()] = false;
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.cells[square.row()][square.col()]
    }

    pub fn is_empty(&self) -> bool {
        self.squares().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.squares().count()
    }

    /// Marked squares in row-major order
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(|square| self.contains(*square))
    }

    /// Raw rows, row 0 first
    pub fn rows(&self) -> &[[bool; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

/// Destinations allowed by the movement pattern of the piece on `from`
///
/// Ignores whether the move would leave the mover in check. An empty square
/// yields an empty grid. Destinations held by friendly pieces and `from`
/// itself are never marked.
pub fn movement_shape(board: &Board, from: Square, en_passant: Option<Square>) -> MoveGrid {
    let mut grid = MoveGrid::new();
    let Some(piece) = board.piece_at(from) else {
        return grid;
    };

    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, piece, en_passant, &mut grid),
        PieceKind::Knight => knight::generate_knight_moves(board, from, piece.side, &mut grid),
        PieceKind::Bishop => bishop::generate_bishop_moves(board, from, piece.side, &mut grid),
        PieceKind::Rook => rook::generate_rook_moves(board, from, piece.side, &mut grid),
        PieceKind::Queen => queen::generate_queen_moves(board, from, piece.side, &mut grid),
        PieceKind::King => king::generate_king_moves(board, from, piece, &mut grid),
    }

    grid
}

/// Movement-shape destinations that keep the mover's own king safe
///
/// Each candidate is played on a scratch copy of the board (special-move side
/// effects included) and rejected if the mover's king is attacked afterwards.
pub fn legal_moves(board: &Board, from: Square, en_passant: Option<Square>) -> MoveGrid {
    let Some(piece) = board.piece_at(from) else {
        return MoveGrid::new();
    };

    let mut grid = movement_shape(board, from, en_passant);
    let candidates: Vec<Square> = grid.squares().collect();
    for to in candidates {
        let safe = apply_move(board, from, to, en_passant, PieceKind::Queen)
            .is_some_and(|applied| !attack::is_in_check(&applied.board, piece.side));
        if !safe {
            grid.unmark(to);
        }
    }
    grid
}

/// Whether any piece of `side` has at least one legal move
pub fn has_any_legal_move(board: &Board, side: Side, en_passant: Option<Square>) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.side == side)
        .any(|(from, _)| !legal_moves(board, from, en_passant).is_empty())
}
