//! Rook move generation
//!
//! Rooks slide along ranks and files any number of squares until blocked.
//! Castling is generated from the king's side, see [`super::king`].

use crate::board::Board;
use crate::move_gen::sliding::generate_sliding_moves;
use crate::move_gen::tables::ROOK_DIRS;
use crate::move_gen::MoveGrid;
use crate::square::Square;
use crate::types::Side;

/// Generate rook destinations from a given square
pub fn generate_rook_moves(board: &Board, from: Square, side: Side, grid: &mut MoveGrid) {
    generate_sliding_moves(board, from, side, &ROOK_DIRS, grid);
}
