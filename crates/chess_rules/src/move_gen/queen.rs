//! Queen move generation
//!
//! The queen combines rook and bishop movement: it slides along ranks, files
//! and diagonals until blocked.

use crate::board::Board;
use crate::move_gen::sliding::generate_sliding_moves;
use crate::move_gen::tables::QUEEN_DIRS;
use crate::move_gen::MoveGrid;
use crate::square::Square;
use crate::types::Side;

/// Generate queen destinations from a given square
pub fn generate_queen_moves(board: &Board, from: Square, side: Side, grid: &mut MoveGrid) {
    generate_sliding_moves(board, from, side, &QUEEN_DIRS, grid);
}
