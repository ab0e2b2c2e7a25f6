//! Bishop move generation
//!
//! Bishops slide diagonally any number of squares until blocked.

use crate::board::Board;
use crate::move_gen::sliding::generate_sliding_moves;
use crate::move_gen::tables::BISHOP_DIRS;
use crate::move_gen::MoveGrid;
use crate::square::Square;
use crate::types::Side;

/// Generate bishop destinations from a given square
pub fn generate_bishop_moves(board: &Board, from: Square, side: Side, grid: &mut MoveGrid) {
    generate_sliding_moves(board, from, side, &BISHOP_DIRS, grid);
}
