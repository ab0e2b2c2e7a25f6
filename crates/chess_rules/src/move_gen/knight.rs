//! Knight move generation
//!
//! Handles knight-specific move generation. Knights move in an L-shape pattern:
//! 2 squares in one direction, then 1 square perpendicular (or vice versa).
//!
//! ## Knight Movement Rules
//!
//! - Knights can jump over pieces (unlike sliding pieces)
//! - 8 possible destinations from most squares (fewer near edges)
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use crate::board::Board;
use crate::move_gen::tables::KNIGHT_OFFSETS;
use crate::move_gen::MoveGrid;
use crate::square::Square;
use crate::types::Side;

/// Generate knight destinations from a given square
///
/// # Arguments
///
/// * `board` - The current board
/// * `from` - Square the knight stands on
/// * `side` - Side of the knight
/// * `grid` - Output grid the destinations are marked in
///
/// # Examples
///
/// ```rust,ignore
/// let mut grid = MoveGrid::new();
/// generate_knight_moves(&board, b1, Side::White, &mut grid);
/// // grid now marks a3 and c3
/// ```
pub fn generate_knight_moves(board: &Board, from: Square, side: Side, grid: &mut MoveGrid) {
    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };

        // Valid if destination is empty or holds an opponent piece
        match board.piece_at(to) {
            Some(occupant) if occupant.side == side => {}
            _ => grid.mark(to),
        }
    }
}
