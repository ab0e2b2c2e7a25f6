//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each ray direction, step away from the origin square:
//! 1. Empty square: mark it and keep going
//! 2. Opponent piece: mark it (capture) and stop
//! 3. Own piece: stop without marking
//! 4. Board edge: stop

use crate::board::Board;
use crate::move_gen::MoveGrid;
use crate::square::Square;
use crate::types::Side;

/// Mark every square reachable along `dirs` from `from`
///
/// # Arguments
///
/// * `board` - The current board
/// * `from` - Origin square of the sliding piece
/// * `side` - Side of the moving piece
/// * `dirs` - Ray directions as `(d_row, d_col)` steps
/// * `grid` - Output grid the destinations are marked in
///
/// # Examples
///
/// ```rust,ignore
/// let mut grid = MoveGrid::new();
/// generate_sliding_moves(&board, from, Side::White, &ROOK_DIRS, &mut grid);
/// ```
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    side: Side,
    dirs: &[(i32, i32)],
    grid: &mut MoveGrid,
) {
    for &(d_row, d_col) in dirs {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => grid.mark(next),
                Some(blocker) => {
                    if blocker.side != side {
                        grid.mark(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
