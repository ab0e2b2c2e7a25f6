//! King move generation
//!
//! Kings move one square in any direction, plus castling.
//!
//! ## Castling
//!
//! The king moves two squares towards a rook and the rook lands on the square
//! the king crossed. Allowed only when:
//! - neither the king nor that rook has moved
//! - every square between them is empty
//! - the king's current, crossed and landing squares are not attacked
//!
//! The rook relocation itself is applied by the match on execution.

use crate::board::Board;
use crate::move_gen::attack::is_square_attacked;
use crate::move_gen::tables::KING_OFFSETS;
use crate::move_gen::MoveGrid;
use crate::square::{Square, BOARD_SIZE};
use crate::types::{Piece, PieceKind};

/// Rook columns paired with the direction the king travels to reach them
const CASTLING_ROOKS: [(i32, usize); 2] = [(1, BOARD_SIZE - 1), (-1, 0)];

/// Generate king destinations from a given square, castling included
pub fn generate_king_moves(board: &Board, from: Square, king: Piece, grid: &mut MoveGrid) {
    king_steps(board, from, king, grid);
    generate_castling_moves(board, from, king, grid);
}

/// The eight adjacent squares not held by a friendly piece
///
/// Attack detection uses this directly so that castling never recurses.
pub fn king_steps(board: &Board, from: Square, king: Piece, grid: &mut MoveGrid) {
    for &(d_row, d_col) in &KING_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.piece_at(to) {
            Some(occupant) if occupant.side == king.side => {}
            _ => grid.mark(to),
        }
    }
}

/// Rook square and rook destination for a king travelling from `from` to `to`
///
/// Returns `None` when the move is not a two-column king move.
pub fn castling_rook_squares(from: Square, to: Square) -> Option<(Square, Square)> {
    if from.row() != to.row() || from.col().abs_diff(to.col()) != 2 {
        return None;
    }
    let (dir, rook_col) = if to.col() > from.col() {
        CASTLING_ROOKS[0]
    } else {
        CASTLING_ROOKS[1]
    };
    let rook_from = Square::new(from.row() as i32, rook_col as i32).ok()?;
    let rook_to = from.offset(0, dir)?;
    Some((rook_from, rook_to))
}

fn generate_castling_moves(board: &Board, from: Square, king: Piece, grid: &mut MoveGrid) {
    if king.has_moved() || from.row() != king.side.back_row() {
        return;
    }

    let enemy = king.side.opposite();

    // Cannot castle out of check
    if is_square_attacked(board, from, enemy) {
        return;
    }

    for (dir, rook_col) in CASTLING_ROOKS {
        // The king needs two squares of travel strictly before the rook
        if from.col().abs_diff(rook_col) < 3 {
            continue;
        }

        let Ok(rook_square) = Square::new(from.row() as i32, rook_col as i32) else {
            continue;
        };
        match board.piece_at(rook_square) {
            Some(rook)
                if rook.kind == PieceKind::Rook && rook.side == king.side && !rook.has_moved() => {}
            _ => continue,
        }

        let (low, high) = if rook_col > from.col() {
            (from.col() + 1, rook_col)
        } else {
            (rook_col + 1, from.col())
        };
        let path_clear = (low..high).all(|col| {
            Square::new(from.row() as i32, col as i32)
                .map(|square| board.is_empty(square))
                .unwrap_or(false)
        });
        if !path_clear {
            continue;
        }

        let (Some(crossed), Some(landing)) = (from.offset(0, dir), from.offset(0, 2 * dir)) else {
            continue;
        };
        if is_square_attacked(board, crossed, enemy) || is_square_attacked(board, landing, enemy) {
            continue;
        }

        grid.mark(landing);
    }
}
