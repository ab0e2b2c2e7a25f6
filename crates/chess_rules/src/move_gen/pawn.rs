//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - En passant captures onto the recorded target square
//!
//! Promotion is not a destination rule; it is applied by the match when a
//! pawn lands on its promotion row.
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square towards the opponent if that square is empty
//! - **Double push**: from the starting row, only for a pawn that has never
//!   moved, when both squares ahead are empty
//! - **Captures**: one square diagonally forward onto an opponent piece
//! - **En passant**: diagonally forward onto the en passant target, when the
//!   opponent pawn that just double-stepped stands beside the capturer

use crate::board::Board;
use crate::move_gen::tables::PAWN_CAPTURE_COLS;
use crate::move_gen::MoveGrid;
use crate::square::Square;
use crate::types::{Piece, PieceKind};

/// Generate pawn destinations from a given square
///
/// # Arguments
///
/// * `board` - The current board
/// * `from` - Square the pawn stands on
/// * `pawn` - The pawn itself (side and move count matter)
/// * `en_passant` - Square a pawn may capture into this turn, if any
/// * `grid` - Output grid the destinations are marked in
pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    pawn: Piece,
    en_passant: Option<Square>,
    grid: &mut MoveGrid,
) {
    let forward = pawn.side.forward();

    if let Some(one) = from.offset(forward, 0) {
        if board.is_empty(one) {
            grid.mark(one);

            if !pawn.has_moved() && from.row() == pawn.side.pawn_row() {
                if let Some(two) = from.offset(2 * forward, 0) {
                    if board.is_empty(two) {
                        grid.mark(two);
                    }
                }
            }
        }
    }

    for d_col in PAWN_CAPTURE_COLS {
        let Some(diagonal) = from.offset(forward, d_col) else {
            continue;
        };
        match board.piece_at(diagonal) {
            Some(target) if target.side != pawn.side => grid.mark(diagonal),
            Some(_) => {}
            None => {
                if en_passant_victim(board, from, pawn, diagonal, en_passant).is_some() {
                    grid.mark(diagonal);
                }
            }
        }
    }
}

/// Square of the pawn removed by an en passant capture from `from` to `to`
///
/// Returns `None` unless `to` is the recorded target, is empty, and the square
/// beside the capturer (same row as `from`, same column as `to`) holds an
/// opponent pawn.
pub fn en_passant_victim(
    board: &Board,
    from: Square,
    pawn: Piece,
    to: Square,
    en_passant: Option<Square>,
) -> Option<Square> {
    if en_passant != Some(to) || !board.is_empty(to) {
        return None;
    }
    let victim = Square::new(from.row() as i32, to.col() as i32).ok()?;
    match board.piece_at(victim) {
        Some(target) if target.kind == PieceKind::Pawn && target.side != pawn.side => Some(victim),
        _ => None,
    }
}

/// The two squares a pawn attacks, regardless of occupancy
pub fn pawn_attacks(from: Square, pawn: Piece, grid: &mut MoveGrid) {
    for d_col in PAWN_CAPTURE_COLS {
        if let Some(diagonal) = from.offset(pawn.side.forward(), d_col) {
            grid.mark(diagonal);
        }
    }
}
