//! Attack detection and square checking
//!
//! Provides functions to check if squares are under attack and if kings are in check.
//! This module is critical for move legality validation and check detection.
//!
//! ## Algorithm
//!
//! To check if a square is attacked, we iterate through all opponent pieces
//! and verify if any can reach the target square. Attacks follow the movement
//! shape of each piece with two differences:
//! - pawns attack both forward diagonals whether or not they are occupied
//! - kings attack their neighbours only (castling never attacks)

use crate::board::Board;
use crate::move_gen::bishop::generate_bishop_moves;
use crate::move_gen::king::king_steps;
use crate::move_gen::knight::generate_knight_moves;
use crate::move_gen::pawn::pawn_attacks;
use crate::move_gen::queen::generate_queen_moves;
use crate::move_gen::rook::generate_rook_moves;
use crate::move_gen::MoveGrid;
use crate::square::Square;
use crate::types::{Piece, PieceKind, Side};

/// Squares attacked by the piece standing on `from`
pub fn attacked_by(board: &Board, from: Square, piece: Piece) -> MoveGrid {
    let mut grid = MoveGrid::new();
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece, &mut grid),
        PieceKind::Knight => generate_knight_moves(board, from, piece.side, &mut grid),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.side, &mut grid),
        PieceKind::Rook => generate_rook_moves(board, from, piece.side, &mut grid),
        PieceKind::Queen => generate_queen_moves(board, from, piece.side, &mut grid),
        PieceKind::King => king_steps(board, from, piece, &mut grid),
    }
    grid
}

/// Check if a square is under attack by pieces of the specified side
///
/// Used for check detection and for castling path safety.
///
/// # Examples
///
/// ```rust,ignore
/// // Is e4 attacked by black?
/// let attacked = is_square_attacked(&board, e4, Side::Black);
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by: Side) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.side == by)
        .any(|(from, piece)| attacked_by(board, from, piece).contains(square))
}

/// Whether `side`'s king is currently attacked
///
/// A side without a king on the board is never in check.
pub fn is_in_check(board: &Board, side: Side) -> bool {
    board
        .king_square(side)
        .is_some_and(|king| is_square_attacked(board, king, side.opposite()))
}
