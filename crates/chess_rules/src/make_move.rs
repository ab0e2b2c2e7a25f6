//! Move application on a scratch board
//!
//! [`apply_move`] plays one move, special-move side effects included, on a
//! copy of the board and reports what happened. It never validates legality:
//! the match only commits a result after validation, and the legality filter
//! uses it to look one move ahead.

use crate::board::Board;
use crate::move_gen::{king, pawn};
use crate::record::SpecialMove;
use crate::square::Square;
use crate::types::{Piece, PieceKind};

/// Outcome of playing a move on a scratch board
#[derive(Debug, Clone)]
pub(crate) struct AppliedMove {
    /// Board after the move
    pub board: Board,
    /// The piece as it stood before moving
    pub moved: Piece,
    /// Opponent piece removed by the move
    pub captured: Option<Piece>,
    pub special: Option<SpecialMove>,
    /// Square passed over by a double pawn step
    pub en_passant: Option<Square>,
}

/// Play `from -> to` on a copy of `board`
///
/// `promotion` is the kind a pawn becomes when it reaches its promotion row.
/// Returns `None` when `from` is empty.
pub(crate) fn apply_move(
    board: &Board,
    from: Square,
    to: Square,
    en_passant: Option<Square>,
    promotion: PieceKind,
) -> Option<AppliedMove> {
    let mut next = board.clone();
    let moved = next.remove_at(from)?;
    let mut piece = moved;
    let mut captured = next.remove_at(to);
    let mut special = None;
    let mut en_passant_next = None;

    match piece.kind {
        PieceKind::Pawn => {
            if captured.is_none() && from.col() != to.col() {
                if let Some(victim) = pawn::en_passant_victim(board, from, piece, to, en_passant) {
                    captured = next.remove_at(victim);
                    special = Some(SpecialMove::EnPassant);
                }
            }
            if from.row().abs_diff(to.row()) == 2 {
                en_passant_next = from.offset(piece.side.forward(), 0);
                special = Some(SpecialMove::DoubleStep);
            }
            if to.row() == piece.side.promotion_row() {
                piece.kind = promotion;
                special = Some(SpecialMove::Promotion(promotion));
            }
        }
        PieceKind::King => {
            if let Some((rook_from, rook_to)) = king::castling_rook_squares(from, to) {
                let mut rook = next.remove_at(rook_from)?;
                rook.move_count += 1;
                next.place(rook, rook_to);
                special = Some(SpecialMove::Castle);
            }
        }
        _ => {}
    }

    piece.move_count += 1;
    next.place(piece, to);

    Some(AppliedMove {
        board: next,
        moved,
        captured,
        special,
        en_passant: en_passant_next,
    })
}
