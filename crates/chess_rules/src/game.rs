//! The match state machine
//!
//! [`Match`] owns the board, the side to move, both capture lists and the
//! check/terminal flags. It is the only way to change a game: callers validate
//! an origin and a destination, then execute, and every rule consequence
//! (captures, en passant, castling, promotion, turn flip, check, checkmate,
//! stalemate) is applied in one step.
//!
//! # Atomicity
//!
//! Execution plays the move on a scratch board first and only then commits
//! the new board and bookkeeping. Any failure returns before the commit, so a
//! rejected move leaves the match exactly as it was.
//!
//! # Concurrency
//!
//! `Match` has no interior locking. A caller sharing one instance between
//! threads must serialize access itself.

use tracing::{debug, info};

use crate::board::Board;
use crate::captured::CapturedPieces;
use crate::error::{RulesError, RulesResult};
use crate::make_move::apply_move;
use crate::move_gen::{self, attack, MoveGrid};
use crate::outcome::MatchOutcome;
use crate::record::MoveRecord;
use crate::square::Square;
use crate::types::{Piece, PieceKind, Side};

/// A single game between two players at one board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    board: Board,
    side_to_move: Side,
    in_check: bool,
    outcome: MatchOutcome,
    captured: CapturedPieces,
    en_passant_target: Option<Square>,
    half_move_number: u32,
    history: Vec<MoveRecord>,
}

impl Match {
    /// A fresh match from the standard starting position, White to move
    pub fn new() -> Self {
        Self::from_position(Board::standard(), Side::White)
    }

    /// A match starting from an arbitrary position
    ///
    /// Check and terminal status are computed for `side_to_move` right away,
    /// so a position that is already mate or stalemate is born over.
    pub fn from_position(board: Board, side_to_move: Side) -> Self {
        let mut game = Self {
            board,
            side_to_move,
            in_check: false,
            outcome: MatchOutcome::Playing,
            captured: CapturedPieces::default(),
            en_passant_target: None,
            half_move_number: 0,
            history: Vec::new(),
        };
        game.refresh_status();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Whether the side to move is in check
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    /// Pieces captured by `captor`, in capture order
    pub fn captured_by(&self, captor: Side) -> &[Piece] {
        self.captured.by(captor)
    }

    /// Square a pawn may capture into on this turn only
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Number of moves executed so far
    pub fn half_move_number(&self) -> u32 {
        self.half_move_number
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Check-safe destinations for the piece on `square`
    ///
    /// Works for either side's pieces, regardless of whose turn it is.
    pub fn legal_destinations(&self, square: Square) -> RulesResult<MoveGrid> {
        if self.board.is_empty(square) {
            return Err(RulesError::EmptySquare { square });
        }
        Ok(move_gen::legal_moves(
            &self.board,
            square,
            self.en_passant_target,
        ))
    }

    /// Confirm `square` holds a piece of the side to move that can go somewhere
    pub fn validate_origin(&self, square: Square) -> RulesResult<()> {
        let piece = self
            .board
            .piece_at(square)
            .ok_or(RulesError::EmptySquare { square })?;

        if piece.side != self.side_to_move {
            return Err(RulesError::WrongSideToMove {
                square,
                side: piece.side,
            });
        }

        if self.is_over() || self.legal_destinations(square)?.is_empty() {
            return Err(RulesError::NoLegalMoves { square });
        }

        Ok(())
    }

    /// Confirm `to` is a check-safe destination for the piece on `from`
    pub fn validate_destination(&self, from: Square, to: Square) -> RulesResult<()> {
        if self.legal_destinations(from)?.contains(to) {
            Ok(())
        } else {
            Err(RulesError::IllegalDestination { from, to })
        }
    }

    /// Execute a validated move, promoting to a queen if a pawn reaches the far row
    pub fn execute_move(&mut self, from: Square, to: Square) -> RulesResult<MoveRecord> {
        self.execute_move_with_promotion(from, to, None)
    }

    /// Execute a validated move with an explicit promotion choice
    ///
    /// `promotion` only matters when a pawn reaches its promotion row and
    /// defaults to a queen. Choosing a pawn or a king is rejected.
    ///
    /// Fails with `IllegalMove`, leaving the match untouched, when the match
    /// is over, the piece is not the mover's, or `to` is not a check-safe
    /// destination.
    pub fn execute_move_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> RulesResult<MoveRecord> {
        let illegal = RulesError::IllegalMove { from, to };

        if self.is_over() {
            return Err(illegal);
        }
        let promotion = promotion.unwrap_or(PieceKind::Queen);
        if !promotion.is_promotion_target() {
            return Err(illegal);
        }
        match self.board.piece_at(from) {
            Some(piece) if piece.side == self.side_to_move => {}
            _ => return Err(illegal),
        }
        if !move_gen::legal_moves(&self.board, from, self.en_passant_target).contains(to) {
            return Err(illegal);
        }

        let applied = apply_move(&self.board, from, to, self.en_passant_target, promotion)
            .ok_or(illegal)?;

        // Commit: nothing below can fail
        let mover = self.side_to_move;
        self.board = applied.board;
        if let Some(piece) = applied.captured {
            self.captured.record(mover, piece);
        }
        self.en_passant_target = applied.en_passant;
        self.side_to_move = mover.opposite();
        self.half_move_number += 1;
        self.refresh_status();

        let record = MoveRecord {
            ply: self.half_move_number,
            piece: applied.moved,
            from,
            to,
            captured: applied.captured,
            special: applied.special,
            gives_check: self.in_check,
        };
        self.history.push(record);

        debug!(
            "[GAME] {} {} {} -> {} (ply {})",
            mover, applied.moved.kind, from, to, self.half_move_number
        );
        if let Some(piece) = applied.captured {
            debug!("[GAME] {} captured {}", mover, piece);
        }

        Ok(record)
    }

    /// Validate origin and destination, then execute
    ///
    /// This is the request layer's move command: the first failing check is
    /// reported and nothing changes.
    pub fn attempt_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> RulesResult<MoveRecord> {
        self.validate_origin(from)?;
        self.validate_destination(from, to)?;
        self.execute_move_with_promotion(from, to, promotion)
    }

    /// Whether the side to move has any legal move
    pub fn has_any_legal_move(&self) -> bool {
        move_gen::has_any_legal_move(&self.board, self.side_to_move, self.en_passant_target)
    }

    /// Recompute check and terminal status for the side to move
    fn refresh_status(&mut self) {
        let side = self.side_to_move;
        self.in_check = attack::is_in_check(&self.board, side);

        self.outcome = match (self.in_check, self.has_any_legal_move()) {
            (_, true) => MatchOutcome::Playing,
            (true, false) => MatchOutcome::checkmate_by(side.opposite()),
            (false, false) => MatchOutcome::Stalemate,
        };

        if self.outcome.is_over() {
            info!("[GAME] {}", self.outcome.message());
        } else if self.in_check {
            info!("[GAME] {} king is in check", side);
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
