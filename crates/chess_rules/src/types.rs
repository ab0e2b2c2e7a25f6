//! Core value types: sides, piece kinds and placed pieces
//!
//! Piece colour and kind are kept as plain enums so move generation can
//! dispatch on [`PieceKind`] with a single `match`. A [`Piece`] is a small
//! `Copy` value owned by whichever board cell it sits on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two sides in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a pawn step. White moves up the board (towards row 0).
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row holding this side's king and rooks at the start
    #[inline]
    pub const fn back_row(self) -> usize {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// Row holding this side's pawns at the start
    #[inline]
    pub const fn pawn_row(self) -> usize {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// Row on which this side's pawns promote
    #[inline]
    pub const fn promotion_row(self) -> usize {
        self.opposite().back_row()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// The six piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Standard material value in pawns. The king is never captured, so it
    /// counts for nothing.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    #[inline]
    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }

    fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A piece standing on the board
///
/// `move_count` grows by one every time the piece is moved and is what
/// castling and the pawn double step read to decide eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub move_count: u32,
}

impl Piece {
    /// A piece that has not moved yet
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self {
            kind,
            side,
            move_count: 0,
        }
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    /// FEN-style letter: uppercase for White, lowercase for Black
    pub fn symbol(&self) -> char {
        let letter = self.kind.letter();
        match self.side {
            Side::White => letter.to_ascii_uppercase(),
            Side::Black => letter,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}
