//! Board storage
//!
//! An 8x8 grid of optional pieces indexed by [`Square`]. The board is purely
//! mechanical: it places, removes and relocates pieces, but knows nothing
//! about turns, check or captures. Callers ([`crate::game::Match`]) are
//! responsible for only asking it to do legal things.

use std::fmt;

use crate::error::RulesResult;
use crate::square::{Square, BOARD_SIZE};
use crate::types::{Piece, PieceKind, Side};

/// Back rank order from column 0 to column 7
const BACK_ROW: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of optional occupants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no pieces
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard starting position, 16 pieces per side
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for side in [Side::White, Side::Black] {
            for (col, kind) in BACK_ROW.iter().enumerate() {
                board.cells[side.back_row()][col] = Some(Piece::new(*kind, side));
                board.cells[side.pawn_row()][col] = Some(Piece::new(PieceKind::Pawn, side));
            }
        }
        board
    }

    /// Occupant of a square, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row()][square.col()]
    }

    /// Occupant lookup from raw coordinates
    ///
    /// Fails with `OutOfBounds` when the coordinates are off the grid.
    pub fn piece_at_coords(&self, row: i32, col: i32) -> RulesResult<Option<Piece>> {
        Ok(self.piece_at(Square::new(row, col)?))
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put a piece on a square, silently replacing any occupant
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.cells[square.row()][square.col()] = Some(piece);
    }

    /// Place from raw coordinates, failing with `OutOfBounds` off the grid
    pub fn place_at(&mut self, piece: Piece, row: i32, col: i32) -> RulesResult<()> {
        self.place(piece, Square::new(row, col)?);
        Ok(())
    }

    /// Detach and return the occupant, leaving the square empty
    pub fn remove_at(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row()][square.col()].take()
    }

    /// Move whatever stands on `from` to `to`
    ///
    /// Returns the piece previously standing on `to`. Does not check legality
    /// and does not touch `move_count`. Relocating from an empty square is a
    /// no-op.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.remove_at(from)?;
        let displaced = self.remove_at(to);
        self.place(piece, to);
        displaced
    }

    /// Every occupied square with its piece, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Every square with its optional occupant, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(|square| (square, self.piece_at(square)))
    }

    /// Location of `side`'s king, if it is on the board
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.side == side)
            .map(|(square, _)| square)
    }

    /// Number of pieces `side` has on the board
    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, piece)| piece.side == side).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', |piece| piece.symbol()))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
