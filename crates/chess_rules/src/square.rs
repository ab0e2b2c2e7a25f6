//! Board coordinates
//!
//! A [`Square`] is an immutable `(row, col)` pair in the engine's internal
//! orientation: row 0 is Black's back rank at the top of the board, row 7 is
//! White's back rank, and columns run left to right from 0 to 7.
//!
//! Only in-bounds squares can be constructed, so every other module may index
//! the grid with a square without re-checking bounds.

use std::fmt;

use serde::Serialize;

use crate::error::{RulesError, RulesResult};

/// Width and height of the board
pub const BOARD_SIZE: usize = 8;

/// A validated board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square, rejecting coordinates outside `0..=7`
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::Square;
    ///
    /// let e2 = Square::new(6, 4).unwrap();
    /// assert_eq!((e2.row(), e2.col()), (6, 4));
    /// assert!(Square::new(8, 0).is_err());
    /// ```
    pub fn new(row: i32, col: i32) -> RulesResult<Self> {
        if in_bounds(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(RulesError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Square displaced by `(d_row, d_col)`, or `None` when it falls off the board
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::new(self.row as i32 + d_row, self.col as i32 + d_col).ok()
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[inline]
fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
