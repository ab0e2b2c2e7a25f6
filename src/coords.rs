//! External board coordinates
//!
//! Clients address squares the way players do: a file letter `a..=h` and a
//! rank digit `1..=8`, with White's pieces starting on ranks 1 and 2. The
//! engine counts rows from Black's side, so rank `r` is row `8 - r` and
//! file `a` is column 0.
//!
//! Anything off the board is reported by the engine as `OutOfBounds`.

use chess_rules::{RulesError, RulesResult, Square, BOARD_SIZE};

/// Convert a file letter and rank number into an engine square
///
/// # Examples
///
/// ```rust,ignore
/// let e2 = square_from_external('e', 2)?;
/// assert_eq!((e2.row(), e2.col()), (6, 4));
/// ```
pub fn square_from_external(file: char, rank: i32) -> RulesResult<Square> {
    let col = file.to_ascii_lowercase() as i32 - 'a' as i32;
    let row = (BOARD_SIZE as i32)
        .checked_sub(rank)
        .ok_or(RulesError::OutOfBounds { row: i32::MAX, col })?;
    Square::new(row, col)
}

/// File letter and rank number of an engine square
pub fn square_to_external(square: Square) -> (char, i32) {
    let file = (b'a' + square.col() as u8) as char;
    let rank = (BOARD_SIZE - square.row()) as i32;
    (file, rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_map_to_internal_rows() {
        let a1 = square_from_external('a', 1).unwrap();
        assert_eq!((a1.row(), a1.col()), (7, 0));

        let h8 = square_from_external('h', 8).unwrap();
        assert_eq!((h8.row(), h8.col()), (0, 7));
    }

    #[test]
    fn test_king_pawn_squares() {
        let e2 = square_from_external('e', 2).unwrap();
        let e4 = square_from_external('E', 4).unwrap();
        assert_eq!((e2.row(), e2.col()), (6, 4));
        assert_eq!((e4.row(), e4.col()), (4, 4));
    }

    #[test]
    fn test_off_board_coordinates_are_rejected() {
        assert_eq!(
            square_from_external('i', 1),
            Err(RulesError::OutOfBounds { row: 7, col: 8 })
        );
        assert_eq!(
            square_from_external('a', 0),
            Err(RulesError::OutOfBounds { row: 8, col: 0 })
        );
        assert!(square_from_external('?', 4).is_err());
    }

    #[test]
    fn test_extreme_ranks_do_not_overflow() {
        assert_eq!(
            square_from_external('e', i32::MIN),
            Err(RulesError::OutOfBounds {
                row: i32::MAX,
                col: 4
            })
        );
        assert_eq!(
            square_from_external('e', i32::MAX),
            Err(RulesError::OutOfBounds {
                row: 8 - i32::MAX,
                col: 4
            })
        );
    }

    #[test]
    fn test_external_names_round_trip_for_every_square() {
        for square in Square::all() {
            let (file, rank) = square_to_external(square);
            assert_eq!(square_from_external(file, rank), Ok(square));
        }
    }
}
