//! Match outcome tracking
//!
//! Starts as `Playing` and transitions to a terminal state when the side to
//! move has no legal move left.
//!
//! ```text
//! Playing → WhiteWon / BlackWon / Stalemate
//! ```
//!
//! - **WhiteWon**: Black is in check with no legal moves
//! - **BlackWon**: White is in check with no legal moves
//! - **Stalemate**: the side to move has no legal moves but is NOT in check
//!
//! All non-Playing states are terminal: the match accepts no further moves and
//! only a reset (a brand new match) continues play.

use std::fmt;

use serde::Serialize;

use crate::types::Side;

/// The match's end state
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    /// Moves are still accepted
    #[default]
    Playing,
    /// White won by checkmate
    WhiteWon,
    /// Black won by checkmate
    BlackWon,
    /// Draw by stalemate
    Stalemate,
}

impl MatchOutcome {
    /// Checkmate outcome in favour of `winner`
    pub fn checkmate_by(winner: Side) -> Self {
        match winner {
            Side::White => MatchOutcome::WhiteWon,
            Side::Black => MatchOutcome::BlackWon,
        }
    }

    /// `true` for every non-Playing state
    pub fn is_over(&self) -> bool {
        !matches!(self, MatchOutcome::Playing)
    }

    pub fn is_checkmate(&self) -> bool {
        matches!(self, MatchOutcome::WhiteWon | MatchOutcome::BlackWon)
    }

    /// Winning side, `None` for draws and ongoing matches
    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchOutcome::WhiteWon => Some(Side::White),
            MatchOutcome::BlackWon => Some(Side::Black),
            _ => None,
        }
    }

    /// Human-readable description of the result
    pub fn message(&self) -> &'static str {
        match self {
            MatchOutcome::Playing => "Game in progress",
            MatchOutcome::WhiteWon => "White wins by checkmate!",
            MatchOutcome::BlackWon => "Black wins by checkmate!",
            MatchOutcome::Stalemate => "Draw by stalemate",
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_default_is_playing() {
        let outcome = MatchOutcome::default();
        assert_eq!(outcome, MatchOutcome::Playing);
        assert!(!outcome.is_over());
        assert_eq!(outcome.winner(), None);
    }

    #[test]
    fn test_all_end_states_are_over() {
        for outcome in [
            MatchOutcome::WhiteWon,
            MatchOutcome::BlackWon,
            MatchOutcome::Stalemate,
        ] {
            assert!(outcome.is_over(), "{:?} should be over", outcome);
        }
    }

    #[test]
    fn test_checkmate_by_maps_winner() {
        assert_eq!(MatchOutcome::checkmate_by(Side::White), MatchOutcome::WhiteWon);
        assert_eq!(MatchOutcome::checkmate_by(Side::Black), MatchOutcome::BlackWon);
        assert_eq!(MatchOutcome::BlackWon.winner(), Some(Side::Black));
    }

    #[test]
    fn test_stalemate_has_no_winner() {
        let outcome = MatchOutcome::Stalemate;
        assert_eq!(outcome.winner(), None);
        assert!(!outcome.is_checkmate());
        assert_eq!(outcome.message(), "Draw by stalemate");
    }
}
