//! Invariants of a game reached through legal play.
//!
//! They are checked after every move in debug builds and can be
//! tested independently.

use super::{Board, Player, rules};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violation: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Invariant: X moves first and players alternate.
///
/// X therefore holds as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Invariant: play stops at the first completed line, so both players
/// can never hold a line at once.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(rules::is_winner(board, Player::X) && rules::is_winner(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player holds a complete line"
    }
}

/// Checks every board invariant, collecting violations.
pub(crate) fn check_board(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();

    if !MarkBalanceInvariant::holds(board) {
        violations.push(InvariantViolation::new(MarkBalanceInvariant::description()));
    }

    if !SingleWinnerInvariant::holds(board) {
        violations.push(InvariantViolation::new(SingleWinnerInvariant::description()));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
