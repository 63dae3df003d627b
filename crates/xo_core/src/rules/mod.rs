//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here knows about turns,
//! clocks or sessions.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinningLine, check_winner};

use crate::types::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    /// Classification of the board.
    pub outcome: Outcome,
    /// The completed line when `outcome` is a win.
    pub line: Option<WinningLine>,
}

impl Evaluation {
    /// Evaluation of a board with no result yet.
    pub const IN_PROGRESS: Evaluation = Evaluation {
        outcome: Outcome::InProgress,
        line: None,
    };
}

/// Classifies a board: a completed line wins, otherwise a full board draws.
///
/// Lines are scanned in [`WinningLine::ALL`] order and the first complete
/// one is reported.
#[instrument]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((winner, line)) = check_winner(board) {
        return Evaluation {
            outcome: Outcome::Won(winner),
            line: Some(line),
        };
    }

    if is_full(board) {
        return Evaluation {
            outcome: Outcome::Draw,
            line: None,
        };
    }

    Evaluation::IN_PROGRESS
}

/// X moves first and players alternate, so X leads O by zero or one mark.
pub fn is_balanced(board: &Board) -> bool {
    let x = board.count(Player::X);
    let o = board.count(Player::O);
    x == o || x == o + 1
}
