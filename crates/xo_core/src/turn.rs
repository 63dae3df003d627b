//! Turn controller: the side to move and the board it moves on.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board plus the player whose mark goes down next.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    board: Board,
    to_move: Player,
}

impl Turn {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Places the current player's mark at `index` and hands the turn over.
    ///
    /// The move is refused, leaving board and player untouched, when the
    /// game is over, the index is not 0-8, or the square is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, outcome: Outcome, index: usize) -> Result<Position, MoveError> {
        if outcome.is_over() {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.to_move = self.to_move.opponent();
        debug_assert!(rules::is_balanced(&self.board), "mark counts out of balance");
        debug!(position = %pos, next = %self.to_move, "Move applied");

        Ok(pos)
    }
}

impl Default for Turn {
    fn default() -> Self {
        Self::new()
    }
}
