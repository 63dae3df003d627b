//! Reasons a move can be refused.

use crate::position::Position;

/// Error that can occur when validating or applying a move.
///
/// Sessions never surface these to their caller; a refused move is a
/// no-op that is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has not been started yet.
    #[display("Game has not started")]
    NotStarted,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a square.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}
