//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight straight lines that wins the game.
///
/// Declaration order is the evaluation order: rows, then columns, then
/// diagonals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum WinningLine {
    /// Top row.
    #[display("row 1")]
    Row1,
    /// Middle row.
    #[display("row 2")]
    Row2,
    /// Bottom row.
    #[display("row 3")]
    Row3,
    /// Left column.
    #[display("column 1")]
    Column1,
    /// Middle column.
    #[display("column 2")]
    Column2,
    /// Right column.
    #[display("column 3")]
    Column3,
    /// Top-left to bottom-right.
    #[display("diagonal 1")]
    Diagonal1,
    /// Top-right to bottom-left.
    #[display("diagonal 2")]
    Diagonal2,
}

impl WinningLine {
    /// The full catalog in evaluation order.
    pub const ALL: [WinningLine; 8] = [
        WinningLine::Row1,
        WinningLine::Row2,
        WinningLine::Row3,
        WinningLine::Column1,
        WinningLine::Column2,
        WinningLine::Column3,
        WinningLine::Diagonal1,
        WinningLine::Diagonal2,
    ];

    /// The three cells making up this line.
    pub fn cells(self) -> [Position; 3] {
        use Position::*;

        match self {
            WinningLine::Row1 => [TopLeft, TopCenter, TopRight],
            WinningLine::Row2 => [MiddleLeft, Center, MiddleRight],
            WinningLine::Row3 => [BottomLeft, BottomCenter, BottomRight],
            WinningLine::Column1 => [TopLeft, MiddleLeft, BottomLeft],
            WinningLine::Column2 => [TopCenter, Center, BottomCenter],
            WinningLine::Column3 => [TopRight, MiddleRight, BottomRight],
            WinningLine::Diagonal1 => [TopLeft, Center, BottomRight],
            WinningLine::Diagonal2 => [TopRight, Center, BottomLeft],
        }
    }

    /// Board indices of the three cells.
    pub fn indices(self) -> [usize; 3] {
        self.cells().map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.cells().contains(&pos)
    }

    /// Returns the player owning all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.cells();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.player()
        } else {
            None
        }
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the winning player and the first completed line in catalog
/// order, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    WinningLine::ALL
        .into_iter()
        .find_map(|line| line.owner(board).map(|player| (player, line)))
}
