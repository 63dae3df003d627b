//! Property tests for board evaluation and turn order.

use proptest::prelude::*;
use xo_core::{Board, Outcome, Player, Position, Square, Turn, WinningLine, evaluate};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn mark() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square()).prop_map(Board::from_squares)
}

fn full_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(mark().prop_map(Square::Occupied)).prop_map(Board::from_squares)
}

fn line() -> impl Strategy<Value = WinningLine> {
    prop::sample::select(WinningLine::ALL.to_vec())
}

fn owned_lines(board: &Board) -> Vec<WinningLine> {
    WinningLine::ALL
        .into_iter()
        .filter(|l| l.owner(board).is_some())
        .collect()
}

fn catalog_rank(line: WinningLine) -> usize {
    WinningLine::ALL.iter().position(|l| *l == line).unwrap()
}

proptest! {
    #[test]
    fn prop_completed_line_wins(mut board in board(), line in line(), player in mark()) {
        for pos in line.cells() {
            board.set(pos, Square::Occupied(player));
        }
        let eval = evaluate(&board);
        let reported = eval.line.expect("a completed line must be reported");
        let winner = reported.owner(&board).expect("reported line must be complete");
        prop_assert_eq!(eval.outcome, Outcome::Won(winner));
        prop_assert!(catalog_rank(reported) <= catalog_rank(line));
        if owned_lines(&board) == vec![line] {
            prop_assert_eq!(eval.outcome, Outcome::Won(player));
            prop_assert_eq!(reported, line);
        }
    }

    #[test]
    fn prop_full_board_without_line_draws(board in full_board()) {
        if owned_lines(&board).is_empty() {
            let eval = evaluate(&board);
            prop_assert_eq!(eval.outcome, Outcome::Draw);
            prop_assert_eq!(eval.line, None);
        }
    }

    #[test]
    fn prop_open_board_without_line_in_progress(board in board(), hole in 0usize..9) {
        let mut board = board;
        board.set(Position::from_index(hole).unwrap(), Square::Empty);
        if owned_lines(&board).is_empty() {
            let eval = evaluate(&board);
            prop_assert_eq!(eval.outcome, Outcome::InProgress);
            prop_assert_eq!(eval.line, None);
        }
    }

    #[test]
    fn prop_marks_alternate(order in Just((0usize..9).collect::<Vec<_>>()).prop_shuffle()) {
        let mut turn = Turn::new();
        for (n, index) in order.iter().enumerate() {
            let expected = if n % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(turn.to_move(), expected);
            let pos = turn.play(Outcome::InProgress, *index).unwrap();
            prop_assert_eq!(turn.board().get(pos), Square::Occupied(expected));
        }
    }

    #[test]
    fn prop_occupied_square_is_noop(
        order in Just((0usize..9).collect::<Vec<_>>()).prop_shuffle(),
        played in 1usize..9,
        pick in 0usize..9,
    ) {
        let mut turn = Turn::new();
        for index in &order[..played] {
            turn.play(Outcome::InProgress, *index).unwrap();
        }
        let target = order[pick % played];
        let before = turn.clone();
        prop_assert!(turn.play(Outcome::InProgress, target).is_err());
        prop_assert_eq!(turn, before);
    }

    #[test]
    fn prop_finished_game_is_noop(index in 0usize..12, winner in mark()) {
        for outcome in [Outcome::Draw, Outcome::Won(winner)] {
            let mut turn = Turn::new();
            prop_assert!(turn.play(outcome, index).is_err());
            prop_assert_eq!(&turn, &Turn::new());
        }
    }
}
