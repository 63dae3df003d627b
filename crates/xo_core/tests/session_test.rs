//! Tests for the game session: transitions, clock ownership and cues.

mod support;

use proptest::prelude::*;
use support::{ManualTicks, RecordingSink};
use xo_core::{
    Board, Cue, GameSession, Outcome, Player, Position, Square, WinningLine, DEFAULT_TIME_LIMIT,
};

fn session() -> (GameSession, ManualTicks, RecordingSink) {
    let ticks = ManualTicks::default();
    let sink = RecordingSink::default();
    let session = GameSession::new(DEFAULT_TIME_LIMIT, ticks.clone(), sink.clone());
    (session, ticks, sink)
}

fn started() -> (GameSession, ManualTicks, RecordingSink) {
    let (mut session, ticks, sink) = session();
    session.start();
    (session, ticks, sink)
}

fn assert_fresh(session: &GameSession) {
    let view = session.view();
    assert_eq!(view.board, Board::new());
    assert_eq!(view.to_move, Player::X);
    assert_eq!(view.outcome, Outcome::InProgress);
    assert_eq!(view.remaining_secs, DEFAULT_TIME_LIMIT);
    assert_eq!(view.winning_line, None);
    assert!(!view.time_expired);
}

#[test]
fn test_new_session_is_idle() {
    let (session, ticks, sink) = session();
    assert_fresh(&session);
    assert!(!session.view().started);
    assert!(!session.is_ticking());
    assert!(ticks.started().is_empty());
    assert!(sink.cues().is_empty());
}

#[test]
fn test_start_begins_ticking() {
    let (session, ticks, _) = started();
    assert!(session.view().started);
    assert!(session.is_ticking());
    assert_eq!(ticks.live(), 1);
}

#[test]
fn test_top_row_win() {
    let (mut session, ticks, sink) = started();
    for index in [0, 4, 1, 3, 2] {
        session.cell_click(index);
    }

    let view = session.view();
    assert_eq!(view.outcome, Outcome::Won(Player::X));
    assert_eq!(view.winning_line, Some(WinningLine::Row1));
    assert_eq!(view.winning_indices(), Some([0, 1, 2]));
    assert!(!session.is_ticking());
    assert_eq!(ticks.live(), 0);
    assert_eq!(sink.count(Cue::Click), 5);
    assert_eq!(sink.count(Cue::GameOver), 1);
    assert_eq!(sink.cues().last(), Some(&Cue::GameOver));
}

#[test]
fn test_full_board_draw() {
    let (mut session, ticks, sink) = started();
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session.cell_click(index);
    }

    let view = session.view();
    assert_eq!(view.board, "XOX/XOO/OXX".parse::<Board>().unwrap());
    assert_eq!(view.outcome, Outcome::Draw);
    assert_eq!(view.winning_line, None);
    assert!(!view.time_expired);
    assert_eq!(ticks.live(), 0);
    assert_eq!(sink.count(Cue::Click), 9);
    assert_eq!(sink.count(Cue::GameOver), 1);
}

#[test]
fn test_clock_runs_out() {
    let (mut session, ticks, sink) = started();
    let epoch = ticks.last_epoch();
    for _ in 0..DEFAULT_TIME_LIMIT {
        session.tick(epoch);
    }

    let view = session.view();
    assert_eq!(view.outcome, Outcome::Draw);
    assert_eq!(view.remaining_secs, 0);
    assert!(view.time_expired);
    assert!(!session.is_ticking());
    assert_eq!(ticks.live(), 0);
    assert_eq!(sink.cues(), vec![Cue::GameOver]);

    // Late ticks change nothing.
    session.tick(epoch);
    assert_eq!(session.view(), view);
}

#[test]
fn test_moves_after_game_over_ignored() {
    let (mut session, _, sink) = started();
    for index in [0, 4, 1, 3, 2] {
        session.cell_click(index);
    }
    let before = session.view();
    session.cell_click(8);
    assert_eq!(session.view(), before);
    assert_eq!(sink.count(Cue::Click), 5);
}

#[test]
fn test_occupied_and_out_of_range_ignored() {
    let (mut session, _, sink) = started();
    session.cell_click(4);
    let before = session.view();

    session.cell_click(4);
    session.cell_click(9);
    session.cell_click(usize::MAX);

    assert_eq!(session.view(), before);
    assert_eq!(sink.count(Cue::Click), 1);
}

#[test]
fn test_clicks_before_start_ignored() {
    let (mut session, _, sink) = session();
    session.cell_click(0);
    assert_eq!(session.view().board, Board::new());
    assert!(sink.cues().is_empty());
}

#[test]
fn test_turns_alternate() {
    let (mut session, _, _) = started();
    session.cell_click(8);
    assert_eq!(session.view().to_move, Player::O);
    session.cell_click(0);
    assert_eq!(session.view().to_move, Player::X);
    assert_eq!(
        session.view().board.get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
    assert_eq!(
        session.view().board.get(Position::TopLeft),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_reset_after_win_restarts_clock() {
    let (mut session, ticks, _) = started();
    for index in [0, 4, 1, 3, 2] {
        session.cell_click(index);
    }
    session.reset();

    assert_fresh(&session);
    assert!(session.view().started);
    assert!(session.is_ticking());
    assert_eq!(ticks.live(), 1);
    assert_eq!(ticks.started().len(), 2);
}

#[test]
fn test_reset_mid_game_replaces_schedule() {
    let (mut session, ticks, _) = started();
    let first = ticks.last_epoch();
    session.tick(first);
    session.cell_click(4);
    session.reset();

    let second = ticks.last_epoch();
    assert_ne!(first, second);
    assert_eq!(ticks.live(), 1);

    // A tick queued by the cancelled schedule is dropped.
    session.tick(first);
    assert_eq!(session.view().remaining_secs, DEFAULT_TIME_LIMIT);

    session.tick(second);
    assert_eq!(session.view().remaining_secs, DEFAULT_TIME_LIMIT - 1);
}

#[test]
fn test_reset_before_start_stays_idle() {
    let (mut session, ticks, _) = session();
    session.reset();
    assert_fresh(&session);
    assert!(!session.view().started);
    assert!(ticks.started().is_empty());
}

#[test]
fn test_second_start_is_ignored() {
    let (mut session, ticks, _) = started();
    session.start();
    assert_eq!(ticks.started().len(), 1);
    assert_eq!(ticks.live(), 1);
}

#[test]
fn test_drop_cancels_schedule() {
    let (session, ticks, _) = started();
    assert_eq!(ticks.live(), 1);
    drop(session);
    assert_eq!(ticks.live(), 0);
}

#[derive(Debug, Clone)]
enum Op {
    Start,
    Click(usize),
    Tick,
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Start),
        6 => (0usize..11).prop_map(Op::Click),
        4 => Just(Op::Tick),
        1 => Just(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn prop_reset_restores_fresh_game(ops in prop::collection::vec(op(), 0..60)) {
        let ticks = ManualTicks::default();
        let mut session = GameSession::new(5, ticks.clone(), RecordingSink::default());
        for op in ops {
            match op {
                Op::Start => session.start(),
                Op::Click(index) => session.cell_click(index),
                Op::Tick => session.tick(session.state().epoch()),
                Op::Reset => session.reset(),
            }
            // At most one schedule, and only while the game is live.
            prop_assert!(ticks.live() <= 1);
            prop_assert_eq!(session.is_ticking(), session.state().is_active());
        }

        session.reset();
        let view = session.view();
        prop_assert_eq!(view.board, Board::new());
        prop_assert_eq!(view.to_move, Player::X);
        prop_assert_eq!(view.outcome, Outcome::InProgress);
        prop_assert_eq!(view.remaining_secs, 5);
        prop_assert_eq!(view.winning_line, None);
    }
}
