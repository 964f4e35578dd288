//! Session controller tests - input gating, settle sequencing, reporting

use arcade_hub::core::{Session, SessionPhase};
use arcade_hub::types::{Direction, SessionAction, SETTLE_DELAY_MS};

/// Drive one effective move: try directions until the board changes.
fn make_any_move(session: &mut Session) -> bool {
    Direction::ALL.iter().any(|&d| session.handle_move(d))
}

#[test]
fn test_session_starts_with_two_tiles() {
    let mut session = Session::new(12345);
    assert_eq!(session.phase(), SessionPhase::Idle);

    session.start();
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.grid().active_count(), 2);
    assert_eq!(session.score(), 0);
    assert!(!session.won());
}

/// Scenario: one valid move puts the controller in `Animating`; a second
/// directional input during that window is ignored until the settle
/// delay elapses.
#[test]
fn test_input_gated_while_animating() {
    let mut session = Session::new(1);
    session.start();

    assert!(make_any_move(&mut session));
    assert!(session.is_animating());

    let frozen = session.snapshot();
    for &dir in &Direction::ALL {
        assert!(!session.handle_move(dir));
    }
    assert_eq!(session.snapshot(), frozen, "board changed while gated");

    // Partial settle: still gated.
    session.tick(SETTLE_DELAY_MS / 2);
    assert!(session.is_animating());
    assert!(!session.handle_move(Direction::Left));

    // Remaining settle: spawn lands and input reopens.
    let before = session.grid().active_count();
    assert!(session.tick(SETTLE_DELAY_MS));
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.grid().active_count(), before + 1);
}

/// The post-move spawn happens at settle expiry, not at move time.
#[test]
fn test_spawn_waits_for_settle() {
    let mut session = Session::new(7);
    session.start();

    let before = session.grid().active_count();
    assert!(make_any_move(&mut session));
    let after_move = session.grid().active_count();
    // Moves never add tiles on their own (merges can only shrink).
    assert!(after_move <= before);

    session.tick(SETTLE_DELAY_MS);
    assert_eq!(session.grid().active_count(), after_move + 1);
}

/// An ineffective direction leaves the phase and board alone.
#[test]
fn test_no_op_move_keeps_playing() {
    let mut session = Session::new(1);
    session.start();

    // Seed 1 opens with both tiles on the top row: moving up cannot
    // change the board.
    assert!(!session.handle_move(Direction::Up));
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.grid().active_count(), 2);
    assert_eq!(session.score(), 0);
}

/// Play a fixed policy to the natural end: the session must reach `Over`
/// and report the exact deterministic totals.
#[test]
fn test_full_game_reaches_over_and_reports() {
    let mut session = Session::new(12345);
    session.start();

    let mut rounds = 0;
    while !session.is_over() {
        assert!(make_any_move(&mut session), "no direction moved pre-over");
        session.tick(SETTLE_DELAY_MS);
        rounds += 1;
        assert!(rounds < 100_000, "game never terminated");
    }

    // Deterministic under the fixed seed and up/down/left/right policy.
    assert_eq!(rounds, 165);
    let end = session.take_session_end().expect("game over must report");
    assert_eq!(end.score, 1480);
    assert_eq!(end.max_tile, 128);
    assert!(!end.restarted);

    // Over is terminal: input and ticks are ignored until start().
    let frozen = session.snapshot();
    assert!(!make_any_move(&mut session));
    assert!(!session.tick(SETTLE_DELAY_MS));
    assert_eq!(session.snapshot(), frozen);

    session.start();
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_restart_reports_abandoned_game_first() {
    let mut session = Session::new(1);
    session.start();

    // Seed 1 opens with 2s at (2,0) and (3,0); right merges them for 4
    // points.
    assert!(session.handle_move(Direction::Right));
    assert_eq!(session.score(), 4);

    session.restart();
    let end = session.take_session_end().expect("restart must report");
    assert!(end.restarted);
    assert_eq!(end.score, 4);
    assert_eq!(end.max_tile, 4);

    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.score(), 0);
    assert_eq!(session.grid().active_count(), 2);
}

#[test]
fn test_exit_reports_and_tears_down() {
    let mut session = Session::new(1);
    session.start();
    assert!(session.handle_move(Direction::Right));

    session.end_game(false);
    let end = session.take_session_end().expect("exit must report");
    assert_eq!(end.score, 4);
    assert_eq!(end.max_tile, 4);
    assert!(!end.restarted);
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[test]
fn test_silent_teardown_skips_report() {
    let mut session = Session::new(1);
    session.start();
    session.end_game(true);
    assert_eq!(session.take_session_end(), None);
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[test]
fn test_action_parsing_round_trip() {
    for raw in ["up", "down", "left", "right", "restart", "exit"] {
        let action = SessionAction::from_str(raw).expect(raw);
        assert_eq!(action.as_str(), raw);
    }
    assert_eq!(SessionAction::from_str("diagonal"), None);
}

/// Snapshots expose the per-tile render tuple, including merge leftovers
/// pinned at their final position for one render cycle.
#[test]
fn test_snapshot_exposes_merge_leftovers() {
    let mut session = Session::new(1);
    session.start();
    assert!(session.handle_move(Direction::Right));

    let snap = session.snapshot();
    let marked: Vec<_> = snap
        .tiles
        .iter()
        .filter(|t| t.marked_for_removal)
        .collect();
    assert_eq!(marked.len(), 2);
    assert!(marked.iter().all(|t| (t.x, t.y) == (3, 0)));
    assert!(snap.animating);
    assert!(!snap.playable());
}
