//! End-to-end hub flow: a game session feeding player progress
//!
//! The host glue is thin by design - it forwards input to the session,
//! ticks the settle timer, and hands every session-end report to the
//! profile - so these tests exercise exactly that loop.

use arcade_hub::core::{Session, SessionEnd};
use arcade_hub::progress::{MemoryStore, Profile};
use arcade_hub::types::{Direction, PARTICIPATION_XP, SETTLE_DELAY_MS};

const GAME_ID: &str = "slide-2048";

/// Forward one report to progress tracking the way the shell does.
fn apply_report(profile: &mut Profile<MemoryStore>, end: SessionEnd) -> bool {
    profile.record_game_result(GAME_ID, end.score)
}

#[test]
fn test_played_to_loss_updates_progress() {
    let mut session = Session::new(12345);
    let mut profile = Profile::load(MemoryStore::new());
    session.start();

    while !session.is_over() {
        let moved = Direction::ALL.iter().any(|&d| session.handle_move(d));
        assert!(moved);
        session.tick(SETTLE_DELAY_MS);
    }

    let end = session.take_session_end().expect("loss reports");
    assert!(apply_report(&mut profile, end));

    assert_eq!(profile.games_played(), 1);
    assert_eq!(profile.record(GAME_ID), end.score);
    assert_eq!(profile.xp(), PARTICIPATION_XP);
}

#[test]
fn test_restarted_sessions_still_count() {
    let mut session = Session::new(1);
    let mut profile = Profile::load(MemoryStore::new());
    session.start();

    // Score a merge, then bail out twice; both abandoned runs report.
    assert!(session.handle_move(Direction::Right));
    session.restart();
    let first = session.take_session_end().expect("first restart reports");
    assert!(first.restarted);
    assert_eq!(first.score, 4);
    apply_report(&mut profile, first);

    session.restart();
    let second = session.take_session_end().expect("second restart reports");
    assert!(second.restarted);
    assert_eq!(second.score, 0);
    apply_report(&mut profile, second);

    assert_eq!(profile.games_played(), 2);
    assert_eq!(profile.record(GAME_ID), 4);
    assert_eq!(profile.xp(), 2 * PARTICIPATION_XP);
}

#[test]
fn test_exit_report_feeds_record_and_badges() {
    let mut session = Session::new(1);
    let mut profile = Profile::load(MemoryStore::new());
    session.start();

    assert!(session.handle_move(Direction::Right));
    session.tick(SETTLE_DELAY_MS);
    session.end_game(false);

    let end = session.take_session_end().expect("exit reports");
    apply_report(&mut profile, end);

    // Host-side unlock conditions run off the updated profile.
    if profile.games_played() >= 1 {
        assert!(profile.register_badge_unlock("gamer", 9_000));
    }
    assert_eq!(profile.badge_unlock_time("gamer"), 9_000);
}

#[test]
fn test_silent_teardown_leaves_progress_untouched() {
    let mut session = Session::new(1);
    let mut profile = Profile::load(MemoryStore::new());
    session.start();
    assert!(session.handle_move(Direction::Down));

    // Host navigates away mid-animation.
    session.end_game(true);
    assert!(session.take_session_end().is_none());
    assert_eq!(profile.games_played(), 0);
    assert_eq!(profile.xp(), 0);
}
