//! Session controller - sequences engine calls, gates input, reports outcomes
//!
//! One session is one playthrough. Directional input is only honored in
//! the `Playing` phase; a resolved move enters `Animating` for a fixed
//! settle delay (the host's slide animation time), after which one tile
//! spawns, input re-enables, and game over is evaluated against the
//! post-spawn board. Session endings are reported as values consumed via
//! [`Session::take_session_end`], not through a host callback.

use crate::grid::Grid;
use crate::snapshot::SessionSnapshot;
use arcade_hub_types::{Direction, SessionAction, SETTLE_DELAY_MS, STARTING_TILES};

/// Lifecycle of one playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Pre-`start()`: no board activity, input ignored
    Idle,
    /// Accepting directional input
    Playing,
    /// A move resolved; the settle delay is running and input is gated
    Animating,
    /// No moves left; terminal until `start()` is called again
    Over,
}

/// Aggregate stats reported when a session ends or restarts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEnd {
    pub score: u32,
    /// Highest tile value on the board when the session ended
    pub max_tile: u32,
    /// True when the session was abandoned by an early restart
    pub restarted: bool,
}

/// One running game instance
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    phase: SessionPhase,
    /// Running total of merge values
    score: u32,
    /// Reserved/informational; the base rules never flip this
    won: bool,
    settle_timer_ms: u32,
    /// Last session-end report, consumed by the host
    ended: Option<SessionEnd>,
}

impl Session {
    /// Create an idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(seed),
            phase: SessionPhase::Idle,
            score: 0,
            won: false,
            settle_timer_ms: 0,
            ended: None,
        }
    }

    /// Start (or restart) the playthrough: fresh board, two seeded tiles
    ///
    /// The RNG state carries forward so a restart does not replay the
    /// previous game's spawn sequence.
    pub fn start(&mut self) {
        self.grid = Grid::new(self.grid.seed());
        self.score = 0;
        self.won = false;
        self.settle_timer_ms = 0;
        for _ in 0..STARTING_TILES {
            self.grid.spawn_tile();
        }
        self.phase = SessionPhase::Playing;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn is_animating(&self) -> bool {
        self.phase == SessionPhase::Animating
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::Over
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Highest tile value currently on the board
    pub fn max_tile_value(&self) -> u32 {
        self.grid.max_tile_value()
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Forward a directional input. Returns true if the board changed.
    ///
    /// Ignored outside `Playing`: the settle delay gate serializes moves
    /// so two can never resolve against the same board state.
    pub fn handle_move(&mut self, dir: Direction) -> bool {
        if self.phase != SessionPhase::Playing {
            return false;
        }

        let result = self.grid.shift(dir);
        self.score += result.points;

        if result.moved {
            self.phase = SessionPhase::Animating;
            self.settle_timer_ms = SETTLE_DELAY_MS;
        }
        result.moved
    }

    /// Advance the settle timer. Returns true when the delay elapsed and
    /// the board changed (post-move spawn).
    ///
    /// The delay is not cancellable and not pre-emptible by input. On
    /// expiry the ordering is fixed: the move is already final, then the
    /// spawn, then the game-over check against the post-spawn board.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != SessionPhase::Animating {
            return false;
        }

        self.settle_timer_ms = self.settle_timer_ms.saturating_sub(elapsed_ms);
        if self.settle_timer_ms > 0 {
            return false;
        }

        self.grid.spawn_tile();
        self.phase = SessionPhase::Playing;

        if self.grid.is_game_over() {
            self.phase = SessionPhase::Over;
            self.ended = Some(SessionEnd {
                score: self.score,
                max_tile: self.grid.max_tile_value(),
                restarted: false,
            });
        }
        true
    }

    /// Abandon the current playthrough and begin a new one
    ///
    /// A game still in progress is reported with `restarted: true` before
    /// being discarded, so host-side progress tracking sees every
    /// session, not just the ones that end naturally.
    pub fn restart(&mut self) {
        if matches!(self.phase, SessionPhase::Playing | SessionPhase::Animating) {
            self.ended = Some(SessionEnd {
                score: self.score,
                max_tile: self.grid.max_tile_value(),
                restarted: true,
            });
        }
        self.start();
    }

    /// Tear the session down without reaching `Over` through game logic.
    /// `silent` suppresses the session-end report (host navigation
    /// teardown, not a real session end).
    pub fn end_game(&mut self, silent: bool) {
        if !silent {
            self.ended = Some(SessionEnd {
                score: self.score,
                max_tile: self.grid.max_tile_value(),
                restarted: false,
            });
        }
        self.phase = SessionPhase::Idle;
    }

    /// Apply a session action
    pub fn apply_action(&mut self, action: SessionAction) -> bool {
        match action {
            SessionAction::Move(dir) => self.handle_move(dir),
            SessionAction::Restart => {
                self.restart();
                true
            }
            SessionAction::Exit => {
                self.end_game(false);
                true
            }
        }
    }

    /// Take and clear the last session-end report
    pub fn take_session_end(&mut self) -> Option<SessionEnd> {
        self.ended.take()
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.tiles.clear();
        for tile in self.grid.tiles() {
            out.tiles.push(tile.into());
        }
        out.score = self.score;
        out.phase = self.phase;
        out.animating = self.is_animating();
        out.over = self.is_over();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
