//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (the grid is square)
pub const GRID_SIZE: u8 = 4;
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
/// Pause between move resolution and the next spawn/input-enable.
/// Matches the host's slide animation duration.
pub const SETTLE_DELAY_MS: u32 = 100;

/// Tiles seeded onto the board when a session starts
pub const STARTING_TILES: usize = 2;

/// Spawn value odds: a 4 appears this many times in ten spawns, a 2 otherwise
pub const FOUR_SPAWN_IN_TEN: u32 = 1;

/// Progress constants
/// XP needed to clear a level is `level * XP_PER_LEVEL`
pub const XP_PER_LEVEL: u32 = 100;
/// XP granted for finishing a game round, win or lose
pub const PARTICIPATION_XP: u32 = 10;
/// Maximum entries kept in the transaction ledger
pub const LEDGER_CAP: usize = 50;

/// Daily streak windows (in milliseconds)
pub const STREAK_CLAIM_MS: u64 = 24 * 60 * 60 * 1000;
pub const STREAK_BREAK_MS: u64 = 48 * 60 * 60 * 1000;

/// The four cardinal move directions, encoded as unit vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Horizontal component of the unit vector
    pub fn dx(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up | Direction::Down => 0,
        }
    }

    /// Vertical component of the unit vector (y grows downward)
    pub fn dy(&self) -> i8 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
            Direction::Left | Direction::Right => 0,
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Session-level actions a host can forward to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Move(Direction),
    Restart,
    Exit,
}

impl SessionAction {
    /// Parse action from string (for host key mapping)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "restart" => Some(SessionAction::Restart),
            "exit" => Some(SessionAction::Exit),
            other => Direction::from_str(other).map(SessionAction::Move),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::Move(dir) => dir.as_str(),
            SessionAction::Restart => "restart",
            SessionAction::Exit => "exit",
        }
    }
}
