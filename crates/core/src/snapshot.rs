//! Render-facing view of a session
//!
//! The core is the sole authority on which tile ids exist and their
//! attributes; the host owns scene reconciliation (create/update/delete)
//! against these views.

use arrayvec::ArrayVec;

use crate::session::SessionPhase;
use crate::tile::Tile;

/// Upper bound on concurrently tracked tiles: 16 active cells plus merge
/// leftovers that linger for one render cycle.
pub const MAX_SNAPSHOT_TILES: usize = 32;

/// Per-tile render tuple - everything a host needs to place, animate, and
/// retire one tile node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub id: u32,
    pub x: i8,
    pub y: i8,
    pub value: u32,
    pub is_new: bool,
    pub marked_for_removal: bool,
}

impl From<&Tile> for TileView {
    fn from(tile: &Tile) -> Self {
        Self {
            id: tile.id,
            x: tile.x,
            y: tile.y,
            value: tile.value,
            is_new: tile.is_new,
            marked_for_removal: tile.marked_for_removal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub tiles: ArrayVec<TileView, MAX_SNAPSHOT_TILES>,
    pub score: u32,
    pub phase: SessionPhase,
    pub animating: bool,
    pub over: bool,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.score = 0;
        self.phase = SessionPhase::Idle;
        self.animating = false;
        self.over = false;
    }

    /// True while directional input would be honored
    pub fn playable(&self) -> bool {
        self.phase == SessionPhase::Playing
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            tiles: ArrayVec::new(),
            score: 0,
            phase: SessionPhase::Idle,
            animating: false,
            over: false,
        }
    }
}
