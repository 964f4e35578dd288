//! Grid module - the 4x4 board and directional move resolution
//!
//! The board is a sparse grid: a flat list of tile entities addressed by
//! coordinate. Coordinates: (x, y) where x ranges 0..3 (left to right) and
//! y ranges 0..3 (top to bottom). The grid owns the tile id counter and a
//! seeded RNG, so a given seed replays the exact same spawn sequence.
//!
//! Tiles consumed by a merge are kept in the entity set, marked for
//! removal, until the next move begins - the host renders them at their
//! final position for one frame before dropping them.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::tile::Tile;
use arcade_hub_types::{Direction, CELL_COUNT, FOUR_SPAWN_IN_TEN, GRID_SIZE};

/// Result of a directional move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftResult {
    /// True if any tile changed position or any merge occurred
    pub moved: bool,
    /// Sum of the values of tiles created by merges this move
    pub points: u32,
}

/// The 4x4 board of movable, mergeable tile entities
#[derive(Debug, Clone)]
pub struct Grid {
    /// All tiles, active and pending-removal
    tiles: Vec<Tile>,
    /// Monotonic id source; ids are never reused within a session
    next_id: u32,
    rng: SimpleRng,
}

impl Grid {
    /// Create a new empty grid with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            // 16 cells plus merge leftovers that linger for one render cycle
            tiles: Vec::with_capacity(CELL_COUNT + 8),
            next_id: 0,
            rng: SimpleRng::new(seed),
        }
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Current RNG state (for carrying the spawn sequence across restarts)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    #[inline(always)]
    fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < GRID_SIZE as i8 && y >= 0 && y < GRID_SIZE as i8
    }

    /// The active tile occupying (x, y), if any
    pub fn tile_at(&self, x: i8, y: i8) -> Option<&Tile> {
        self.tiles
            .iter()
            .find(|t| t.x == x && t.y == y && t.is_active())
    }

    fn active_index_at(&self, x: i8, y: i8) -> Option<usize> {
        self.tiles
            .iter()
            .position(|t| t.x == x && t.y == y && t.is_active())
    }

    /// All tiles, including those pending removal from the last move
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles still occupying a cell
    pub fn active_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_active()).count()
    }

    /// True when every cell holds an active tile
    pub fn is_full(&self) -> bool {
        self.active_count() == CELL_COUNT
    }

    /// Highest active tile value (0 on an empty board)
    pub fn max_tile_value(&self) -> u32 {
        self.tiles
            .iter()
            .filter(|t| t.is_active())
            .map(|t| t.value)
            .max()
            .unwrap_or(0)
    }

    /// Sum of all active tile values (diagnostic)
    pub fn total_value(&self) -> u32 {
        self.tiles
            .iter()
            .filter(|t| t.is_active())
            .map(|t| t.value)
            .sum()
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place a tile on an empty in-bounds cell (board seeding for hosts
    /// and tests). Returns the new tile's id, or None if the cell is
    /// unavailable.
    pub fn place_tile(&mut self, x: i8, y: i8, value: u32) -> Option<u32> {
        if !Self::in_bounds(x, y) || self.tile_at(x, y).is_some() {
            return None;
        }
        let id = self.allocate_id();
        self.tiles.push(Tile::new(id, x, y, value));
        Some(id)
    }

    /// Spawn one tile at a uniformly chosen empty cell: value 2 with
    /// probability 0.9, value 4 with probability 0.1, flagged `is_new`.
    /// Returns the new tile's id, or None on a full board - a silent
    /// no-op, expected immediately before a game-over check.
    pub fn spawn_tile(&mut self) -> Option<u32> {
        let mut empty: ArrayVec<(i8, i8), CELL_COUNT> = ArrayVec::new();
        for x in 0..GRID_SIZE as i8 {
            for y in 0..GRID_SIZE as i8 {
                if self.tile_at(x, y).is_none() {
                    empty.push((x, y));
                }
            }
        }

        if empty.is_empty() {
            return None;
        }

        let (x, y) = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = if self.rng.next_range(10) < FOUR_SPAWN_IN_TEN {
            4
        } else {
            2
        };

        let id = self.allocate_id();
        let mut tile = Tile::new(id, x, y, value);
        tile.is_new = true;
        self.tiles.push(tile);
        Some(id)
    }

    /// Resolve a directional move: slide every active tile as far as it
    /// can go, merging equal pairs once per move.
    ///
    /// Transient annotations from the previous move expire here: merge
    /// leftovers are purged and `is_new`/`merged_from` are cleared before
    /// any tile moves.
    pub fn shift(&mut self, dir: Direction) -> ShiftResult {
        self.tiles.retain(|t| t.is_active());
        for tile in &mut self.tiles {
            tile.merged_from = None;
            tile.is_new = false;
        }

        let mut result = ShiftResult::default();
        let (dx, dy) = (dir.dx(), dir.dy());

        // Iterate the axis aligned with the move starting from the edge
        // the tiles are moving toward, so tiles nearest the destination
        // resolve first and a single pass cascades correctly.
        let x_order: [i8; 4] = if dx == 1 { [3, 2, 1, 0] } else { [0, 1, 2, 3] };
        let y_order: [i8; 4] = if dy == 1 { [3, 2, 1, 0] } else { [0, 1, 2, 3] };

        for &x in &x_order {
            for &y in &y_order {
                let Some(idx) = self.active_index_at(x, y) else {
                    continue;
                };
                let (tile_id, tile_value) = (self.tiles[idx].id, self.tiles[idx].value);

                // Slide one step at a time while the next cell is
                // in-bounds and unoccupied.
                let (mut cx, mut cy) = (x, y);
                let (mut nx, mut ny) = (cx + dx, cy + dy);
                while Self::in_bounds(nx, ny) && self.tile_at(nx, ny).is_none() {
                    cx = nx;
                    cy = ny;
                    nx = cx + dx;
                    ny = cy + dy;
                }

                // The cell immediately beyond the furthest reachable one:
                // merge if it holds an equal tile that was not itself
                // produced by a merge this move.
                let merge_target = self.active_index_at(nx, ny).filter(|&i| {
                    let other = &self.tiles[i];
                    other.value == tile_value && other.merged_from.is_none()
                });

                if let Some(other_idx) = merge_target {
                    let other_id = self.tiles[other_idx].id;
                    let merged_id = self.allocate_id();
                    let mut merged = Tile::new(merged_id, nx, ny, tile_value * 2);
                    merged.merged_from = Some((tile_id, other_id));

                    // Both sources render at the merge cell for one frame.
                    let src = &mut self.tiles[idx];
                    src.x = nx;
                    src.y = ny;
                    src.marked_for_removal = true;
                    self.tiles[other_idx].marked_for_removal = true;

                    result.points += merged.value;
                    self.tiles.push(merged);
                    result.moved = true;
                } else if (cx, cy) != (x, y) {
                    let tile = &mut self.tiles[idx];
                    tile.x = cx;
                    tile.y = cy;
                    result.moved = true;
                }
            }
        }

        result
    }

    /// True only when the board is full and no two axis-adjacent tiles
    /// share a value. Right and down neighbors cover every pair once.
    pub fn is_game_over(&self) -> bool {
        if !self.is_full() {
            return false;
        }
        for x in 0..GRID_SIZE as i8 {
            for y in 0..GRID_SIZE as i8 {
                let Some(tile) = self.tile_at(x, y) else {
                    return false;
                };
                for (nx, ny) in [(x + 1, y), (x, y + 1)] {
                    if let Some(neighbor) = self.tile_at(nx, ny) {
                        if neighbor.value == tile.value {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }
}
