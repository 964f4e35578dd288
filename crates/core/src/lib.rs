//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 board rules, tile entity lifecycle, and
//! session sequencing. It has **zero dependencies** on UI, networking, or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical spawn sequences
//! - **Testable**: Comprehensive unit tests for all board rules
//! - **Portable**: Can run in any environment (browser host, headless)
//!
//! # Module Structure
//!
//! - [`tile`]: tile entities with stable ids and transient per-move flags
//! - [`grid`]: 4x4 board with sliding, merge resolution, and spawning
//! - [`session`]: one playthrough - input gating, settle delay, reporting
//! - [`snapshot`]: render-facing tile views for host reconciliation
//! - [`rng`]: seeded LCG behind spawn cell/value choices
//!
//! # Game Rules
//!
//! - Tiles slide as far as possible toward the move direction; tiles
//!   nearest the destination edge resolve first
//! - Two equal tiles merge into one of double value; a tile produced by a
//!   merge cannot merge again in the same move
//! - After every effective move one tile spawns at a uniformly chosen
//!   empty cell: value 2 with probability 0.9, value 4 with probability 0.1
//! - The game is over when the board is full and no two axis-adjacent
//!   tiles share a value
//!
//! # Example
//!
//! ```
//! use arcade_hub_core::Session;
//! use arcade_hub_core::types::{Direction, SETTLE_DELAY_MS};
//!
//! let mut session = Session::new(12345);
//! session.start();
//! assert_eq!(session.snapshot().tiles.len(), 2);
//!
//! // Forward input, then drive the settle timer as frames elapse.
//! session.handle_move(Direction::Left);
//! session.tick(SETTLE_DELAY_MS);
//! assert!(!session.is_over());
//! ```
//!
//! # Timing
//!
//! The controller is event-driven: directional input resolves
//! synchronously, and the only suspension point is the settle delay
//! between a resolved move and the next spawn. Call
//! [`Session::tick`](session::Session::tick) every frame with elapsed
//! milliseconds to drive it.

pub mod grid;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod tile;

pub use arcade_hub_types as types;

// Re-export commonly used types for convenience
pub use grid::{Grid, ShiftResult};
pub use rng::SimpleRng;
pub use session::{Session, SessionEnd, SessionPhase};
pub use snapshot::{SessionSnapshot, TileView, MAX_SNAPSHOT_TILES};
pub use tile::Tile;
