//! Player progress module - the hub's persistent state
//!
//! Everything the hub remembers about a player lives here: the coin
//! balance, per-game high scores, completed tasks, the daily login
//! streak, XP/level, unlocked badges, and a short transaction ledger.
//! State is backed by a flat key-value store ([`store::KvStore`]) with
//! localStorage semantics - an in-memory implementation for guests and
//! tests, and a flat-JSON file implementation for durable profiles.
//!
//! The module never reads a clock; callers inject timestamps. Identity
//! providers and remote sync are external collaborators and do not
//! appear here.

pub mod ledger;
pub mod profile;
pub mod store;

pub use arcade_hub_types as types;

// Re-export commonly used types for convenience
pub use ledger::{Ledger, Transaction, TransactionKind};
pub use profile::{Profile, StreakClaim};
pub use store::{JsonFileStore, KvStore, MemoryStore, StoreError};
