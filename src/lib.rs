//! Arcade Hub (workspace facade crate).
//!
//! This package keeps the `arcade_hub::{core,progress,types}` public API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use arcade_hub_core as core;
pub use arcade_hub_progress as progress;
pub use arcade_hub_types as types;
