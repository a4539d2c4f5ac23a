//! TUI Bowling (workspace facade crate).
//!
//! Re-exports the game logic as `tui_bowling::{core, types}` while the
//! implementation lives in dedicated crates under `crates/`. The driver-facing
//! [`config`] and [`report`] modules live here.

pub mod config;
pub mod report;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;
