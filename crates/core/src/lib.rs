//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the ten-pin bowling rules: frame construction, roll
//! validation and scoring. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: The same rolls always produce the same frames and score
//! - **Testable**: Unit tests cover every rule and edge case
//! - **Allocation-free**: Frames and rolls are stored inline
//!
//! # Module Structure
//!
//! - [`frame`]: Frames and the forward-linked frame chain
//! - [`game`]: Roll intake state machine and game lifecycle
//! - [`scoring`]: Spare/strike bonus lookahead and the score card
//! - [`error`]: The error kinds a game operation can return
//!
//! # Game Rules
//!
//! - A frame holds up to two rolls; a strike closes it after one
//! - A spare scores 10 plus the next roll
//! - A strike scores 10 plus the next two rolls
//! - A strike or spare in frame 10 earns bonus rolls (two or one), recorded in
//!   a synthetic 11th frame that is never scored on its own
//! - A perfect game is 12 strikes for 300
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::{Game, GameError};
//!
//! let mut game = Game::new();
//! for pins in [10, 6, 2] {
//!     game.record_roll(pins).unwrap();
//! }
//! assert!(matches!(game.score(), Err(GameError::IncompleteGame { .. })));
//!
//! for _ in 0..16 {
//!     game.record_roll(0).unwrap();
//! }
//! assert_eq!(game.score(), Ok(26));
//! assert_eq!(game.record_roll(3), Err(GameError::Overflow));
//! ```

pub mod error;
pub mod frame;
pub mod game;
pub mod scoring;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use error::{GameError, GameResult};
pub use frame::{Frame, FrameChain};
pub use game::Game;
pub use scoring::{score_frames, FrameScore, ScoreCard};
