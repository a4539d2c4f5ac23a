//! Game error types
use thiserror::Error;

use crate::types::{TOTAL_FRAMES, TOTAL_PINS};

pub type GameResult<T> = Result<T, GameError>;

/// Every way a game operation can be rejected.
///
/// A rejected call never mutates the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Roll outside `0..=10`, or more pins than are still standing in the frame.
    #[error("invalid roll of {pins} pins ({})", standing_reason(.standing))]
    InvalidInput { pins: u8, standing: Option<u8> },

    /// Roll after the game's legal ceiling has been reached.
    #[error("no more rolls are allowed: the game is over")]
    Overflow,

    /// Score requested before all frames and earned bonus rolls are recorded.
    #[error(
        "cannot score an incomplete game ({frames} of {total} frames recorded)",
        total = TOTAL_FRAMES
    )]
    IncompleteGame { frames: usize },
}

fn standing_reason(standing: &Option<u8>) -> String {
    match standing {
        Some(n) => format!("only {} standing", n),
        None => format!("expected 0 to {}", TOTAL_PINS),
    }
}

impl GameError {
    /// Roll value outside the legal range
    pub fn out_of_range(pins: u8) -> Self {
        Self::InvalidInput {
            pins,
            standing: None,
        }
    }

    /// Roll knocking down more pins than remain in the frame
    pub fn too_many_pins(pins: u8, standing: u8) -> Self {
        Self::InvalidInput {
            pins,
            standing: Some(standing),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
