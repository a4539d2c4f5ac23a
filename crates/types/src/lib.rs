//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, reporting, the command-line driver).
//!
//! # Game Dimensions
//!
//! Standard ten-pin rules:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TOTAL_PINS` | 10 | Pins racked at the start of a frame |
//! | `TOTAL_FRAMES` | 10 | Frames that contribute to the score |
//! | `MAX_FRAMES` | 11 | Scoring frames plus the bonus frame |
//! | `MAX_ROLLS_PER_FRAME` | 2 | Rolls held by a single frame |
//! | `MAX_ROLLS` | 21 | Legal ceiling for a whole game |
//! | `MAX_SCORE` | 300 | Perfect game |
//!
//! Bonus rolls earned by a strike or spare in frame 10 are recorded in a
//! synthetic 11th frame. That frame supplies lookahead pins only and is never
//! scored on its own.
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{FrameKind, Roll, TOTAL_FRAMES, TOTAL_PINS};
//!
//! // Rolls are range-checked on construction
//! let roll = Roll::new(7).unwrap();
//! assert_eq!(roll.pins(), 7);
//! assert!(Roll::new(11).is_none());
//!
//! // Classification from the rolls of a frame
//! assert_eq!(FrameKind::classify(&[Roll::STRIKE]), FrameKind::Strike);
//!
//! // Parse frame kind (case-insensitive)
//! assert_eq!(FrameKind::from_str("Spare"), Some(FrameKind::Spare));
//!
//! assert_eq!(TOTAL_PINS, 10);
//! assert_eq!(TOTAL_FRAMES, 10);
//! ```

use std::fmt;

/// Pins racked at the start of every frame (10)
pub const TOTAL_PINS: u8 = 10;

/// Frames that contribute to the final score (10)
pub const TOTAL_FRAMES: usize = 10;

/// Scoring frames plus the synthetic bonus frame (11)
pub const MAX_FRAMES: usize = TOTAL_FRAMES + 1;

/// Rolls a single frame can hold.
///
/// Regular frames hold at most two rolls; the bonus frame holds one roll after
/// a tenth-frame spare and two after a tenth-frame strike.
pub const MAX_ROLLS_PER_FRAME: usize = 2;

/// Bonus rolls earned by a strike in frame 10
pub const STRIKE_BONUS_ROLLS: usize = 2;

/// Bonus rolls earned by a spare in frame 10
pub const SPARE_BONUS_ROLLS: usize = 1;

/// Legal ceiling on rolls in one game (21)
pub const MAX_ROLLS: usize = 2 * TOTAL_FRAMES + SPARE_BONUS_ROLLS;

/// Highest possible score (12 strikes)
pub const MAX_SCORE: u32 = 300;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_pin_rule_constants() {
        assert_eq!(TOTAL_PINS, 10);
        assert_eq!(TOTAL_FRAMES, 10);
        assert_eq!(MAX_FRAMES, 11);
        assert_eq!(MAX_ROLLS_PER_FRAME, 2);
        assert_eq!(MAX_ROLLS, 21);
        assert_eq!(MAX_SCORE, 300);
    }

    #[test]
    fn roll_rejects_more_than_ten_pins() {
        assert_eq!(Roll::new(0).map(Roll::pins), Some(0));
        assert_eq!(Roll::new(10), Some(Roll::STRIKE));
        assert_eq!(Roll::new(11), None);
        assert_eq!(Roll::new(u8::MAX), None);
    }

    #[test]
    fn roll_display_marks_strikes_and_gutters() {
        assert_eq!(Roll::STRIKE.to_string(), "X");
        assert_eq!(Roll::GUTTER.to_string(), "-");
        assert_eq!(Roll::new(7).unwrap().to_string(), "7");
    }

    #[test]
    fn classify_follows_pin_total_and_roll_count() {
        let r = |p| Roll::new(p).unwrap();

        assert_eq!(FrameKind::classify(&[]), FrameKind::Open);
        assert_eq!(FrameKind::classify(&[r(10)]), FrameKind::Strike);
        assert_eq!(FrameKind::classify(&[r(9)]), FrameKind::Open);
        assert_eq!(FrameKind::classify(&[r(3), r(7)]), FrameKind::Spare);
        assert_eq!(FrameKind::classify(&[r(0), r(10)]), FrameKind::Spare);
        assert_eq!(FrameKind::classify(&[r(3), r(6)]), FrameKind::Open);
        // Two strikes in the bonus frame total 20, which is not a spare.
        assert_eq!(FrameKind::classify(&[r(10), r(10)]), FrameKind::Open);
    }

    #[test]
    fn frame_kind_string_round_trip() {
        for kind in [FrameKind::Open, FrameKind::Spare, FrameKind::Strike] {
            assert_eq!(FrameKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(FrameKind::from_str("STRIKE"), Some(FrameKind::Strike));
        assert_eq!(FrameKind::from_str("turkey"), None);
    }

    #[test]
    fn bonus_rolls_per_kind() {
        assert_eq!(FrameKind::Strike.bonus_rolls(), STRIKE_BONUS_ROLLS);
        assert_eq!(FrameKind::Spare.bonus_rolls(), SPARE_BONUS_ROLLS);
        assert_eq!(FrameKind::Open.bonus_rolls(), 0);
    }
}

/// A single throw: the number of pins knocked down (0-10)
///
/// A `Roll` can only be built through [`Roll::new`], so every value in
/// circulation is within range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Roll(u8);

impl Roll {
    /// All ten pins in one throw
    pub const STRIKE: Roll = Roll(TOTAL_PINS);

    /// No pins at all
    pub const GUTTER: Roll = Roll(0);

    /// Create a roll, or `None` if more than [`TOTAL_PINS`] were knocked down
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::Roll;
    ///
    /// assert_eq!(Roll::new(4).map(|r| r.pins()), Some(4));
    /// assert_eq!(Roll::new(10), Some(Roll::STRIKE));
    /// assert_eq!(Roll::new(12), None);
    /// ```
    pub fn new(pins: u8) -> Option<Self> {
        if pins <= TOTAL_PINS {
            Some(Roll(pins))
        } else {
            None
        }
    }

    /// Pins knocked down by this roll
    pub fn pins(self) -> u8 {
        self.0
    }

    /// Whether this roll cleared a full rack
    pub fn is_strike(self) -> bool {
        self.0 == TOTAL_PINS
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("-"),
            TOTAL_PINS => f.write_str("X"),
            n => write!(f, "{}", n),
        }
    }
}

/// Frame classification
///
/// - **Open**: fewer than 10 pins over the frame's rolls (or a frame still in progress)
/// - **Spare**: 10 pins over exactly two rolls
/// - **Strike**: 10 pins with the first roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrameKind {
    #[default]
    Open,
    Spare,
    Strike,
}

impl FrameKind {
    /// Classify a frame from scratch given all of its rolls
    ///
    /// Only the pin total and the roll count matter: 10 pins in one roll is a
    /// strike, 10 pins in two rolls is a spare, anything else is open.
    pub fn classify(rolls: &[Roll]) -> Self {
        let total: u32 = rolls.iter().map(|r| u32::from(r.pins())).sum();
        match (total == u32::from(TOTAL_PINS), rolls.len()) {
            (true, 1) => FrameKind::Strike,
            (true, 2) => FrameKind::Spare,
            _ => FrameKind::Open,
        }
    }

    /// Number of bonus rolls this classification earns when it lands in frame 10
    pub fn bonus_rolls(self) -> usize {
        match self {
            FrameKind::Strike => STRIKE_BONUS_ROLLS,
            FrameKind::Spare => SPARE_BONUS_ROLLS,
            FrameKind::Open => 0,
        }
    }

    /// Parse frame kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::FrameKind;
    ///
    /// assert_eq!(FrameKind::from_str("open"), Some(FrameKind::Open));
    /// assert_eq!(FrameKind::from_str("Strike"), Some(FrameKind::Strike));
    /// assert_eq!(FrameKind::from_str("double"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(FrameKind::Open),
            "spare" => Some(FrameKind::Spare),
            "strike" => Some(FrameKind::Strike),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameKind::Open => "open",
            FrameKind::Spare => "spare",
            FrameKind::Strike => "strike",
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
