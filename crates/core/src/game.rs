//! Game module - roll intake and the game lifecycle
//!
//! [`Game::record_roll`] is the frame-construction state machine. For each
//! incoming roll it either extends the current frame or starts a new one,
//! enforcing the ten-frame ceiling and the bonus frame allowance earned by a
//! tenth-frame strike or spare. Every check runs before any mutation, so a
//! rejected roll leaves the game untouched.

use crate::error::{GameError, GameResult};
use crate::frame::{Frame, FrameChain};
use crate::scoring::{score_frames, ScoreCard};
use crate::types::{FrameKind, Roll, MAX_ROLLS_PER_FRAME, TOTAL_FRAMES};

/// Where the next roll goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Append to the current frame
    Extend,
    /// Start a new frame linked after the current one
    NewFrame,
}

/// A single ten-pin game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    frames: FrameChain,
}

impl Game {
    /// Create an empty game with no frames
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all frames, returning to the freshly constructed state
    pub fn reset(&mut self) {
        self.frames.clear();
    }

    pub fn frames(&self) -> &FrameChain {
        &self.frames
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.current()
    }

    pub fn roll_count(&self) -> usize {
        self.frames.roll_count()
    }

    /// Bonus rolls earned by frame 10 (0 until frame 10 is a spare or strike)
    pub fn bonus_rolls_allowed(&self) -> usize {
        self.frames
            .get(TOTAL_FRAMES - 1)
            .map_or(0, |tenth| tenth.kind().bonus_rolls())
    }

    /// Record one roll.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidInput`] if `pins` exceeds 10 or the pins still
    ///   standing in the current frame.
    /// - [`GameError::Overflow`] if the game can take no further rolls.
    pub fn record_roll(&mut self, pins: u8) -> GameResult<()> {
        let roll = Roll::new(pins).ok_or_else(|| GameError::out_of_range(pins))?;

        match self.placement()? {
            Placement::Extend => {
                let current = self.frames.current_mut().ok_or(GameError::Overflow)?;
                let standing = current.standing_pins();
                if pins > standing {
                    return Err(GameError::too_many_pins(pins, standing));
                }
                current.push_roll(roll);
            }
            Placement::NewFrame => {
                self.frames.push_frame(roll).ok_or(GameError::Overflow)?;
            }
        }

        Ok(())
    }

    /// Decide where the next roll goes without touching any state.
    fn placement(&self) -> GameResult<Placement> {
        let Some(current) = self.frames.current() else {
            return Ok(Placement::NewFrame);
        };

        if self.accepts_roll(current) {
            Ok(Placement::Extend)
        } else if self.can_add_frame() {
            Ok(Placement::NewFrame)
        } else {
            Err(GameError::Overflow)
        }
    }

    /// Whether `frame` (the current frame) may take another roll
    fn accepts_roll(&self, frame: &Frame) -> bool {
        if frame.is_bonus() {
            return frame.roll_count() < self.bonus_rolls_allowed();
        }
        frame.roll_count() < MAX_ROLLS_PER_FRAME && frame.kind() == FrameKind::Open
    }

    /// Frame-creation capacity rule: frames 1-10 are always allowed, the 11th
    /// only when frame 10 earned bonus rolls, and never a 12th.
    fn can_add_frame(&self) -> bool {
        match self.frames.len() {
            n if n < TOTAL_FRAMES => true,
            n if n == TOTAL_FRAMES => self.bonus_rolls_allowed() > 0,
            _ => false,
        }
    }

    /// Whether the current frame is closed to further rolls
    fn current_closed(&self) -> bool {
        self.frames
            .current()
            .map_or(true, |frame| !self.accepts_roll(frame))
    }

    /// All ten frames and every earned bonus roll have been recorded
    pub fn is_complete(&self) -> bool {
        self.frames.len() >= TOTAL_FRAMES && self.current_closed() && !self.can_add_frame()
    }

    /// No further roll can be accepted
    pub fn is_over(&self) -> bool {
        self.is_complete()
    }

    /// Per-frame score breakdown of a finished game.
    ///
    /// # Errors
    ///
    /// [`GameError::IncompleteGame`] until [`Game::is_complete`] holds.
    pub fn score_card(&self) -> GameResult<ScoreCard> {
        if !self.is_complete() {
            return Err(GameError::IncompleteGame {
                frames: self.frames.len().min(TOTAL_FRAMES),
            });
        }
        Ok(score_frames(&self.frames))
    }

    /// Final score of a finished game (0..=300). Idempotent.
    pub fn score(&self) -> GameResult<u32> {
        self.score_card().map(|card| card.total)
    }
}
