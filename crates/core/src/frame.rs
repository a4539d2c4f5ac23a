//! Frame module - frames and the forward-linked frame chain
//!
//! The chain is an arena: frames live in a fixed-capacity inline array and a
//! frame's successor is referenced by index. Indices only ever grow, so the
//! chain cannot contain cycles.

use arrayvec::ArrayVec;

use crate::types::{FrameKind, Roll, MAX_FRAMES, MAX_ROLLS_PER_FRAME, TOTAL_FRAMES, TOTAL_PINS};

/// One frame of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    number: u8,
    rolls: ArrayVec<Roll, MAX_ROLLS_PER_FRAME>,
    kind: FrameKind,
    base_score: u32,
    next: Option<usize>,
}

impl Frame {
    /// Create an empty frame with the given 1-based number
    pub(crate) fn new(number: u8) -> Self {
        Self {
            number,
            rolls: ArrayVec::new(),
            kind: FrameKind::Open,
            base_score: 0,
            next: None,
        }
    }

    /// 1-based position in the chain (frame 11 is the bonus frame)
    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    pub fn first_roll(&self) -> Option<Roll> {
        self.rolls.first().copied()
    }

    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Sum of this frame's own pins, never including any bonus
    pub fn base_score(&self) -> u32 {
        self.base_score
    }

    /// Index of the successor frame in the chain
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    /// Whether this is the synthetic frame holding tenth-frame bonus rolls
    pub fn is_bonus(&self) -> bool {
        usize::from(self.number) > TOTAL_FRAMES
    }

    /// Pins still standing before the next roll in this frame.
    ///
    /// A strike in the bonus frame re-racks the pins.
    pub fn standing_pins(&self) -> u8 {
        match self.rolls.as_slice() {
            [first] if !first.is_strike() => TOTAL_PINS - first.pins(),
            _ => TOTAL_PINS,
        }
    }

    /// Append a roll and recompute the classification and base score.
    ///
    /// Callers must check capacity first.
    pub(crate) fn push_roll(&mut self, roll: Roll) {
        self.rolls.push(roll);
        self.reclassify();
    }

    fn reclassify(&mut self) {
        self.kind = FrameKind::classify(&self.rolls);
        self.base_score = self.rolls.iter().map(|r| u32::from(r.pins())).sum();
    }
}

/// Append-only, forward-linked sequence of frames
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameChain {
    frames: ArrayVec<Frame, MAX_FRAMES>,
}

impl FrameChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.frames.is_full()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// The frame currently being filled (always the last one)
    pub fn current(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub(crate) fn current_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn as_slice(&self) -> &[Frame] {
        &self.frames
    }

    /// Successor of the frame at `index`, following its `next` link
    pub fn next_of(&self, index: usize) -> Option<&Frame> {
        self.frames
            .get(index)
            .and_then(|f| f.next)
            .and_then(|i| self.frames.get(i))
    }

    /// Total rolls recorded across all frames
    pub fn roll_count(&self) -> usize {
        self.frames.iter().map(Frame::roll_count).sum()
    }

    /// Raw rolls of every frame after the one at `index`, in throw order.
    pub fn rolls_after(&self, index: usize) -> impl Iterator<Item = Roll> + '_ {
        let mut cursor = self.get(index).and_then(|f| f.next);
        std::iter::from_fn(move || {
            let frame = self.frames.get(cursor?)?;
            cursor = frame.next;
            Some(frame.rolls())
        })
        .flatten()
        .copied()
    }

    /// Append a new frame holding `roll`, linking the previous frame to it.
    ///
    /// Returns `None` when the chain is already at capacity.
    pub(crate) fn push_frame(&mut self, roll: Roll) -> Option<usize> {
        if self.frames.is_full() {
            return None;
        }
        let index = self.frames.len();
        let mut frame = Frame::new(index as u8 + 1);
        frame.push_roll(roll);
        self.frames.push(frame);
        if let Some(prev) = index.checked_sub(1) {
            self.frames[prev].next = Some(index);
        }
        Some(index)
    }

    pub(crate) fn clear(&mut self) {
        self.frames.clear();
    }
}

impl<'a> IntoIterator for &'a FrameChain {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
