//! Scoring module - ten-pin score aggregation
//!
//! Scoring is a pure pass over a finished [`FrameChain`]. Frames only ever
//! store their own pins; bonuses are computed here into a fresh
//! [`ScoreCard`], so lookahead always reads raw roll values and never a
//! neighbour's bonused total.
//!
//! - Spare: base + the next roll.
//! - Strike: base + the next two rolls, which may come from one frame
//!   (an open/spare frame, or a two-roll bonus frame) or from two frames
//!   (a following strike plus the first roll after it).
//! - Missing lookahead rolls contribute 0.

use arrayvec::ArrayVec;

use crate::frame::{Frame, FrameChain};
use crate::types::{FrameKind, TOTAL_FRAMES};

/// Score of a single scoring frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameScore {
    pub number: u8,
    pub kind: FrameKind,
    /// Pins knocked down in this frame alone.
    pub base: u32,
    /// Spare/strike bonus taken from later rolls.
    pub bonus: u32,
    /// `base + bonus`.
    pub total: u32,
    /// Cumulative score through this frame.
    pub running_total: u32,
}

/// Per-frame breakdown of a game's score
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreCard {
    pub frames: ArrayVec<FrameScore, TOTAL_FRAMES>,
    pub total: u32,
}

/// Bonus for a spare: the single roll that follows the frame
pub fn spare_bonus(chain: &FrameChain, index: usize) -> u32 {
    chain
        .next_of(index)
        .and_then(Frame::first_roll)
        .map_or(0, |r| u32::from(r.pins()))
}

/// Bonus for a strike: the next two rolls.
///
/// When the following frame is itself a strike its base (10) is taken and the
/// second roll comes from the frame after it; otherwise both rolls come from
/// the following frame.
pub fn strike_bonus(chain: &FrameChain, index: usize) -> u32 {
    let Some(next_index) = chain.get(index).and_then(Frame::next) else {
        return 0;
    };
    let Some(next) = chain.get(next_index) else {
        return 0;
    };

    match next.rolls() {
        [first] if first.is_strike() => next.base_score() + spare_bonus(chain, next_index),
        rolls => rolls.iter().take(2).map(|r| u32::from(r.pins())).sum(),
    }
}

/// Bonus earned by the frame at `index`
pub fn frame_bonus(chain: &FrameChain, index: usize) -> u32 {
    match chain.get(index).map(Frame::kind) {
        Some(FrameKind::Spare) => spare_bonus(chain, index),
        Some(FrameKind::Strike) => strike_bonus(chain, index),
        Some(FrameKind::Open) | None => 0,
    }
}

/// Score the first ten frames of a chain.
///
/// Does not check completeness; frames that are missing simply do not appear
/// on the card. See [`crate::Game::score_card`] for the checked entry point.
pub fn score_frames(chain: &FrameChain) -> ScoreCard {
    let mut card = ScoreCard::default();

    for (index, frame) in chain.iter().take(TOTAL_FRAMES).enumerate() {
        let base = frame.base_score();
        let bonus = frame_bonus(chain, index);
        let total = base + bonus;
        card.total += total;
        card.frames.push(FrameScore {
            number: frame.number(),
            kind: frame.kind(),
            base,
            bonus,
            total,
            running_total: card.total,
        });
    }

    card
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Game;

    fn game_from(rolls: &[u8]) -> Game {
        let mut game = Game::new();
        for &pins in rolls {
            game.record_roll(pins).unwrap();
        }
        game
    }

    #[test]
    fn test_spare_bonus_is_next_roll() {
        let game = game_from(&[5, 5, 6, 0]);
        assert_eq!(spare_bonus(game.frames(), 0), 6);
        assert_eq!(frame_bonus(game.frames(), 0), 6);
        assert_eq!(frame_bonus(game.frames(), 1), 0);
    }

    #[test]
    fn test_strike_bonus_from_open_frame() {
        let game = game_from(&[10, 6, 2]);
        assert_eq!(strike_bonus(game.frames(), 0), 8);
    }

    #[test]
    fn test_strike_bonus_spans_following_strike() {
        let game = game_from(&[10, 10, 7, 1]);
        assert_eq!(strike_bonus(game.frames(), 0), 17);
        assert_eq!(strike_bonus(game.frames(), 1), 8);
    }

    #[test]
    fn test_missing_lookahead_contributes_zero() {
        let game = game_from(&[10]);
        assert_eq!(strike_bonus(game.frames(), 0), 0);

        let game = game_from(&[10, 10]);
        assert_eq!(strike_bonus(game.frames(), 0), 10);

        let game = game_from(&[4, 6]);
        assert_eq!(spare_bonus(game.frames(), 0), 0);
    }

    #[test]
    fn test_ninth_strike_reads_into_bonus_frame() {
        // Frames 1-8 gutter, frame 9 strike, frame 10 strike, bonus [10, 10].
        let mut rolls = vec![0; 16];
        rolls.extend([10, 10, 10, 10]);
        let game = game_from(&rolls);

        let card = score_frames(game.frames());
        assert_eq!(card.frames[8].bonus, 20);
        assert_eq!(card.frames[9].bonus, 20);
        assert_eq!(card.total, 60);
    }

    #[test]
    fn test_score_card_running_totals() {
        let game = game_from(&[1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6]);
        let card = score_frames(game.frames());

        let running: Vec<u32> = card.frames.iter().map(|f| f.running_total).collect();
        assert_eq!(running, vec![5, 14, 29, 49, 60, 61, 77, 97, 117, 133]);
        assert_eq!(card.total, 133);
        assert_eq!(card.frames[4].kind, FrameKind::Strike);
        assert_eq!(card.frames[4].bonus, 1);
    }

    #[test]
    fn test_score_frames_never_reads_bonus_frame_as_scoring() {
        let game = game_from(&[10; 12]);
        let card = score_frames(game.frames());
        assert_eq!(game.frames().len(), 11);
        assert_eq!(card.frames.len(), TOTAL_FRAMES);
        assert_eq!(card.total, 300);
    }
}
