//! Report module - serializable score report for a finished game
//!
//! Built from a [`Game`] once it can be scored. The JSON form is a single
//! object:
//!
//! ```text
//! {"frames":[{"frame":1,"rolls":[10],"kind":"strike","base":10,"bonus":8,"total":18,"running_total":18},...],
//!  "bonus_rolls":[],"roll_count":19,"score":26}
//! ```

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::{Game, GameResult};
use crate::types::{FrameKind, Roll};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKindLower {
    Open,
    Spare,
    Strike,
}

impl From<FrameKind> for FrameKindLower {
    fn from(value: FrameKind) -> Self {
        match value {
            FrameKind::Open => FrameKindLower::Open,
            FrameKind::Spare => FrameKindLower::Spare,
            FrameKind::Strike => FrameKindLower::Strike,
        }
    }
}

/// One scoring frame in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReport {
    pub frame: u8,
    pub rolls: Vec<u8>,
    pub kind: FrameKindLower,
    pub base: u32,
    pub bonus: u32,
    pub total: u32,
    pub running_total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub frames: Vec<FrameReport>,
    /// Rolls recorded in the bonus frame (empty unless frame 10 was a spare or strike).
    pub bonus_rolls: Vec<u8>,
    pub roll_count: usize,
    pub score: u32,
}

impl ScoreReport {
    /// Build the report for a finished game.
    ///
    /// Fails with the game's own error if it cannot be scored yet.
    pub fn from_game(game: &Game) -> GameResult<Self> {
        let card = game.score_card()?;
        let chain = game.frames();

        let frames = card
            .frames
            .iter()
            .zip(chain.iter())
            .map(|(score, frame)| FrameReport {
                frame: score.number,
                rolls: pins_of(frame.rolls()),
                kind: score.kind.into(),
                base: score.base,
                bonus: score.bonus,
                total: score.total,
                running_total: score.running_total,
            })
            .collect();

        let bonus_rolls = chain
            .iter()
            .find(|f| f.is_bonus())
            .map(|f| pins_of(f.rolls()))
            .unwrap_or_default();

        Ok(Self {
            frames,
            bonus_rolls,
            roll_count: game.roll_count(),
            score: card.total,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Plain-text rendering: one line per frame, then the final score.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for f in &self.frames {
            let rolls = f
                .rolls
                .iter()
                .filter_map(|&p| Roll::new(p))
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(
                out,
                "frame {:>2}: {:<5} {:<6} {:>3} {:>3}",
                f.frame,
                rolls,
                kind_str(f.kind),
                f.total,
                f.running_total
            );
        }
        if !self.bonus_rolls.is_empty() {
            let bonus = self
                .bonus_rolls
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "bonus:    {}", bonus);
        }
        let _ = writeln!(out, "score: {}", self.score);
        out
    }
}

fn pins_of(rolls: &[Roll]) -> Vec<u8> {
    rolls.iter().map(|r| r.pins()).collect()
}

fn kind_str(kind: FrameKindLower) -> &'static str {
    match kind {
        FrameKindLower::Open => "open",
        FrameKindLower::Spare => "spare",
        FrameKindLower::Strike => "strike",
    }
}
