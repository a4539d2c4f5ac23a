//! Property tests over arbitrary legal and illegal roll sequences

use proptest::prelude::*;

use tui_bowling::core::{Game, GameError};
use tui_bowling::types::{FrameKind, MAX_FRAMES, MAX_ROLLS, MAX_SCORE, TOTAL_FRAMES, TOTAL_PINS};

/// Feed pins into a game, skipping any roll the game rejects.
fn play(raw: &[u8]) -> Game {
    let mut game = Game::new();
    for &pins in raw {
        let _ = game.record_roll(pins);
    }
    game
}

/// A complete legal game: ten frames plus whatever bonus rolls they earn.
fn legal_game() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec((0..=TOTAL_PINS, 0..=TOTAL_PINS, 0..=TOTAL_PINS, 0..=TOTAL_PINS), 12)
        .prop_map(|draws| {
            let mut rolls = Vec::new();
            for (i, &(a, b, _, _)) in draws.iter().take(TOTAL_FRAMES).enumerate() {
                rolls.push(a);
                if a < TOTAL_PINS {
                    rolls.push(b % (TOTAL_PINS - a + 1));
                }
                if i == TOTAL_FRAMES - 1 {
                    let (_, _, c, d) = draws[TOTAL_FRAMES];
                    if a == TOTAL_PINS {
                        rolls.push(c);
                        let standing = if c == TOTAL_PINS { TOTAL_PINS } else { TOTAL_PINS - c };
                        rolls.push(d % (standing + 1));
                    } else if a + b % (TOTAL_PINS - a + 1) == TOTAL_PINS {
                        rolls.push(c);
                    }
                }
            }
            rolls
        })
}

proptest! {
    #[test]
    fn legal_games_score_within_bounds(rolls in legal_game()) {
        let mut game = Game::new();
        for &pins in &rolls {
            prop_assert_eq!(game.record_roll(pins), Ok(()));
        }

        let score = game.score();
        prop_assert!(score.is_ok());
        let score = score.unwrap();
        prop_assert!(score <= MAX_SCORE);

        let pins_total: u32 = rolls.iter().map(|&p| u32::from(p)).sum();
        prop_assert!(score >= game.frames().iter().take(TOTAL_FRAMES).map(|f| f.base_score()).sum::<u32>());
        prop_assert!(score <= pins_total * 3);

        // Nothing more fits once the game is complete.
        prop_assert_eq!(game.record_roll(0), Err(GameError::Overflow));
        prop_assert_eq!(game.score(), Ok(score));
    }

    #[test]
    fn score_card_running_totals_are_monotonic(rolls in legal_game()) {
        let game = play(&rolls);
        let card = game.score_card().unwrap();

        prop_assert_eq!(card.frames.len(), TOTAL_FRAMES);
        let mut prev = 0;
        for frame in &card.frames {
            prop_assert_eq!(frame.total, frame.base + frame.bonus);
            prop_assert_eq!(frame.running_total, prev + frame.total);
            if frame.kind == FrameKind::Open {
                prop_assert_eq!(frame.bonus, 0);
            }
            prev = frame.running_total;
        }
        prop_assert_eq!(prev, card.total);
    }

    #[test]
    fn arbitrary_input_never_breaks_ceilings(raw in prop::collection::vec(any::<u8>(), 0..64)) {
        let game = play(&raw);
        prop_assert!(game.roll_count() <= MAX_ROLLS);
        prop_assert!(game.frames().len() <= MAX_FRAMES);

        for frame in game.frames().iter().filter(|f| !f.is_bonus()) {
            prop_assert!(frame.base_score() <= u32::from(TOTAL_PINS));
        }
        if let Ok(score) = game.score() {
            prop_assert!(score <= MAX_SCORE);
        }
    }

    #[test]
    fn rejected_rolls_do_not_mutate(raw in prop::collection::vec(0..=TOTAL_PINS, 0..24), bad in (TOTAL_PINS + 1)..=u8::MAX) {
        let mut game = play(&raw);
        let before = game.clone();

        let err = game.record_roll(bad).unwrap_err();
        prop_assert!(err.is_invalid_input());
        prop_assert_eq!(&game, &before);
    }
}
