//! Command-line bowling scorer (default binary).
//!
//! Feeds the rolls given as arguments into a fresh game and prints the score
//! card, as text or as a single JSON line.
//!
//! ```text
//! tui-bowling [--json | --format text|json] [-v] <pins>...
//! ```

use anyhow::{Context, Result};

use tui_bowling::config::{OutputFormat, RunConfig};
use tui_bowling::core::Game;
use tui_bowling::report::ScoreReport;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = RunConfig::from_env()
        .parse_args(&args)
        .and_then(|config| run(&config));

    if let Err(e) = result {
        eprintln!("[bowling] error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<()> {
    let mut game = Game::new();

    for (i, &pins) in config.rolls.iter().enumerate() {
        game.record_roll(pins)
            .with_context(|| format!("roll {} ({} pins) rejected", i + 1, pins))?;

        if config.verbose {
            if let Some(frame) = game.current_frame() {
                eprintln!(
                    "[bowling] roll {}: {} pins (frame {}, {})",
                    i + 1,
                    pins,
                    frame.number(),
                    frame.kind()
                );
            }
        }
    }

    let report = ScoreReport::from_game(&game).context("cannot score game")?;

    match config.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
