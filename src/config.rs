//! Run configuration for the command-line driver.
//!
//! Defaults come from the environment and are overridden by flags:
//!
//! - `BOWLING_FORMAT`: `text` (default) or `json`
//! - `BOWLING_VERBOSE`: set to "1" or "true" to log every roll to stderr

use anyhow::{anyhow, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub rolls: Vec<u8>,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl RunConfig {
    /// Defaults from `BOWLING_FORMAT` / `BOWLING_VERBOSE`, no rolls.
    ///
    /// Unrecognised values fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let format = env::var("BOWLING_FORMAT")
            .ok()
            .and_then(|s| OutputFormat::from_str(&s))
            .unwrap_or_default();

        let verbose = env::var("BOWLING_VERBOSE")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        Self {
            rolls: Vec::new(),
            format,
            verbose,
        }
    }

    /// Apply command-line arguments (without the program name) on top of `self`.
    pub fn parse_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--json" => self.format = OutputFormat::Json,
                "--text" => self.format = OutputFormat::Text,
                "--format" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --format"))?;
                    self.format = OutputFormat::from_str(v)
                        .ok_or_else(|| anyhow!("invalid --format value: {}", v))?;
                }
                "-v" | "--verbose" => self.verbose = true,
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
                pins => {
                    let pins = pins
                        .parse::<u8>()
                        .map_err(|_| anyhow!("invalid roll value: {}", pins))?;
                    self.rolls.push(pins);
                }
            }
            i += 1;
        }

        Ok(self)
    }
}

fn is_truthy(v: &str) -> bool {
    matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}
