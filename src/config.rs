//! Constructible configuration for a slot session.
//!
//! Everything here can be built in code or loaded from a TOML file:
//!
//! ```toml
//! reels = 3
//! symbols = ["🍒", "🍋", "🍊", "🍇", "🍉", "🐱", "🍀", "💎", "🔔"]
//!
//! [timing]
//! tick_ms = 50
//! stagger_ms = 1000
//!
//! [[payout.matched_one]]
//! kind = "any_of"
//! symbol = "🍒"
//! multiplier = "2.5"
//! ```

use crate::domain::payout::PayoutTable;
use crate::domain::symbol::Alphabet;
use crate::error::{Result, SlotError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Pacing of one spin session, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinTiming {
    /// Interval between symbol advances on each reel.
    pub tick_ms: u64,
    /// Delay between consecutive reel stop deadlines; the global deadline
    /// is `reels * stagger_ms` after session start.
    pub stagger_ms: u64,
    /// How long each rendered frame stays on screen.
    pub frame_pause_ms: u64,
    /// Pause after the result line before the session returns.
    pub result_pause_ms: u64,
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            stagger_ms: 1000,
            frame_pause_ms: 50,
            result_pause_ms: 200,
        }
    }
}

impl SpinTiming {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn frame_pause(&self) -> Duration {
        Duration::from_millis(self.frame_pause_ms)
    }

    pub fn result_pause(&self) -> Duration {
        Duration::from_millis(self.result_pause_ms)
    }
}

/// Full machine configuration: alphabet, reel count, payout table, pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    pub symbols: Alphabet,
    pub reels: usize,
    pub payout: PayoutTable,
    pub timing: SpinTiming,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            symbols: Alphabet::default(),
            reels: 3,
            payout: PayoutTable::default(),
            timing: SpinTiming::default(),
        }
    }
}

impl SlotConfig {
    /// Loads and validates a configuration file. Missing keys fall back to
    /// their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that would make the session loop degenerate.
    /// The alphabet is already guaranteed non-empty by construction.
    pub fn validate(&self) -> Result<()> {
        if self.reels == 0 {
            return Err(SlotError::ConfigError(
                "reel count must be at least 1".to_string(),
            ));
        }
        if self.timing.tick_ms == 0 {
            return Err(SlotError::ConfigError(
                "tick_ms must be non-zero".to_string(),
            ));
        }
        if self.timing.stagger_ms == 0 {
            return Err(SlotError::ConfigError(
                "stagger_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
