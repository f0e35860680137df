//! Run configuration for the console demo.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{patterns::DEMO_SEED, Result};

/// Demo run parameters.
///
/// The defaults reproduce the reference run: a 20x20 grid seeded with the
/// ten-cell demo pattern, one second between generations, running until
/// extinction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid columns
    pub width: usize,
    /// Grid rows
    pub height: usize,
    /// Initial live coordinates
    pub seeds: Vec<(usize, usize)>,
    /// Pacing between generations, in milliseconds
    pub tick_delay_ms: u64,
    /// Stop after this many generations even if cells remain
    /// (`None` = run until extinction)
    pub max_generations: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            seeds: DEMO_SEED.cells.to_vec(),
            tick_delay_ms: 1000,
            max_generations: None,
        }
    }
}

impl Config {
    /// Load a configuration override from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }
}
