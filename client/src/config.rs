use std::{fs, path::Path};

use anyhow::{Context, ensure};
use libgame::config::SeedConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// How the initial generation is seeded.
    pub seed: SeedConfig,

    pub ticks_per_second: u64,

    /// Stop after this many generations. Runs until told to exit otherwise.
    pub max_generations: Option<u64>,

    /// Wait for a `run` or `step` command before the first tick.
    pub start_paused: bool,

    /// Whether to draw the grid to stdout after every generation.
    pub render: bool,
    pub color: bool,

    /// Log the population every this many generations.
    pub log_every: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: SeedConfig::default(),
            ticks_per_second: 4,
            max_generations: None,
            start_paused: false,
            render: true,
            color: true,
            log_every: 10,
        }
    }
}

impl ClientConfig {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config: Self =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.ticks_per_second > 0, "ticks_per_second must be positive");
        ensure!(self.log_every > 0, "log_every must be positive");
        self.seed.validate().context("Invalid seed config")?;
        Ok(())
    }
}
