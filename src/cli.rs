//! Command-line options shared by the binaries.

use std::path::PathBuf;

use clap::Args;

use crate::config::{ConfigError, SimConfig};
use crate::domain::{JitterPolicy, ScanMode};

/// Simulation options. Flags override values from `--config`.
#[derive(Args, Debug, Default, Clone)]
pub struct SimArgs {
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Cell edge in pixels
    #[arg(long)]
    pub cell_size: Option<u32>,

    /// Playfield width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Playfield height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Seed for the jitter random source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Velocity jitter: off, once or twice per frame
    #[arg(long)]
    pub jitter: Option<JitterPolicy>,

    /// Score scan: serial or parallel
    #[arg(long)]
    pub scan: Option<ScanMode>,
}

impl SimArgs {
    /// Overwrite config fields for every flag that was given
    pub fn apply(&self, config: &mut SimConfig) {
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(jitter) = self.jitter {
            config.jitter = jitter;
        }
        if let Some(scan) = self.scan {
            config.scan = scan;
        }
    }

    /// Defaults, then the config file if any, then flags
    pub fn resolve(&self) -> Result<SimConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}
