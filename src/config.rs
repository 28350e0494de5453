//! Simulation configuration.
//!
//! Everything the simulation needs is passed in through `SimConfig`: playfield
//! size, cell size, jitter policy, colors and starting balls. Values come from
//! defaults, an optional TOML file and command-line overrides, in that order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::Rgb;
use crate::domain::{JitterPolicy, ScanMode, SpeedBand, Territory};

pub const DEFAULT_CELL_SIZE: u32 = 25;
pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 600;
/// Starting speed per axis of the default balls
pub const DEFAULT_BALL_SPEED: f32 = 12.5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("playfield {width}x{height} is smaller than one {cell_size}px cell")]
    PlayfieldTooSmall { width: u32, height: u32, cell_size: u32 },
    #[error("invalid speed band [{min}, {max}]")]
    InvalidSpeedBand { min: f32, max: f32 },
    #[error("at least one ball is required")]
    NoBalls,
    #[error("ball {index} starts at ({x}, {y}), outside the playfield")]
    BallOutOfBounds { index: usize, x: f32, y: f32 },
    #[error("ball {index} has a non-finite velocity")]
    InvalidVelocity { index: usize },
    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
}

/// Cell and ball colors for both territories
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub day_cell: Rgb,
    pub day_ball: Rgb,
    pub night_cell: Rgb,
    pub night_ball: Rgb,
    pub backdrop: Rgb,
}

impl Palette {
    pub const fn cell_color(&self, territory: Territory) -> Rgb {
        match territory {
            Territory::Day => self.day_cell,
            Territory::Night => self.night_cell,
        }
    }

    pub const fn ball_color(&self, territory: Territory) -> Rgb {
        match territory {
            Territory::Day => self.day_ball,
            Territory::Night => self.night_ball,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        let light = Rgb::new(0xD9, 0xE8, 0xE3);
        let dark = Rgb::new(0x11, 0x4C, 0x5A);
        Self {
            day_cell: light,
            day_ball: dark,
            night_cell: dark,
            night_ball: light,
            backdrop: Rgb::new(0, 0, 0),
        }
    }
}

/// Starting state of one ball
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BallSpec {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub territory: Territory,
}

impl BallSpec {
    /// Day ball in the left quarter heading up-right, night ball in the
    /// right quarter heading down-left
    pub fn default_pair(width: f32, height: f32) -> Vec<BallSpec> {
        vec![
            BallSpec {
                x: width / 4.0,
                y: height / 2.0,
                dx: DEFAULT_BALL_SPEED,
                dy: -DEFAULT_BALL_SPEED,
                territory: Territory::Day,
            },
            BallSpec {
                x: width / 4.0 * 3.0,
                y: height / 2.0,
                dx: -DEFAULT_BALL_SPEED,
                dy: DEFAULT_BALL_SPEED,
                territory: Territory::Night,
            },
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Cell edge in device pixels
    pub cell_size: u32,
    /// Playfield width in device pixels
    pub width: u32,
    /// Playfield height in device pixels
    pub height: u32,
    pub jitter: JitterPolicy,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Seed for the jitter random source
    pub seed: u64,
    pub scan: ScanMode,
    pub palette: Palette,
    /// Explicit starting balls; the default pair when absent
    pub balls: Option<Vec<BallSpec>>,
}

impl Default for SimConfig {
    fn default() -> Self {
        let band = SpeedBand::default();
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            jitter: JitterPolicy::default(),
            min_speed: band.min,
            max_speed: band.max,
            seed: 0,
            scan: ScanMode::default(),
            palette: Palette::default(),
            balls: None,
        }
    }
}

impl SimConfig {
    /// Read a TOML file. Missing keys fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub const fn speed_band(&self) -> SpeedBand {
        SpeedBand::new(self.min_speed, self.max_speed)
    }

    /// Ball radius, half a cell
    pub fn ball_radius(&self) -> f32 {
        self.cell_size as f32 / 2.0
    }

    pub fn ball_specs(&self) -> Vec<BallSpec> {
        self.balls
            .clone()
            .unwrap_or_else(|| BallSpec::default_pair(self.width as f32, self.height as f32))
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        if self.width < self.cell_size || self.height < self.cell_size {
            return Err(ConfigError::PlayfieldTooSmall {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }

        let band = self.speed_band();
        if !(band.min.is_finite() && band.max.is_finite()) || band.min < 0.0 || band.min > band.max {
            return Err(ConfigError::InvalidSpeedBand {
                min: band.min,
                max: band.max,
            });
        }

        let specs = self.ball_specs();
        if specs.is_empty() {
            return Err(ConfigError::NoBalls);
        }

        let (width, height) = (self.width as f32, self.height as f32);
        for (index, spec) in specs.iter().enumerate() {
            let inside = (0.0..=width).contains(&spec.x) && (0.0..=height).contains(&spec.y);
            if !inside {
                return Err(ConfigError::BallOutOfBounds {
                    index,
                    x: spec.x,
                    y: spec.y,
                });
            }
            if !(spec.dx.is_finite() && spec.dy.is_finite()) {
                return Err(ConfigError::InvalidVelocity { index });
            }
        }

        Ok(())
    }
}
