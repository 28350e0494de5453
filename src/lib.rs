// Domain layer - grid, balls, collision rules
pub mod domain;

// Application layer - per-frame orchestration and drawing capabilities
pub mod application;
pub mod config;
pub mod cli;

// Infrastructure layer - window rendering and keyboard input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Ball, Grid, JitterPolicy, ScanMode, Score, Territory};
pub use application::{Drawable, Simulation, run_frames};
pub use config::{ConfigError, SimConfig};
