mod territory;
mod grid;
mod score;
mod ball;
pub mod collision;
pub mod jitter;

pub use territory::Territory;
pub use grid::Grid;
pub use score::{Score, ScanMode};
pub use ball::{Axis, Ball};
pub use collision::{resolve_boundary, resolve_cell_collisions};
pub use jitter::{JitterPolicy, SpeedBand};
