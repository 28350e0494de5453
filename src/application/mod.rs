mod surface;
mod simulation;

pub use surface::{DrawCommand, NullSurface, RecordingSurface, Rgb, ScoreSink, Surface};
pub use simulation::{Drawable, Simulation, run_frames};
