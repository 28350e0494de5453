use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::surface::{ScoreSink, Surface};
use crate::config::{ConfigError, SimConfig};
use crate::domain::{Ball, Grid, Score, collision, jitter};

/// Anything a frame driver can advance once per display refresh
pub trait Drawable {
    /// Draw the current frame, advance the state and return the published score
    fn step(&mut self) -> Score;
}

/// Simulation owns the grid and the balls and runs one frame per `step`.
/// Drawing goes to the injected surface, the score text to the injected sink.
pub struct Simulation<S: Surface, K: ScoreSink> {
    config: SimConfig,
    grid: Grid,
    balls: Vec<Ball>,
    rng: Pcg32,
    surface: S,
    sink: K,
    frame: u64,
}

impl<S: Surface, K: ScoreSink> Simulation<S, K> {
    /// Validate the configuration and seed the playfield
    pub fn new(config: SimConfig, surface: S, sink: K) -> Result<Self, ConfigError> {
        config.validate()?;

        let (grid, balls) = Self::initial_state(&config);
        let rng = Pcg32::seed_from_u64(config.seed);

        let (cols, rows) = grid.dimensions();
        log::info!(
            "Simulation ready: {}x{} cells of {}px, {} balls, jitter {}, scan {}",
            cols,
            rows,
            config.cell_size,
            balls.len(),
            config.jitter.name(),
            config.scan.name()
        );

        Ok(Self {
            config,
            grid,
            balls,
            rng,
            surface,
            sink,
            frame: 0,
        })
    }

    fn initial_state(config: &SimConfig) -> (Grid, Vec<Ball>) {
        let grid = Grid::for_playfield(config.width, config.height, config.cell_size);
        let radius = config.ball_radius();
        let balls = config
            .ball_specs()
            .iter()
            .map(|spec| Ball::new(spec.x, spec.y, spec.dx, spec.dy, radius, spec.territory))
            .collect();
        (grid, balls)
    }

    /// Back to the starting grid, balls and random sequence
    pub fn restart(&mut self) {
        let (grid, balls) = Self::initial_state(&self.config);
        self.grid = grid;
        self.balls = balls;
        self.rng = Pcg32::seed_from_u64(self.config.seed);
        self.frame = 0;
        log::info!("Simulation restarted");
    }

    /// Run one frame: redraw, publish the score, then move every ball in order
    pub fn step(&mut self) -> Score {
        let (width, height) = (self.config.width as f32, self.config.height as f32);
        let score = self.draw_board();

        let band = self.config.speed_band();
        let policy = self.config.jitter;
        let palette = &self.config.palette;

        for ball in &mut self.balls {
            self.surface
                .fill_circle(ball.x, ball.y, ball.radius, palette.ball_color(ball.territory));

            collision::resolve_cell_collisions(ball, &mut self.grid);
            collision::resolve_boundary(ball, width, height);

            if policy.before_move() {
                jitter::perturb(ball, band, &mut self.rng);
            }

            ball.advance();

            if policy.after_move() {
                jitter::perturb(ball, band, &mut self.rng);
            }
        }

        self.frame += 1;
        log::trace!("frame {}: {}", self.frame, score);
        score
    }

    /// Draw the current state without advancing it
    pub fn redraw(&mut self) -> Score {
        let score = self.draw_board();
        for ball in &self.balls {
            self.surface.fill_circle(
                ball.x,
                ball.y,
                ball.radius,
                self.config.palette.ball_color(ball.territory),
            );
        }
        score
    }

    /// Clear, paint every cell and publish the score of the grid as drawn
    fn draw_board(&mut self) -> Score {
        let (width, height) = (self.config.width as f32, self.config.height as f32);
        self.surface.clear_rect(0.0, 0.0, width, height);
        self.draw_cells();

        let score = self.grid.score(self.config.scan);
        self.sink.show_score(&score.to_string());
        score
    }

    fn draw_cells(&mut self) {
        let size = self.grid.cell_size() as f32;
        for (col, row, territory) in self.grid.iter_cells() {
            self.surface.fill_rect(
                col as f32 * size,
                row as f32 * size,
                size,
                size,
                self.config.palette.cell_color(territory),
            );
        }
    }

    /// Fresh scan of the current grid
    pub fn score(&self) -> Score {
        self.grid.score(self.config.scan)
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Frames stepped since construction or the last restart
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    pub const fn config(&self) -> &SimConfig {
        &self.config
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub const fn sink(&self) -> &K {
        &self.sink
    }
}

impl<S: Surface, K: ScoreSink> Drawable for Simulation<S, K> {
    fn step(&mut self) -> Score {
        Simulation::step(self)
    }
}

/// Drive a simulation for a fixed number of frames without a window.
/// Returns the score of the last frame, or None when `frames` is zero.
pub fn run_frames<D: Drawable + ?Sized>(drawable: &mut D, frames: u64) -> Option<Score> {
    (0..frames).fold(None, |_, _| Some(drawable.step()))
}
