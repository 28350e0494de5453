//! Random velocity perturbation with a per-axis speed band.
//!
//! Without jitter the balls bounce on perfectly periodic paths. A tiny
//! perturbation each frame, followed by clamping into `[min, max]` per axis,
//! keeps trajectories organic while bounding speed.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Ball;

/// Size of the quantized uniform draw
const JITTER_STEPS: u32 = 100;
/// Total width of the perturbation added to each axis
const JITTER_SPAN: f32 = 0.01;

/// When jitter runs within a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JitterPolicy {
    /// No jitter and no speed clamping
    Off,
    /// Once, just before position integration
    Once,
    /// Before and after position integration
    #[default]
    Twice,
}

impl JitterPolicy {
    /// Whether to perturb before integrating position
    pub const fn before_move(self) -> bool {
        !matches!(self, JitterPolicy::Off)
    }

    /// Whether to perturb again after integrating position
    pub const fn after_move(self) -> bool {
        matches!(self, JitterPolicy::Twice)
    }

    pub fn name(&self) -> &'static str {
        match self {
            JitterPolicy::Off => "off",
            JitterPolicy::Once => "once",
            JitterPolicy::Twice => "twice",
        }
    }
}

impl FromStr for JitterPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "none" => Ok(JitterPolicy::Off),
            "once" => Ok(JitterPolicy::Once),
            "twice" => Ok(JitterPolicy::Twice),
            other => Err(format!("unknown jitter policy '{other}' (expected off, once or twice)")),
        }
    }
}

/// Absolute per-axis speed bounds applied after each perturbation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedBand {
    pub min: f32,
    pub max: f32,
}

impl SpeedBand {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp one velocity component into the band.
    /// Components below `min` snap to `min`, keeping sign; zero snaps to `-min`.
    pub fn clamp(&self, v: f32) -> f32 {
        let v = v.clamp(-self.max, self.max);
        if v.abs() < self.min {
            if v > 0.0 { self.min } else { -self.min }
        } else {
            v
        }
    }
}

impl Default for SpeedBand {
    fn default() -> Self {
        Self::new(5.0, 10.0)
    }
}

/// One jitter sample in `[-0.005, 0.005)`
fn sample<R: Rng>(rng: &mut R) -> f32 {
    let u = rng.random_range(0..JITTER_STEPS) as f32 / JITTER_STEPS as f32;
    u * JITTER_SPAN - JITTER_SPAN / 2.0
}

/// Perturb both velocity components, then clamp them into the band
pub fn perturb<R: Rng>(ball: &mut Ball, band: SpeedBand, rng: &mut R) {
    ball.dx += sample(rng);
    ball.dy += sample(rng);

    ball.dx = band.clamp(ball.dx);
    ball.dy = band.clamp(ball.dy);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Territory;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_policy_phases() {
        assert!(!JitterPolicy::Off.before_move());
        assert!(!JitterPolicy::Off.after_move());
        assert!(JitterPolicy::Once.before_move());
        assert!(!JitterPolicy::Once.after_move());
        assert!(JitterPolicy::Twice.before_move());
        assert!(JitterPolicy::Twice.after_move());
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("OFF".parse::<JitterPolicy>(), Ok(JitterPolicy::Off));
        assert_eq!("twice".parse::<JitterPolicy>(), Ok(JitterPolicy::Twice));
        assert!("thrice".parse::<JitterPolicy>().is_err());
    }

    #[test]
    fn test_clamp_caps_at_max() {
        let band = SpeedBand::new(5.0, 10.0);
        assert_eq!(band.clamp(12.5), 10.0);
        assert_eq!(band.clamp(-12.5), -10.0);
        assert_eq!(band.clamp(7.0), 7.0);
    }

    #[test]
    fn test_clamp_floors_at_min_keeping_sign() {
        let band = SpeedBand::new(5.0, 10.0);
        assert_eq!(band.clamp(1.0), 5.0);
        assert_eq!(band.clamp(-1.0), -5.0);
        assert_eq!(band.clamp(0.0), -5.0);
    }

    #[test]
    fn test_samples_stay_in_span() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let s = sample(&mut rng);
            assert!((-0.005..0.005).contains(&s), "sample {s}");
        }
    }

    #[test]
    fn test_perturb_keeps_components_in_band() {
        let band = SpeedBand::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ball = Ball::new(0.0, 0.0, 12.5, -0.2, 12.5, Territory::Day);

        for _ in 0..100 {
            perturb(&mut ball, band, &mut rng);
            assert!(ball.dx.abs() >= band.min && ball.dx.abs() <= band.max);
            assert!(ball.dy.abs() >= band.min && ball.dy.abs() <= band.max);
        }
    }

    #[test]
    fn test_perturb_is_reproducible_for_a_seed() {
        let band = SpeedBand::default();
        let run = |seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut ball = Ball::new(0.0, 0.0, 7.0, -7.0, 12.5, Territory::Night);
            for _ in 0..50 {
                perturb(&mut ball, band, &mut rng);
            }
            (ball.dx, ball.dy)
        };
        assert_eq!(run(3), run(3));
    }
}
