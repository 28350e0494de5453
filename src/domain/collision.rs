//! Ball-vs-grid and ball-vs-wall resolution.
//!
//! Contact with the grid is sampled, not solved: eight probes spaced a quarter
//! turn apart sit on the ball's rim, and every probe that lands on a foreign
//! cell captures it and flips one velocity component. The flipped axis is the
//! one the probe direction leans toward; diagonals flip the vertical axis.
//! Two probes flipping the same axis in one frame cancel out.

use std::f64::consts::FRAC_PI_4;

use super::{Axis, Ball, Grid};

/// Probes per ball per frame
pub const PROBE_COUNT: usize = 8;

/// |cos| and |sin| closer than this count as equal (diagonal probes)
const TIE_TOLERANCE: f64 = 1e-9;

/// Angle of probe `k`, measured from +x toward +y (screen down)
pub fn probe_angle(k: usize) -> f64 {
    k as f64 * FRAC_PI_4
}

/// Axis flipped when the probe at `angle` captures a cell.
/// Horizontal only when the horizontal component strictly dominates.
pub fn bounce_axis(angle: f64) -> Axis {
    let (sin, cos) = angle.sin_cos();
    if cos.abs() - sin.abs() > TIE_TOLERANCE {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

/// Sample the ball's rim, repaint foreign cells to the ball's territory and
/// bounce off each captured cell. Returns the number of cells captured.
pub fn resolve_cell_collisions(ball: &mut Ball, grid: &mut Grid) -> usize {
    let mut captured = 0;

    for k in 0..PROBE_COUNT {
        let angle = probe_angle(k);
        let (sin, cos) = angle.sin_cos();
        let probe_x = (ball.x as f64 + cos * ball.radius as f64) as f32;
        let probe_y = (ball.y as f64 + sin * ball.radius as f64) as f32;

        let Some((col, row)) = grid.cell_at_point(probe_x, probe_y) else {
            continue;
        };

        if grid.color_at(col, row) == ball.territory {
            continue;
        }

        grid.set_color(col, row, ball.territory);
        let axis = bounce_axis(angle);
        ball.flip(axis);
        captured += 1;

        log::trace!(
            "{} ball captured cell ({col}, {row}) with probe {k}, flipped {axis:?}",
            ball.territory.name()
        );
    }

    captured
}

/// Reflect velocity on each axis whose next step would leave
/// `[radius, extent - radius]`. Returns true if either axis flipped.
pub fn resolve_boundary(ball: &mut Ball, width: f32, height: f32) -> bool {
    let margin = ball.radius;
    let (next_x, next_y) = ball.next_position();
    let mut reflected = false;

    if next_x > width - margin || next_x < margin {
        ball.flip(Axis::Horizontal);
        reflected = true;
    }

    if next_y > height - margin || next_y < margin {
        ball.flip(Axis::Vertical);
        reflected = true;
    }

    if reflected {
        log::debug!(
            "{} ball reflected at ({:.1}, {:.1})",
            ball.territory.name(),
            ball.x,
            ball.y
        );
    }

    reflected
}
