use super::Territory;

/// Velocity component flipped by a bounce
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A ball claims cells for its territory as it bounces around the playfield.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
    pub territory: Territory,
}

impl Ball {
    pub fn new(x: f32, y: f32, dx: f32, dy: f32, radius: f32, territory: Territory) -> Self {
        Self {
            x,
            y,
            dx,
            dy,
            radius,
            territory,
        }
    }

    /// Cells of this territory get repainted on contact
    pub const fn foreign(&self) -> Territory {
        self.territory.opposite()
    }

    pub fn flip(&mut self, axis: Axis) {
        match axis {
            Axis::Horizontal => self.dx = -self.dx,
            Axis::Vertical => self.dy = -self.dy,
        }
    }

    /// Integrate one frame of motion
    pub fn advance(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }

    /// Position after the next `advance`
    pub fn next_position(&self) -> (f32, f32) {
        (self.x + self.dx, self.y + self.dy)
    }
}
