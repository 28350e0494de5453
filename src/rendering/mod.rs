use macroquad::prelude::*;
use crate::application::{Rgb, ScoreSink, Surface};

/// Height of the score strip drawn under the playfield
pub const SCORE_STRIP_HEIGHT: f32 = 40.0;
const SCORE_FONT_SIZE: u16 = 24;

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

/// Draws straight into the macroquad frame. Clearing paints the backdrop color.
pub struct MacroquadSurface {
    backdrop: Color,
}

impl MacroquadSurface {
    pub fn new(backdrop: Rgb) -> Self {
        Self {
            backdrop: to_color(backdrop),
        }
    }
}

impl Surface for MacroquadSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        draw_rectangle(x, y, width, height, self.backdrop);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        draw_rectangle(x, y, width, height, to_color(color));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        draw_circle(x, y, radius, to_color(color));
    }
}

/// Score readout centered in the strip below the playfield
pub struct ScoreBanner {
    top: f32,
    width: f32,
    background: Color,
    text_color: Color,
}

impl ScoreBanner {
    pub fn new(playfield_width: f32, playfield_height: f32, background: Rgb, text: Rgb) -> Self {
        Self {
            top: playfield_height,
            width: playfield_width,
            background: to_color(background),
            text_color: to_color(text),
        }
    }
}

impl ScoreSink for ScoreBanner {
    fn show_score(&mut self, text: &str) {
        draw_rectangle(0.0, self.top, self.width, SCORE_STRIP_HEIGHT, self.background);

        let size = measure_text(text, None, SCORE_FONT_SIZE, 1.0);
        draw_text(
            text,
            (self.width - size.width) / 2.0,
            self.top + (SCORE_STRIP_HEIGHT + size.height) / 2.0,
            SCORE_FONT_SIZE as f32,
            self.text_color,
        );
    }
}

/// Overlay shown while the simulation is paused
pub fn draw_paused_label(playfield_width: f32, playfield_height: f32) {
    let text = "PAUSED";
    let size = measure_text(text, None, 48, 1.0);
    draw_rectangle(
        0.0,
        0.0,
        playfield_width,
        playfield_height,
        Color::from_rgba(0, 0, 0, 90),
    );
    draw_text(
        text,
        (playfield_width - size.width) / 2.0,
        (playfield_height + size.height) / 2.0,
        48.0,
        WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color_is_opaque() {
        let color = to_color(Rgb::new(255, 0, 51));
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.2);
        assert_eq!(color.a, 1.0);
    }
}
