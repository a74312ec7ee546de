//! [`Surface`] over a ratatui braille canvas.

use crate::balloons::surface::{Rgb, Surface};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::canvas::{Circle, Context, Line as CanvasLine},
};

/// Radius step between the rings used to fake a filled disc.
const FILL_RING_STEP: f64 = 3.0;

/// Adapter from top-left canvas coordinates to ratatui's bottom-left ones.
pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    canvas_height: f64,
    /// Canvas units covered by one terminal column, for centering text.
    column_width: f64,
    /// Labels take the color of the disc painted just before them.
    last_fill: Option<Color>,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>, canvas_height: f64, column_width: f64) -> Self {
        Self {
            ctx,
            canvas_height,
            column_width,
            last_fill: None,
        }
    }

    fn flip(&self, y: f64) -> f64 {
        self.canvas_height - y
    }
}

/// Terminal color for an ink color. Black ink becomes the terminal's default
/// foreground so outlines stay visible on dark themes.
pub fn ink_color(rgb: Rgb) -> Color {
    if rgb == Rgb::BLACK {
        Color::Reset
    } else {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn clear_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
        // Every frame paints into a blank grid; only forget the label background.
        self.last_fill = None;
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb) {
        let color = ink_color(color);
        let y = self.flip(y);
        let mut ring = radius;
        while ring > 0.0 {
            self.ctx.draw(&Circle {
                x,
                y,
                radius: ring,
                color,
            });
            ring -= FILL_RING_STEP;
        }
        self.last_fill = Some(color);
    }

    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb) {
        let y = self.flip(y);
        self.ctx.draw(&Circle {
            x,
            y,
            radius,
            color: ink_color(color),
        });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb) {
        let (y1, y2) = (self.flip(y1), self.flip(y2));
        self.ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color: ink_color(color),
        });
    }

    fn text(&mut self, x: f64, y: f64, text: &str, color: Rgb) {
        let half_width = text.chars().count() as f64 * self.column_width / 2.0;
        let style = match self.last_fill {
            Some(bg) => Style::default().fg(Color::Black).bg(bg),
            None => Style::default().fg(ink_color(color)),
        };
        let y = self.flip(y);
        self.ctx.print(
            x - half_width,
            y,
            Line::styled(text.to_string(), style.add_modifier(Modifier::BOLD)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_ink_uses_default_foreground() {
        assert_eq!(ink_color(Rgb::BLACK), Color::Reset);
    }

    #[test]
    fn test_palette_ink_is_true_color() {
        assert_eq!(ink_color(Rgb(0xFF, 0x6B, 0x6B)), Color::Rgb(0xFF, 0x6B, 0x6B));
    }
}
