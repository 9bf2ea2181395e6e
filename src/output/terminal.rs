//! Terminal output encoder.
//!
//! Renders a framebuffer to ANSI half-block text: each character cell
//! carries two vertically stacked pixels via ▀ with independent 24-bit
//! foreground (top) and background (bottom) colors.

use crate::framebuffer::Framebuffer;
use std::fmt::Write as FmtWrite;

/// Half-block terminal encoder.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    width: Option<u32>,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// Create a new encoder with the default 100-column width.
    #[must_use]
    pub fn new() -> Self {
        Self { width: None }
    }

    /// Set the target width in character columns.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Character columns and rows the framebuffer will occupy.
    ///
    /// Aspect ratio is preserved; each character row holds two pixel rows.
    #[must_use]
    pub fn dimensions(&self, fb: &Framebuffer) -> (u32, u32) {
        let cols = self.width.unwrap_or(100).min(fb.width());
        let pixel_rows = (cols as f32 * fb.height() as f32 / fb.width() as f32).round() as u32;
        // Round up to even so the last half-block row is complete
        let pixel_rows = (pixel_rows + 1) & !1;
        (cols, pixel_rows / 2)
    }

    /// Render a framebuffer to a half-block string.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        let (cols, rows) = self.dimensions(fb);
        let pixel_rows = rows * 2;

        let scale_x = fb.width() as f32 / cols as f32;
        let scale_y = fb.height() as f32 / pixel_rows as f32;

        let mut output = String::with_capacity((cols as usize * 40 + 8) * rows as usize);

        for row in 0..rows {
            for col in 0..cols {
                let top = sample(fb, col, row * 2, scale_x, scale_y);
                let bottom = sample(fb, col, row * 2 + 1, scale_x, scale_y);

                let _ = write!(
                    output,
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                    top.0, top.1, top.2, bottom.0, bottom.1, bottom.2
                );
            }
            output.push_str("\x1b[0m\n");
        }

        output
    }
}

/// Nearest-neighbor sample at a scaled position.
fn sample(fb: &Framebuffer, col: u32, pixel_row: u32, scale_x: f32, scale_y: f32) -> (u8, u8, u8) {
    let fx = ((col as f32 + 0.5) * scale_x).min(fb.width() as f32 - 1.0);
    let fy = ((pixel_row as f32 + 0.5) * scale_y).min(fb.height() as f32 - 1.0);

    fb.get_pixel(fx as u32, fy as u32)
        .map_or((0, 0, 0), |px| (px.r, px.g, px.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_render_contains_ansi_and_half_blocks() {
        let mut fb = Framebuffer::new(20, 20).expect("framebuffer creation should succeed");
        fb.clear(Rgba::RED);

        let output = TerminalEncoder::new().width(10).render(&fb);

        assert!(output.contains("\x1b[38;2;255;0;0m"));
        assert!(output.contains("\x1b[48;2;255;0;0m"));
        assert!(output.contains('▀'));
        assert!(output.contains("\x1b[0m"));
    }

    #[test]
    fn test_dimensions_preserve_aspect() {
        let fb = Framebuffer::new(800, 600).expect("framebuffer creation should succeed");
        let (cols, rows) = TerminalEncoder::new().width(100).dimensions(&fb);

        assert_eq!(cols, 100);
        // 100 columns at 800x600 aspect -> 75 pixel rows -> 38 char rows
        assert_eq!(rows, 38);
    }

    #[test]
    fn test_line_count_matches_dimensions() {
        let fb = Framebuffer::new(80, 40).expect("framebuffer creation should succeed");
        let encoder = TerminalEncoder::new().width(40);
        let (_, rows) = encoder.dimensions(&fb);

        let output = encoder.render(&fb);
        assert_eq!(output.lines().count(), rows as usize);
    }

    #[test]
    fn test_top_bottom_sampling_differs() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        // Top half white, bottom half black
        fb.fill_rect(0, 0, 10, 5, Rgba::WHITE);
        fb.fill_rect(0, 5, 10, 5, Rgba::BLACK);

        let output = TerminalEncoder::new().width(10).render(&fb);
        assert!(output.contains("\x1b[38;2;255;255;255m"));
        assert!(output.contains("\x1b[48;2;0;0;0m"));
    }
}
