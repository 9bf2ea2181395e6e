//! Scan-conversion rasterizers.
//!
//! Pure functions that turn geometric primitives into discrete pixel
//! coordinates, plus the point-plotting helper the command executor uses
//! to land them in a framebuffer.
//!
//! # Algorithms
//!
//! - **DDA line**: floating-point incremental line rasterization
//! - **Bresenham line**: integer-only line rasterization with an error term
//! - **Midpoint circle**: integer circle rasterization with 8-way symmetry
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae
//!   with a digital plotter."

mod circle;
mod line;

pub use circle::{fan_vertices, midpoint_circle_points};
pub use line::{bresenham_points, dda_points};

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Plot a batch of rasterized points at the given point size.
///
/// Size 1 writes single pixels; larger sizes write `size`x`size` blocks
/// anchored so the block stays centered on the point, matching how a
/// point-size state on a vertex sink fattens point primitives.
pub fn plot_points(fb: &mut Framebuffer, points: &[(i32, i32)], size: u32, color: Rgba) {
    let size = size.max(1) as i32;
    let offset = size / 2;

    for &(px, py) in points {
        for dy in 0..size {
            for dx in 0..size {
                let x = px - offset + dx;
                let y = py - offset + dy;
                if x >= 0 && y >= 0 {
                    fb.set_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}
