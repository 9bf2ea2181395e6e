//! Command-list execution against a framebuffer.
//!
//! This is the only place that knows the scene's bottom-up y axis has to
//! be flipped into the framebuffer's top-down rows. Filled primitives go
//! through an even-odd scanline fill; translucent fills alpha-blend per
//! pixel, opaque ones write spans.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::raster::plot_points;
use crate::scene::command::DrawCommand;

/// Rasterize a command list into the framebuffer, in order.
pub fn execute(commands: &[DrawCommand], fb: &mut Framebuffer) {
    for command in commands {
        match command {
            DrawCommand::Clear(color) => fb.clear(*color),
            DrawCommand::Points { points, size, color } => {
                let flipped: Vec<(i32, i32)> = points
                    .iter()
                    .map(|&(x, y)| (x, fb.height() as i32 - 1 - y))
                    .collect();
                plot_points(fb, &flipped, *size, *color);
            }
            DrawCommand::Polygon { vertices, color } => {
                fill_polygon(fb, &flip_vertices(fb, vertices), *color);
            }
            DrawCommand::Triangles { vertices, color } => {
                let flipped = flip_vertices(fb, vertices);
                for tri in flipped.chunks_exact(3) {
                    fill_polygon(fb, tri, *color);
                }
            }
            DrawCommand::TriangleFan { vertices, color } => {
                // The fans here are discs, so the rim alone is a convex
                // polygon; filling it once keeps translucent fills from
                // double-blending along shared triangle edges.
                if vertices.len() >= 3 {
                    fill_polygon(fb, &flip_vertices(fb, &vertices[1..]), *color);
                }
            }
            DrawCommand::GradientBand { y_bottom, y_top, bottom, top } => {
                fill_gradient_band(fb, *y_bottom, *y_top, *bottom, *top);
            }
        }
    }
}

/// Map scene-space vertices (bottom-up y) into framebuffer space.
fn flip_vertices(fb: &Framebuffer, vertices: &[Point]) -> Vec<Point> {
    let h = fb.height() as f32;
    vertices.iter().map(|v| Point::new(v.x, h - v.y)).collect()
}

/// Even-odd scanline fill over framebuffer-space vertices.
fn fill_polygon(fb: &mut Framebuffer, vertices: &[Point], color: Rgba) {
    if vertices.len() < 3 {
        return;
    }

    let width = fb.width() as i32;
    let height = fb.height() as i32;

    let y_min = vertices.iter().map(|v| v.y).fold(f32::INFINITY, f32::min);
    let y_max = vertices.iter().map(|v| v.y).fold(f32::NEG_INFINITY, f32::max);

    let row_start = (y_min.floor() as i32).max(0);
    let row_end = (y_max.ceil() as i32).min(height - 1);

    let mut crossings: Vec<f32> = Vec::with_capacity(vertices.len());

    for row in row_start..=row_end {
        let yc = row as f32 + 0.5;

        crossings.clear();
        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[(i + 1) % vertices.len()];
            // Half-open rule so a vertex on the scanline is counted once
            if (a.y <= yc && b.y > yc) || (b.y <= yc && a.y > yc) {
                let t = (yc - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_unstable_by(|p, q| p.total_cmp(q));

        for pair in crossings.chunks_exact(2) {
            let x_start = (pair[0].round() as i32).max(0);
            let x_end = (pair[1].round() as i32).min(width - 1);
            if x_start > x_end {
                continue;
            }

            if color.a == 255 {
                fb.fill_rect(x_start as u32, row as u32, (x_end - x_start + 1) as u32, 1, color);
            } else {
                for x in x_start..=x_end {
                    fb.blend_pixel(x as u32, row as u32, color);
                }
            }
        }
    }
}

/// Fill a full-width band interpolating bottom to top color by row.
fn fill_gradient_band(fb: &mut Framebuffer, y_bottom: f32, y_top: f32, bottom: Rgba, top: Rgba) {
    if y_top <= y_bottom {
        return;
    }

    let h = fb.height() as f32;
    let row_start = ((h - y_top).floor() as i32).max(0);
    let row_end = ((h - y_bottom).ceil() as i32 - 1).min(fb.height() as i32 - 1);

    for row in row_start..=row_end {
        let scene_y = h - (row as f32 + 0.5);
        let t = ((scene_y - y_bottom) / (y_top - y_bottom)).clamp(0.0, 1.0);
        fb.fill_rect(0, row as u32, fb.width(), 1, bottom.lerp(top, t));
    }
}
