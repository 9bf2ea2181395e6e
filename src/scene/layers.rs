//! Scene layers.
//!
//! Each layer owns one slice of the fixed scene geometry and emits its
//! draw commands as a pure function of the animation state. The scene
//! holds the layers in back-to-front order, so layering is data rather
//! than a fixed call sequence.
//!
//! All coordinates live in the 800x600 bottom-up canvas of the original
//! scene; brightness-dependent colors darken as the sun sets.

use crate::anim::SceneState;
use crate::color::Rgba;
use crate::geometry::{Circle, Line, Point};
use crate::raster::{bresenham_points, dda_points, fan_vertices, midpoint_circle_points};
use crate::scene::command::DrawCommand;

/// A drawable slice of the scene.
pub trait Layer {
    /// Emit this layer's draw commands for the given state.
    fn emit(&self, state: &SceneState, out: &mut Vec<DrawCommand>);
}

/// Rectangle vertex list from two corners, counter-clockwise.
fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<Point> {
    vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]
}

/// Filled-disc command via the triangle-fan approximation.
fn disc(cx: f32, cy: f32, radius: f32, color: Rgba) -> DrawCommand {
    DrawCommand::TriangleFan {
        vertices: fan_vertices(Circle::from_coords(cx, cy, radius)),
        color,
    }
}

// ============================================================================
// Sky
// ============================================================================

/// Two-band gradient sky, dusk colors scaled by brightness.
pub struct Sky;

impl Layer for Sky {
    fn emit(&self, state: &SceneState, out: &mut Vec<DrawCommand>) {
        let b = state.sky_brightness;

        let top = Rgba::from_f32(0.0, 0.3 * b, 0.1 + 0.5 * b);
        let mid = Rgba::from_f32(b, 0.5 * b, 0.2 * b);
        let bottom = Rgba::from_f32(b, 0.7 * b, 0.3 * b);

        out.push(DrawCommand::GradientBand {
            y_bottom: 400.0,
            y_top: 600.0,
            bottom: mid,
            top,
        });
        out.push(DrawCommand::GradientBand {
            y_bottom: 250.0,
            y_top: 400.0,
            bottom,
            top: mid,
        });
    }
}

// ============================================================================
// Sun
// ============================================================================

/// Descending sun: translucent glow, filled body, midpoint-circle rim.
pub struct Sun;

impl Layer for Sun {
    fn emit(&self, state: &SceneState, out: &mut Vec<DrawCommand>) {
        let b = state.sky_brightness;

        out.push(disc(
            400.0,
            state.sun_y,
            state.sun_size + 20.0,
            Rgba::from_f32_alpha(1.0, 0.6, 0.2, 0.3 * b),
        ));
        out.push(disc(
            400.0,
            state.sun_y,
            state.sun_size,
            Rgba::from_f32(1.0, 0.8 * b + 0.2, 0.3 * b),
        ));
        out.push(DrawCommand::Points {
            points: midpoint_circle_points(
                400,
                state.sun_y.round() as i32,
                state.sun_size.round() as i32,
            ),
            size: 2,
            color: Rgba::from_f32(1.0, 0.5, 0.0),
        });
    }
}

// ============================================================================
// Buildings
// ============================================================================

/// City skyline: five facades, windows lighting up as dusk falls.
pub struct Buildings;

impl Layer for Buildings {
    fn emit(&self, state: &SceneState, out: &mut Vec<DrawCommand>) {
        let b = state.sky_brightness;

        let facades: [([f32; 4], Rgba); 5] = [
            ([50.0, 250.0, 120.0, 380.0], Rgba::from_f32(0.3 * b, 0.3 * b, 0.4 * b)),
            ([140.0, 250.0, 200.0, 420.0], Rgba::from_f32(0.2 * b, 0.25 * b, 0.35 * b)),
            ([220.0, 250.0, 280.0, 360.0], Rgba::from_f32(0.25 * b, 0.3 * b, 0.4 * b)),
            ([650.0, 250.0, 720.0, 400.0], Rgba::from_f32(0.3 * b, 0.35 * b, 0.45 * b)),
            ([540.0, 250.0, 630.0, 350.0], Rgba::from_f32(0.25 * b, 0.3 * b, 0.38 * b)),
        ];
        for ([x0, y0, x1, y1], color) in facades {
            out.push(DrawCommand::Polygon {
                vertices: rect(x0, y0, x1, y1),
                color,
            });
        }

        // Windows come on once dusk sets in
        if b < 0.7 {
            let warm = Rgba::from_f32(1.0, 1.0, 0.6);
            for i in 0..5 {
                for j in 0..3 {
                    out.push(disc(65.0 + j as f32 * 20.0, 270.0 + i as f32 * 20.0, 4.0, warm));
                }
            }

            let pale = Rgba::from_f32(1.0, 1.0, 0.5);
            for i in 0..7 {
                for j in 0..2 {
                    out.push(disc(155.0 + j as f32 * 25.0, 270.0 + i as f32 * 20.0, 4.0, pale));
                }
            }
        }
    }
}

// ============================================================================
// Control tower
// ============================================================================

/// Airport control tower with a night beacon.
pub struct ControlTower;

impl Layer for ControlTower {
    fn emit(&self, state: &SceneState, out: &mut Vec<DrawCommand>) {
        let b = state.sky_brightness;
        let d = 1.0 - b;

        out.push(DrawCommand::Polygon {
            vertices: rect(320.0, 250.0, 360.0, 320.0),
            color: Rgba::from_f32(0.5 * b, 0.5 * b, 0.5 * b),
        });

        // Cab flares slightly wider than the shaft
        out.push(DrawCommand::Polygon {
            vertices: vec![
                Point::new(310.0, 320.0),
                Point::new(370.0, 320.0),
                Point::new(365.0, 360.0),
                Point::new(315.0, 360.0),
            ],
            color: Rgba::from_f32(0.6 - 0.5 * d, 0.6 - 0.5 * d, 0.65 - 0.55 * d),
        });

        if b < 0.5 {
            out.push(disc(340.0, 370.0, 5.0, Rgba::RED));
        }
    }
}

// ============================================================================
// Airplane
// ============================================================================

/// The plane, translated to its animated position.
pub struct Airplane;

impl Airplane {
    fn translated(state: &SceneState, local: &[(f32, f32)]) -> Vec<Point> {
        local
            .iter()
            .map(|&(x, y)| Point::new(x, y).translated(state.plane_x, state.plane_y))
            .collect()
    }
}

impl Layer for Airplane {
    fn emit(&self, state: &SceneState, out: &mut Vec<DrawCommand>) {
        let hull = Rgba::from_f32(0.8, 0.8, 0.9);

        out.push(DrawCommand::Polygon {
            vertices: Self::translated(
                state,
                &[(0.0, 0.0), (60.0, 0.0), (70.0, 5.0), (70.0, 10.0), (0.0, 10.0)],
            ),
            color: hull,
        });
        out.push(DrawCommand::Triangles {
            vertices: Self::translated(state, &[(25.0, 5.0), (25.0, -15.0), (45.0, 5.0)]),
            color: hull,
        });
        out.push(DrawCommand::Triangles {
            vertices: Self::translated(state, &[(5.0, 10.0), (5.0, 20.0), (15.0, 10.0)]),
            color: hull,
        });

        let glass = Rgba::from_f32(0.3, 0.5, 0.7);
        for wx in [20.0, 30.0, 40.0, 50.0] {
            out.push(disc(state.plane_x + wx, state.plane_y + 7.0, 2.0, glass));
        }

        // Navigation lights once dusk sets in
        if state.sky_brightness < 0.6 {
            out.push(disc(state.plane_x + 25.0, state.plane_y - 15.0, 2.0, Rgba::RED));
            out.push(disc(state.plane_x + 70.0, state.plane_y + 7.0, 2.0, Rgba::GREEN));
        }
    }
}

// ============================================================================
// Runway
// ============================================================================

/// Runway slab with scan-converted markings and dusk edge lights.
pub struct Runway;

impl Layer for Runway {
    fn emit(&self, state: &SceneState, out: &mut Vec<DrawCommand>) {
        let b = state.sky_brightness;

        out.push(DrawCommand::Polygon {
            vertices: vec![
                Point::new(0.0, 150.0),
                Point::new(800.0, 180.0),
                Point::new(800.0, 250.0),
                Point::new(0.0, 250.0),
            ],
            color: Rgba::from_f32(0.3 * b, 0.3 * b, 0.3 * b),
        });

        // Edge stripes, DDA-rasterized
        for stripe in [
            Line::from_coords(0.0, 150.0, 800.0, 180.0),
            Line::from_coords(0.0, 250.0, 800.0, 250.0),
        ] {
            out.push(DrawCommand::Points {
                points: dda_points(stripe),
                size: 1,
                color: Rgba::WHITE,
            });
        }

        // Centerline dashes, Bresenham-rasterized
        for i in (0..800).step_by(60) {
            out.push(DrawCommand::Points {
                points: bresenham_points(i, 200, i + 30, 205),
                size: 2,
                color: Rgba::WHITE,
            });
        }

        if b < 0.6 {
            let lamp = Rgba::from_f32(1.0, 1.0, 0.8);
            for i in (50..800).step_by(80) {
                out.push(disc(i as f32, 160.0, 3.0, lamp));
                out.push(disc(i as f32 + 5.0, 240.0, 3.0, lamp));
            }
        }
    }
}

// ============================================================================
// Ground and banner
// ============================================================================

/// Grass strip below the runway.
pub struct Ground;

impl Layer for Ground {
    fn emit(&self, state: &SceneState, out: &mut Vec<DrawCommand>) {
        let b = state.sky_brightness;
        out.push(DrawCommand::Polygon {
            vertices: rect(0.0, 50.0, 800.0, 150.0),
            color: Rgba::from_f32(0.2 * b, 0.4 * b, 0.2 * b),
        });
    }
}

/// White caption strip along the bottom edge.
///
/// Glyph rendering belongs to the presentation surface; this layer only
/// reserves the strip.
pub struct Banner;

impl Layer for Banner {
    fn emit(&self, _state: &SceneState, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::Polygon {
            vertices: rect(0.0, 0.0, 800.0, 50.0),
            color: Rgba::WHITE,
        });
    }
}
