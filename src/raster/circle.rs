//! Circle rasterization and fan approximation.

use crate::geometry::{Circle, Point};

/// Rasterize a circle outline with the midpoint algorithm.
///
/// Walks the second octant with an integer decision variable and mirrors
/// each position into the other seven octants. No trigonometry, no
/// floating point. Points that coincide under mirroring (on the axes and
/// the diagonal) are emitted once, so radius 0 yields exactly the center
/// point.
#[must_use]
pub fn midpoint_circle_points(cx: i32, cy: i32, radius: i32) -> Vec<(i32, i32)> {
    if radius <= 0 {
        return vec![(cx, cy)];
    }

    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;
    let mut points = Vec::with_capacity((radius as usize) * 8);

    while x <= y {
        emit_octants(cx, cy, x, y, &mut points);

        if d < 0 {
            // Midpoint inside the circle: keep y, error moves by 2x + 3
            d += 2 * x + 3;
        } else {
            // Midpoint crossed: step inward
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }

    points
}

/// Mirror one octant position into all eight, skipping coincident points.
fn emit_octants(cx: i32, cy: i32, x: i32, y: i32, out: &mut Vec<(i32, i32)>) {
    out.push((cx + x, cy + y));
    if x != 0 {
        out.push((cx - x, cy + y));
    }
    if y != 0 {
        out.push((cx + x, cy - y));
        if x != 0 {
            out.push((cx - x, cy - y));
        }
    }
    if x != y {
        out.push((cx + y, cy + x));
        if y != 0 {
            out.push((cx - y, cy + x));
        }
        if x != 0 {
            out.push((cx + y, cy - x));
            if y != 0 {
                out.push((cx - y, cy - x));
            }
        }
    }
}

/// Build the triangle-fan vertex list approximating a filled disc.
///
/// The center vertex followed by 361 perimeter vertices sampled at
/// 1-degree increments (the closing vertex repeats the first so the fan
/// seals). This is a polygon-approximation convenience for sinks that
/// fill fans, not a rasterizer.
#[must_use]
pub fn fan_vertices(circle: Circle) -> Vec<Point> {
    let mut vertices = Vec::with_capacity(362);
    vertices.push(circle.center);

    for i in 0..=360u32 {
        let angle = (i as f32).to_radians();
        vertices.push(Point::new(
            circle.center.x + circle.radius * angle.cos(),
            circle.center.y + circle.radius * angle.sin(),
        ));
    }

    vertices
}
