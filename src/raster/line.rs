//! Line rasterization.
//!
//! Two scan-conversion variants: a floating-point digital differential
//! analyzer parameterized by the dominant axis, and Bresenham's
//! integer-only algorithm. Both return the ordered pixel sequence from
//! start to end rather than writing pixels, so callers can route the
//! output through whatever sink they drive.

use crate::geometry::Line;

/// Rasterize a line segment with the digital differential analyzer.
///
/// The step count is the dominant-axis extent `max(|dx|, |dy|)` kept as a
/// floating value; per-step increments are `dx/steps` and `dy/steps`, and
/// each accumulated position is rounded to the nearest pixel.
///
/// A degenerate segment (start == end) yields the single rounded point.
#[must_use]
pub fn dda_points(line: Line) -> Vec<(i32, i32)> {
    let dx = line.end.x - line.start.x;
    let dy = line.end.y - line.start.y;
    let steps = dx.abs().max(dy.abs());

    // Coincident endpoints: steps would be zero and the increments
    // undefined. Emit the one point and stop.
    if steps == 0.0 {
        return vec![line.start.rounded()];
    }

    let x_inc = dx / steps;
    let y_inc = dy / steps;

    let mut x = line.start.x;
    let mut y = line.start.y;
    let count = steps.floor() as i32;

    let mut points = Vec::with_capacity((count + 1) as usize);
    for _ in 0..=count {
        points.push((x.round() as i32, y.round() as i32));
        x += x_inc;
        y += y_inc;
    }

    points
}

/// Rasterize a line segment with Bresenham's integer algorithm.
///
/// Uses only integer arithmetic. Step directions cover all four octant
/// sign combinations; the error term `dx - dy` decides which axis
/// advances. Each emitted point is 8-connected to its predecessor, and
/// both endpoints appear exactly once — endpoint equality is the sole
/// exit condition.
#[must_use]
pub fn bresenham_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = x0;
    let mut y = y0;
    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);

    loop {
        points.push((x, y));

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_dda_horizontal() {
        let pts = dda_points(Line::from_coords(0.0, 5.0, 4.0, 5.0));
        assert_eq!(pts, vec![(0, 5), (1, 5), (2, 5), (3, 5), (4, 5)]);
    }

    #[test]
    fn test_dda_vertical() {
        let pts = dda_points(Line::from_coords(3.0, 0.0, 3.0, 3.0));
        assert_eq!(pts, vec![(3, 0), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn test_dda_diagonal() {
        let pts = dda_points(Line::from_coords(0.0, 0.0, 3.0, 3.0));
        assert_eq!(pts, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_dda_degenerate_segment_single_point() {
        let p = Point::new(12.4, 7.6);
        let pts = dda_points(Line::new(p, p));
        assert_eq!(pts, vec![(12, 8)]);
    }

    #[test]
    fn test_dda_shallow_slope_spans_dominant_axis() {
        let pts = dda_points(Line::from_coords(0.0, 150.0, 800.0, 180.0));
        assert_eq!(pts.len(), 801);
        assert_eq!(pts[0], (0, 150));
        assert_eq!(pts[800], (800, 180));
    }

    #[test]
    fn test_bresenham_endpoints_present() {
        let pts = bresenham_points(0, 200, 30, 205);
        assert_eq!(*pts.first().expect("non-empty"), (0, 200));
        assert_eq!(*pts.last().expect("non-empty"), (30, 205));
    }

    #[test]
    fn test_bresenham_degenerate_segment_single_point() {
        assert_eq!(bresenham_points(7, 7, 7, 7), vec![(7, 7)]);
    }

    #[test]
    fn test_bresenham_all_octants_reach_target() {
        for &(x1, y1) in &[(10, 4), (4, 10), (-10, 4), (-4, 10), (10, -4), (4, -10), (-10, -4), (-4, -10)]
        {
            let pts = bresenham_points(0, 0, x1, y1);
            assert_eq!(*pts.first().expect("non-empty"), (0, 0));
            assert_eq!(*pts.last().expect("non-empty"), (x1, y1));
        }
    }

    #[test]
    fn test_bresenham_eight_connectivity() {
        let pts = bresenham_points(-5, 3, 20, -11);
        for pair in pts.windows(2) {
            let cheb = (pair[1].0 - pair[0].0).abs().max((pair[1].1 - pair[0].1).abs());
            assert_eq!(cheb, 1, "step from {:?} to {:?} is not 8-connected", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_bresenham_point_count_matches_dominant_axis() {
        let pts = bresenham_points(0, 0, 30, 5);
        assert_eq!(pts.len(), 31);
    }
}
