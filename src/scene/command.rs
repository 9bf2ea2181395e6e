//! Draw commands accepted by the presentation sink.
//!
//! Layers compose the frame as a list of these commands; the executor
//! rasterizes the list into a framebuffer. Vertex coordinates are in the
//! scene's bottom-up 800x600 canvas; only the executor knows about the
//! framebuffer's top-down rows.

use crate::color::Rgba;
use crate::geometry::Point;

/// One command to the presentation sink.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the frame to a solid color.
    Clear(Rgba),
    /// Plot a batch of pre-rasterized points at an integer point size.
    Points {
        /// Pixel coordinates, scene space.
        points: Vec<(i32, i32)>,
        /// Point size; 2 fattens each point to a 2x2 block.
        size: u32,
        /// Point color.
        color: Rgba,
    },
    /// Fill a convex polygon.
    Polygon {
        /// Polygon vertices in order.
        vertices: Vec<Point>,
        /// Fill color.
        color: Rgba,
    },
    /// Fill independent triangles (each consecutive vertex triple).
    Triangles {
        /// Vertices, three per triangle.
        vertices: Vec<Point>,
        /// Fill color.
        color: Rgba,
    },
    /// Fill a triangle fan (center vertex followed by the perimeter).
    TriangleFan {
        /// Fan vertices: center first, then the rim.
        vertices: Vec<Point>,
        /// Fill color; translucent fills alpha-blend over the frame.
        color: Rgba,
    },
    /// Fill a full-width horizontal band with a vertical color gradient.
    GradientBand {
        /// Bottom edge of the band (scene y).
        y_bottom: f32,
        /// Top edge of the band (scene y).
        y_top: f32,
        /// Color at the bottom edge.
        bottom: Rgba,
        /// Color at the top edge.
        top: Rgba,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_compare_by_value() {
        let a = DrawCommand::Points {
            points: vec![(1, 2)],
            size: 2,
            color: Rgba::WHITE,
        };
        let b = DrawCommand::Points {
            points: vec![(1, 2)],
            size: 2,
            color: Rgba::WHITE,
        };
        assert_eq!(a, b);

        let c = DrawCommand::Clear(Rgba::BLACK);
        assert_ne!(a, c);
    }
}
