//! The rasterizer boundary: the primitive draw operations elements emit.
//!
//! Pixel production lives behind the `Canvas` trait. The crate ships a
//! `Recorder` sink that captures primitives in draw order; raster backends
//! replay that list, and tests assert on it directly.

use crate::color::Color;
use crate::types::Point;

/// Sink for the three primitives the element tree reduces to.
pub trait Canvas {
    /// Fill an axis-aligned ellipse given its center and semi-axis vector.
    fn draw_ellipse(&mut self, center: Point, radius: Point, color: Color);

    /// Stroke a line segment between two points.
    fn draw_line(&mut self, p1: Point, p2: Point, color: Color);

    /// Fill a polygon; vertex order defines the winding.
    fn draw_polygon(&mut self, points: &[Point], color: Color);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    Ellipse {
        center: Point,
        radius: Point,
        color: Color,
    },
    Line {
        p1: Point,
        p2: Point,
        color: Color,
    },
    Polygon {
        points: Vec<Point>,
        color: Color,
    },
}

/// A `Canvas` that records every primitive in draw order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub primitives: Vec<Primitive>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }
}

impl Canvas for Recorder {
    fn draw_ellipse(&mut self, center: Point, radius: Point, color: Color) {
        self.primitives.push(Primitive::Ellipse { center, radius, color });
    }

    fn draw_line(&mut self, p1: Point, p2: Point, color: Color) {
        self.primitives.push(Primitive::Line { p1, p2, color });
    }

    fn draw_polygon(&mut self, points: &[Point], color: Color) {
        self.primitives.push(Primitive::Polygon {
            points: points.to_vec(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_draw_order() {
        let mut rec = Recorder::new();
        rec.draw_line(Point::new(0, 0), Point::new(1, 1), Color::BLACK);
        rec.draw_ellipse(Point::new(5, 5), Point::new(2, 3), Color::WHITE);

        assert_eq!(rec.primitives.len(), 2);
        assert!(matches!(rec.primitives[0], Primitive::Line { .. }));
        assert!(matches!(rec.primitives[1], Primitive::Ellipse { .. }));
    }

    #[test]
    fn recorder_copies_polygon_vertices() {
        let pts = [Point::new(0, 0), Point::new(4, 0), Point::new(4, 4)];
        let mut rec = Recorder::new();
        rec.draw_polygon(&pts, Color::BLACK);

        match &rec.primitives[0] {
            Primitive::Polygon { points, .. } => assert_eq!(points.as_slice(), &pts),
            other => panic!("expected polygon, got {other:?}"),
        }
    }
}
