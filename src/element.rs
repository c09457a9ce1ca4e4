//! The element model: leaf shapes, the group composite, and the transform
//! contract they share.
//!
//! Each element owns its geometry outright and rewrites it in place when
//! transformed; nothing accumulates a matrix. Circles, lines and rects are
//! constrained constructors on `Ellipse`, `Polyline` and `Polygon` rather
//! than distinct types, so dispatch stays over a closed set of four.

use enum_dispatch::enum_dispatch;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::types::Point;

/// The capability set every element implements; there is no default behavior.
#[enum_dispatch]
pub trait Shape {
    /// The identifier this element was declared with, if any.
    fn id(&self) -> Option<&str>;

    /// Emit the element's primitives to the sink; never mutates.
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Shift all owned points by `delta`.
    fn translate(&mut self, delta: Point);

    /// Rotate about `origin` by `degrees`, clockwise-positive.
    fn rotate(&mut self, degrees: i32, origin: Point);

    /// Scale about `origin` by an integer `factor`.
    fn scale(&mut self, factor: i32, origin: Point);
}

/// Any node in the scene graph: a leaf shape or a group.
///
/// Cloning is deep; a clone owns fresh geometry all the way down.
#[enum_dispatch(Shape)]
#[derive(Debug, Clone)]
pub enum Element {
    Ellipse(Ellipse),
    Polyline(Polyline),
    Polygon(Polygon),
    Group(Group),
}

impl Element {
    /// Relabel, used when a reference instantiation declares its own id.
    pub(crate) fn set_id(&mut self, id: String) {
        match self {
            Element::Ellipse(e) => e.id = Some(id),
            Element::Polyline(e) => e.id = Some(id),
            Element::Polygon(e) => e.id = Some(id),
            Element::Group(e) => e.id = Some(id),
        }
    }
}

// ============================================================================
// Leaf shapes
// ============================================================================

/// An axis-aligned filled ellipse; `radius` is the semi-axis vector.
#[derive(Debug, Clone)]
pub struct Ellipse {
    pub id: Option<String>,
    pub fill: Color,
    pub center: Point,
    pub radius: Point,
}

impl Ellipse {
    pub fn new(center: Point, radius: Point, fill: Color) -> Self {
        Self { id: None, fill, center, radius }
    }

    /// Constrained constructor: a circle of radius `r`.
    pub fn circle(center: Point, r: i32, fill: Color) -> Self {
        Self::new(center, Point::new(r, r), fill)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Shape for Ellipse {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_ellipse(self.center, self.radius, self.fill);
    }

    fn translate(&mut self, delta: Point) {
        self.center = self.center.translate(delta);
    }

    fn rotate(&mut self, degrees: i32, origin: Point) {
        self.center = self.center.rotate_about(origin, degrees);
    }

    fn scale(&mut self, factor: i32, origin: Point) {
        // Center and radius scale separately: the center detours through
        // origin-relative space, the radius is a vector and scales in place.
        // The two steps stay composed; folding them together changes the
        // result for any pivot away from (0,0).
        let relative = self.center.translate(-origin);
        self.center = relative.scale_about(Point::ZERO, factor).translate(origin);
        self.radius = self.radius.scale_about(Point::ZERO, factor);
    }
}

/// An open run of stroked segments through `points` (at least two).
#[derive(Debug, Clone)]
pub struct Polyline {
    pub id: Option<String>,
    pub stroke: Color,
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>, stroke: Color) -> Self {
        Self { id: None, stroke, points }
    }

    /// Constrained constructor: a single segment.
    pub fn segment(p1: Point, p2: Point, stroke: Color) -> Self {
        Self::new(vec![p1, p2], stroke)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Shape for Polyline {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        for pair in self.points.windows(2) {
            canvas.draw_line(pair[0], pair[1], self.stroke);
        }
    }

    fn translate(&mut self, delta: Point) {
        for p in &mut self.points {
            *p = p.translate(delta);
        }
    }

    fn rotate(&mut self, degrees: i32, origin: Point) {
        for p in &mut self.points {
            *p = p.rotate_about(origin, degrees);
        }
    }

    fn scale(&mut self, factor: i32, origin: Point) {
        for p in &mut self.points {
            *p = p.scale_about(origin, factor);
        }
    }
}

/// A filled polygon; vertex order defines the winding.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub id: Option<String>,
    pub fill: Color,
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>, fill: Color) -> Self {
        Self { id: None, fill, points }
    }

    /// Constrained constructor: an axis-aligned rectangle.
    ///
    /// Bottom and right edges are inclusive, so the far corners sit at
    /// `x + width - 1` and `y + height - 1`.
    pub fn rect(x: i32, y: i32, width: i32, height: i32, fill: Color) -> Self {
        Self::new(
            vec![
                Point::new(x, y),
                Point::new(x + width - 1, y),
                Point::new(x + width - 1, y + height - 1),
                Point::new(x, y + height - 1),
            ],
            fill,
        )
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Shape for Polygon {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_polygon(&self.points, self.fill);
    }

    fn translate(&mut self, delta: Point) {
        for p in &mut self.points {
            *p = p.translate(delta);
        }
    }

    fn rotate(&mut self, degrees: i32, origin: Point) {
        for p in &mut self.points {
            *p = p.rotate_about(origin, degrees);
        }
    }

    fn scale(&mut self, factor: i32, origin: Point) {
        for p in &mut self.points {
            *p = p.scale_about(origin, factor);
        }
    }
}

// ============================================================================
// Group composite
// ============================================================================

/// A composite that exclusively owns its children and broadcasts every
/// operation to them in insertion order.
///
/// Insertion order is the z-order: later children paint over earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub id: Option<String>,
    pub children: Vec<Element>,
}

impl Group {
    pub fn new(children: Vec<Element>) -> Self {
        Self { id: None, children }
    }

    /// Append `element`; the group takes ownership.
    pub fn add_element(&mut self, element: Element) {
        self.children.push(element);
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Shape for Group {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        for child in &self.children {
            child.draw(canvas);
        }
    }

    fn translate(&mut self, delta: Point) {
        for child in &mut self.children {
            child.translate(delta);
        }
    }

    fn rotate(&mut self, degrees: i32, origin: Point) {
        for child in &mut self.children {
            child.rotate(degrees, origin);
        }
    }

    fn scale(&mut self, factor: i32, origin: Point) {
        for child in &mut self.children {
            child.scale(factor, origin);
        }
    }
}
