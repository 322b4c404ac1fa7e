/// Orthographic projection and the line-segment drawing surface
use nalgebra::Point2;

use crate::geometry::{Cube, Vertex};

/// A point on the 2D canvas
pub type CanvasPoint = Point2<f64>;

/// Orthographic projection that drops z and scales x and y uniformly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub scale: f64,
}

impl Projection {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    pub fn project(&self, point: &Vertex) -> CanvasPoint {
        Point2::new(point.x * self.scale, point.y * self.scale)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(0.8)
    }
}

/// RGB stroke color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    /// CSS hex notation, e.g. `#000000`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Stroke style applied to every edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub thickness: f64,
}

impl Stroke {
    pub const EDGE: Stroke = Stroke {
        color: Color::BLACK,
        thickness: 2.0,
    };
}

/// A 2D line draw command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: CanvasPoint,
    pub end: CanvasPoint,
    pub stroke: Stroke,
}

/// Display surface that accepts line segments.
///
/// Frontends implement this over whatever they actually draw on.
pub trait LineSink {
    /// Remove everything drawn so far
    fn clear(&mut self);

    fn draw_segment(&mut self, segment: &Segment);
}

impl LineSink for Vec<Segment> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn draw_segment(&mut self, segment: &Segment) {
        self.push(*segment);
    }
}

/// Emit one segment per cube edge, in edge-list order.
pub fn render<S: LineSink + ?Sized>(cube: &Cube, projection: &Projection, sink: &mut S) {
    for (start, end) in cube.edge_endpoints() {
        sink.draw_segment(&Segment {
            start: projection.project(&start),
            end: projection.project(&end),
            stroke: Stroke::EDGE,
        });
    }
}
