// src/models/stroke.rs
// A freehand stroke: the ordered points captured between pointer-down and pointer-up

use crate::models::geometry::Point2D;

/// Fewest points a stroke needs before it describes a line
pub const MIN_STROKE_POINTS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stroke {
    points: Vec<Point2D>,
}

impl Stroke {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn starting_at(point: Point2D) -> Self {
        Self {
            points: vec![point],
        }
    }

    pub fn push(&mut self, point: Point2D) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Strokes below two points are never committed, lifted or drawn.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= MIN_STROKE_POINTS
    }
}

impl FromIterator<(i32, i32)> for Stroke {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().map(Point2D::from).collect(),
        }
    }
}
