// src/views/projection.rs
//
// Orthographic projection of model space onto the viewport

use nannou::prelude::*;

use crate::models::{Point2D, Point3D};

/// Fixed-size drawing area in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f32 {
        self.width as f32 / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height as f32 / 2.0
    }

    /// Integer pixel center, shared by the projection and the button layout
    pub fn center(&self) -> Point2D {
        Point2D {
            x: (self.width / 2) as i32,
            y: (self.height / 2) as i32,
        }
    }

    /// Drops `z` and offsets by the viewport center, so the model origin lands
    /// on `center()`. No perspective divide.
    pub fn project(&self, point: &Point3D) -> Point2D {
        let center = self.center();
        Point2D {
            x: center.x + point.x.round() as i32,
            y: center.y + point.y.round() as i32,
        }
    }

    pub fn project_all(&self, points: &[Point3D]) -> Vec<Point2D> {
        points.iter().map(|p| self.project(p)).collect()
    }

    /// Screen space (top-left origin, y down) to nannou window space
    /// (centered origin, y up)
    pub fn screen_to_nannou(&self, x: f32, y: f32) -> Point2 {
        pt2(x - self.half_width(), self.half_height() - y)
    }

    /// Nannou window space back to the nearest screen pixel
    pub fn nannou_to_screen(&self, point: Point2) -> Point2D {
        Point2D {
            x: (point.x + self.half_width()).round() as i32,
            y: (self.half_height() - point.y).round() as i32,
        }
    }
}
