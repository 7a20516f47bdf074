// src/models/wireframe.rs
// Lifts committed 2D strokes into a centered, scaled 3D wireframe

use crate::models::geometry::{BoundingBox, Point2D, Point3D};
use crate::models::stroke::Stroke;

/// Vertex index pair. Both indices come from the same source stroke.
pub type Edge = (usize, usize);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wireframe {
    pub vertices: Vec<Point3D>,
    pub edges: Vec<Edge>,
}

impl Wireframe {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }
}

/// Scale and center used to map stroke coordinates into model space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub scale_factor: f32,
    pub center_x: f32,
    pub center_y: f32,
}

impl Default for Normalization {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            center_x: 0.0,
            center_y: 0.0,
        }
    }
}

impl Normalization {
    /// Fits the box's larger side to `target_size`. A zero-extent box keeps
    /// unit scale.
    pub fn fit(bbox: &BoundingBox, target_size: f32) -> Self {
        let max_dimension = bbox.max_dimension();
        let scale_factor = if max_dimension > 0.0 {
            target_size / max_dimension
        } else {
            1.0
        };
        let (center_x, center_y) = bbox.center();

        Self {
            scale_factor,
            center_x,
            center_y,
        }
    }

    pub fn apply(&self, point: &Point2D) -> Point3D {
        Point3D::new(
            (point.x as f32 - self.center_x) * self.scale_factor,
            (point.y as f32 - self.center_y) * self.scale_factor,
            0.0,
        )
    }
}

/// Output of a lift: the wireframe plus the normalization that produced it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiftedModel {
    pub wireframe: Wireframe,
    pub normalization: Normalization,
}

/// Converts strokes into a wireframe whose largest dimension is `target_size`,
/// centered on the origin.
///
/// Strokes with fewer than two points are skipped entirely. Each remaining
/// stroke contributes its points as vertices and one edge per consecutive
/// pair; vertex indices are global across the whole wireframe, in input order.
/// With nothing to lift, the result is an empty wireframe with unit scale and
/// a zero center.
pub fn lift(strokes: &[Stroke], target_size: f32) -> LiftedModel {
    let qualifying = || strokes.iter().filter(|stroke| stroke.is_drawable());

    let Some(bbox) = BoundingBox::from_points(qualifying().flat_map(|s| s.points())) else {
        return LiftedModel::default();
    };
    let normalization = Normalization::fit(&bbox, target_size);

    let vertex_count = qualifying().map(Stroke::len).sum();
    let mut wireframe = Wireframe {
        vertices: Vec::with_capacity(vertex_count),
        edges: Vec::with_capacity(vertex_count),
    };

    for stroke in qualifying() {
        let offset = wireframe.vertices.len();
        wireframe
            .vertices
            .extend(stroke.points().iter().map(|p| normalization.apply(p)));
        wireframe
            .edges
            .extend((offset..offset + stroke.len() - 1).map(|i| (i, i + 1)));
    }

    LiftedModel {
        wireframe,
        normalization,
    }
}
