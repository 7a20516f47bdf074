// src/models/geometry.rs
// Point types shared by the sketching, lifting and projection stages

/// A screen-space point: top-left origin, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point2D {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A model-space point. Freshly lifted points are planar (`z == 0`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[cfg(test)]
    pub fn approx_eq(&self, other: &Point3D, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

/// Axis-aligned extent of a set of screen points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl BoundingBox {
    /// Returns `None` for an empty point set.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2D>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let seed = BoundingBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        Some(points.fold(seed, |bbox, p| BoundingBox {
            min_x: bbox.min_x.min(p.x),
            max_x: bbox.max_x.max(p.x),
            min_y: bbox.min_y.min(p.y),
            max_y: bbox.max_y.max(p.y),
        }))
    }

    pub fn width(&self) -> f32 {
        (self.max_x - self.min_x) as f32
    }

    pub fn height(&self) -> f32 {
        (self.max_y - self.min_y) as f32
    }

    pub fn max_dimension(&self) -> f32 {
        self.width().max(self.height())
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.min_x as f32 + self.max_x as f32) / 2.0,
            (self.min_y as f32 + self.max_y as f32) / 2.0,
        )
    }
}
