pub mod geometry;
pub mod stroke;
pub mod wireframe;

pub use geometry::{BoundingBox, Point2D, Point3D};
pub use stroke::Stroke;
pub use wireframe::{lift, Edge, LiftedModel, Normalization, Wireframe};
