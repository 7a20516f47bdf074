// src/views/transform.rs
//
// Rotation of the lifted wireframe about the vertical (Y) axis

use std::f64::consts::TAU;

use crate::models::Point3D;

/// Rotates every point about the Y axis by `angle` radians.
/// Output index `i` corresponds to input index `i`; `y` passes through untouched.
pub fn rotate_y(points: &[Point3D], angle: f32) -> Vec<Point3D> {
    let (sin_a, cos_a) = angle.sin_cos();
    points
        .iter()
        .map(|p| Point3D {
            x: p.x * cos_a - p.z * sin_a,
            y: p.y,
            z: p.x * sin_a + p.z * cos_a,
        })
        .collect()
}

/// Accumulated turntable angle.
///
/// The angle is kept in f64 and never wrapped, so a fixed step keeps turning
/// the model for far longer than any session lasts. It is reduced to one turn
/// before narrowing to the f32 that `rotate_y` works in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    angle: f64,
    step: f64,
}

impl Rotation {
    pub fn new(step: f64) -> Self {
        Self { angle: 0.0, step }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[cfg(test)]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The angle within `[0, TAU)`, ready for `rotate_y`
    pub fn frame_angle(&self) -> f32 {
        self.angle.rem_euclid(TAU) as f32
    }

    /// Advance by one frame's worth of rotation
    pub fn advance(&mut self) {
        self.angle += self.step;
    }

    pub fn reset(&mut self) {
        self.angle = 0.0;
    }
}
