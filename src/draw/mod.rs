// src/draw/mod.rs
// The drawing surface abstraction and its nannou backing

pub mod canvas;

pub use canvas::{Canvas, NannouCanvas};

use nannou::prelude::*;

use crate::config::RgbBytes;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawParams {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
}

/// Converts a config byte triple into a nannou color
pub fn color_from_bytes([r, g, b]: RgbBytes) -> Rgb<f32> {
    rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}
