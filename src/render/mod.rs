// src/render/mod.rs
// Per-frame rendering of the session onto a Canvas

pub mod frame_renderer;

pub use frame_renderer::FrameRenderer;

use nannou::prelude::*;

use crate::config::StyleConfig;
use crate::draw::color_from_bytes;

/// Resolved colors for a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Rgb<f32>,
    pub stroke: Rgb<f32>,
    pub wireframe: Rgb<f32>,
    pub button: Rgb<f32>,
    pub button_hover: Rgb<f32>,
    pub label: Rgb<f32>,
}

impl From<&StyleConfig> for Palette {
    fn from(style: &StyleConfig) -> Self {
        Self {
            background: color_from_bytes(style.background),
            stroke: color_from_bytes(style.stroke),
            wireframe: color_from_bytes(style.wireframe),
            button: color_from_bytes(style.button),
            button_hover: color_from_bytes(style.button_hover),
            label: color_from_bytes(style.label),
        }
    }
}
