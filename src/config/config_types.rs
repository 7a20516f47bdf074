// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

/// An RGB byte triple as written in config.toml: `[r, g, b]`
pub type RgbBytes = [u8; 3];

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Draw & Rotate Wireframe".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub background: RgbBytes,
    pub stroke: RgbBytes,
    pub wireframe: RgbBytes,
    pub button: RgbBytes,
    pub button_hover: RgbBytes,
    pub label: RgbBytes,
    pub stroke_weight: f32,
    pub label_font_size: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: [0, 0, 0],
            stroke: [255, 255, 255],
            wireframe: [0, 255, 0],
            button: [50, 50, 50],
            button_hover: [100, 100, 100],
            label: [255, 255, 255],
            stroke_weight: 2.0,
            label_font_size: 24,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RotationConfig {
    pub step: f64, // radians added per rendered frame while rotating
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self { step: 0.02 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    pub target_size: f32, // largest dimension of the lifted wireframe
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self { target_size: 200.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub frame_rate: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { frame_rate: 60.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ButtonConfig {
    pub width: i32,
    pub height: i32,
    pub gap: i32,           // horizontal distance from the viewport center
    pub bottom_offset: i32, // distance from the bottom edge to the button tops
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 40,
            gap: 50,
            bottom_offset: 50,
        }
    }
}
