// src/controllers/mod.rs

pub mod input;
pub mod pacing;
pub mod sketch_controller;

pub use input::{InputEvent, InputQueue};
pub use pacing::FramePacer;
pub use sketch_controller::{FrameStep, Mode, SketchSession};
