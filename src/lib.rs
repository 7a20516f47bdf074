// src/lib.rs
//
// wiresketch: freehand strokes lifted into a turning 3D wireframe

pub mod config;
pub mod controllers;
pub mod draw;
pub mod error;
pub mod models;
pub mod render;
pub mod views;
