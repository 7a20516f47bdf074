// src/views/mod.rs

pub mod button;
pub mod projection;
pub mod transform;

pub use button::{Button, ButtonKind, ButtonLayout, ScreenRect};
pub use projection::Viewport;
pub use transform::{rotate_y, Rotation};
