// src/views/button.rs
//
// The two static on-screen buttons and their hit-testing

use crate::config::ButtonConfig;
use crate::models::Point2D;
use crate::views::projection::Viewport;

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Half-open: the right and bottom edges are outside the rectangle.
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.left
            && point.x < self.left + self.width
            && point.y >= self.top
            && point.y < self.top + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.left as f32 + self.width as f32 / 2.0,
            self.top as f32 + self.height as f32 / 2.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Rotate,
    Reset,
}

impl ButtonKind {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonKind::Rotate => "Rotate",
            ButtonKind::Reset => "Reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub kind: ButtonKind,
    pub rect: ScreenRect,
}

/// Button rectangles, computed once from the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLayout {
    pub rotate: Button,
    pub reset: Button,
}

impl ButtonLayout {
    /// Rotate sits right of center, Reset mirrors it on the left, both
    /// `bottom_offset` pixels above the bottom edge.
    pub fn new(viewport: Viewport, config: &ButtonConfig) -> Self {
        let center_x = viewport.center().x;
        let top = viewport.height as i32 - config.bottom_offset;

        Self {
            rotate: Button {
                kind: ButtonKind::Rotate,
                rect: ScreenRect::new(center_x + config.gap, top, config.width, config.height),
            },
            reset: Button {
                kind: ButtonKind::Reset,
                rect: ScreenRect::new(
                    center_x - config.gap - config.width,
                    top,
                    config.width,
                    config.height,
                ),
            },
        }
    }

    /// Which button, if any, lies under `point`. Rotate is tested first.
    pub fn hit(&self, point: Point2D) -> Option<ButtonKind> {
        [self.rotate, self.reset]
            .into_iter()
            .find(|button| button.rect.contains(point))
            .map(|button| button.kind)
    }

    /// Buttons in draw order
    pub fn buttons(&self) -> [Button; 2] {
        [self.reset, self.rotate]
    }
}
