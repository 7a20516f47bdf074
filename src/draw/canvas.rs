// src/draw/canvas.rs
//
// Screen-space drawing primitives. Everything above this layer works in
// top-left-origin, y-down pixel coordinates; NannouCanvas converts to
// nannou's centered, y-up space at the last moment.

use nannou::prelude::*;

use crate::draw::DrawParams;
use crate::models::Point2D;
use crate::views::{ScreenRect, Viewport};

pub trait Canvas {
    fn clear(&mut self, color: Rgb<f32>);

    /// Open polyline through `points` in order
    fn polyline(&mut self, points: &[Point2D], params: &DrawParams);

    fn line(&mut self, start: Point2D, end: Point2D, params: &DrawParams);

    fn rect(&mut self, rect: &ScreenRect, color: Rgb<f32>);

    /// Text centered on `center`
    fn text(&mut self, label: &str, center: (f32, f32), color: Rgb<f32>, font_size: u32);
}

pub struct NannouCanvas<'a> {
    draw: &'a Draw,
    viewport: Viewport,
}

impl<'a> NannouCanvas<'a> {
    pub fn new(draw: &'a Draw, viewport: Viewport) -> Self {
        Self { draw, viewport }
    }

    fn point_to_nannou(&self, point: Point2D) -> Point2 {
        self.viewport.screen_to_nannou(point.x as f32, point.y as f32)
    }
}

impl Canvas for NannouCanvas<'_> {
    fn clear(&mut self, color: Rgb<f32>) {
        self.draw.background().color(color);
    }

    fn polyline(&mut self, points: &[Point2D], params: &DrawParams) {
        let points: Vec<Point2> = points.iter().map(|p| self.point_to_nannou(*p)).collect();
        self.draw
            .polyline()
            .weight(params.stroke_weight)
            .color(params.color)
            .points(points);
    }

    fn line(&mut self, start: Point2D, end: Point2D, params: &DrawParams) {
        self.draw
            .line()
            .points(self.point_to_nannou(start), self.point_to_nannou(end))
            .stroke_weight(params.stroke_weight)
            .color(params.color);
    }

    fn rect(&mut self, rect: &ScreenRect, color: Rgb<f32>) {
        let (cx, cy) = rect.center();
        let center = self.viewport.screen_to_nannou(cx, cy);
        self.draw
            .rect()
            .xy(center)
            .w_h(rect.width as f32, rect.height as f32)
            .color(color);
    }

    fn text(&mut self, label: &str, center: (f32, f32), color: Rgb<f32>, font_size: u32) {
        let center = self.viewport.screen_to_nannou(center.0, center.1);
        self.draw
            .text(label)
            .color(color)
            .font_size(font_size)
            .xy(center);
    }
}
