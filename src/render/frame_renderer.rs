// src/render/frame_renderer.rs
//
// Draws one frame: the raw strokes while drawing, the turning wireframe while
// rotating, and the two buttons on top in either mode.

use crate::config::Config;
use crate::controllers::{Mode, SketchSession};
use crate::draw::{Canvas, DrawParams};
use crate::error::{FrameError, FrameResult};
use crate::models::Point2D;
use crate::render::Palette;
use crate::views::{rotate_y, Viewport};

pub struct FrameRenderer {
    viewport: Viewport,
    palette: Palette,
    stroke_weight: f32,
    label_font_size: u32,
}

impl FrameRenderer {
    pub fn new(
        viewport: Viewport,
        palette: Palette,
        stroke_weight: f32,
        label_font_size: u32,
    ) -> Self {
        Self {
            viewport,
            palette,
            stroke_weight,
            label_font_size,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Viewport::new(config.window.width, config.window.height),
            Palette::from(&config.style),
            config.style.stroke_weight,
            config.style.label_font_size,
        )
    }

    pub fn render<C: Canvas>(&self, canvas: &mut C, session: &SketchSession) -> FrameResult<()> {
        canvas.clear(self.palette.background);

        match session.mode() {
            Mode::Drawing => self.draw_strokes(canvas, session),
            Mode::Rotating => self.draw_wireframe(canvas, session)?,
        }

        self.draw_buttons(canvas, session);
        Ok(())
    }

    fn draw_strokes<C: Canvas>(&self, canvas: &mut C, session: &SketchSession) {
        let params = DrawParams {
            color: self.palette.stroke,
            stroke_weight: self.stroke_weight,
        };

        let current = session.current_stroke();
        session
            .strokes()
            .iter()
            .chain(std::iter::once(current))
            .filter(|stroke| stroke.is_drawable())
            .for_each(|stroke| canvas.polyline(stroke.points(), &params));
    }

    fn draw_wireframe<C: Canvas>(
        &self,
        canvas: &mut C,
        session: &SketchSession,
    ) -> FrameResult<()> {
        let wireframe = session.wireframe();
        let rotated = rotate_y(&wireframe.vertices, session.frame_angle());
        let projected = self.viewport.project_all(&rotated);

        let params = DrawParams {
            color: self.palette.wireframe,
            stroke_weight: self.stroke_weight,
        };

        for &(from, to) in &wireframe.edges {
            let (start, end) = resolve_edge(&projected, from, to)?;
            canvas.line(start, end, &params);
        }
        Ok(())
    }

    fn draw_buttons<C: Canvas>(&self, canvas: &mut C, session: &SketchSession) {
        let pointer = session.pointer();
        for button in session.layout().buttons() {
            let color = if button.rect.contains(pointer) {
                self.palette.button_hover
            } else {
                self.palette.button
            };
            canvas.rect(&button.rect, color);
            canvas.text(
                button.kind.label(),
                button.rect.center(),
                self.palette.label,
                self.label_font_size,
            );
        }
    }
}

fn resolve_edge(
    projected: &[Point2D],
    from: usize,
    to: usize,
) -> FrameResult<(Point2D, Point2D)> {
    match (projected.get(from), projected.get(to)) {
        (Some(start), Some(end)) => Ok((*start, *end)),
        _ => Err(FrameError::EdgeOutOfRange {
            from,
            to,
            vertex_count: projected.len(),
        }),
    }
}
