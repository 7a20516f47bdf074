// src/controllers/sketch_controller.rs
//
// SketchSession owns everything the user builds: committed strokes, the stroke
// being drawn, the lifted wireframe and the turntable angle. It decides what
// each input event means in the current mode, and `step` runs one frame.

use crate::config::Config;
use crate::controllers::input::InputEvent;
use crate::draw::Canvas;
use crate::error::{FrameError, FrameResult};
use crate::models::{lift, LiftedModel, Normalization, Point2D, Stroke, Wireframe};
use crate::render::FrameRenderer;
use crate::views::{ButtonKind, ButtonLayout, Rotation, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Drawing,
    Rotating,
}

/// Whether the app loop should keep going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    Continue,
    Exit,
}

#[derive(Debug, Clone)]
pub struct SketchSession {
    mode: Mode,
    strokes: Vec<Stroke>,
    current: Stroke,
    stroke_in_progress: bool,
    lifted: LiftedModel,
    rotation: Rotation,
    pointer: Point2D,
    layout: ButtonLayout,
    target_size: f32,
}

impl SketchSession {
    pub fn new(layout: ButtonLayout, target_size: f32, rotation_step: f64) -> Self {
        Self {
            mode: Mode::Drawing,
            strokes: Vec::new(),
            current: Stroke::new(),
            stroke_in_progress: false,
            lifted: LiftedModel::default(),
            rotation: Rotation::new(rotation_step),
            pointer: Point2D::default(),
            layout,
            target_size,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let viewport = Viewport::new(config.window.width, config.window.height);
        Self::new(
            ButtonLayout::new(viewport, &config.buttons),
            config.model.target_size,
            config.rotation.step,
        )
    }

    /// Runs one frame: applies `events` in order, renders, then advances the
    /// rotation if the frame was drawn in rotate mode. A quit event stops the
    /// frame before anything is drawn.
    pub fn step<C, I>(
        &mut self,
        events: I,
        renderer: &FrameRenderer,
        canvas: &mut C,
    ) -> FrameResult<FrameStep>
    where
        C: Canvas,
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.handle_event(event) == FrameStep::Exit {
                return Ok(FrameStep::Exit);
            }
        }

        if self.mode == Mode::Rotating && !self.rotation.angle().is_finite() {
            return Err(FrameError::NonFiniteAngle(self.rotation.angle()));
        }

        renderer.render(canvas, self)?;

        if self.mode == Mode::Rotating {
            self.rotation.advance();
        }
        Ok(FrameStep::Continue)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> FrameStep {
        match event {
            InputEvent::PointerDown(point) => self.pointer_down(point),
            InputEvent::PointerMove(point) => self.pointer_move(point),
            InputEvent::PointerUp(point) => self.pointer_up(point),
            InputEvent::Quit => return FrameStep::Exit,
        }
        FrameStep::Continue
    }

    pub fn pointer_down(&mut self, point: Point2D) {
        self.pointer = point;
        match self.layout.hit(point) {
            Some(ButtonKind::Rotate) => self.start_rotation(),
            Some(ButtonKind::Reset) => self.reset(),
            None if self.mode == Mode::Drawing => {
                self.current = Stroke::starting_at(point);
                self.stroke_in_progress = true;
            }
            None => {}
        }
    }

    /// Appends to the stroke in progress once per move event. A pointer held
    /// still adds no points, unlike sampling the held button every frame.
    pub fn pointer_move(&mut self, point: Point2D) {
        self.pointer = point;
        if self.mode == Mode::Drawing && self.stroke_in_progress {
            self.current.push(point);
        }
    }

    pub fn pointer_up(&mut self, point: Point2D) {
        self.pointer = point;
        if self.mode == Mode::Drawing && self.stroke_in_progress {
            self.commit_current();
        }
        self.current = Stroke::new();
        self.stroke_in_progress = false;
    }

    /// Commits any usable in-progress stroke, lifts everything committed and
    /// switches to rotate mode. Does nothing while already rotating, and stays
    /// in drawing mode when there is nothing committed to lift.
    pub fn start_rotation(&mut self) {
        if self.mode == Mode::Rotating {
            return;
        }

        self.commit_current();
        self.current = Stroke::new();
        self.stroke_in_progress = false;

        if self.strokes.is_empty() {
            tracing::debug!("Rotate pressed with no committed strokes");
            return;
        }

        self.lifted = lift(&self.strokes, self.target_size);
        self.mode = Mode::Rotating;

        let normalization = self.lifted.normalization;
        tracing::info!(
            strokes = self.strokes.len(),
            vertices = self.lifted.wireframe.vertices.len(),
            edges = self.lifted.wireframe.edges.len(),
            scale = normalization.scale_factor,
            center_x = normalization.center_x,
            center_y = normalization.center_y,
            "Entered rotate mode"
        );
        if self.lifted.wireframe.is_empty() {
            tracing::warn!("Every committed stroke was degenerate; rotating an empty wireframe");
        }
    }

    /// Clears all strokes and the wireframe and returns to drawing mode
    pub fn reset(&mut self) {
        self.strokes.clear();
        self.current = Stroke::new();
        self.stroke_in_progress = false;
        self.lifted.wireframe.clear();
        self.lifted.normalization = Normalization::default();
        self.rotation.reset();
        self.mode = Mode::Drawing;
        tracing::info!("Sketch reset");
    }

    fn commit_current(&mut self) {
        if self.current.is_drawable() {
            let stroke = std::mem::take(&mut self.current);
            tracing::debug!(points = stroke.len(), "Committed stroke");
            self.strokes.push(stroke);
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn current_stroke(&self) -> &Stroke {
        &self.current
    }

    pub fn is_stroke_in_progress(&self) -> bool {
        self.stroke_in_progress
    }

    pub fn wireframe(&self) -> &Wireframe {
        &self.lifted.wireframe
    }

    pub fn normalization(&self) -> Normalization {
        self.lifted.normalization
    }

    pub fn angle(&self) -> f64 {
        self.rotation.angle()
    }

    /// Current angle reduced to one turn, for this frame's rotation
    pub fn frame_angle(&self) -> f32 {
        self.rotation.frame_angle()
    }

    pub fn pointer(&self) -> Point2D {
        self.pointer
    }

    pub fn layout(&self) -> &ButtonLayout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ButtonConfig;
    use crate::draw::canvas::recording::RecordingCanvas;

    const ROTATE: Point2D = Point2D::new(500, 570);
    const RESET: Point2D = Point2D::new(300, 570);

    fn session() -> SketchSession {
        let layout = ButtonLayout::new(Viewport::new(800, 600), &ButtonConfig::default());
        SketchSession::new(layout, 200.0, 0.02)
    }

    fn renderer() -> FrameRenderer {
        FrameRenderer::from_config(&Config::default())
    }

    /// Presses at the first point, drags through the rest, releases at the last
    fn draw_stroke(session: &mut SketchSession, points: &[(i32, i32)]) {
        let mut points = points.iter().map(|&p| Point2D::from(p));
        let Some(first) = points.next() else {
            return;
        };
        session.pointer_down(first);
        let mut last = first;
        for point in points {
            session.pointer_move(point);
            last = point;
        }
        session.pointer_up(last);
    }

    mod drawing_tests {
        use super::*;

        #[test]
        fn test_initial_state() {
            let session = session();
            assert_eq!(session.mode(), Mode::Drawing);
            assert!(session.strokes().is_empty());
            assert!(session.current_stroke().is_empty());
            assert!(!session.is_stroke_in_progress());
            assert_eq!(session.angle(), 0.0);
        }

        #[test]
        fn test_drag_commits_stroke() {
            let mut session = session();
            draw_stroke(&mut session, &[(10, 10), (20, 15), (30, 40)]);

            assert_eq!(session.strokes().len(), 1);
            assert_eq!(
                session.strokes()[0].points(),
                &[
                    Point2D::new(10, 10),
                    Point2D::new(20, 15),
                    Point2D::new(30, 40)
                ]
            );
            assert!(session.current_stroke().is_empty());
            assert!(!session.is_stroke_in_progress());
        }

        #[test]
        fn test_single_click_is_discarded() {
            let mut session = session();
            draw_stroke(&mut session, &[(100, 100)]);
            assert!(session.strokes().is_empty());
            assert!(session.current_stroke().is_empty());
        }

        #[test]
        fn test_move_without_press_is_ignored() {
            let mut session = session();
            session.pointer_move(Point2D::new(5, 5));
            session.pointer_move(Point2D::new(6, 6));
            assert!(session.current_stroke().is_empty());
            assert_eq!(session.pointer(), Point2D::new(6, 6));
        }

        #[test]
        fn test_stationary_pointer_adds_no_points() {
            let mut session = session();
            session.pointer_down(Point2D::new(40, 40));
            session.pointer_up(Point2D::new(40, 40));
            assert_eq!(session.current_stroke().len(), 0);
            assert!(session.strokes().is_empty());

            session.pointer_down(Point2D::new(40, 40));
            assert_eq!(session.current_stroke().len(), 1);
        }

        #[test]
        fn test_stroke_in_progress_until_release() {
            let mut session = session();
            session.pointer_down(Point2D::new(1, 1));
            session.pointer_move(Point2D::new(2, 2));
            assert!(session.is_stroke_in_progress());
            assert_eq!(session.current_stroke().len(), 2);
            assert!(session.strokes().is_empty());
        }
    }

    mod rotate_tests {
        use super::*;

        #[test]
        fn test_rotate_with_nothing_stays_drawing() {
            let mut session = session();
            session.pointer_down(ROTATE);
            assert_eq!(session.mode(), Mode::Drawing);

            // A lone click in progress is not enough either
            session.pointer_down(Point2D::new(50, 50));
            session.pointer_down(ROTATE);
            assert_eq!(session.mode(), Mode::Drawing);
            assert!(session.strokes().is_empty());
            assert!(!session.is_stroke_in_progress());
        }

        #[test]
        fn test_rotate_lifts_committed_strokes() {
            let mut session = session();
            draw_stroke(&mut session, &[(0, 0), (10, 0)]);
            draw_stroke(&mut session, &[(0, 10), (10, 10)]);
            session.pointer_down(ROTATE);

            assert_eq!(session.mode(), Mode::Rotating);
            assert_eq!(session.wireframe().vertices.len(), 4);
            assert_eq!(session.wireframe().edges, vec![(0, 1), (2, 3)]);
            assert_eq!(session.normalization().scale_factor, 20.0);
        }

        #[test]
        fn test_rotate_commits_in_progress_stroke() {
            let mut session = session();
            session.pointer_down(Point2D::new(0, 0));
            session.pointer_move(Point2D::new(100, 100));
            session.pointer_down(ROTATE);

            assert_eq!(session.mode(), Mode::Rotating);
            assert_eq!(session.strokes().len(), 1);
            assert!(session.current_stroke().is_empty());
            assert_eq!(session.normalization().scale_factor, 2.0);
            assert_eq!(session.wireframe().edges, vec![(0, 1)]);
        }

        #[test]
        fn test_rotate_while_rotating_is_noop() {
            let mut session = session();
            draw_stroke(&mut session, &[(0, 0), (100, 100)]);
            session.pointer_down(ROTATE);
            let before = session.wireframe().clone();

            session.pointer_down(ROTATE);
            assert_eq!(session.mode(), Mode::Rotating);
            assert_eq!(session.wireframe(), &before);
        }

        #[test]
        fn test_canvas_input_ignored_while_rotating() {
            let mut session = session();
            draw_stroke(&mut session, &[(0, 0), (100, 100)]);
            session.pointer_down(ROTATE);

            draw_stroke(&mut session, &[(5, 5), (50, 60), (70, 80)]);
            assert_eq!(session.strokes().len(), 1);
            assert!(session.current_stroke().is_empty());
            assert_eq!(session.wireframe().vertices.len(), 2);
        }
    }

    mod reset_tests {
        use super::*;

        #[test]
        fn test_reset_while_rotating() {
            let mut session = session();
            let renderer = renderer();
            let mut canvas = RecordingCanvas::new();

            draw_stroke(&mut session, &[(0, 0), (10, 0)]);
            draw_stroke(&mut session, &[(0, 10), (10, 10)]);
            session.pointer_down(ROTATE);
            for _ in 0..5 {
                session.step(Vec::<InputEvent>::new(), &renderer, &mut canvas).unwrap();
            }
            assert!(session.angle() > 0.0);

            session.pointer_down(RESET);
            assert_eq!(session.mode(), Mode::Drawing);
            assert!(session.strokes().is_empty());
            assert!(session.current_stroke().is_empty());
            assert!(session.wireframe().is_empty());
            assert!(session.wireframe().edges.is_empty());
            assert_eq!(session.angle(), 0.0);

            let mut canvas = RecordingCanvas::new();
            session.step(Vec::<InputEvent>::new(), &renderer, &mut canvas).unwrap();
            assert!(canvas.polylines().is_empty());
            assert!(canvas.lines().is_empty());
        }

        #[test]
        fn test_reset_while_drawing_discards_stroke_in_progress() {
            let mut session = session();
            draw_stroke(&mut session, &[(0, 0), (10, 10)]);
            session.pointer_down(Point2D::new(20, 20));
            session.pointer_move(Point2D::new(30, 30));

            session.pointer_down(RESET);
            assert!(session.strokes().is_empty());
            assert!(!session.is_stroke_in_progress());

            // The old stroke's release no longer commits anything
            session.pointer_move(Point2D::new(40, 40));
            session.pointer_up(Point2D::new(40, 40));
            assert!(session.strokes().is_empty());
        }
    }

    mod step_tests {
        use super::*;

        #[test]
        fn test_events_apply_in_arrival_order() {
            let mut session = session();
            let mut canvas = RecordingCanvas::new();
            let events = vec![
                InputEvent::PointerDown(Point2D::new(0, 0)),
                InputEvent::PointerMove(Point2D::new(100, 100)),
                InputEvent::PointerUp(Point2D::new(100, 100)),
                InputEvent::PointerDown(ROTATE),
            ];

            let step = session.step(events, &renderer(), &mut canvas).unwrap();
            assert_eq!(step, FrameStep::Continue);
            assert_eq!(session.mode(), Mode::Rotating);
            // The rotating frame was drawn, then the angle advanced
            assert_eq!(canvas.lines().len(), 1);
            assert!((session.angle() - 0.02).abs() < 1e-9);
        }

        #[test]
        fn test_angle_only_advances_while_rotating() {
            let mut session = session();
            let renderer = renderer();
            let mut canvas = RecordingCanvas::new();

            for _ in 0..3 {
                session.step(Vec::<InputEvent>::new(), &renderer, &mut canvas).unwrap();
            }
            assert_eq!(session.angle(), 0.0);

            draw_stroke(&mut session, &[(0, 0), (100, 100)]);
            session.pointer_down(ROTATE);
            for _ in 0..3 {
                session.step(Vec::<InputEvent>::new(), &renderer, &mut canvas).unwrap();
            }
            assert!((session.angle() - 0.06).abs() < 1e-9);
        }

        #[test]
        fn test_quit_stops_before_rendering() {
            let mut session = session();
            let mut canvas = RecordingCanvas::new();
            let events = vec![
                InputEvent::Quit,
                InputEvent::PointerDown(Point2D::new(1, 1)),
            ];

            let step = session.step(events, &renderer(), &mut canvas).unwrap();
            assert_eq!(step, FrameStep::Exit);
            assert!(canvas.ops.is_empty());
            assert!(!session.is_stroke_in_progress());
        }

        #[test]
        fn test_degenerate_rotation_renders_nothing() {
            let mut session = session();
            // Force a committed stroke the lifter will skip
            session.strokes.push(Stroke::starting_at(Point2D::new(9, 9)));
            session.pointer_down(ROTATE);
            assert_eq!(session.mode(), Mode::Rotating);
            assert!(session.wireframe().is_empty());

            let mut canvas = RecordingCanvas::new();
            let step = session.step(Vec::<InputEvent>::new(), &renderer(), &mut canvas).unwrap();
            assert_eq!(step, FrameStep::Continue);
            assert!(canvas.lines().is_empty());
        }

        #[test]
        fn test_non_finite_angle_is_a_frame_error() {
            let layout = ButtonLayout::new(Viewport::new(800, 600), &ButtonConfig::default());
            let mut session = SketchSession::new(layout, 200.0, f64::INFINITY);
            let renderer = renderer();
            let mut canvas = RecordingCanvas::new();

            draw_stroke(&mut session, &[(0, 0), (100, 100)]);
            session.pointer_down(ROTATE);
            session.step(Vec::<InputEvent>::new(), &renderer, &mut canvas).unwrap();

            let result = session.step(Vec::<InputEvent>::new(), &renderer, &mut canvas);
            assert!(matches!(result, Err(FrameError::NonFiniteAngle(_))));
        }
    }
}
