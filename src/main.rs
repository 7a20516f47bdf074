// src/main.rs
use nannou::prelude::*;
use tracing_subscriber::EnvFilter;

use wiresketch::{
    config::Config,
    controllers::{FramePacer, FrameStep, InputEvent, InputQueue, SketchSession},
    draw::NannouCanvas,
    render::FrameRenderer,
    views::Viewport,
};

struct Model {
    // Core components:
    session: SketchSession,
    input: InputQueue,
    pacer: FramePacer,

    // Rendering components:
    renderer: FrameRenderer,
    draw: nannou::Draw,
    viewport: Viewport,
}

fn main() {
    init_tracing();
    nannou::app(model).update(update).run();
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    // Escape goes through the input queue like every other quit
    app.set_exit_on_escape(false);

    // Create window
    app.new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .resizable(false)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_moved(mouse_moved)
        .key_pressed(key_pressed)
        .build()
        .expect("Failed to create window");

    let viewport = Viewport::new(config.window.width, config.window.height);
    tracing::info!(
        width = viewport.width,
        height = viewport.height,
        fps = config.timing.frame_rate,
        "Window ready"
    );

    Model {
        session: SketchSession::from_config(&config),
        input: InputQueue::new(),
        pacer: FramePacer::new(config.timing.frame_rate),
        renderer: FrameRenderer::from_config(&config),
        draw: nannou::Draw::new(),
        viewport,
    }
}

// ******************************* Input *******************************

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        let point = model.viewport.nannou_to_screen(app.mouse.position());
        model.input.push(InputEvent::PointerDown(point));
    }
}

fn mouse_released(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        let point = model.viewport.nannou_to_screen(app.mouse.position());
        model.input.push(InputEvent::PointerUp(point));
    }
}

fn mouse_moved(_app: &App, model: &mut Model, position: Point2) {
    let point = model.viewport.nannou_to_screen(position);
    model.input.push(InputEvent::PointerMove(point));
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::Escape {
        model.input.push(InputEvent::Quit);
    }
}

// ******************************* Frame *******************************

fn update(app: &App, model: &mut Model, update: Update) {
    // Between paced frames, view re-submits the previous frame's draw
    if !model.pacer.tick(update.since_last) {
        return;
    }

    let events = model.input.take_events();

    model.draw.reset();
    let mut canvas = NannouCanvas::new(&model.draw, model.viewport);

    match model.session.step(events, &model.renderer, &mut canvas) {
        Ok(FrameStep::Continue) => {}
        Ok(FrameStep::Exit) => {
            tracing::info!("Quit requested");
            app.quit();
        }
        Err(e) => {
            tracing::error!("Error in frame loop: {}", e);
            app.quit();
        }
    }
}

// Submit the frame drawn during update
fn view(app: &App, model: &Model, frame: Frame) {
    if let Err(e) = model.draw.to_frame(app, &frame) {
        tracing::error!("Failed to submit frame: {:?}", e);
        app.quit();
    }
}
