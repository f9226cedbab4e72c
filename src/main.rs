// What you SEE:
// • A blue locus field over a faint grid, recomputed every frame from the points.
// • Left-drag a dot to move it, left-drag empty space to pan, scroll to zoom at the cursor.
// • Right-click adds a point, Shift+click removes one, Ctrl+click makes it the gold master.
// • Click a label, type "x,y", press Enter to place a point exactly (Esc cancels).
// • RESTART, MODE and the K / N sliders sit in the corners. ESC (when not typing) quits.

mod camera;
mod config;
mod draw;
mod error;
mod input;
mod interaction;
mod locus;
mod points;
mod polygon;
mod render;
mod scene;
mod types;
mod ui;
mod uniforms;

use anyhow::Context;
use clap::Parser;
use config::Settings;
use draw::Drawer;
use input::InputTracker;
use interaction::Interaction;
use render::{CpuBackend, LocusBackend};
use scene::Scene;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use types::FrameBuffer;
use ui::UiLayout;
use uniforms::FrameUniforms;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::parse();

    /* --- Window + shading backend ---
       Visual: window opens; the first frame shows the default triangle's locus. */
    let (w, h) = (settings.width as usize, settings.height as usize);
    let mut drawer = Drawer::new("Locus Visualizer: Interactive Mode", w, h, settings.fps, settings.wheel_scale)
        .context("opening the window")?;
    let mut backend = CpuBackend::new(settings.threads).context("starting the shading thread pool")?;
    info!(width = w, height = h, backend = backend.name(), threads = backend.threads(), "locus visualizer started");

    /* --- State owned by the loop ---
       Visual: three points A, B, C around the origin, k = 3, MODE: ALL. */
    let mut scene = Scene::new(w, h);
    let mut interaction = Interaction::new();
    let mut tracker = InputTracker::new();
    let mut screen = FrameBuffer::new(w, h);

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() {
        let now = Instant::now();

        /* 1) Follow window resizes; controls hug the corners. */
        let (w, h) = drawer.size();
        screen.resize(w, h);
        let layout = UiLayout::for_viewport(w, h);

        /* 2) Inputs -> scene edits. ESC quits unless it is cancelling an edit. */
        let input = tracker.next(drawer.poll());
        let was_editing = interaction.is_editing();
        interaction.step(&mut scene, &input, &layout);
        if input.escape_pressed && !was_editing {
            break;
        }

        /* 3) Snapshot the scene and shade every pixel from it. */
        let uniforms = FrameUniforms::build(&scene, w, h);
        backend.render(&uniforms, &mut screen)?;

        /* 4) Grid, points, labels and controls on top. */
        ui::draw_world_grid(&mut screen, &scene);
        ui::draw_points(&mut screen, &scene, interaction.gesture());
        ui::draw_controls(&mut screen, &scene, &layout, &hud_fps_text);

        /* 5) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 6) FPS counter (log + HUD once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            debug!(fps, points = scene.points.len(), k = scene.k, "frame rate");
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!("window closed");
    Ok(())
}
