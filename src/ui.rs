// UI chrome: where the controls sit, and everything drawn on top of the locus.
// Visual expectation:
// - faint world grid with brighter axes,
// - white point dots (the master gold with a ring), "A: (x, y)" labels,
// - help panel top-left, RESTART top-right, K slider + MODE bottom-left, N slider bottom-right.

use crate::draw::{draw_circle_outline, draw_line, draw_text, fill_circle, fill_rect, rgb, text_width};
use crate::interaction::Gesture;
use crate::scene::Scene;
use crate::types::{EvalMode, FrameBuffer};
use glam::Vec2;

pub const WHITE: u32 = rgb(255, 255, 255);
pub const RAYWHITE: u32 = rgb(245, 245, 245);
pub const GRAY: u32 = rgb(130, 130, 130);
pub const DARKGRAY: u32 = rgb(80, 80, 80);
pub const GOLD: u32 = rgb(255, 203, 0);
pub const YELLOW: u32 = rgb(253, 249, 0);
pub const GREEN: u32 = rgb(0, 228, 48);
pub const RED: u32 = rgb(230, 41, 55);
pub const SKYBLUE: u32 = rgb(102, 191, 255);
pub const DARKBLUE: u32 = rgb(0, 82, 172);
pub const MAROON: u32 = rgb(190, 33, 55);
pub const ORANGE: u32 = rgb(255, 161, 0);
pub const BLACK: u32 = rgb(0, 0, 0);

/// Pointer distance (screen px) that counts as clicking a point.
pub const HIT_RADIUS: f32 = 20.0;

const GRID_STEP: f32 = 50.0;
const GRID_LINES: i32 = 100; // each side of the origin
const AXIS_EXTENT: f32 = 10_000.0;

/// Axis-aligned screen rectangle; contains its top/left edges but not bottom/right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    /// Horizontal position of `x` across the rect, 0 at the left edge, 1 at the right.
    pub fn fraction_x(&self, x: f32) -> f32 {
        (x - self.x) / self.w
    }

    fn fill(&self, fb: &mut FrameBuffer, color: u32, alpha: f32) {
        fill_rect(fb, self.x as i32, self.y as i32, self.w as i32, self.h as i32, color, alpha);
    }
}

/// Clickable label area next to a point projected at `screen`.
pub fn label_rect(screen: Vec2) -> Rect {
    Rect::new(screen.x + 5.0, screen.y - 30.0, 150.0, 25.0)
}

/// Whether the pointer at `mouse` is on the point projected at `screen`.
pub fn hits_point(mouse: Vec2, screen: Vec2) -> bool {
    mouse.distance_squared(screen) <= HIT_RADIUS * HIT_RADIUS
}

/// Control rectangles for the current viewport size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiLayout {
    pub restart: Rect,
    pub mode: Rect,
    pub k_slider: Rect,
    pub n_slider: Rect,
}

impl UiLayout {
    pub fn for_viewport(width: usize, height: usize) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self {
            restart: Rect::new(w - 140.0, 20.0, 120.0, 40.0),
            mode: Rect::new(240.0, h - 40.0, 160.0, 25.0),
            k_slider: Rect::new(20.0, h - 40.0, 200.0, 20.0),
            n_slider: Rect::new(w - 220.0, h - 40.0, 200.0, 20.0),
        }
    }

    /// True when the pointer is over any control (world gestures are ignored there).
    pub fn contains(&self, p: Vec2) -> bool {
        [self.restart, self.mode, self.k_slider, self.n_slider]
            .iter()
            .any(|r| r.contains(p))
    }
}

/* ---------------------------------- drawing ---------------------------------- */

/// Grid + axes in world space, projected through the camera.
pub fn draw_world_grid(fb: &mut FrameBuffer, scene: &Scene) {
    let cam = &scene.camera;
    let extent = GRID_LINES as f32 * GRID_STEP;
    let (w, h) = (fb.width as f32, fb.height as f32);

    for i in -GRID_LINES..=GRID_LINES {
        let c = i as f32 * GRID_STEP;
        let a = cam.world_to_screen(Vec2::new(c, -extent));
        let b = cam.world_to_screen(Vec2::new(c, extent));
        if a.x >= 0.0 && a.x < w {
            draw_line(fb, a.x as i32, clip(a.y, h), a.x as i32, clip(b.y, h), GRAY, 0.2);
        }
        let a = cam.world_to_screen(Vec2::new(-extent, c));
        let b = cam.world_to_screen(Vec2::new(extent, c));
        if a.y >= 0.0 && a.y < h {
            draw_line(fb, clip(a.x, w), a.y as i32, clip(b.x, w), a.y as i32, GRAY, 0.2);
        }
    }

    // Main axes, 2 px wide on screen
    let x0 = cam.world_to_screen(Vec2::new(-AXIS_EXTENT, 0.0));
    let x1 = cam.world_to_screen(Vec2::new(AXIS_EXTENT, 0.0));
    let y0 = cam.world_to_screen(Vec2::new(0.0, -AXIS_EXTENT));
    let y1 = cam.world_to_screen(Vec2::new(0.0, AXIS_EXTENT));
    for t in 0..2 {
        if x0.y >= -2.0 && x0.y < h {
            let y = x0.y as i32 + t;
            draw_line(fb, clip(x0.x, w), y, clip(x1.x, w), y, RAYWHITE, 0.5);
        }
        if y0.x >= -2.0 && y0.x < w {
            let x = y0.x as i32 + t;
            draw_line(fb, x, clip(y0.y, h), x, clip(y1.y, h), RAYWHITE, 0.5);
        }
    }
}

/// Keep a projected coordinate within a pixel of the screen so line spans stay short.
fn clip(v: f32, max: f32) -> i32 {
    v.clamp(-1.0, max) as i32
}

/// Point dots, master highlight and coordinate labels (or the edit field).
pub fn draw_points(fb: &mut FrameBuffer, scene: &Scene, gesture: &Gesture) {
    let last = scene.points.len().saturating_sub(1);
    for (i, p) in scene.points.iter().enumerate() {
        let s = scene.camera.world_to_screen(p.pos);
        let (sx, sy) = (s.x as i32, s.y as i32);
        let is_master = scene.mode == EvalMode::Single && i == last;

        fill_circle(fb, sx, sy, 5, if is_master { GOLD } else { WHITE });
        if is_master {
            draw_circle_outline(fb, sx, sy, 12, GOLD);
        }

        match gesture {
            Gesture::Editing { index, buffer } if *index == i => {
                let text = format!("{}: {}_", p.label, buffer);
                draw_text(fb, sx + 12, sy - 28, &text, 2, YELLOW);
            }
            _ => {
                let text = format!("{}: ({:.0}, {:.0})", p.label, p.pos.x, p.pos.y);
                draw_text(fb, sx + 10, sy - 25, &text, 2, if is_master { GOLD } else { WHITE });
            }
        }
    }
}

/// Help panel, buttons, sliders and the FPS readout.
pub fn draw_controls(fb: &mut FrameBuffer, scene: &Scene, layout: &UiLayout, fps_text: &str) {
    let help: [(&str, u32); 4] = [
        ("Left-Drag: Move/Pan | Right-Click: Add | Scroll: Zoom", GREEN),
        ("Ctrl + Left-Click: Set Master Point", GOLD),
        ("Shift + Left-Click: Remove Point", RED),
        ("Click Label: Edit Coords | Sliders: Reset/Adjust", SKYBLUE),
    ];
    let panel_w = help.iter().map(|(t, _)| text_width(t, 1)).max().unwrap_or(0) + 20;
    fill_rect(fb, 10, 10, panel_w, 100, BLACK, 0.6);
    for (row, (text, color)) in help.iter().enumerate() {
        draw_text(fb, 20, 20 + row as i32 * 20, text, 1, *color);
    }
    draw_text(fb, 20, 96, fps_text, 1, WHITE);

    // RESTART
    let r = layout.restart;
    r.fill(fb, DARKGRAY, 1.0);
    draw_text(fb, r.x as i32 + 20, r.y as i32 + 13, "RESTART", 2, WHITE);

    // K slider: handle spans k = 2 ..= len
    let ks = layout.k_slider;
    ks.fill(fb, DARKGRAY, 1.0);
    let span = scene.points.len().saturating_sub(1).max(1) as f32;
    if !scene.points.is_empty() {
        let kx = ks.x + (scene.k as f32 - 2.0) / span * ks.w;
        fill_rect(fb, kx as i32 - 5, ks.y as i32 - 5, 10, 30, SKYBLUE, 1.0);
    }
    draw_text(fb, ks.x as i32, ks.y as i32 - 25, &format!("K-Points: {}", scene.k), 2, SKYBLUE);

    // MODE toggle
    let m = layout.mode;
    let (mode_color, mode_text) = match scene.mode {
        EvalMode::All => (DARKBLUE, "MODE: ALL"),
        EvalMode::Single => (MAROON, "MODE: SINGLE"),
    };
    m.fill(fb, mode_color, 1.0);
    draw_text(fb, m.x as i32 + 5, m.y as i32 + 6, mode_text, 2, WHITE);

    // N slider: handle spans 3 ..= 20
    let ns = layout.n_slider;
    ns.fill(fb, DARKGRAY, 1.0);
    let nx = ns.x + (scene.polygon_n as f32 - 3.0) / 17.0 * ns.w;
    fill_rect(fb, nx as i32 - 5, ns.y as i32 - 5, 10, 30, ORANGE, 1.0);
    draw_text(fb, ns.x as i32, ns.y as i32 - 25, &format!("Polygon (N): {}", scene.polygon_n), 2, ORANGE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_top_left_but_not_bottom_right() {
        let r = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(14.9, 14.9)));
        assert!(!r.contains(Vec2::new(15.0, 12.0)));
        assert!(!r.contains(Vec2::new(12.0, 15.0)));
        assert!(!r.contains(Vec2::new(9.9, 12.0)));
    }

    #[test]
    fn layout_tracks_viewport_corners() {
        let l = UiLayout::for_viewport(1280, 720);
        assert_eq!(l.restart, Rect::new(1140.0, 20.0, 120.0, 40.0));
        assert_eq!(l.k_slider, Rect::new(20.0, 680.0, 200.0, 20.0));
        assert_eq!(l.n_slider, Rect::new(1060.0, 680.0, 200.0, 20.0));
        assert_eq!(l.mode, Rect::new(240.0, 680.0, 160.0, 25.0));

        assert!(l.contains(Vec2::new(1150.0, 30.0)));
        assert!(!l.contains(Vec2::new(640.0, 360.0)));
    }

    #[test]
    fn hit_circle_is_inclusive() {
        let s = Vec2::new(100.0, 100.0);
        assert!(hits_point(Vec2::new(120.0, 100.0), s));
        assert!(!hits_point(Vec2::new(120.1, 100.0), s));
    }

    #[test]
    fn label_rect_sits_up_and_right_of_the_point() {
        let r = label_rect(Vec2::new(100.0, 100.0));
        assert!(r.contains(Vec2::new(110.0, 80.0)));
        assert!(!r.contains(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn overlay_draws_without_panicking_at_tiny_sizes() {
        let scene = Scene::new(40, 30);
        let layout = UiLayout::for_viewport(40, 30);
        let mut fb = FrameBuffer::new(40, 30);
        draw_world_grid(&mut fb, &scene);
        draw_points(&mut fb, &scene, &Gesture::Editing { index: 1, buffer: "1,".into() });
        draw_controls(&mut fb, &scene, &layout, "FPS: 0.0");
        assert!(fb.pixels.iter().any(|&p| p != 0));
    }

    #[test]
    fn k_handle_is_hidden_when_there_are_no_points() {
        let layout = UiLayout::for_viewport(1280, 720);
        let handle_band = |fb: &FrameBuffer| {
            (675..705).any(|y| (0..240).any(|x| fb.pixels[y * fb.width + x] == SKYBLUE))
        };

        let mut scene = Scene::new(1280, 720);
        let mut fb = FrameBuffer::new(1280, 720);
        draw_controls(&mut fb, &scene, &layout, "");
        assert!(handle_band(&fb));

        while !scene.points.is_empty() {
            scene.points.remove_at(0);
        }
        scene.reclamp_k();
        let mut fb = FrameBuffer::new(1280, 720);
        draw_controls(&mut fb, &scene, &layout, "");
        assert!(!handle_band(&fb));
    }
}
