// Turns one frame of input into edits of the scene.
// Visual expectation:
// - drag a dot to move it, drag empty space to pan, scroll to zoom at the cursor,
// - right-click adds a point, Shift+click removes one, Ctrl+click makes it the gold master,
// - click a label and type "x,y" + Enter to place the point exactly,
// - the controls (RESTART, MODE, K and N sliders) win over anything underneath them.

use crate::input::InputFrame;
use crate::polygon::{MAX_VERTICES, MIN_VERTICES};
use crate::scene::Scene;
use crate::types::EvalMode;
use crate::ui::{UiLayout, hits_point, label_rect};
use glam::Vec2;
use tracing::debug;

/// Zoom change per wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// What the left mouse button (or the keyboard) is currently doing.
/// Only one of these can be active, so drag / pan / edit never overlap.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// Moving the point at this index.
    Dragging(usize),
    /// Typing new coordinates for the point at this index.
    Editing { index: usize, buffer: String },
    /// Sliding the view with the pointer.
    Panning,
}

#[derive(Default)]
pub struct Interaction {
    gesture: Gesture,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.gesture, Gesture::Editing { .. })
    }

    /// Advance one frame.
    pub fn step(&mut self, scene: &mut Scene, input: &InputFrame, layout: &UiLayout) {
        // Sampled once, before the camera moves this frame.
        let world_mouse = scene.camera.screen_to_world(input.mouse);
        let over_ui = layout.contains(input.mouse);

        self.handle_controls(scene, input, layout);

        if self.is_editing() {
            self.handle_editing(scene, input);
        } else if !over_ui {
            self.handle_world(scene, input, world_mouse);
        }

        if input.left_released && matches!(self.gesture, Gesture::Dragging(_) | Gesture::Panning) {
            self.gesture = Gesture::Idle;
        }
        if self.gesture == Gesture::Panning {
            scene.camera.pan_by(input.mouse_delta);
        }
        if input.wheel != 0.0 {
            scene.camera.zoom_at(input.mouse, input.wheel * WHEEL_ZOOM_STEP);
        }
    }

    fn handle_controls(&mut self, scene: &mut Scene, input: &InputFrame, layout: &UiLayout) {
        let m = input.mouse;

        if input.left_pressed && layout.restart.contains(m) {
            scene.restart();
            self.drop_point_gesture();
        }
        if input.left_pressed && layout.mode.contains(m) {
            scene.mode = scene.mode.toggled();
            debug!(mode = ?scene.mode, "mode toggled");
        }
        if input.left_down && layout.k_slider.contains(m) {
            scene.k = k_from_slider(layout.k_slider.fraction_x(m.x), scene.points.len());
        }
        if input.left_down && layout.n_slider.contains(m) {
            let n = n_from_slider(layout.n_slider.fraction_x(m.x));
            if n != scene.polygon_n {
                scene.regenerate(n);
                self.drop_point_gesture();
            }
        }
    }

    fn handle_editing(&mut self, scene: &mut Scene, input: &InputFrame) {
        let Gesture::Editing { index, buffer } = &mut self.gesture else {
            return;
        };
        buffer.extend(input.chars.iter().copied().filter(|&c| is_coordinate_char(c)));
        if input.backspace_pressed {
            buffer.pop();
        }

        if input.enter_pressed {
            match parse_coordinates(buffer) {
                Some(pos) => {
                    scene.points.set_position(*index, pos);
                    let label = scene.points.get(*index).map(|p| p.label);
                    debug!(?label, x = pos.x, y = pos.y, "coordinates committed");
                }
                None => debug!(index = *index, text = %buffer, "coordinate edit discarded"),
            }
            self.gesture = Gesture::Idle;
        } else if input.escape_pressed {
            self.gesture = Gesture::Idle;
        }
    }

    fn handle_world(&mut self, scene: &mut Scene, input: &InputFrame, world_mouse: Vec2) {
        if input.left_pressed {
            if input.ctrl {
                if let Some(i) = point_under(scene, input.mouse) {
                    scene.points.swap_to_master(i);
                    scene.mode = EvalMode::Single;
                    debug!(index = i, "master point designated");
                }
            } else if input.shift {
                if let Some(i) = point_under(scene, input.mouse) {
                    scene.points.remove_at(i);
                    scene.reclamp_k();
                    debug!(index = i, remaining = scene.points.len(), k = scene.k, "point removed");
                }
            } else {
                self.gesture = pick(scene, input.mouse);
            }
        }

        if input.left_down {
            if let Gesture::Dragging(i) = self.gesture {
                scene.points.relocate(i, world_mouse);
            }
        }

        if input.right_pressed && scene.points.insert(world_mouse) {
            scene.reclamp_k();
            debug!(x = world_mouse.x, y = world_mouse.y, count = scene.points.len(), "point added");
        }
    }

    /// Indices stop meaning anything once the store is replaced wholesale.
    fn drop_point_gesture(&mut self) {
        if matches!(self.gesture, Gesture::Dragging(_) | Gesture::Editing { .. }) {
            self.gesture = Gesture::Idle;
        }
    }
}

/// First point (store order) whose hit circle contains the pointer.
fn point_under(scene: &Scene, mouse: Vec2) -> Option<usize> {
    scene
        .points
        .iter()
        .position(|p| hits_point(mouse, scene.camera.world_to_screen(p.pos)))
}

/// Plain left press: grab a point, open its label for editing, or start panning.
/// Points are checked in store order; each point's dot is tested before its label.
fn pick(scene: &Scene, mouse: Vec2) -> Gesture {
    for (i, p) in scene.points.iter().enumerate() {
        let s = scene.camera.world_to_screen(p.pos);
        if hits_point(mouse, s) {
            return Gesture::Dragging(i);
        }
        if label_rect(s).contains(mouse) {
            return Gesture::Editing { index: i, buffer: String::new() };
        }
    }
    Gesture::Panning
}

/// Slider position -> k in [2, count].
pub fn k_from_slider(fraction: f32, count: usize) -> usize {
    let raw = 2 + (fraction * (count as f32 - 1.0)) as i64;
    (raw.max(2) as usize).min(count)
}

/// Slider position -> polygon vertex count in [3, 20].
pub fn n_from_slider(fraction: f32) -> usize {
    let span = (MAX_VERTICES - MIN_VERTICES) as f32;
    let raw = MIN_VERTICES as i64 + (fraction * span) as i64;
    raw.clamp(MIN_VERTICES as i64, MAX_VERTICES as i64) as usize
}

/// Characters the coordinate field accepts.
pub fn is_coordinate_char(c: char) -> bool {
    c.is_ascii_digit() || c == ',' || c == '-'
}

/// "x,y" -> point. Splits on the first comma; each half contributes its
/// leading number and anything after it is ignored ("10,20-" is (10, 20)).
pub fn parse_coordinates(text: &str) -> Option<Vec2> {
    let (x, y) = text.split_once(',')?;
    Some(Vec2::new(leading_number(x)?, leading_number(y)?))
}

/// Longest prefix of `text` (after leading whitespace) that parses as an `f32`.
fn leading_number(text: &str) -> Option<f32> {
    let text = text.trim_start();
    (1..=text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse::<f32>().ok())
}
