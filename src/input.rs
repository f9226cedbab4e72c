// Per-frame input snapshot.
// minifb only reports "is it down right now", so the edges the interaction
// logic needs (pressed / released this frame, mouse delta) are derived here by
// remembering the previous frame.

use glam::Vec2;

/// Raw state polled from the window once per frame.
#[derive(Clone, Debug, Default)]
pub struct RawInput {
    pub mouse_pos: Option<Vec2>,
    pub left_down: bool,
    pub right_down: bool,
    pub wheel: f32,
    pub ctrl: bool,
    pub shift: bool,
    pub backspace: bool,
    pub enter: bool,
    pub escape: bool,
    pub chars: Vec<char>,
}

/// Everything the interaction state machine reads for one frame.
#[derive(Clone, Debug, Default)]
pub struct InputFrame {
    pub mouse: Vec2,
    pub mouse_delta: Vec2,
    pub left_pressed: bool,
    pub left_down: bool,
    pub left_released: bool,
    pub right_pressed: bool,
    /// Wheel movement in notches (positive = zoom in).
    pub wheel: f32,
    pub ctrl: bool,
    pub shift: bool,
    pub backspace_pressed: bool,
    pub enter_pressed: bool,
    pub escape_pressed: bool,
    /// Characters typed since the last frame, in order.
    pub chars: Vec<char>,
}

/// Turns successive `RawInput`s into `InputFrame`s with edges.
#[derive(Default)]
pub struct InputTracker {
    last_mouse: Option<Vec2>,
    left: bool,
    right: bool,
    backspace: bool,
    enter: bool,
    escape: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, raw: RawInput) -> InputFrame {
        // Mouse outside the window: hold the last known position.
        let mouse = raw.mouse_pos.or(self.last_mouse).unwrap_or(Vec2::ZERO);
        let mouse_delta = match self.last_mouse {
            Some(prev) => mouse - prev,
            None => Vec2::ZERO,
        };

        let frame = InputFrame {
            mouse,
            mouse_delta,
            left_pressed: raw.left_down && !self.left,
            left_down: raw.left_down,
            left_released: !raw.left_down && self.left,
            right_pressed: raw.right_down && !self.right,
            wheel: raw.wheel,
            ctrl: raw.ctrl,
            shift: raw.shift,
            backspace_pressed: raw.backspace && !self.backspace,
            enter_pressed: raw.enter && !self.enter,
            escape_pressed: raw.escape && !self.escape,
            chars: raw.chars,
        };

        self.last_mouse = Some(mouse);
        self.left = raw.left_down;
        self.right = raw.right_down;
        self.backspace = raw.backspace;
        self.enter = raw.enter;
        self.escape = raw.escape;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> RawInput {
        RawInput { mouse_pos: Some(Vec2::new(x, y)), ..Default::default() }
    }

    #[test]
    fn left_button_edges() {
        let mut t = InputTracker::new();
        let f = t.next(RawInput { left_down: true, ..at(1.0, 1.0) });
        assert!(f.left_pressed && f.left_down && !f.left_released);

        let f = t.next(RawInput { left_down: true, ..at(1.0, 1.0) });
        assert!(!f.left_pressed && f.left_down);

        let f = t.next(at(1.0, 1.0));
        assert!(f.left_released && !f.left_down && !f.left_pressed);

        let f = t.next(at(1.0, 1.0));
        assert!(!f.left_released);
    }

    #[test]
    fn right_press_fires_once() {
        let mut t = InputTracker::new();
        assert!(t.next(RawInput { right_down: true, ..at(0.0, 0.0) }).right_pressed);
        assert!(!t.next(RawInput { right_down: true, ..at(0.0, 0.0) }).right_pressed);
    }

    #[test]
    fn mouse_delta_and_leaving_the_window() {
        let mut t = InputTracker::new();
        assert_eq!(t.next(at(10.0, 10.0)).mouse_delta, Vec2::ZERO);
        assert_eq!(t.next(at(13.0, 6.0)).mouse_delta, Vec2::new(3.0, -4.0));

        let f = t.next(RawInput::default());
        assert_eq!(f.mouse, Vec2::new(13.0, 6.0));
        assert_eq!(f.mouse_delta, Vec2::ZERO);
    }

    #[test]
    fn held_keys_do_not_repeat() {
        let mut t = InputTracker::new();
        let held = RawInput { enter: true, backspace: true, escape: true, ..at(0.0, 0.0) };
        let f = t.next(held.clone());
        assert!(f.enter_pressed && f.backspace_pressed && f.escape_pressed);
        let f = t.next(held);
        assert!(!f.enter_pressed && !f.backspace_pressed && !f.escape_pressed);
    }
}
