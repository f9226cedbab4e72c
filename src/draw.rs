// Window + software drawing utilities.
// Visual effects provided here:
// 1) A resizable window that shows the locus framebuffer.
// 2) Pixels, rectangles, lines and circles (optionally alpha-blended) for the overlay.
// 3) A tiny 5x7 bitmap font, scaled up, for labels and the HUD.

use crate::error::Error;
use crate::input::RawInput;
use crate::types::FrameBuffer;
use glam::Vec2;
use minifb::{InputCallback, Key, MouseButton, MouseMode, Window, WindowOptions};
use std::sync::{Arc, Mutex};

/// Collects typed characters between frames (minifb pushes them through a callback).
struct CharQueue(Arc<Mutex<Vec<char>>>);

impl InputCallback for CharQueue {
    fn add_char(&mut self, uni_char: u32) {
        if let (Some(ch), Ok(mut queue)) = (char::from_u32(uni_char), self.0.lock()) {
            queue.push(ch);
        }
    }
}

pub struct Drawer {
    window: Window,                // the on-screen window you see
    typed: Arc<Mutex<Vec<char>>>,  // characters typed since the last poll
    wheel_scale: f32,              // platform wheel units -> notches
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize, wheel_scale: f32) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);

        let typed = Arc::new(Mutex::new(Vec::new()));
        window.set_input_callback(Box::new(CharQueue(Arc::clone(&typed))));

        Ok(Self { window, typed, wheel_scale })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Current client size in pixels, never zero (minimized windows report 0).
    pub fn size(&self) -> (usize, usize) {
        let (w, h) = self.window.get_size();
        (w.max(1), h.max(1))
    }

    /// Sample mouse, keyboard and typed text for this frame.
    pub fn poll(&mut self) -> RawInput {
        let w = &self.window;
        let chars = match self.typed.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => Vec::new(),
        };
        RawInput {
            mouse_pos: w.get_mouse_pos(MouseMode::Discard).map(|(x, y)| Vec2::new(x, y)),
            left_down: w.get_mouse_down(MouseButton::Left),
            right_down: w.get_mouse_down(MouseButton::Right),
            wheel: w.get_scroll_wheel().map(|(_, y)| y * self.wheel_scale).unwrap_or(0.0),
            ctrl: w.is_key_down(Key::LeftCtrl) || w.is_key_down(Key::RightCtrl),
            shift: w.is_key_down(Key::LeftShift) || w.is_key_down(Key::RightShift),
            backspace: w.is_key_down(Key::Backspace),
            enter: w.is_key_down(Key::Enter) || w.is_key_down(Key::NumPadEnter),
            escape: w.is_key_down(Key::Escape),
            chars,
        }
    }
}

/* ---------- Software drawing: pixels, rects, lines, circles ---------- */

/// Pack 8-bit channels as 0x00RRGGBB.
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Mix `color` over the existing pixel with opacity `alpha` in [0,1].
#[inline]
pub fn blend_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32, alpha: f32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    let a = alpha.clamp(0.0, 1.0);
    let old = fb.pixels[idx];
    let mix = |shift: u32| {
        let s = ((color >> shift) & 0xFF) as f32;
        let d = ((old >> shift) & 0xFF) as f32;
        ((s * a + d * (1.0 - a)).round() as u32).min(255)
    };
    fb.pixels[idx] = (mix(16) << 16) | (mix(8) << 8) | mix(0);
}

/// Filled rectangle, clipped to the framebuffer, blended with `alpha` (1.0 = opaque).
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32, alpha: f32) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w).min(fb.width as i32);
    let y1 = (y + h).min(fb.height as i32);
    for py in y0..y1 {
        for px in x0..x1 {
            if alpha >= 1.0 {
                put_pixel(fb, px, py, color);
            } else {
                blend_pixel(fb, px, py, color, alpha);
            }
        }
    }
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
/// Endpoints are clipped to a band around the screen first so huge
/// world-space lines (grid, axes) stay cheap.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32, alpha: f32) {
    // Axis-aligned lines are the common case (grid); clip them exactly.
    if x0 == x1 || y0 == y1 {
        let (xa, xb) = (x0.min(x1), x0.max(x1));
        let (ya, yb) = (y0.min(y1), y0.max(y1));
        fill_rect(fb, xa, ya, xb - xa + 1, yb - ya + 1, color, alpha);
        return;
    }

    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        blend_pixel(fb, x0, y0, color, alpha);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Solid disc centered at (cx,cy).
pub fn fill_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    let r2 = radius * radius;
    for y in -radius..=radius {
        for x in -radius..=radius {
            if x * x + y * y <= r2 {
                put_pixel(fb, cx + x, cy + y, color);
            }
        }
    }
}

/// One-pixel circle outline (midpoint algorithm).
pub fn draw_circle_outline(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    while x >= y {
        for (dx, dy) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
            put_pixel(fb, cx + dx, cy + dy, color);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/* ---------- 5x7 bitmap font (uppercase ASCII + the punctuation the HUD needs) ---------- */

/// Return a 5x7 glyph bitmap.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Letters A..Z
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        // Punctuation
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        ',' => g!(0b00000,0b00000,0b00000,0b00000,0b00110,0b00100,0b01000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '+' => g!(0b00000,0b00100,0b00100,0b11111,0b00100,0b00100,0b00000),
        '(' => g!(0b00010,0b00100,0b01000,0b01000,0b01000,0b00100,0b00010),
        ')' => g!(0b01000,0b00100,0b00010,0b00010,0b00010,0b00100,0b01000),
        '/' => g!(0b00000,0b00001,0b00010,0b00100,0b01000,0b10000,0b00000),
        '_' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b11111),

        _ => None,
    }
}

/// Horizontal distance between glyph origins at scale 1.
const GLYPH_ADVANCE: i32 = 6; // 5 pixels glyph width + 1 pixel spacing

/// Draw a single 5x7 character at (x,y), each font pixel a `scale`x`scale` block.
/// Visual: glyph with a 1-block black shadow for contrast over the locus field.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, scale: i32, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass first, then the glyph in its color
        for (offset, c) in [(scale.max(1) / 2 + 1, 0x00000000), (0, color)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        let px = x + rx * scale + offset;
                        let py = y + ry as i32 * scale + offset;
                        fill_rect(fb, px, py, scale, scale, c, 1.0);
                    }
                }
            }
        }
    }
}

/// Draw a text string using scaled 5x7 glyphs (lowercase renders as uppercase).
pub fn draw_text(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, scale: i32, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, scale, color);
        x += GLYPH_ADVANCE * scale;
    }
}

/// Width in pixels `draw_text` will cover for `text` at `scale`.
pub fn text_width(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * GLYPH_ADVANCE * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: u32 = 0x00FF_0000;

    #[test]
    fn put_pixel_ignores_out_of_bounds() {
        let mut fb = FrameBuffer::new(4, 4);
        put_pixel(&mut fb, -1, 0, RED);
        put_pixel(&mut fb, 4, 0, RED);
        put_pixel(&mut fb, 0, 4, RED);
        assert!(fb.pixels.iter().all(|&p| p == 0));
        put_pixel(&mut fb, 3, 3, RED);
        assert_eq!(fb.pixels[15], RED);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut fb = FrameBuffer::new(5, 5);
        fill_rect(&mut fb, 3, 3, 10, 10, RED, 1.0);
        let lit = fb.pixels.iter().filter(|&&p| p == RED).count();
        assert_eq!(lit, 4);
    }

    #[test]
    fn blend_mixes_channels() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.pixels[0] = rgb(0, 0, 200);
        blend_pixel(&mut fb, 0, 0, rgb(200, 0, 0), 0.5);
        assert_eq!(fb.pixels[0], rgb(100, 0, 100));
    }

    #[test]
    fn axis_aligned_line_covers_both_endpoints() {
        let mut fb = FrameBuffer::new(10, 3);
        draw_line(&mut fb, 8, 1, -50, 1, RED, 1.0);
        assert!((0..=8).all(|x| fb.pixels[10 + x] == RED));
        assert_eq!(fb.pixels[10 + 9], 0);
    }

    #[test]
    fn diagonal_line_hits_endpoints() {
        let mut fb = FrameBuffer::new(8, 8);
        draw_line(&mut fb, 0, 0, 7, 5, RED, 1.0);
        assert_eq!(fb.pixels[0], RED);
        assert_eq!(fb.pixels[5 * 8 + 7], RED);
    }

    #[test]
    fn circles_stay_within_their_radius() {
        let mut fb = FrameBuffer::new(21, 21);
        fill_circle(&mut fb, 10, 10, 5, RED);
        draw_circle_outline(&mut fb, 10, 10, 8, RED);
        for y in 0..21 {
            for x in 0..21 {
                if fb.pixels[y * 21 + x] == RED {
                    let (dx, dy) = (x as i32 - 10, y as i32 - 10);
                    assert!(dx * dx + dy * dy <= 9 * 9);
                }
            }
        }
        assert_eq!(fb.pixels[10 * 21 + 10], RED);
        assert_eq!(fb.pixels[10 * 21 + 18], RED);
    }

    #[test]
    fn every_hud_character_has_a_glyph() {
        let hud = "LEFT-DRAG: MOVE/PAN | RIGHT-CLICK: ADD | SCROLL: ZOOM K-POINTS: 3 (N): 20 A: (-200, 150)_ FPS 60.0";
        for ch in hud.chars() {
            assert!(glyph5x7(ch).is_some(), "missing glyph {ch:?}");
        }
        assert!(glyph5x7('q').is_some());
    }

    #[test]
    fn text_lands_where_measured() {
        let mut fb = FrameBuffer::new(64, 32);
        draw_text(&mut fb, 2, 2, "AB", 2, RED);
        let w = text_width("AB", 2);
        assert_eq!(w, 24);
        for y in 0..32 {
            for x in (2 + w as usize)..64 {
                assert_ne!(fb.pixels[y * 64 + x], RED);
            }
        }
        assert!(fb.pixels.iter().any(|&p| p == RED));
    }
}
