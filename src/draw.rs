// Window + software overlay drawing.
// 1) A window that shows the canvas.
// 2) A mouse-backed pointer source for the session.
// 3) A brush-size ring under the cursor and a swatch of the current color.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use crate::error::Error;
use crate::input::{PointerSample, PointerSource};
use crate::types::{FrameBuffer, Rgba};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

/// Colors bound to the number keys 1..=8.
pub const PALETTE: [Rgba; 8] = [
    Rgba::BLACK,
    Rgba::rgb(0xE5, 0x39, 0x35), // red
    Rgba::rgb(0xFB, 0x8C, 0x00), // orange
    Rgba::rgb(0xFD, 0xD8, 0x35), // yellow
    Rgba::rgb(0x43, 0xA0, 0x47), // green
    Rgba::rgb(0x1E, 0x88, 0xE5), // blue
    Rgba::rgb(0x8E, 0x24, 0xAA), // purple
    Rgba::rgb(0x6D, 0x4C, 0x41), // brown
];

const PALETTE_KEYS: [Key; 8] =
    [Key::Key1, Key::Key2, Key::Key3, Key::Key4, Key::Key5, Key::Key6, Key::Key7, Key::Key8];

pub struct Drawer {
    window: Window,
}

impl Drawer {
    /// Create a window exactly the size of the canvas.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push this frame's pixels to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixels, `None` once it leaves the window.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Palette color whose number key went down this frame.
    pub fn palette_pressed(&self) -> Option<Rgba> {
        PALETTE_KEYS
            .iter()
            .position(|&k| self.window.is_key_pressed(k, KeyRepeat::No))
            .map(|i| PALETTE[i])
    }

    pub fn eraser_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::E, KeyRepeat::No)
    }

    pub fn undo_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::Z, KeyRepeat::Yes)
            || self.window.is_key_pressed(Key::Backspace, KeyRepeat::Yes)
    }

    /// Brush radius change requested this frame: wheel notches or [ / ].
    pub fn radius_delta(&self) -> i32 {
        let mut delta = 0;
        if let Some((_, dy)) = self.window.get_scroll_wheel() {
            if dy > 0.0 {
                delta += 1;
            } else if dy < 0.0 {
                delta -= 1;
            }
        }
        if self.window.is_key_pressed(Key::LeftBracket, KeyRepeat::Yes) {
            delta -= 1;
        }
        if self.window.is_key_pressed(Key::RightBracket, KeyRepeat::Yes) {
            delta += 1;
        }
        delta
    }

    /// Pointer source reading this window's mouse.
    pub fn mouse(&self) -> MouseSource<'_> {
        MouseSource { drawer: self }
    }
}

/// Left mouse button as a pointer. The mouse leaving the window while held
/// reports no position, which the session treats as the end of the drag.
pub struct MouseSource<'a> {
    drawer: &'a Drawer,
}

impl PointerSource for MouseSource<'_> {
    fn sample(&mut self) -> PointerSample {
        if !self.drawer.left_mouse_down() {
            return PointerSample::NoInput;
        }
        match self.drawer.mouse_pos() {
            Some((x, y)) => PointerSample::Active { x, y },
            None => PointerSample::Cancelled,
        }
    }
}

/* ---------- Software overlay drawing on the packed frame ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.pixels[y * fb.width + x] = color;
}

/// Midpoint circle outline of radius `r` centered at (cx,cy).
pub fn draw_ring(fb: &mut FrameBuffer, cx: i32, cy: i32, r: i32, color: u32) {
    if r <= 0 {
        put_pixel(fb, cx, cy, color);
        return;
    }
    let (mut x, mut y) = (r, 0);
    let mut err = 1 - r;
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

/// Filled rectangle, clipped to the frame.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for py in y..y + h {
        for px in x..x + w {
            put_pixel(fb, px, py, color);
        }
    }
}

/// One-pixel rectangle outline.
pub fn stroke_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    if w <= 0 || h <= 0 {
        return;
    }
    fill_rect(fb, x, y, w, 1, color);
    fill_rect(fb, x, y + h - 1, w, 1, color);
    fill_rect(fb, x, y, 1, h, color);
    fill_rect(fb, x + w - 1, y, 1, h, color);
}

/// Swatch in the top-left corner showing what the next stroke paints with.
/// The eraser swatch gets a double border so it reads differently from a
/// plain background-colored paint.
pub fn draw_swatch(fb: &mut FrameBuffer, color: Rgba, eraser: bool) {
    const SIZE: i32 = 18;
    fill_rect(fb, 8, 8, SIZE, SIZE, color.to_packed());
    stroke_rect(fb, 7, 7, SIZE + 2, SIZE + 2, 0x00_40_40_40);
    if eraser {
        stroke_rect(fb, 4, 4, SIZE + 8, SIZE + 8, 0x00_40_40_40);
    }
}

/// Brush outline at the cursor, drawn in a color that contrasts with the
/// pixel under it.
pub fn draw_brush_cursor(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: u32) {
    let under = if cx >= 0 && cy >= 0 && (cx as usize) < fb.width && (cy as usize) < fb.height {
        fb.pixels[cy as usize * fb.width + cx as usize]
    } else {
        0
    };
    let color = !under & 0x00_FF_FF_FF;
    // A ring wider than the frame is never visible; cap it so huge brushes
    // cost nothing to outline.
    let cap = (fb.width + fb.height) as u32;
    draw_ring(fb, cx, cy, radius.min(cap) as i32, color);
}
