// Core value types shared by the canvas, the brush and the display shell.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use image::Rgba as ImageRgba;

/// An RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba([r, g, b, 255])
    }

    /// Parse `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) || (s.len() != 6 && s.len() != 8) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        let a = if s.len() == 8 { byte(6)? } else { 255 };
        Some(Rgba([byte(0)?, byte(2)?, byte(4)?, a]))
    }

    /// Pack as 0x00RRGGBB for minifb. Alpha is dropped; stamping is opaque.
    #[inline]
    pub fn to_packed(self) -> u32 {
        let [r, g, b, _] = self.0;
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }
}

impl From<Rgba> for ImageRgba<u8> {
    fn from(c: Rgba) -> Self {
        ImageRgba(c.0)
    }
}

impl From<ImageRgba<u8>> for Rgba {
    fn from(c: ImageRgba<u8>) -> Self {
        Rgba(c.0)
    }
}

/// A sampled stroke position in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokePoint {
    pub x: i32,
    pub y: i32,
}

impl StrokePoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // window width in pixels
    pub height: usize,     // window height in pixels
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}
