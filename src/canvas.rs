// The pixel canvas: an RGBA bitmap sized once at session start.
// Every write is clamped into bounds; nothing here can fail.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use image::RgbaImage;

use crate::types::{FrameBuffer, Rgba};

pub struct Canvas {
    image: RgbaImage,
    background: Rgba,
    dirty: bool,     // set by writes, cleared by commit()
    generation: u64, // bumped by each commit that had writes
}

impl Canvas {
    /// Create a canvas filled with `background`. Zero sizes are bumped to 1 so
    /// clamping always has a valid pixel to land on.
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        let image = RgbaImage::from_pixel(width.max(1), height.max(1), background.into());
        Self { image, background, dirty: true, generation: 0 }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Set every pixel to `color`.
    pub fn clear(&mut self, color: Rgba) {
        let px = color.into();
        for p in self.image.pixels_mut() {
            *p = px;
        }
        self.dirty = true;
    }

    /// Write one pixel. Coordinates are clamped to the canvas, never rejected.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        let (x, y) = self.clamp(x, y);
        self.image.put_pixel(x, y, color.into());
        self.dirty = true;
    }

    /// Read one pixel (clamped like `set_pixel`).
    pub fn pixel(&self, x: i32, y: i32) -> Rgba {
        let (x, y) = self.clamp(x, y);
        (*self.image.get_pixel(x, y)).into()
    }

    #[inline]
    fn clamp(&self, x: i32, y: i32) -> (u32, u32) {
        let max_x = self.image.width() as i32 - 1;
        let max_y = self.image.height() as i32 - 1;
        (x.clamp(0, max_x) as u32, y.clamp(0, max_y) as u32)
    }

    /// Has anything been written since the last `commit`?
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark pending writes as ready for display. Content is unchanged; the
    /// display shell compares generations to skip re-packing idle frames.
    pub fn commit(&mut self) {
        if std::mem::replace(&mut self.dirty, false) {
            self.generation += 1;
        }
    }

    /// Number of commits that carried writes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Copy the bitmap into a packed display buffer of the same size.
    pub fn pack_into(&self, fb: &mut FrameBuffer) {
        let w = self.image.width() as usize;
        let h = self.image.height() as usize;
        if fb.width != w || fb.height != h {
            *fb = FrameBuffer::new(w, h);
        }
        for (dst, src) in fb.pixels.iter_mut().zip(self.image.pixels()) {
            *dst = Rgba::from(*src).to_packed();
        }
    }

    /// Borrow the raw bitmap (e.g. for comparisons or display binding).
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
