// Paint state: the current color, eraser flag and brush radius, plus the
// temporary color override shown while the brush size is being adjusted.

#[cfg(test)]
#[path = "paint_test.rs"]
mod paint_test;

use std::time::{Duration, Instant};

use tracing::debug;

use crate::types::Rgba;

/// A single pending deadline, polled from the frame loop.
/// Scheduling again replaces the old deadline; there is never more than one.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeferredRestore {
    deadline: Option<Instant>,
}

impl DeferredRestore {
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once, on the first poll at or after the deadline.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug)]
pub struct PaintState {
    color: Rgba,
    background: Rgba,
    eraser: bool,
    radius: u32,
    adjusting: bool,
    saved_color: Rgba,
    picked_while_adjusting: Option<Rgba>,
    restore: DeferredRestore,
}

impl PaintState {
    pub fn new(color: Rgba, background: Rgba, radius: u32) -> Self {
        Self {
            color,
            background,
            eraser: false,
            radius,
            adjusting: false,
            saved_color: color,
            picked_while_adjusting: None,
            restore: DeferredRestore::default(),
        }
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn is_eraser(&self) -> bool {
        self.eraser
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn is_adjusting(&self) -> bool {
        self.adjusting
    }

    pub fn saved_color(&self) -> Rgba {
        self.saved_color
    }

    pub fn restore_pending(&self) -> bool {
        self.restore.is_pending()
    }

    /// Color new strokes are drawn with.
    pub fn effective_color(&self) -> Rgba {
        if self.eraser { self.background } else { self.color }
    }

    /// Select a paint color. Leaves eraser mode.
    ///
    /// During a brush adjustment the saved color is left alone, but the pick
    /// is remembered and wins over it when the adjustment is restored.
    pub fn set_color(&mut self, c: Rgba) {
        debug!(color = ?c, "color selected");
        self.color = c;
        self.eraser = false;
        if self.adjusting {
            self.picked_while_adjusting = Some(c);
        } else {
            self.saved_color = c;
        }
    }

    pub fn toggle_eraser(&mut self) {
        self.eraser = !self.eraser;
        debug!(eraser = self.eraser, "eraser toggled");
    }

    pub fn set_radius(&mut self, radius: u32) {
        self.radius = radius;
    }

    /// Start adjusting the brush size. Any restoration still pending from a
    /// previous adjustment is cancelled.
    pub fn begin_brush_adjust(&mut self) {
        self.restore.cancel();
        if self.adjusting {
            return;
        }
        debug!("brush adjust begin");
        self.saved_color = self.color;
        self.color = self.background;
        self.adjusting = true;
    }

    /// Schedule the color restoration `delay` after `now`. Call [`tick`]
    /// from the frame loop to apply it.
    ///
    /// [`tick`]: PaintState::tick
    pub fn end_brush_adjust(&mut self, delay: Duration, now: Instant) {
        if !self.adjusting {
            return;
        }
        debug!(?delay, "brush adjust end scheduled");
        self.restore.schedule(now, delay);
    }

    /// Apply a due restoration. Returns true if one fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.restore.take_due(now) {
            return false;
        }
        self.color = self.picked_while_adjusting.take().unwrap_or(self.saved_color);
        self.adjusting = false;
        debug!(color = ?self.color, "brush adjust color restored");
        true
    }
}
