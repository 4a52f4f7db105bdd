//! Pointer input abstraction.
//!
//! Every input device is reduced to one [`PointerSample`] per frame by a
//! [`PointerSource`], so the session state machine never needs to know whether
//! the samples came from a mouse, a touch screen, or a recorded script.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::VecDeque;

use crate::types::StrokePoint;

/// What the pointer is doing on one frame, in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerSample {
    /// Button held / finger down at this position.
    Active { x: f32, y: f32 },
    /// Button or finger lifted this frame.
    Released,
    /// The platform aborted the gesture.
    Cancelled,
    /// Nothing is touching the surface.
    NoInput,
}

impl PointerSample {
    pub fn is_active(&self) -> bool {
        matches!(self, PointerSample::Active { .. })
    }
}

/// A per-frame source of pointer samples.
pub trait PointerSource {
    fn sample(&mut self) -> PointerSample;
}

/// Replays a fixed list of samples, then reports `NoInput` forever.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    queue: VecDeque<PointerSample>,
}

impl ScriptedSource {
    pub fn new(samples: impl IntoIterator<Item = PointerSample>) -> Self {
        Self { queue: samples.into_iter().collect() }
    }

    /// A drag through `points` followed by a release.
    pub fn drag(points: &[(f32, f32)]) -> Self {
        let mut s: Self = Self::new(points.iter().map(|&(x, y)| PointerSample::Active { x, y }));
        s.push(PointerSample::Released);
        s
    }

    pub fn push(&mut self, sample: PointerSample) {
        self.queue.push_back(sample);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl PointerSource for ScriptedSource {
    fn sample(&mut self) -> PointerSample {
        self.queue.pop_front().unwrap_or(PointerSample::NoInput)
    }
}

/// The on-screen rectangle the canvas is displayed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DrawRegion {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Map a screen position into canvas pixels. `None` if the position is
    /// outside the region (or the region is empty).
    pub fn to_canvas(&self, sx: f32, sy: f32, canvas_w: u32, canvas_h: u32) -> Option<StrokePoint> {
        if !(self.width > 0.0 && self.height > 0.0) || canvas_w == 0 || canvas_h == 0 {
            return None;
        }
        let lx = sx - self.x;
        let ly = sy - self.y;
        if !(lx >= 0.0 && ly >= 0.0 && lx < self.width && ly < self.height) {
            return None;
        }
        let px = ((lx / self.width * canvas_w as f32) as i32).clamp(0, canvas_w as i32 - 1);
        let py = ((ly / self.height * canvas_h as f32) as i32).clamp(0, canvas_h as i32 - 1);
        Some(StrokePoint::new(px, py))
    }
}
