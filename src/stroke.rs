//! Stroke recording and history.
//!
//! A drag gesture is collected in a [`StrokeBuilder`] while it is open, then
//! sealed into an immutable [`Stroke`]. [`StrokeRecorder`] holds the single
//! in-progress slot; [`StrokeHistory`] keeps sealed strokes in draw order and
//! can rebuild the canvas from them.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use tracing::debug;

use crate::brush;
use crate::canvas::Canvas;
use crate::types::{Rgba, StrokePoint};

/// Points of an open gesture. Color and radius are fixed at creation.
#[derive(Debug)]
pub struct StrokeBuilder {
    points: Vec<StrokePoint>,
    color: Rgba,
    radius: u32,
}

impl StrokeBuilder {
    pub fn new(color: Rgba, radius: u32) -> Self {
        Self { points: Vec::new(), color, radius }
    }

    /// Append a point. A repeat of the previous point is skipped since
    /// stamping it again cannot change any pixel.
    pub fn push(&mut self, p: StrokePoint) {
        if self.points.last() != Some(&p) {
            self.points.push(p);
        }
    }

    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Seal into a stroke, or `None` if no point was ever recorded.
    pub fn finish(self) -> Option<Stroke> {
        if self.points.is_empty() {
            return None;
        }
        Some(Stroke { points: self.points.into_boxed_slice(), color: self.color, radius: self.radius })
    }
}

impl Extend<StrokePoint> for StrokeBuilder {
    fn extend<I: IntoIterator<Item = StrokePoint>>(&mut self, iter: I) {
        for p in iter {
            self.push(p);
        }
    }
}

/// A sealed stroke. Never mutated after `StrokeBuilder::finish`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    points: Box<[StrokePoint]>,
    color: Rgba,
    radius: u32,
}

impl Stroke {
    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }
}

/// Holds at most one in-progress stroke.
#[derive(Debug, Default)]
pub struct StrokeRecorder {
    current: Option<StrokeBuilder>,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new stroke. Returns false (and changes nothing) if one is
    /// already open.
    pub fn begin(&mut self, color: Rgba, radius: u32) -> bool {
        if self.current.is_some() {
            return false;
        }
        debug!(?color, radius, "stroke begin");
        self.current = Some(StrokeBuilder::new(color, radius));
        true
    }

    pub fn is_recording(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&StrokeBuilder> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut StrokeBuilder> {
        self.current.as_mut()
    }

    /// Close the open stroke. Empty strokes are dropped; the slot is always
    /// cleared.
    pub fn finish(&mut self) -> Option<Stroke> {
        let stroke = self.current.take()?.finish();
        match &stroke {
            Some(s) => debug!(points = s.points().len(), "stroke finished"),
            None => debug!("empty stroke discarded"),
        }
        stroke
    }
}

/// Sealed strokes in draw order.
#[derive(Debug, Default)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn pop_last(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Clear to the canvas background and re-stamp every stroke in order.
    pub fn redraw(&self, canvas: &mut Canvas) {
        canvas.clear(canvas.background());
        for stroke in &self.strokes {
            brush::replay_stroke(canvas, stroke);
        }
        canvas.commit();
    }
}
