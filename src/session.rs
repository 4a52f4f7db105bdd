//! Drawing session: the gesture state machine that turns pointer samples into
//! strokes, plus the actions the surrounding UI can invoke (color, eraser,
//! undo, brush size).
//!
//! The session owns the canvas, paint state and stroke history it is built
//! with. Nothing else mutates them; collaborators go through the methods here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::{Duration, Instant};

use tracing::debug;

use crate::brush;
use crate::canvas::Canvas;
use crate::input::{DrawRegion, PointerSample, PointerSource};
use crate::paint::PaintState;
use crate::stroke::{StrokeHistory, StrokeRecorder};
use crate::types::{Rgba, StrokePoint};

/// Where the single pointer channel is in its gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        /// Last sampled position in canvas space.
        last: StrokePoint,
    },
}

pub struct Session {
    canvas: Canvas,
    paint: PaintState,
    region: DrawRegion,
    recorder: StrokeRecorder,
    history: StrokeHistory,
    state: GestureState,
}

impl Session {
    pub fn new(canvas: Canvas, paint: PaintState, region: DrawRegion) -> Self {
        Self {
            canvas,
            paint,
            region,
            recorder: StrokeRecorder::new(),
            history: StrokeHistory::new(),
            state: GestureState::Idle,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn paint(&self) -> &PaintState {
        &self.paint
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn region(&self) -> DrawRegion {
        self.region
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Pull one sample from `source` and feed it through [`Session::handle`].
    pub fn poll(&mut self, source: &mut impl PointerSource) {
        let sample = source.sample();
        self.handle(sample);
    }

    /// Advance the gesture state machine by one pointer sample.
    pub fn handle(&mut self, sample: PointerSample) {
        match (self.state, sample) {
            (GestureState::Idle, PointerSample::Active { x, y }) => {
                if let Some(p) = self.to_canvas(x, y) {
                    self.start_stroke(p);
                }
            }
            (GestureState::Dragging { last }, PointerSample::Active { x, y }) => {
                match self.to_canvas(x, y) {
                    Some(q) => self.extend_stroke(last, q),
                    // Leaving the region ends the gesture like a release.
                    None => self.finish_stroke(),
                }
            }
            (GestureState::Dragging { .. }, _) => self.finish_stroke(),
            (GestureState::Idle, _) => {}
        }
    }

    fn to_canvas(&self, x: f32, y: f32) -> Option<StrokePoint> {
        self.region.to_canvas(x, y, self.canvas.width(), self.canvas.height())
    }

    fn start_stroke(&mut self, p: StrokePoint) {
        // Color and radius are sampled once here and fixed for the gesture.
        let color = self.paint.effective_color();
        let radius = self.paint.radius();
        if !self.recorder.begin(color, radius) {
            return;
        }
        self.state = GestureState::Dragging { last: p };
        self.extend_stroke(p, p);
    }

    fn extend_stroke(&mut self, from: StrokePoint, to: StrokePoint) {
        let Some(stroke) = self.recorder.current_mut() else {
            return;
        };
        let (radius, color) = (stroke.radius(), stroke.color());
        brush::rasterize_segment(&mut self.canvas, from, to, radius, color, stroke);
        self.canvas.commit();
        self.state = GestureState::Dragging { last: to };
    }

    fn finish_stroke(&mut self) {
        if let Some(stroke) = self.recorder.finish() {
            self.history.push(stroke);
        }
        self.state = GestureState::Idle;
    }

    /// Remove the most recent stroke and rebuild the canvas without it.
    /// Returns false if there was nothing to undo.
    pub fn undo_last(&mut self) -> bool {
        if self.history.pop_last().is_none() {
            return false;
        }
        debug!(remaining = self.history.len(), "undo");
        self.redraw();
        true
    }

    /// Clear the canvas and replay every stroke in history, then any stroke
    /// still being drawn so it stays visible.
    pub fn redraw(&mut self) {
        self.history.redraw(&mut self.canvas);
        if let Some(open) = self.recorder.current() {
            brush::replay_points(&mut self.canvas, open.points(), open.radius(), open.color());
            self.canvas.commit();
        }
    }

    pub fn set_color(&mut self, c: Rgba) {
        self.paint.set_color(c);
    }

    pub fn toggle_eraser(&mut self) {
        self.paint.toggle_eraser();
    }

    /// Takes effect from the next stroke; an open stroke keeps its radius.
    pub fn set_brush_radius(&mut self, radius: u32) {
        self.paint.set_radius(radius);
    }

    pub fn begin_brush_adjust(&mut self) {
        self.paint.begin_brush_adjust();
    }

    pub fn end_brush_adjust(&mut self, delay: Duration, now: Instant) {
        self.paint.end_brush_adjust(delay, now);
    }

    /// Per-frame housekeeping: fires a due color restoration.
    pub fn tick(&mut self, now: Instant) {
        self.paint.tick(now);
    }
}
