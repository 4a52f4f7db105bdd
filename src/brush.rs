// Brush rasterizer: opaque disc stamps, and segments drawn as a run of
// overlapping stamps spaced at most one pixel apart.

#[cfg(test)]
#[path = "brush_test.rs"]
mod brush_test;

use crate::canvas::Canvas;
use crate::stroke::Stroke;
use crate::types::{Rgba, StrokePoint};

/// Fill every pixel within `radius` of (cx, cy). Radius 0 is a single pixel.
///
/// Pixels outside the canvas clamp onto the nearest edge, so each canvas row
/// receives one contiguous span: the widest chord among the disc rows that
/// clamp onto it. Only canvas rows are visited, which keeps huge radii cheap.
pub fn stamp_disc(canvas: &mut Canvas, cx: i32, cy: i32, radius: u32, color: Rgba) {
    let r = i64::from(radius);
    let r2 = u64::from(radius) * u64::from(radius);
    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let last_row = i64::from(canvas.height()) - 1;
    let last_col = i64::from(canvas.width()) - 1;

    for y in 0..=last_row {
        // Disc rows (offsets from cy) that clamp onto canvas row y.
        let lo = if y == 0 { -r } else { (y - cy).max(-r) };
        let hi = if y == last_row { r } else { (y - cy).min(r) };
        if lo > hi {
            continue;
        }
        let dy = 0.clamp(lo, hi).unsigned_abs();
        let half = (r2 - dy * dy).isqrt() as i64;
        let x0 = (cx - half).clamp(0, last_col);
        let x1 = (cx + half).clamp(0, last_col);
        for x in x0..=x1 {
            canvas.set_pixel(x as i32, y as i32, color);
        }
    }
}

/// Stamp discs along p0 → p1 and push every stamped point into `sink`.
///
/// The step count is the pixel distance rounded up (never below 1), so the
/// stamps stay contiguous no matter how far the pointer moved between
/// samples. Both endpoints are stamped.
pub fn rasterize_segment<S>(
    canvas: &mut Canvas,
    p0: StrokePoint,
    p1: StrokePoint,
    radius: u32,
    color: Rgba,
    sink: &mut S,
) where
    S: Extend<StrokePoint>,
{
    let dx = (p1.x - p0.x) as f32;
    let dy = (p1.y - p0.y) as f32;
    let steps = ((dx * dx + dy * dy).sqrt().ceil() as i32).max(1);

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = (p0.x as f32 + dx * t) as i32;
        let y = (p0.y as f32 + dy * t) as i32;
        stamp_disc(canvas, x, y, radius, color);
        sink.extend(std::iter::once(StrokePoint::new(x, y)));
    }
}

/// Re-stamp a sealed stroke. Its points were recorded densely, so stamping
/// each one reproduces the live-drawn pixels exactly.
pub fn replay_stroke(canvas: &mut Canvas, stroke: &Stroke) {
    replay_points(canvas, stroke.points(), stroke.radius(), stroke.color());
}

pub fn replay_points(canvas: &mut Canvas, points: &[StrokePoint], radius: u32, color: Rgba) {
    for p in points {
        stamp_disc(canvas, p.x, p.y, radius, color);
    }
}
