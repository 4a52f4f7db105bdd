use super::*;
use crate::brush::rasterize_segment;

const RED: Rgba = Rgba::rgb(255, 0, 0);
const BLUE: Rgba = Rgba::rgb(0, 0, 255);

fn stroke(color: Rgba, radius: u32, points: &[(i32, i32)]) -> Stroke {
    let mut b = StrokeBuilder::new(color, radius);
    b.extend(points.iter().map(|&(x, y)| StrokePoint::new(x, y)));
    b.finish().expect("non-empty")
}

// =============================================================
// StrokeBuilder
// =============================================================

#[test]
fn builder_keeps_insertion_order() {
    let s = stroke(RED, 1, &[(3, 3), (0, 0), (2, 1)]);
    assert_eq!(s.points(), &[StrokePoint::new(3, 3), StrokePoint::new(0, 0), StrokePoint::new(2, 1)]);
    assert_eq!(s.color(), RED);
    assert_eq!(s.radius(), 1);
}

#[test]
fn builder_skips_only_adjacent_repeats() {
    let s = stroke(RED, 0, &[(1, 1), (1, 1), (2, 1), (1, 1)]);
    assert_eq!(s.points(), &[StrokePoint::new(1, 1), StrokePoint::new(2, 1), StrokePoint::new(1, 1)]);
}

#[test]
fn empty_builder_does_not_seal() {
    let b = StrokeBuilder::new(RED, 3);
    assert!(b.is_empty());
    assert!(b.finish().is_none());
}

// =============================================================
// StrokeRecorder
// =============================================================

#[test]
fn begin_while_recording_is_refused() {
    let mut r = StrokeRecorder::new();
    assert!(r.begin(RED, 2));
    assert!(!r.begin(BLUE, 5));
    let open = r.current().expect("open stroke");
    assert_eq!((open.color(), open.radius()), (RED, 2));
}

#[test]
fn finish_seals_recorded_points() {
    let mut r = StrokeRecorder::new();
    r.begin(RED, 0);
    r.current_mut().expect("open").push(StrokePoint::new(1, 2));
    let s = r.finish().expect("sealed");
    assert_eq!(s.points(), &[StrokePoint::new(1, 2)]);
    assert!(!r.is_recording());
}

#[test]
fn finish_discards_empty_stroke_and_clears_slot() {
    let mut r = StrokeRecorder::new();
    r.begin(RED, 0);
    assert!(r.finish().is_none());
    assert!(!r.is_recording());
    assert!(r.begin(BLUE, 1));
}

#[test]
fn finish_without_begin_is_noop() {
    let mut r = StrokeRecorder::new();
    assert!(r.finish().is_none());
}

// =============================================================
// StrokeHistory
// =============================================================

#[test]
fn history_push_and_pop_last() {
    let mut h = StrokeHistory::new();
    assert!(h.pop_last().is_none());
    h.push(stroke(RED, 0, &[(0, 0)]));
    h.push(stroke(BLUE, 0, &[(1, 1)]));
    assert_eq!(h.len(), 2);
    assert_eq!(h.pop_last().map(|s| s.color()), Some(BLUE));
    assert_eq!(h.strokes().len(), 1);
    assert_eq!(h.strokes()[0].color(), RED);
}

#[test]
fn redraw_matches_live_drawing_in_order() {
    let mut live = Canvas::new(8, 8, Rgba::WHITE);
    let mut h = StrokeHistory::new();

    // Red then blue crossing over it; blue must stay on top after redraw.
    for (color, radius, a, b) in [(RED, 1, (0, 3), (7, 3)), (BLUE, 0, (3, 0), (3, 7))] {
        let mut builder = StrokeBuilder::new(color, radius);
        let (a, b) = (StrokePoint::new(a.0, a.1), StrokePoint::new(b.0, b.1));
        rasterize_segment(&mut live, a, b, radius, color, &mut builder);
        h.push(builder.finish().expect("points"));
    }

    let mut rebuilt = Canvas::new(8, 8, Rgba::WHITE);
    rebuilt.set_pixel(5, 5, Rgba::BLACK);
    h.redraw(&mut rebuilt);
    assert_eq!(rebuilt.image(), live.image());
    assert_eq!(rebuilt.pixel(3, 3), BLUE);
}

#[test]
fn redraw_of_empty_history_is_background() {
    let mut c = Canvas::new(3, 3, Rgba::WHITE);
    c.set_pixel(1, 1, RED);
    StrokeHistory::new().redraw(&mut c);
    assert_eq!(c.pixel(1, 1), Rgba::WHITE);
}
