// Whole-session properties: painted pixels match the stamped path, undo is an
// exact inverse, and replaying history is stable.

use std::collections::HashSet;

use sketchpad::{Canvas, DrawRegion, PaintState, PointerSample, Rgba, ScriptedSource, Session};

const W: u32 = 48;
const H: u32 = 32;

/// Deterministic xorshift32 so every run sees the same paths.
struct Rng32 {
    state: u32,
}

impl Rng32 {
    fn from_seed(seed: u32) -> Self {
        Self { state: seed | 1 }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}

fn session(radius: u32) -> Session {
    let canvas = Canvas::new(W, H, Rgba::WHITE);
    let paint = PaintState::new(Rgba::BLACK, Rgba::WHITE, radius);
    Session::new(canvas, paint, DrawRegion::new(0.0, 0.0, W as f32, H as f32))
}

fn random_path(rng: &mut Rng32, len: usize) -> Vec<(i32, i32)> {
    (0..len).map(|_| (rng.below(W) as i32, rng.below(H) as i32)).collect()
}

fn play(s: &mut Session, path: &[(i32, i32)]) {
    let mut src = ScriptedSource::drag(
        &path.iter().map(|&(x, y)| (x as f32 + 0.5, y as f32 + 0.5)).collect::<Vec<_>>(),
    );
    while src.remaining() > 0 {
        s.poll(&mut src);
    }
}

/// Pixels covered by discs of `radius` at every interpolated point of `path`,
/// computed independently of the brush module.
fn expected_cover(path: &[(i32, i32)], radius: i32) -> HashSet<(i32, i32)> {
    let mut centers = vec![path[0]];
    for w in path.windows(2) {
        let ((x0, y0), (x1, y1)) = (w[0], w[1]);
        let (dx, dy) = ((x1 - x0) as f32, (y1 - y0) as f32);
        let steps = ((dx * dx + dy * dy).sqrt().ceil() as i32).max(1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            centers.push(((x0 as f32 + dx * t) as i32, (y0 as f32 + dy * t) as i32));
        }
    }

    let mut cover = HashSet::new();
    for (cx, cy) in centers {
        for y in -radius..=radius {
            for x in -radius..=radius {
                if x * x + y * y <= radius * radius {
                    cover.insert(((cx + x).clamp(0, W as i32 - 1), (cy + y).clamp(0, H as i32 - 1)));
                }
            }
        }
    }
    cover
}

fn painted(s: &Session) -> HashSet<(i32, i32)> {
    let c = s.canvas();
    let mut out = HashSet::new();
    for y in 0..H as i32 {
        for x in 0..W as i32 {
            if c.pixel(x, y) != Rgba::WHITE {
                out.insert((x, y));
            }
        }
    }
    out
}

#[test]
fn painted_pixels_are_union_of_path_discs() {
    let mut rng = Rng32::from_seed(0xC0FFEE);
    for radius in [0, 1, 3] {
        for _ in 0..8 {
            let mut s = session(radius);
            let path = random_path(&mut rng, 6);
            play(&mut s, &path);
            assert_eq!(painted(&s), expected_cover(&path, radius as i32), "radius {radius}, path {path:?}");
        }
    }
}

#[test]
fn undo_restores_canvas_from_before_each_stroke() {
    let mut rng = Rng32::from_seed(7);
    let palette = [Rgba::rgb(200, 0, 0), Rgba::rgb(0, 150, 0), Rgba::rgb(0, 0, 220)];
    let mut s = session(2);
    let mut before = Vec::new();

    for i in 0..10 {
        before.push(s.canvas().image().clone());
        s.set_color(palette[i % palette.len()]);
        s.set_brush_radius(rng.below(4));
        if i % 4 == 3 {
            s.toggle_eraser();
        }
        let len = 1 + rng.below(5) as usize;
        let path = random_path(&mut rng, len);
        play(&mut s, &path);
    }
    assert_eq!(s.history().len(), 10);

    while let Some(expected) = before.pop() {
        assert!(s.undo_last());
        assert_eq!(s.canvas().image(), &expected, "after undo, {} strokes left", s.history().len());
    }
    assert!(!s.undo_last());
}

#[test]
fn replaying_history_reproduces_canvas() {
    let mut rng = Rng32::from_seed(99);
    let mut s = session(1);
    for i in 0..6 {
        s.set_brush_radius(i % 3);
        let path = random_path(&mut rng, 4);
        play(&mut s, &path);
    }
    let current = s.canvas().image().clone();
    for _ in 0..3 {
        s.redraw();
        assert_eq!(s.canvas().image(), &current);
    }
}

#[test]
fn drag_entirely_outside_changes_nothing() {
    let mut s = session(2);
    play(&mut s, &[(3, 3)]);
    let before = s.canvas().image().clone();

    for sample in [
        PointerSample::Active { x: -5.0, y: 4.0 },
        PointerSample::Active { x: W as f32 + 1.0, y: 4.0 },
        PointerSample::Active { x: 10.0, y: H as f32 },
        PointerSample::Released,
    ] {
        s.handle(sample);
    }
    assert_eq!(s.history().len(), 1);
    assert_eq!(s.canvas().image(), &before);
}

#[test]
fn four_by_four_single_pixel_scenario() {
    let canvas = Canvas::new(4, 4, Rgba::WHITE);
    let paint = PaintState::new(Rgba::rgb(255, 0, 0), Rgba::WHITE, 0);
    let mut s = Session::new(canvas, paint, DrawRegion::new(0.0, 0.0, 4.0, 4.0));

    s.handle(PointerSample::Active { x: 1.5, y: 1.5 });
    s.handle(PointerSample::Released);
    for y in 0..4 {
        for x in 0..4 {
            let want = if (x, y) == (1, 1) { Rgba::rgb(255, 0, 0) } else { Rgba::WHITE };
            assert_eq!(s.canvas().pixel(x, y), want, "({x},{y})");
        }
    }
    assert_eq!(s.history().len(), 1);

    s.undo_last();
    assert!(s.canvas().image().pixels().all(|p| p.0 == [255, 255, 255, 255]));
}
