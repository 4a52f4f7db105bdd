// What you get:
// • A white canvas the size of the window.
// • Hold Left Mouse to paint; the brush ring follows the cursor.
// • 1-8 pick a color, E toggles the eraser, Z / Backspace undoes the last stroke.
// • Mouse wheel or [ / ] change the brush radius. Esc quits.

use std::time::{Duration, Instant};

use clap::Parser;
use tracing::{info, trace};

use sketchpad::config::Config;
use sketchpad::draw::{draw_brush_cursor, draw_swatch, Drawer};
use sketchpad::types::FrameBuffer;
use sketchpad::{Canvas, DrawRegion, Error, PaintState, Session};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    config.validate()?;
    let background = config.background_color()?;
    let color = config.paint_color()?;
    let restore_delay = config.restore_delay();

    /* --- Window + session setup ---
       The canvas is sized once to the window and never resized. */
    let (w, h) = (config.width, config.height);
    let mut drawer = Drawer::new(&config.title, w as usize, h as usize)?;
    let canvas = Canvas::new(w, h, background);
    let paint = PaintState::new(color, background, config.radius);
    let region = DrawRegion::new(0.0, 0.0, w as f32, h as f32);
    let mut session = Session::new(canvas, paint, region);
    info!(width = w, height = h, radius = config.radius, "sketchpad ready");

    /* --- Reusable buffers ---
       `base` mirrors the canvas and is only re-packed after a commit;
       `screen` is base + overlays, rebuilt every frame. */
    let mut base = FrameBuffer::new(w as usize, h as usize);
    let mut screen = FrameBuffer::new(w as usize, h as usize);
    let mut packed_generation = None;

    let mut adjusting_radius = false;
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) UI actions */
        if let Some(c) = drawer.palette_pressed() {
            session.set_color(c);
        }
        if drawer.eraser_pressed() {
            session.toggle_eraser();
        }
        if drawer.undo_pressed() {
            session.undo_last();
        }

        // Brush size: adjusting while input keeps coming, released after the
        // delay once it stops.
        let delta = drawer.radius_delta();
        if delta != 0 {
            session.begin_brush_adjust();
            let radius = session.paint().radius() as i32 + delta;
            session.set_brush_radius(radius.clamp(0, config.max_radius as i32) as u32);
            adjusting_radius = true;
        } else if adjusting_radius {
            session.end_brush_adjust(restore_delay, now);
            adjusting_radius = false;
        }
        session.tick(now);

        /* 2) Pointer */
        session.poll(&mut drawer.mouse());

        /* 3) Compose: canvas, then overlays */
        let generation = session.canvas().generation();
        if packed_generation != Some(generation) {
            session.canvas().pack_into(&mut base);
            packed_generation = Some(generation);
        }
        screen.pixels.copy_from_slice(&base.pixels);

        let paint = session.paint();
        draw_swatch(&mut screen, paint.effective_color(), paint.is_eraser());
        if let Some((mx, my)) = drawer.mouse_pos() {
            draw_brush_cursor(&mut screen, mx as i32, my as i32, paint.radius());
        }

        /* 4) Present */
        drawer.present(&screen)?;

        /* 5) FPS, once per second at trace level */
        frames_this_second += 1;
        let elapsed = now.duration_since(last_fps_time);
        if elapsed >= Duration::from_secs(1) {
            let fps = frames_this_second as f32 / elapsed.as_secs_f32();
            trace!(strokes = session.history().len(), "FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
