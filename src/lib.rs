//! Freehand raster sketchpad.
//!
//! Pointer samples are turned into strokes on an in-memory RGBA canvas. Each
//! finished stroke is kept in an ordered history; undo drops the last one and
//! rebuilds the canvas by replaying the rest, so no pixel snapshots are stored.

pub mod brush;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod paint;
pub mod session;
pub mod stroke;
pub mod types;

pub use canvas::Canvas;
pub use error::Error;
pub use input::{DrawRegion, PointerSample, PointerSource, ScriptedSource};
pub use paint::PaintState;
pub use session::{GestureState, Session};
pub use stroke::{Stroke, StrokeHistory};
pub use types::{Rgba, StrokePoint};
