//! Rendering core
//!
//! The five cooperating pieces that turn engine state into pixel-region
//! repaints:
//!
//! - `map`: grid-to-pixel coordinate mapping
//! - `chunk`: run-length chunking of one row
//! - `dirty`: dirty-region computation
//! - `blink`: the cursor blink state machine
//! - `resize`: visible/scrollback split recomputation

pub mod blink;
pub mod chunk;
pub mod dirty;
pub mod map;
pub mod resize;

pub use blink::{BlinkFire, BlinkPhase, CursorBlink};
pub use chunk::{chunk_line, effective_colors, StyleRun};
pub use dirty::mark_dirty;
pub use map::CoordinateMapper;
pub use resize::{compute_columns, compute_geometry, GeometryError};
