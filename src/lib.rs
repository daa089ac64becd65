//! Terminal grid renderer and update-coalescing engine
//!
//! `termgrid` turns a character grid owned by an external terminal engine
//! into a minimal set of pixel-region repaints. It keeps no copy of the
//! grid: each engine notification triggers a dirty-rectangle computation
//! and a repaint request to the host toolkit, and each paint callback
//! re-reads the grid and re-chunks the affected rows into
//! homogeneously-styled runs.
//!
//! - `render::map`: grid-to-pixel coordinate mapping, with a fallback for
//!   platforms whose monospace metrics cannot be trusted
//! - `render::chunk`: run-length chunking of one row
//! - `render::dirty`: dirty-region computation
//! - `render::blink`: the cursor blink state machine
//! - `render::resize`: visible/scrollback split recomputation
//! - `view`: the [`view::TermView`] tying the pieces together
//!
//! The terminal engine and the host toolkit are reached only through the
//! [`engine::TerminalEngine`], [`host::ViewHost`], and
//! [`host::DrawSurface`] traits.

pub mod config;
pub mod engine;
pub mod geometry;
pub mod host;
pub mod input;
pub mod metrics;
pub mod render;
pub mod style;
pub mod view;

pub use config::{Config, ConfigError};
pub use engine::{EngineEvent, SpecialKey, TerminalEngine};
pub use geometry::{GridRegion, PixelRect, ViewportGeometry};
pub use host::{DrawSurface, ViewHost};
pub use input::KeyInput;
pub use metrics::{FixedMetrics, FontMetrics};
pub use render::{
    chunk_line, effective_colors, mark_dirty, BlinkPhase, CoordinateMapper, CursorBlink,
    GeometryError, StyleRun,
};
pub use style::{AttrFlags, Rgb};
pub use view::TermView;
