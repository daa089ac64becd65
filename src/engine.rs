//! Terminal engine boundary
//!
//! The engine owns the character, attribute, and color buffers plus the
//! child-process I/O. The renderer holds no copy of any of it: every
//! notification triggers a fresh read through this trait.
//!
//! Rows are indexed `0..total_rows` with scrollback rows first, then the
//! visible region. Cursor positions and change regions use visible-space
//! row numbers; callers add `scrollback_rows` when they need an engine row.

use crate::geometry::GridRegion;
use crate::style::{AttrFlags, Rgb};

/// Keys forwarded to the engine as key events rather than bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
    Up,
    Down,
    Left,
    Right,
}

/// Notifications the engine raises.
///
/// The host wires these up once at construction and forwards each to
/// [`crate::view::TermView::handle_event`] on the UI thread, in arrival
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// A grid region's content changed (visible-space coordinates).
    ContentChanged(GridRegion),
    /// The cursor moved from `old` to `new` (visible-space coordinates).
    CursorMoved {
        old: (isize, isize),
        new: (isize, isize),
    },
    /// The bell rang.
    Bell,
}

/// Read and control interface of the external terminal engine.
pub trait TerminalEngine {
    /// Text of one engine row.
    fn line(&self, row: usize) -> &str;

    /// Attribute bitmask of each cell in one engine row.
    fn attrs(&self, row: usize) -> &[AttrFlags];

    /// Color index of each cell in one engine row.
    fn colors(&self, row: usize) -> &[u8];

    /// Cursor position as visible-space `(col, row)`.
    fn cursor_position(&self) -> (usize, usize);

    /// Grid dimensions as `(columns, total_rows)`.
    fn grid_size(&self) -> (usize, usize);

    /// Change the grid layout. `visible_rows + scrollback_rows` is the
    /// new total row count.
    fn resize(&mut self, columns: usize, visible_rows: usize, scrollback_rows: usize);

    /// Resolve the foreground color for an attribute/color pair.
    fn foreground(&self, attrs: AttrFlags, color: u8) -> Rgb;

    /// Resolve the background color for an attribute/color pair.
    fn background(&self, attrs: AttrFlags, color: u8) -> Rgb;

    /// Send raw bytes to the child process.
    fn send_input(&mut self, data: &[u8]);

    /// Send a non-printable key to the child process.
    fn send_key(&mut self, key: SpecialKey);
}
