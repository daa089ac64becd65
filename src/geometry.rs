//! Grid and pixel geometry types
//!
//! Change reports arrive from the terminal engine in grid coordinates and
//! may carry transient negative origins during resize races; pixel-space
//! rectangles are what the host toolkit is asked to repaint.

use serde::{Deserialize, Serialize};

/// A rectangular region of grid cells, in visible-row coordinates.
///
/// The origin is signed because engine callbacks can legitimately report
/// out-of-range deltas while a resize is in flight. Such regions are
/// dropped by [`GridRegion::validate`], never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRegion {
    /// Leftmost column
    pub col: isize,
    /// Topmost row (visible-space)
    pub row: isize,
    /// Width in columns
    pub cols: usize,
    /// Height in rows
    pub rows: usize,
}

impl GridRegion {
    pub fn new(col: isize, row: isize, cols: usize, rows: usize) -> Self {
        Self {
            col,
            row,
            cols,
            rows,
        }
    }

    /// A 1x1 region covering a single cell.
    pub fn cell(col: isize, row: isize) -> Self {
        Self::new(col, row, 1, 1)
    }

    /// Reject a negative origin. Clamping instead would repaint screen
    /// area unrelated to the reported change.
    pub fn validate(self) -> Option<ValidRegion> {
        if self.col < 0 || self.row < 0 {
            return None;
        }
        Some(ValidRegion {
            col: self.col as usize,
            row: self.row as usize,
            cols: self.cols,
            rows: self.rows,
        })
    }
}

/// A grid region with a confirmed non-negative origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRegion {
    pub col: usize,
    pub row: usize,
    pub cols: usize,
    pub rows: usize,
}

/// A pixel-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl PixelRect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost pixel.
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottommost pixel.
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the horizontal band `[y0, y1)` overlaps this rectangle.
    pub fn intersects_band(&self, y0: usize, y1: usize) -> bool {
        y0 < self.bottom() && y1 > self.y
    }

    /// Whether `other` overlaps this rectangle.
    pub fn intersects(&self, other: &PixelRect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Pixel measurements of the viewport, derived from the active font and
/// container size. Recomputed whenever either changes.
///
/// Invariant: `total_rows == visible_rows + scrollback_rows`, with
/// `total_rows` fixed at the configured render-buffer depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportGeometry {
    /// Nominal cell width (advance of a space)
    pub cell_width: usize,
    /// Cell height (line spacing)
    pub cell_height: usize,
    /// Font descent below the baseline
    pub cell_descent: usize,
    /// Rows currently on screen
    pub visible_rows: usize,
    /// Rows of history held above the viewport
    pub scrollback_rows: usize,
    /// Total render buffer depth
    pub total_rows: usize,
}
