//! Grid-to-pixel coordinate mapping
//!
//! In the common case every cell sits on a strict `cell_width` x
//! `cell_height` grid. Some platforms report unusable monospace metrics
//! (a zero max advance, or a zero cell width) even for fixed-pitch
//! fonts, while per-string measurement still works; the mapper probes
//! for that once at construction and, in that fallback mode, positions
//! cells by measuring rendered prefixes of the actual line text.

use tracing::debug;

use crate::geometry::{PixelRect, ValidRegion};
use crate::metrics::FontMetrics;

/// The first `cols` characters of `line`. Lines are one character per
/// column, so prefixes can be taken by char count.
fn prefix(line: &str, cols: usize) -> &str {
    match line.char_indices().nth(cols) {
        Some((i, _)) => &line[..i],
        None => line,
    }
}

/// Converts between grid cell indices and pixel rectangles.
pub struct CoordinateMapper {
    metrics: Box<dyn FontMetrics>,
    fallback: bool,
}

impl CoordinateMapper {
    /// Probes the metrics once; the mode is fixed for the mapper's
    /// lifetime.
    pub fn new(metrics: Box<dyn FontMetrics>) -> Self {
        let fallback = metrics.max_advance() == 0 || metrics.cell_width() == 0;
        if fallback {
            debug!("font reports degenerate advance; using measured-width coordinates");
        }
        Self { metrics, fallback }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn cell_width(&self) -> usize {
        self.metrics.cell_width()
    }

    pub fn cell_height(&self) -> usize {
        self.metrics.cell_height()
    }

    pub fn descent(&self) -> usize {
        self.metrics.descent()
    }

    /// X origin of `col` within `line`.
    pub fn cell_origin_x(&self, col: usize, line: &str) -> usize {
        if self.fallback {
            self.metrics.text_width(prefix(line, col))
        } else {
            col * self.metrics.cell_width()
        }
    }

    /// Pixel width of the span `[start, end)` within `line`.
    pub fn span_width(&self, start: usize, end: usize, line: &str) -> usize {
        if self.fallback {
            let left = self.metrics.text_width(prefix(line, start));
            let right = self.metrics.text_width(prefix(line, end));
            right.saturating_sub(left)
        } else {
            (end - start) * self.metrics.cell_width()
        }
    }

    /// Pixel rectangle of a single cell. `row` is visible-space; the
    /// scrollback rows above the viewport shift everything down.
    pub fn cell_rect(
        &self,
        col: usize,
        row: usize,
        scrollback_rows: usize,
        line: &str,
    ) -> PixelRect {
        let cell_height = self.metrics.cell_height();
        let y = (row + scrollback_rows) * cell_height;
        let x = self.cell_origin_x(col, line);
        let mut width = self.span_width(col, col + 1, line);
        if width == 0 {
            // Past the end of the measured text; use the nominal advance
            width = self.metrics.cell_width();
        }
        PixelRect::new(x, y, width, cell_height)
    }

    /// Pixel rectangle of a grid region. `line_of` maps a visible row
    /// index to its text, consulted only in fallback mode.
    pub fn region_rect<'a, F>(
        &self,
        region: ValidRegion,
        scrollback_rows: usize,
        line_of: F,
    ) -> PixelRect
    where
        F: Fn(usize) -> &'a str,
    {
        let cell_height = self.metrics.cell_height();
        let y = (region.row + scrollback_rows) * cell_height;
        let height = region.rows * cell_height;

        if self.fallback {
            let mut x_min = usize::MAX;
            let mut x_max = 0;
            for row in region.row..region.row + region.rows {
                let line = line_of(row);
                x_min = x_min.min(self.metrics.text_width(prefix(line, region.col)));
                x_max = x_max.max(
                    self.metrics
                        .text_width(prefix(line, region.col + region.cols)),
                );
            }
            if x_min == usize::MAX {
                x_min = 0;
            }
            PixelRect::new(x_min, y, x_max.saturating_sub(x_min), height)
        } else {
            let cell_width = self.metrics.cell_width();
            PixelRect::new(region.col * cell_width, y, region.cols * cell_width, height)
        }
    }
}
