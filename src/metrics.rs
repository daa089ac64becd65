//! Font metrics boundary
//!
//! The renderer never talks to a font library directly; the host supplies
//! measurements through [`FontMetrics`]. `max_advance` exists because at
//! least one platform reports 0 there while per-string measurement still
//! works, which is what the fallback coordinate mode keys off.

/// Pixel measurements of the active font.
pub trait FontMetrics {
    /// Advance width of `' '`, the nominal cell width.
    fn cell_width(&self) -> usize;

    /// Line spacing, the cell height.
    fn cell_height(&self) -> usize;

    /// Descent below the text baseline.
    fn descent(&self) -> usize;

    /// Widest glyph advance, or 0 when the platform cannot say.
    fn max_advance(&self) -> usize;

    /// Pixel width of `text` as rendered.
    fn text_width(&self, text: &str) -> usize;
}

/// Ideal monospace metrics backed by the Unicode width tables.
///
/// Used by tests and benches, and usable by hosts that rasterize on a
/// strict cell grid themselves.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    cell_width: usize,
    cell_height: usize,
    descent: usize,
}

impl FixedMetrics {
    pub fn new(cell_width: usize, cell_height: usize, descent: usize) -> Self {
        Self {
            cell_width,
            cell_height,
            descent,
        }
    }
}

impl FontMetrics for FixedMetrics {
    fn cell_width(&self) -> usize {
        self.cell_width
    }

    fn cell_height(&self) -> usize {
        self.cell_height
    }

    fn descent(&self) -> usize {
        self.descent
    }

    fn max_advance(&self) -> usize {
        self.cell_width
    }

    fn text_width(&self, text: &str) -> usize {
        use unicode_width::UnicodeWidthStr;
        text.width() * self.cell_width
    }
}
