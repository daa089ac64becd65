//! Run-length chunking of a row
//!
//! Partitions one character row into maximal spans sharing attribute,
//! color, and cursor-highlight state. Pure functions of engine-provided
//! state; no history is held, so different rows can be chunked in any
//! order.

use crate::style::{AttrFlags, Rgb};

/// A maximal contiguous span of columns sharing rendering state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRun {
    pub attrs: AttrFlags,
    pub color: u8,
    /// The blinking cursor sits on this run (always a single cell)
    pub on_cursor: bool,
    /// First column, inclusive
    pub start: usize,
    /// Last column, exclusive
    pub end: usize,
}

impl StyleRun {
    pub fn width(&self) -> usize {
        self.end - self.start
    }
}

/// Partition `[0, cols)` into style runs.
///
/// `cursor_col` is the cursor's column when the cursor is visible and on
/// this row, `None` otherwise. Cells beyond the provided attribute/color
/// slices take default values, so short engine rows still chunk cleanly.
pub fn chunk_line(
    attrs: &[AttrFlags],
    colors: &[u8],
    cursor_col: Option<usize>,
    cols: usize,
) -> Vec<StyleRun> {
    let mut runs = Vec::new();
    if cols == 0 {
        return runs;
    }

    let cell = |col: usize| -> (AttrFlags, u8, bool) {
        (
            attrs.get(col).copied().unwrap_or_default(),
            colors.get(col).copied().unwrap_or_default(),
            cursor_col == Some(col),
        )
    };

    let mut start = 0;
    let mut current = cell(0);
    for col in 1..cols {
        let next = cell(col);
        if next != current {
            runs.push(StyleRun {
                attrs: current.0,
                color: current.1,
                on_cursor: current.2,
                start,
                end: col,
            });
            start = col;
            current = next;
        }
    }
    runs.push(StyleRun {
        attrs: current.0,
        color: current.1,
        on_cursor: current.2,
        start,
        end: cols,
    });
    runs
}

/// Resolved colors for one run.
///
/// Cursor highlight wins: the cell renders inverted, background as
/// foreground. Otherwise reverse video swaps the pair; otherwise the
/// resolved colors pass through.
pub fn effective_colors(fg: Rgb, bg: Rgb, attrs: AttrFlags, on_cursor: bool) -> (Rgb, Rgb) {
    if on_cursor {
        (bg, fg)
    } else if attrs.contains(AttrFlags::REVERSE) {
        (bg, fg)
    } else {
        (fg, bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn flags(bits: u32) -> AttrFlags {
        AttrFlags::from_bits_truncate(bits)
    }

    #[test]
    fn test_uniform_row_is_one_run() {
        let attrs = vec![AttrFlags::empty(); 10];
        let colors = vec![7u8; 10];
        let runs = chunk_line(&attrs, &colors, None, 10);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].start, 0);
        assert_eq!(runs[0].end, 10);
        assert_eq!(runs[0].color, 7);
    }

    #[test]
    fn test_attribute_change_splits_runs() {
        // Columns 0-4 attribute A, columns 5-9 attribute B: exactly two runs
        let mut attrs = vec![AttrFlags::empty(); 10];
        for a in attrs.iter_mut().skip(5) {
            *a = AttrFlags::UNDERLINE;
        }
        let colors = vec![0u8; 10];
        let runs = chunk_line(&attrs, &colors, None, 10);
        assert_eq!(runs.len(), 2);
        assert_eq!((runs[0].start, runs[0].end), (0, 5));
        assert_eq!((runs[1].start, runs[1].end), (5, 10));
        assert_eq!(runs[1].attrs, AttrFlags::UNDERLINE);
    }

    #[test]
    fn test_cursor_cell_is_own_run() {
        let attrs = vec![AttrFlags::empty(); 8];
        let colors = vec![0u8; 8];
        let runs = chunk_line(&attrs, &colors, Some(3), 8);
        assert_eq!(runs.len(), 3);
        assert_eq!((runs[0].start, runs[0].end), (0, 3));
        assert!((runs[1].start, runs[1].end) == (3, 4) && runs[1].on_cursor);
        assert_eq!((runs[2].start, runs[2].end), (4, 8));
        assert!(!runs[0].on_cursor && !runs[2].on_cursor);
    }

    #[test]
    fn test_cursor_at_row_start() {
        let runs = chunk_line(&[], &[], Some(0), 4);
        assert_eq!(runs.len(), 2);
        assert!(runs[0].on_cursor);
        assert_eq!((runs[0].start, runs[0].end), (0, 1));
    }

    #[test]
    fn test_zero_columns_yields_no_runs() {
        assert!(chunk_line(&[], &[], None, 0).is_empty());
    }

    #[test]
    fn test_short_slices_extend_with_defaults() {
        let attrs = vec![AttrFlags::BOLD; 2];
        let colors = vec![1u8; 2];
        let runs = chunk_line(&attrs, &colors, None, 6);
        assert_eq!(runs.len(), 2);
        assert_eq!((runs[0].start, runs[0].end), (0, 2));
        assert_eq!((runs[1].start, runs[1].end), (2, 6));
        assert_eq!(runs[1].attrs, AttrFlags::empty());
        assert_eq!(runs[1].color, 0);
    }

    #[test]
    fn test_effective_colors_precedence() {
        let fg = Rgb::new(1, 2, 3);
        let bg = Rgb::new(4, 5, 6);
        assert_eq!(effective_colors(fg, bg, AttrFlags::empty(), false), (fg, bg));
        assert_eq!(effective_colors(fg, bg, AttrFlags::REVERSE, false), (bg, fg));
        assert_eq!(effective_colors(fg, bg, AttrFlags::empty(), true), (bg, fg));
        // Cursor highlight over an already-reversed cell still inverts once
        assert_eq!(effective_colors(fg, bg, AttrFlags::REVERSE, true), (bg, fg));
    }

    proptest! {
        /// Runs partition [0, cols) exactly: contiguous, no gaps, no
        /// overlaps, and each run is maximal.
        #[test]
        fn prop_runs_partition_row(
            attr_bits in proptest::collection::vec(0u32..16, 0..64),
            colors in proptest::collection::vec(0u8..8, 0..64),
            cols in 1usize..64,
            cursor in proptest::option::of(0usize..64),
        ) {
            let attrs: Vec<AttrFlags> = attr_bits.iter().map(|&b| flags(b)).collect();
            let runs = chunk_line(&attrs, &colors, cursor, cols);

            prop_assert!(!runs.is_empty());
            prop_assert_eq!(runs[0].start, 0);
            prop_assert_eq!(runs[runs.len() - 1].end, cols);
            let total: usize = runs.iter().map(|r| r.width()).sum();
            prop_assert_eq!(total, cols);
            for pair in runs.windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
                // Adjacent runs must differ in at least one component,
                // otherwise the run was not maximal
                prop_assert!(
                    pair[0].attrs != pair[1].attrs
                        || pair[0].color != pair[1].color
                        || pair[0].on_cursor != pair[1].on_cursor
                );
            }
        }
    }
}
