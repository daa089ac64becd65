//! Dirty-region computation
//!
//! Stateless: a grid-space change report either converts to a pixel
//! rectangle or is dropped, and repeated calls with the same arguments
//! produce the same answer. Negative origins are dropped rather than
//! clamped; the engine can report transient out-of-range deltas while a
//! resize is in flight, and clamping would repaint unrelated screen area.

use tracing::trace;

use crate::geometry::{GridRegion, PixelRect};
use crate::render::map::CoordinateMapper;

/// Convert a grid-space change into the pixel rectangle needing repaint.
///
/// Returns `None` for regions with a negative origin or no area. `line_of`
/// maps a visible row index to its text; it is consulted only when the
/// mapper is in fallback mode.
pub fn mark_dirty<'a, F>(
    region: GridRegion,
    mapper: &CoordinateMapper,
    scrollback_rows: usize,
    line_of: F,
) -> Option<PixelRect>
where
    F: Fn(usize) -> &'a str,
{
    let Some(valid) = region.validate() else {
        trace!(?region, "dropping region with negative origin");
        return None;
    };
    if valid.cols == 0 || valid.rows == 0 {
        return None;
    }
    let rect = mapper.region_rect(valid, scrollback_rows, line_of);
    trace!(?region, ?rect, "grid region converted to pixel rect");
    Some(rect)
}
