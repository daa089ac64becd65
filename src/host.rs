//! Host toolkit boundary
//!
//! The surrounding widget implements [`ViewHost`] so the renderer can ask
//! for repaints, and hands a [`DrawSurface`] to `paint` when the toolkit
//! delivers one.

use crate::geometry::PixelRect;
use crate::style::{AttrFlags, Rgb};

/// Hooks the surrounding widget provides to the renderer.
pub trait ViewHost {
    /// Ask the toolkit to repaint a pixel rectangle. Requests are not
    /// merged here; toolkit-side coalescing is assumed downstream.
    fn request_repaint(&mut self, rect: PixelRect);

    /// Content changed somewhere. Lets a scrolling container follow the
    /// output.
    fn grid_updated(&mut self);

    /// The bell rang; play whatever the platform plays.
    fn bell(&mut self);
}

/// Paint target for one `paint` call.
///
/// `draw_text` receives the top-left corner of the cell row; the surface
/// owns baseline placement since it owns the rasterizer.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);

    fn draw_text(&mut self, x: usize, y: usize, text: &str, fg: Rgb, attrs: AttrFlags);
}
