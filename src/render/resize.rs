//! Viewport geometry recomputation
//!
//! The render buffer holds a fixed number of rows; a resize only moves
//! the split between the visible region at the bottom and the scrollback
//! above it. A container taller than the whole buffer would drive the
//! scrollback row count negative, which must abort the resize before it
//! reaches the engine.

use thiserror::Error;

use crate::geometry::ViewportGeometry;
use crate::render::map::CoordinateMapper;

/// Geometry error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("cell height is zero; cannot size the viewport")]
    ZeroCellHeight,
    #[error("cell width is zero; cannot size the grid")]
    ZeroCellWidth,
    #[error("viewport of {visible_rows} rows exceeds the {total_rows}-row render buffer")]
    ViewportTooTall {
        visible_rows: usize,
        total_rows: usize,
    },
}

/// Split the fixed `buffer_rows`-deep render buffer for a container
/// `height` pixels tall.
pub fn compute_geometry(
    height: usize,
    mapper: &CoordinateMapper,
    buffer_rows: usize,
) -> Result<ViewportGeometry, GeometryError> {
    let cell_height = mapper.cell_height();
    if cell_height == 0 {
        return Err(GeometryError::ZeroCellHeight);
    }
    let visible_rows = height / cell_height;
    if visible_rows > buffer_rows {
        return Err(GeometryError::ViewportTooTall {
            visible_rows,
            total_rows: buffer_rows,
        });
    }
    Ok(ViewportGeometry {
        cell_width: mapper.cell_width(),
        cell_height,
        cell_descent: mapper.descent(),
        visible_rows,
        scrollback_rows: buffer_rows - visible_rows,
        total_rows: buffer_rows,
    })
}

/// Column count for a container `width` pixels wide.
pub fn compute_columns(width: usize, mapper: &CoordinateMapper) -> Result<usize, GeometryError> {
    let cell_width = mapper.cell_width();
    if cell_width == 0 {
        return Err(GeometryError::ZeroCellWidth);
    }
    Ok(width / cell_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{FixedMetrics, FontMetrics};

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(Box::new(FixedMetrics::new(8, 16, 4)))
    }

    #[test]
    fn test_geometry_split() {
        let geometry = compute_geometry(384, &mapper(), 100).unwrap();
        assert_eq!(geometry.visible_rows, 24);
        assert_eq!(geometry.scrollback_rows, 76);
        assert_eq!(geometry.total_rows, 100);
        assert_eq!(
            geometry.total_rows,
            geometry.visible_rows + geometry.scrollback_rows
        );
    }

    #[test]
    fn test_partial_row_is_dropped() {
        // 390px at 16px per row still shows 24 rows
        let geometry = compute_geometry(390, &mapper(), 100).unwrap();
        assert_eq!(geometry.visible_rows, 24);
    }

    #[test]
    fn test_container_taller_than_buffer_rejected() {
        let err = compute_geometry(16 * 101, &mapper(), 100).unwrap_err();
        assert_eq!(
            err,
            GeometryError::ViewportTooTall {
                visible_rows: 101,
                total_rows: 100,
            }
        );
    }

    #[test]
    fn test_exact_buffer_height_accepted() {
        let geometry = compute_geometry(16 * 100, &mapper(), 100).unwrap();
        assert_eq!(geometry.visible_rows, 100);
        assert_eq!(geometry.scrollback_rows, 0);
    }

    #[test]
    fn test_columns() {
        assert_eq!(compute_columns(640, &mapper()).unwrap(), 80);
        assert_eq!(compute_columns(7, &mapper()).unwrap(), 0);
    }

    #[test]
    fn test_zero_cell_height_rejected() {
        struct NoHeight;
        impl FontMetrics for NoHeight {
            fn cell_width(&self) -> usize {
                8
            }
            fn cell_height(&self) -> usize {
                0
            }
            fn descent(&self) -> usize {
                0
            }
            fn max_advance(&self) -> usize {
                8
            }
            fn text_width(&self, _: &str) -> usize {
                0
            }
        }
        let mapper = CoordinateMapper::new(Box::new(NoHeight));
        assert_eq!(
            compute_geometry(100, &mapper, 100),
            Err(GeometryError::ZeroCellHeight)
        );
    }
}
