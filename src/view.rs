//! The renderer core
//!
//! [`TermView`] owns the viewport geometry, the blink machine, and the
//! engine handle, and turns engine notifications into minimal repaint
//! requests. It keeps no copy of the grid: every notification and every
//! paint re-reads engine state.
//!
//! Everything here runs on the host's UI thread; the engine flushes its
//! buffers before the host schedules the corresponding notification, so
//! reads never race engine writes.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::Config;
use crate::engine::{EngineEvent, TerminalEngine};
use crate::geometry::{GridRegion, PixelRect, ViewportGeometry};
use crate::host::{DrawSurface, ViewHost};
use crate::input::{encode_key, EncodedKey, KeyInput};
use crate::metrics::FontMetrics;
use crate::render::blink::CursorBlink;
use crate::render::chunk::{chunk_line, effective_colors};
use crate::render::dirty::mark_dirty;
use crate::render::map::CoordinateMapper;
use crate::render::resize::{compute_columns, compute_geometry, GeometryError};

/// Byte slice of `line` covering columns `[start, end)`.
fn slice_columns(line: &str, start: usize, end: usize) -> &str {
    let from = line
        .char_indices()
        .nth(start)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    let to = line
        .char_indices()
        .nth(end)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    &line[from..to]
}

/// Terminal grid renderer and update coalescer.
pub struct TermView<E: TerminalEngine> {
    engine: E,
    host: Box<dyn ViewHost>,
    mapper: CoordinateMapper,
    geometry: ViewportGeometry,
    blink: CursorBlink,
    config: Config,
    /// Column count last forwarded to the engine
    columns: usize,
}

impl<E: TerminalEngine> TermView<E> {
    /// Build a view around an engine handle. Probes the font metrics once
    /// and arms the blink timer; geometry stays empty until the first
    /// resize.
    pub fn new(
        engine: E,
        host: Box<dyn ViewHost>,
        metrics: Box<dyn FontMetrics>,
        config: Config,
        now: Instant,
    ) -> Self {
        let mapper = CoordinateMapper::new(metrics);
        let geometry = ViewportGeometry {
            cell_width: mapper.cell_width(),
            cell_height: mapper.cell_height(),
            cell_descent: mapper.descent(),
            visible_rows: 0,
            scrollback_rows: config.buffer_rows,
            total_rows: config.buffer_rows,
        };
        let mut blink = CursorBlink::new(Duration::from_millis(config.blink_interval_ms));
        blink.start(now);
        Self {
            engine,
            host,
            mapper,
            geometry,
            blink,
            config,
            columns: 0,
        }
    }

    pub fn geometry(&self) -> &ViewportGeometry {
        &self.geometry
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// When the host loop should call [`TermView::poll_timers`] next.
    pub fn next_timer_deadline(&self) -> Option<Instant> {
        self.blink.next_deadline()
    }

    /// Handle one engine notification. The host forwards these in arrival
    /// order on the UI thread.
    pub fn handle_event(&mut self, event: EngineEvent, now: Instant) {
        match event {
            EngineEvent::ContentChanged(region) => {
                self.update_grid(region);
                // Lets a scrolling container follow the output
                self.host.grid_updated();
            }
            EngineEvent::CursorMoved { old, new } => {
                self.blink.cursor_moved(now);
                // Erase the old cell and draw the new one. Two independent
                // requests; coalescing is the toolkit's business.
                self.update_grid(GridRegion::cell(old.0, old.1));
                self.update_grid(GridRegion::cell(new.0, new.1));
            }
            EngineEvent::Bell => self.host.bell(),
        }
    }

    /// Drive pending timers; the host calls this when it wakes.
    pub fn poll_timers(&mut self, now: Instant) {
        if let Some(fire) = self.blink.poll(now) {
            let (col, row) = self.engine.cursor_position();
            self.update_grid(GridRegion::cell(col as isize, row as isize));
            if fire.full_repaint {
                // The toolkit missed a repaint after the resize; redraw
                // the whole buffer once.
                let rect = PixelRect::new(
                    0,
                    0,
                    self.columns * self.geometry.cell_width,
                    self.geometry.total_rows * self.geometry.cell_height,
                );
                self.host.request_repaint(rect);
            }
        }
    }

    /// Recompute the visible/scrollback split for a new container size
    /// and push it to the engine. Aborts with the engine untouched when
    /// the geometry invariant would break.
    pub fn on_resize(
        &mut self,
        width: usize,
        height: usize,
        now: Instant,
    ) -> Result<ViewportGeometry, GeometryError> {
        let geometry = compute_geometry(height, &self.mapper, self.config.buffer_rows)?;
        let columns = compute_columns(width, &self.mapper)?;
        debug!(
            width,
            height,
            columns,
            visible_rows = geometry.visible_rows,
            scrollback_rows = geometry.scrollback_rows,
            "resizing terminal grid"
        );
        self.engine
            .resize(columns, geometry.visible_rows, geometry.scrollback_rows);
        self.geometry = geometry;
        self.columns = columns;
        self.blink.viewport_resized(now);
        Ok(geometry)
    }

    /// Forward one key press to the engine.
    pub fn key_pressed(&mut self, key: KeyInput) {
        match encode_key(key) {
            EncodedKey::Bytes(bytes) => self.engine.send_input(&bytes),
            EncodedKey::Special(special) => self.engine.send_key(special),
            EncodedKey::Ignored => {}
        }
    }

    /// Forward committed text (IME or paste) to the engine.
    pub fn send_text(&mut self, text: &str) {
        self.engine.send_input(text.as_bytes());
    }

    /// Convert a grid-space change into a repaint request.
    fn update_grid(&mut self, region: GridRegion) {
        let scrollback = self.geometry.scrollback_rows;
        let engine = &self.engine;
        let rect = mark_dirty(region, &self.mapper, scrollback, |row| {
            engine.line(row + scrollback)
        });
        if let Some(rect) = rect {
            self.host.request_repaint(rect);
        }
    }

    /// Repaint `clip`. Reads the grid back from the engine and re-chunks
    /// every row whose pixel band intersects the clip.
    pub fn paint(&self, clip: PixelRect, surface: &mut dyn DrawSurface) {
        let (columns, total_rows) = self.engine.grid_size();
        let cell_height = self.geometry.cell_height;
        if columns == 0 || total_rows == 0 || cell_height == 0 || clip.is_empty() {
            return;
        }

        // Erase the clip first; runs repaint on top
        surface.fill_rect(clip, self.config.background);

        let (cursor_col, cursor_row) = self.engine.cursor_position();
        let cursor_on = self.blink.phase().is_on();
        let scrollback = self.geometry.scrollback_rows;

        for engine_row in 0..total_rows {
            let y = engine_row * cell_height;
            if !clip.intersects_band(y, y + cell_height) {
                continue;
            }

            // The cursor position is visible-space; scrollback rows can
            // never carry it
            let row_cursor = match engine_row.checked_sub(scrollback) {
                Some(visible_row) if cursor_on && visible_row == cursor_row => Some(cursor_col),
                _ => None,
            };

            let line = self.engine.line(engine_row);
            let runs = chunk_line(
                self.engine.attrs(engine_row),
                self.engine.colors(engine_row),
                row_cursor,
                columns,
            );
            for run in &runs {
                let x = self.mapper.cell_origin_x(run.start, line);
                let width = self.mapper.span_width(run.start, run.end, line);
                let fg = self.engine.foreground(run.attrs, run.color);
                let bg = self.engine.background(run.attrs, run.color);
                let (fg, bg) = effective_colors(fg, bg, run.attrs, run.on_cursor);

                surface.fill_rect(PixelRect::new(x, y, width, cell_height), bg);
                let text = slice_columns(line, run.start, run.end);
                if !text.is_empty() {
                    surface.draw_text(x, y, text, fg, run.attrs);
                }
            }

            if row_cursor.is_some() && runs.iter().all(|r| !r.on_cursor) {
                warn!(
                    cursor_col,
                    engine_row, "cursor column outside chunked row; cell not highlighted"
                );
            }
        }
    }
}
