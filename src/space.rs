//! The editing-session facade.
//!
//! `ArtSpace` orchestrates one drawing, one palette, one brush, and two
//! history trackers (drawing edits and palette edits) into a cohesive
//! session. Callers hand it normalized unit-space positions or explicit
//! cell updates; it resolves brush geometry into grid cells, mutates the
//! owned components, and serves derived read-only snapshots back.
//!
//! The engine is single-writer: an `ArtSpace` has no interior mutability
//! and assumes callers serialize access to one instance.

use tracing::{debug, trace};

use crate::brush::{Brush, BrushStyle};
use crate::colour::Colour;
use crate::drawing::Drawing;
use crate::error::{EaselError, Result};
use crate::geom::{Point, PointF};
use crate::grid::{PixelGrid, PixelGridUpdate, PixelRow};
use crate::history::History;
use crate::palette::Palette;

/// Construction parameters for an [`ArtSpace`].
#[derive(Debug, Clone, Copy)]
pub struct SpaceOptions {
    pub drawing_size: Point,
    pub palette_size: Point,
    pub brush_style: BrushStyle,
    pub brush_size: i32,
}

impl Default for SpaceOptions {
    fn default() -> Self {
        Self {
            drawing_size: Point::splat(32),
            palette_size: Point::new(3, 2),
            brush_style: BrushStyle::Circle,
            brush_size: 7,
        }
    }
}

/// A pixel-art editing session.
pub struct ArtSpace {
    drawing: Drawing,
    palette: Palette,
    brush: Brush,
    drawing_history: History<usize>,
    palette_history: History<Colour>,
    preview: PixelGrid<Colour>,
}

impl ArtSpace {
    /// Create a session with the built-in defaults: a 32x32 drawing, a
    /// 3x2 palette, and a circular brush of size 7.
    pub fn new() -> Self {
        Self::with_options(SpaceOptions::default())
    }

    pub fn with_options(options: SpaceOptions) -> Self {
        let palette = Palette::new(options.palette_size);
        let mut drawing = Drawing::new(options.drawing_size);
        drawing.recolor(palette.colours());

        let mut space = Self {
            drawing,
            palette,
            brush: Brush::new(options.brush_style, options.brush_size),
            drawing_history: History::new(),
            palette_history: History::new(),
            preview: PixelGrid::filled(Point::splat(0), Colour::BLACK),
        };
        space.refresh_preview();
        space
    }

    // -- Query surface --

    /// The drawing with every cell resolved to its colour.
    pub fn colour_grid(&self) -> PixelGrid<Colour> {
        PixelGrid::from_raw(self.drawing.colour_pixels().to_vec(), self.drawing.size())
    }

    /// The drawing as raw palette indices.
    pub fn index_grid(&self) -> PixelGrid<usize> {
        PixelGrid::from_raw(self.drawing.index_pixels().to_vec(), self.drawing.size())
    }

    /// The palette colours in order, with the active one marked.
    pub fn palette_row(&self) -> PixelRow<Colour> {
        PixelRow::from_raw(self.palette.colours().to_vec(), self.palette.active_index())
    }

    /// The palette's grid shape (how the colours are laid out for picking).
    pub fn palette_size(&self) -> Point {
        self.palette.size()
    }

    /// A 1x1 swatch of the active colour.
    pub fn active_swatch(&self) -> PixelGrid<Colour> {
        PixelGrid::from_raw(vec![self.palette.active_colour()], Point::splat(1))
    }

    /// A small canvas with the brush stamped once at its centre: the
    /// active colour over the previously active colour.
    pub fn brush_preview(&self) -> PixelGrid<Colour> {
        self.preview.clone()
    }

    pub fn brush_size(&self) -> i32 {
        self.brush.size()
    }

    pub fn can_undo_drawing(&self) -> bool {
        self.drawing_history.can_undo()
    }

    pub fn can_redo_drawing(&self) -> bool {
        self.drawing_history.can_redo()
    }

    pub fn can_undo_palette(&self) -> bool {
        self.palette_history.can_undo()
    }

    pub fn can_redo_palette(&self) -> bool {
        self.palette_history.can_redo()
    }

    // -- Mutation surface --

    /// Change the brush size, keeping its style.
    pub fn update_brush_size(&mut self, size: i32) {
        let style = self.brush.style();
        self.brush.restyle(style, size);
        self.refresh_preview();
    }

    /// Full reset from externally supplied snapshots (a loaded space).
    ///
    /// Two-phase: the palette is applied first, then every drawing index
    /// is validated against it; on failure the palette is rolled back and
    /// the session is left exactly as it was. On success both histories
    /// are reset — their diffs describe buffers that no longer exist.
    pub fn clear(
        &mut self,
        drawing: PixelGrid<usize>,
        palette: PixelGrid<Colour>,
    ) -> Result<()> {
        if palette.pixels().is_empty() {
            return Err(EaselError::bounds(
                "Palette snapshot must contain at least one colour",
            ));
        }

        let saved = self.palette.clone();
        self.palette.clear_pixels(palette);

        let last = self.palette.len() - 1;
        if let Some(&bad) = drawing.pixels().iter().find(|&&p| p > last) {
            self.palette = saved;
            return Err(EaselError::OutOfBounds {
                message: format!(
                    "Drawing index {} exceeds palette of {} colours",
                    bad,
                    last + 1
                ),
                help: Some(
                    "Every drawing pixel must reference a palette entry".to_string(),
                ),
            });
        }

        debug!(
            drawing_size = ?drawing.size(),
            palette_len = self.palette.len(),
            "space cleared from snapshots"
        );
        self.drawing.clear_pixels(drawing);
        self.drawing.recolor(self.palette.colours());
        self.drawing_history.reset();
        self.palette_history.reset();
        self.refresh_preview();
        Ok(())
    }

    /// Apply one explicit cell write (a remote or merged edit).
    pub fn update_cell(&mut self, update: PixelGridUpdate) -> Result<()> {
        if update.key >= self.drawing.area() {
            return Err(EaselError::bounds(format!(
                "Cell {} exceeds drawing of {} pixels",
                update.key,
                self.drawing.area()
            )));
        }
        if update.value >= self.palette.len() {
            return Err(EaselError::bounds(format!(
                "Palette index {} exceeds palette of {} colours",
                update.value,
                self.palette.len()
            )));
        }

        let colour = self.palette.colours()[update.value];
        self.drawing.draw(update.key, update.value, colour);
        Ok(())
    }

    /// Stamp the brush at a unit-space position with the active colour.
    ///
    /// Bristles that land outside the drawing are clipped; the rest adopt
    /// the active palette index and colour in one batch.
    pub fn paint(&mut self, position: PointF) -> Result<()> {
        if !position.is_unit() {
            return Err(outside_unit(position));
        }

        let bounds = self.drawing.size();
        let cells: Vec<usize> = self
            .brush
            .to_points_at(position * bounds)
            .into_iter()
            .filter(|p| bounds.contains(*p))
            .map(|p| p.to_index(bounds))
            .collect();

        trace!(?position, cells = cells.len(), "brush stamp");
        self.drawing
            .draw_all(&cells, self.palette.active_index(), self.palette.active_colour());
        Ok(())
    }

    /// Select the palette entry under a unit-space position.
    ///
    /// Re-selecting the already-active entry is reported as a rejected
    /// no-op so callers can tell "nothing changed" from a real selection.
    pub fn update_palette(&mut self, position: PointF) -> Result<()> {
        if !position.is_unit() {
            return Err(outside_unit(position));
        }

        let grid = self.palette.size();
        let index = (position * grid).to_index(grid);
        if index == self.palette.active_index() {
            return Err(EaselError::NoOpRejected {
                message: format!("Palette index {} is already active", index),
                help: None,
            });
        }

        self.palette.select(index);
        self.refresh_preview();
        Ok(())
    }

    /// Overwrite one palette colour.
    ///
    /// The drawing is recoloured immediately, so every cell referencing
    /// the edited entry picks up the new colour.
    pub fn update_palette_colour(&mut self, index: usize, colour: Colour) -> Result<()> {
        if index >= self.palette.len() {
            return Err(EaselError::bounds(format!(
                "Palette index {} exceeds palette of {} colours",
                index,
                self.palette.len()
            )));
        }

        self.palette.colours_mut()[index] = colour;
        self.drawing.recolor(self.palette.colours());
        self.refresh_preview();
        Ok(())
    }

    // -- History surface --

    /// Begin (`end == false`) or finish (`end == true`) recording one
    /// drawing edit. Panics on desynchronized pairing.
    pub fn record_drawing_history(&mut self, end: bool) {
        self.drawing_history.record(self.drawing.index_pixels(), end);
    }

    /// Begin or finish recording one palette edit. Panics on
    /// desynchronized pairing.
    pub fn record_palette_history(&mut self, end: bool) {
        self.palette_history.record(self.palette.colours(), end);
    }

    /// Step the drawing history (undo, or redo when `redo` is true).
    /// Silently does nothing when no step is available.
    pub fn apply_drawing_history(&mut self, redo: bool) {
        self.drawing_history
            .apply(self.drawing.index_pixels_mut(), redo);
        self.drawing.recolor(self.palette.colours());
        self.refresh_preview();
    }

    /// Step the palette history. The drawing is recoloured afterwards,
    /// since restored palette entries may be referenced by cells.
    pub fn apply_palette_history(&mut self, redo: bool) {
        self.palette_history
            .apply(self.palette.colours_mut(), redo);
        self.drawing.recolor(self.palette.colours());
        self.refresh_preview();
    }

    // -- Derived state --

    /// Rebuild the brush preview: a canvas roughly a third the size of
    /// the drawing (never smaller than the brush plus one cell, parity
    /// matched to the brush size so the stamp centres visually), filled
    /// with the previously active colour and stamped once at the centre
    /// with the active colour.
    fn refresh_preview(&mut self) {
        let brush_size = self.brush.size();
        let fit = |extent: i32| {
            let mut dim = (extent / 3).max(brush_size + 1).max(1);
            if dim % 2 != brush_size.rem_euclid(2) {
                dim += 1;
            }
            dim
        };

        let size = Point::new(fit(self.drawing.size().x), fit(self.drawing.size().y));
        let background = self.palette.colours()[self.palette.prior_active_index()];
        let mut pixels = vec![background; size.area() as usize];

        let centre = size / 2.0;
        for point in self.brush.to_points_at(centre) {
            if size.contains(point) {
                pixels[point.to_index(size)] = self.palette.active_colour();
            }
        }

        self.preview = PixelGrid::from_raw(pixels, size);
    }
}

impl Default for ArtSpace {
    fn default() -> Self {
        Self::new()
    }
}

fn outside_unit(position: PointF) -> EaselError {
    EaselError::OutOfBounds {
        message: format!(
            "Position ({}, {}) is outside the unit square",
            position.x, position.y
        ),
        help: Some("Unit-space coordinates run from 0.0 inclusive to 1.0 exclusive".to_string()),
    }
}
