//! Editable colour palette.
//!
//! The palette is grid-shaped (it is picked from by position, like a tray
//! of paint pots) but stores its colours as a flat row-major list. Besides
//! the colours it tracks a two-slot selection history: the active index
//! and the previously active one, which the brush preview uses to show
//! "new colour over old".

use crate::colour::Colour;
use crate::geom::Point;
use crate::grid::PixelGrid;

/// An ordered colour list with a 2-slot active/previous index history.
#[derive(Debug, Clone)]
pub struct Palette {
    size: Point,
    colours: Vec<Colour>,
    /// `[current, previous]`.
    history: [usize; 2],
}

impl Palette {
    /// Create a palette of the given grid shape, seeded with evenly
    /// spaced hues.
    pub fn new(size: Point) -> Self {
        let colours = Colour::spectrum(size.area().max(0) as usize);
        let history = initial_history(colours.len());
        Self {
            size,
            colours,
            history,
        }
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    pub fn colours_mut(&mut self) -> &mut Vec<Colour> {
        &mut self.colours
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// The currently selected palette index.
    pub fn active_index(&self) -> usize {
        self.history[0]
    }

    /// The index that was selected before the current one.
    pub fn prior_active_index(&self) -> usize {
        self.history[1]
    }

    /// The currently selected colour.
    pub fn active_colour(&self) -> Colour {
        self.colours[self.history[0]]
    }

    /// Reshape the palette, preserving existing colours by index and
    /// filling growth with black. History indices that fall off the end
    /// of a shrunken palette are clamped back into range.
    pub fn resize(&mut self, size: Point) {
        self.size = size;
        self.colours.resize(size.area().max(0) as usize, Colour::BLACK);
        if !self.colours.is_empty() {
            let last = self.colours.len() - 1;
            self.history = [self.history[0].min(last), self.history[1].min(last)];
        }
    }

    /// Replace all colours from a snapshot and reset the selection
    /// history to the first entries.
    pub fn clear_pixels(&mut self, grid: PixelGrid<Colour>) {
        self.size = grid.size();
        self.colours = grid.into_pixels();
        self.history = initial_history(self.colours.len());
    }

    /// Regenerate every colour via `f`.
    pub fn clear_with(&mut self, mut f: impl FnMut(usize) -> Colour) {
        for (i, colour) in self.colours.iter_mut().enumerate() {
            *colour = f(i);
        }
    }

    /// Select a new active index, demoting the old one to "previous".
    ///
    /// Bounds are not checked here; callers validate indices against the
    /// palette before selecting.
    pub fn select(&mut self, index: usize) {
        self.history = [index, self.history[0]];
    }
}

fn initial_history(len: usize) -> [usize; 2] {
    // [0, 1] for two or more colours, [0, 0] for a single-colour palette.
    [0, 1.min(len.saturating_sub(1))]
}
