//! The index-colour canvas.
//!
//! A drawing stores one palette index per cell plus a derived buffer of
//! resolved colours. Point writes keep the colour buffer in sync
//! incrementally; bulk operations leave it stale until [`Drawing::recolor`]
//! runs a full resolve pass. The facade calls `recolor` deterministically
//! after every bulk mutation, so callers never observe staleness.

use crate::colour::Colour;
use crate::geom::Point;
use crate::grid::PixelGrid;

/// A 2D buffer of palette indices with a derived colour buffer.
#[derive(Debug, Clone)]
pub struct Drawing {
    size: Point,
    index_pixels: Vec<usize>,
    colour_pixels: Vec<Colour>,
}

impl Drawing {
    /// Create a drawing with every cell at palette index 0. The colour
    /// buffer starts black and is stale until the first `recolor`.
    pub fn new(size: Point) -> Self {
        let area = size.area().max(0) as usize;
        Self {
            size,
            index_pixels: vec![0; area],
            colour_pixels: vec![Colour::BLACK; area],
        }
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn area(&self) -> usize {
        self.index_pixels.len()
    }

    pub fn index_pixels(&self) -> &[usize] {
        &self.index_pixels
    }

    /// Mutable access to the index buffer, for the history tracker to
    /// apply diffs in place.
    pub fn index_pixels_mut(&mut self) -> &mut [usize] {
        &mut self.index_pixels
    }

    pub fn colour_pixels(&self) -> &[Colour] {
        &self.colour_pixels
    }

    /// Reallocate to a new size with all cells zeroed.
    pub fn resize(&mut self, size: Point) {
        let area = size.area().max(0) as usize;
        self.size = size;
        self.index_pixels = vec![0; area];
        self.colour_pixels = vec![Colour::BLACK; area];
    }

    /// Recompute the whole colour buffer from the index buffer. O(n).
    pub fn recolor(&mut self, colours: &[Colour]) {
        for (colour, &index) in self.colour_pixels.iter_mut().zip(&self.index_pixels) {
            *colour = colours[index];
        }
    }

    /// Fill every cell with one palette index.
    pub fn clear_index(&mut self, index: usize) {
        self.index_pixels.fill(index);
    }

    /// Regenerate every cell via `f`.
    pub fn clear_with(&mut self, mut f: impl FnMut(usize) -> usize) {
        for (i, pixel) in self.index_pixels.iter_mut().enumerate() {
            *pixel = f(i);
        }
    }

    /// Replace the index buffer from a snapshot, adopting its size.
    pub fn clear_pixels(&mut self, grid: PixelGrid<usize>) {
        self.size = grid.size();
        self.index_pixels = grid.into_pixels();
        self.colour_pixels = vec![Colour::BLACK; self.index_pixels.len()];
    }

    /// Single-cell write-through: both buffers updated, no resolve pass.
    pub fn draw(&mut self, cell: usize, index: usize, colour: Colour) {
        self.index_pixels[cell] = index;
        self.colour_pixels[cell] = colour;
    }

    /// Apply the same write to a batch of cells (one brush stamp).
    pub fn draw_all(&mut self, cells: &[usize], index: usize, colour: Colour) {
        for &cell in cells {
            self.draw(cell, index, colour);
        }
    }
}
