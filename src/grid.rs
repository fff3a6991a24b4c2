//! Read-only snapshot containers.
//!
//! These are the values the engine hands to its callers (a renderer, a
//! persistence layer, a sync layer) and accepts back when restoring state.
//! They always own their pixel buffers; mutating a snapshot never affects
//! engine state.

use serde::{Deserialize, Serialize};

use crate::error::{EaselError, Result};
use crate::geom::Point;

/// A pixel buffer paired with its dimensions.
///
/// Index `i` maps to cell `(i % size.x, i / size.x)`. The element type is
/// whatever the view carries: palette indices for the raw drawing view,
/// resolved [`Colour`](crate::Colour)s for the rendered views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelGrid<T> {
    pixels: Vec<T>,
    size: Point,
}

impl<T> PixelGrid<T> {
    /// Create a grid from an explicit buffer, validating the pixel count
    /// against the declared dimensions.
    pub fn from_pixels(pixels: Vec<T>, size: Point) -> Result<Self> {
        let expected = size.area().max(0) as usize;
        if pixels.len() != expected {
            return Err(EaselError::SizeMismatch {
                width: size.x,
                height: size.y,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { pixels, size })
    }

    /// Internal constructor for buffers whose length is known to match.
    pub(crate) fn from_raw(pixels: Vec<T>, size: Point) -> Self {
        debug_assert_eq!(pixels.len(), size.area().max(0) as usize);
        Self { pixels, size }
    }

    /// Create a grid with every cell set to `value`.
    pub fn filled(size: Point, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            pixels: vec![value; size.area().max(0) as usize],
            size,
        }
    }

    pub fn pixels(&self) -> &[T] {
        &self.pixels
    }

    pub fn size(&self) -> Point {
        self.size
    }

    /// Get the pixel at a flat buffer index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.pixels.get(index)
    }

    /// Consume the grid, yielding its buffer.
    pub fn into_pixels(self) -> Vec<T> {
        self.pixels
    }
}

/// A single row of pixels with one highlighted entry.
///
/// Used for the palette view: the colours in order, plus which one is
/// currently selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelRow<T> {
    pixels: Vec<T>,
    active_index: usize,
}

impl<T> PixelRow<T> {
    /// Create a row; `active_index` must address one of `pixels`.
    pub fn new(pixels: Vec<T>, active_index: usize) -> Result<Self> {
        if active_index >= pixels.len() {
            return Err(EaselError::bounds(format!(
                "Active index {} exceeds row of {} pixels",
                active_index,
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            active_index,
        })
    }

    /// Internal constructor for a row whose active index is known valid.
    pub(crate) fn from_raw(pixels: Vec<T>, active_index: usize) -> Self {
        debug_assert!(active_index < pixels.len());
        Self {
            pixels,
            active_index,
        }
    }

    pub fn pixels(&self) -> &[T] {
        &self.pixels
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }
}

/// An explicit single-cell write: set drawing cell `key` to palette
/// index `value`. This is the unit the sync layer applies when merging
/// remote edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelGridUpdate {
    pub key: usize,
    pub value: usize,
}
