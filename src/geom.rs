//! Integer and float 2D vector types.
//!
//! `Point` doubles as a grid coordinate and a grid size; `PointF` is a
//! continuous coordinate, usually either normalized to the unit square
//! ("unit space") or a brush-local bristle offset.

use std::ops::{Add, Div, Mul};

use serde::{Deserialize, Serialize};

/// An integer grid coordinate or size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// A point with both components set to `v`.
    pub const fn splat(v: i32) -> Self {
        Self { x: v, y: v }
    }

    /// Cell count when this point is used as a size.
    pub fn area(self) -> i32 {
        self.x * self.y
    }

    /// Half-open containment test: `0 <= p < size` on each axis.
    ///
    /// The far edge is excluded (a point at exactly `size.x` is outside),
    /// the near edge is included. This is the single boundary policy used
    /// everywhere positions are mapped into grids, including the unit
    /// square: `(0.0, 0.0)` is addressable, `(1.0, 1.0)` is not.
    pub fn contains(self, p: PointF) -> bool {
        0.0 <= p.x && p.x < self.x as f32 && 0.0 <= p.y && p.y < self.y as f32
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Div<i32> for Point {
    type Output = Point;

    fn div(self, rhs: i32) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Div<f32> for Point {
    type Output = PointF;

    fn div(self, rhs: f32) -> PointF {
        PointF::new(self.x as f32 / rhs, self.y as f32 / rhs)
    }
}

/// Elementwise ratio of two sizes.
impl Div for Point {
    type Output = PointF;

    fn div(self, rhs: Point) -> PointF {
        PointF::new(
            self.x as f32 / rhs.x as f32,
            self.y as f32 / rhs.y as f32,
        )
    }
}

/// A continuous 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Flat buffer index of the cell this point falls in, for a grid of
    /// the given bounds. Callers check `bounds.contains` first.
    pub fn to_index(self, bounds: Point) -> usize {
        (self.y.floor() as i32 * bounds.x + self.x.floor() as i32) as usize
    }

    /// Whether this point lies inside the unit square (see
    /// [`Point::contains`] for the boundary policy).
    pub fn is_unit(self) -> bool {
        Point::splat(1).contains(self)
    }
}

impl Add for PointF {
    type Output = PointF;

    fn add(self, rhs: PointF) -> PointF {
        PointF::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Scale a unit-space coordinate up to pixel space.
impl Mul<Point> for PointF {
    type Output = PointF;

    fn mul(self, rhs: Point) -> PointF {
        PointF::new(self.x * rhs.x as f32, self.y * rhs.y as f32)
    }
}
