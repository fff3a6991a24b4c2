//! Parametric brush rasterizer.
//!
//! A brush is a style plus a size; from those it derives a fixed list of
//! relative offsets ("bristles") in continuous drawing space. Stamping
//! translates every bristle by the stamp position; the caller maps the
//! resulting points into grid cells.

use tracing::debug;

use crate::geom::PointF;

/// The shape of the bristle pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushStyle {
    Square,
    Circle,
}

/// A brush: style, size, and the derived bristle offsets.
///
/// Bristles are recomputed eagerly whenever style or size changes, so
/// stamping is a pure translation with no per-stamp shape work.
#[derive(Debug, Clone)]
pub struct Brush {
    style: BrushStyle,
    size: i32,
    bristles: Vec<PointF>,
}

impl Brush {
    pub fn new(style: BrushStyle, size: i32) -> Self {
        let mut brush = Self {
            style,
            size,
            bristles: Vec::new(),
        };
        brush.restyle(style, size);
        brush
    }

    pub fn style(&self) -> BrushStyle {
        self.style
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// The relative bristle offsets for the current style and size.
    pub fn bristles(&self) -> &[PointF] {
        &self.bristles
    }

    /// Change style and/or size, regenerating the bristle pattern.
    ///
    /// A size of zero or less yields an empty pattern: the brush stamps
    /// nothing rather than erroring.
    pub fn restyle(&mut self, style: BrushStyle, size: i32) {
        self.style = style;
        self.size = size;
        self.bristles = match style {
            BrushStyle::Square => square_bristles(size),
            BrushStyle::Circle => circle_bristles(size),
        };
        debug!(?style, size, bristles = self.bristles.len(), "brush restyled");
    }

    /// Translate every bristle by `position`, yielding candidate draw
    /// points in continuous drawing space.
    pub fn to_points_at(&self, position: PointF) -> Vec<PointF> {
        self.bristles.iter().map(|&b| b + position).collect()
    }
}

/// All integer offsets of a size x size block, shifted so the block is
/// centred on the origin. The shift uses integer division, so even sizes
/// sit half a cell off-centre toward the top-left; stamping relies on
/// that exact placement.
fn square_bristles(size: i32) -> Vec<PointF> {
    let shift = (size - 1) / 2;
    let mut bristles = Vec::with_capacity((size.max(0) * size.max(0)) as usize);
    for y in 0..size {
        for x in 0..size {
            bristles.push(PointF::new((x - shift) as f32, (y - shift) as f32));
        }
    }
    bristles
}

/// A filled disc of radius `(size - 0.5) / 2`.
///
/// Candidate coordinates share the size's parity: whole numbers for odd
/// sizes, half-integers for even ones, so the disc lands on cell centres
/// either way. Each first-quadrant point inside the radius contributes
/// its four reflections, with axis points emitted only once.
fn circle_bristles(size: i32) -> Vec<PointF> {
    if size <= 0 {
        return Vec::new();
    }

    let r = (size as f32 - 0.5) / 2.0;
    let start = if size % 2 == 0 { 0.5 } else { 0.0 };
    let mut bristles = Vec::new();

    let mut x = start;
    while x <= r {
        let mut y = start;
        while y <= r {
            if x * x + y * y <= r * r {
                bristles.push(PointF::new(x, y));
                if x > 0.0 {
                    bristles.push(PointF::new(-x, y));
                }
                if y > 0.0 {
                    bristles.push(PointF::new(x, -y));
                }
                if x > 0.0 && y > 0.0 {
                    bristles.push(PointF::new(-x, -y));
                }
            }
            y += 1.0;
        }
        x += 1.0;
    }

    bristles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(bristles: &[PointF], x: f32, y: f32) -> bool {
        bristles.iter().any(|b| b.x == x && b.y == y)
    }

    #[test]
    fn test_square_odd_is_centred_block() {
        let brush = Brush::new(BrushStyle::Square, 3);
        assert_eq!(brush.bristles().len(), 9);
        for y in -1..=1 {
            for x in -1..=1 {
                assert!(has(brush.bristles(), x as f32, y as f32));
            }
        }
    }

    #[test]
    fn test_square_even_shifts_toward_origin() {
        // size 2 shifts by (2-1)/2 = 0: offsets span 0..=1 on both axes.
        let brush = Brush::new(BrushStyle::Square, 2);
        assert_eq!(brush.bristles().len(), 4);
        for y in 0..=1 {
            for x in 0..=1 {
                assert!(has(brush.bristles(), x as f32, y as f32));
            }
        }
    }

    #[test]
    fn test_circle_size_one_is_single_point() {
        let brush = Brush::new(BrushStyle::Circle, 1);
        assert_eq!(brush.bristles().len(), 1);
        assert!(has(brush.bristles(), 0.0, 0.0));
    }

    #[test]
    fn test_circle_even_uses_half_integers() {
        let brush = Brush::new(BrushStyle::Circle, 2);
        assert_eq!(brush.bristles().len(), 4);
        assert!(has(brush.bristles(), 0.5, 0.5));
        assert!(has(brush.bristles(), -0.5, -0.5));
    }

    #[test]
    fn test_circle_size_seven_footprint() {
        let brush = Brush::new(BrushStyle::Circle, 7);
        assert_eq!(brush.bristles().len(), 37);
        // Extremes of a diameter-7 disc.
        assert!(has(brush.bristles(), 3.0, 0.0));
        assert!(has(brush.bristles(), -3.0, 0.0));
        assert!(has(brush.bristles(), 0.0, 3.0));
        // Corners fall outside the radius.
        assert!(!has(brush.bristles(), 3.0, 2.0));
    }

    #[test]
    fn test_circle_symmetry() {
        for size in 1..=8 {
            let brush = Brush::new(BrushStyle::Circle, size);
            for b in brush.bristles() {
                assert!(has(brush.bristles(), -b.x, b.y), "size {}: missing reflection of {:?}", size, b);
                assert!(has(brush.bristles(), b.x, -b.y), "size {}: missing reflection of {:?}", size, b);
                assert!(has(brush.bristles(), -b.x, -b.y), "size {}: missing reflection of {:?}", size, b);
            }
        }
    }

    #[test]
    fn test_circle_no_duplicates() {
        for size in 1..=8 {
            let brush = Brush::new(BrushStyle::Circle, size);
            let mut seen = Vec::new();
            for b in brush.bristles() {
                assert!(
                    !seen.iter().any(|&(x, y)| x == b.x && y == b.y),
                    "size {}: duplicate bristle {:?}",
                    size,
                    b
                );
                seen.push((b.x, b.y));
            }
        }
    }

    #[test]
    fn test_nonpositive_size_is_empty() {
        assert!(Brush::new(BrushStyle::Circle, 0).bristles().is_empty());
        assert!(Brush::new(BrushStyle::Circle, -3).bristles().is_empty());
        assert!(Brush::new(BrushStyle::Square, 0).bristles().is_empty());
        assert!(Brush::new(BrushStyle::Square, -1).bristles().is_empty());
    }

    #[test]
    fn test_to_points_at_translates() {
        let brush = Brush::new(BrushStyle::Circle, 1);
        let points = brush.to_points_at(PointF::new(4.5, 2.5));
        assert_eq!(points.len(), 1);
        assert_eq!(points[0], PointF::new(4.5, 2.5));
    }
}
