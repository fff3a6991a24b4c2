//! easel - collaborative pixel-art drawing engine
//!
//! A bounded 2D index-colour canvas, an editable colour palette, a
//! parametric brush rasterizer, and sparse-diff undo/redo history,
//! orchestrated behind the [`ArtSpace`] facade.
//!
//! The engine is a pure in-memory library: callers feed it normalized
//! unit-space positions or explicit cell updates and read back owned
//! snapshot views ([`PixelGrid`], [`PixelRow`]). Rendering, persistence,
//! and sync live outside; they only consume and produce these snapshots.
//!
//! Every session is single-writer: an [`ArtSpace`] has no interior
//! mutability, and concurrent callers must serialize access themselves.

pub mod brush;
pub mod colour;
pub mod drawing;
pub mod error;
pub mod geom;
pub mod grid;
pub mod history;
pub mod palette;
pub mod space;

pub use brush::{Brush, BrushStyle};
pub use colour::Colour;
pub use drawing::Drawing;
pub use error::{EaselError, Result};
pub use geom::{Point, PointF};
pub use grid::{PixelGrid, PixelGridUpdate, PixelRow};
pub use history::{History, HISTORY_LIMIT};
pub use palette::Palette;
pub use space::{ArtSpace, SpaceOptions};
