//! Software isometric renderer used when no 3D capability is available.
//!
//! Boxes are projected with a fixed 2:1 projection, painted back to front by
//! `x + z`, and shaded with fixed per-face multipliers. There is no light
//! source and no depth buffer.

mod geometry;
mod paint;
mod projection;
pub mod shading;

pub use geometry::{BoxPoints, draw_order};
pub use paint::{FaceKind, GRID_EXTENT, IsoShape, draw_list, paint};
pub use projection::{DEFAULT_SCALE, FLOOR_BIAS, IsoProjection};
