use egui::{Pos2, Rect};
use glam::Vec3;

/// Pixels per meter
pub const DEFAULT_SCALE: f32 = 32.0;

/// The projected origin sits this many pixels below the viewport center so
/// more of the floor is visible.
pub const FLOOR_BIAS: f32 = 120.0;

/// Fixed 2:1 isometric projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    pub scale: f32,
    /// Screen position of the world origin
    pub center: Pos2,
}

impl IsoProjection {
    pub fn new(scale: f32, center: Pos2) -> Self {
        Self { scale, center }
    }

    /// Projection anchored to a viewport. Recompute whenever the viewport
    /// changes size.
    pub fn for_viewport(viewport: Rect, scale: f32) -> Self {
        let c = viewport.center();
        Self::new(scale, Pos2::new(c.x, c.y + FLOOR_BIAS))
    }

    pub fn project(&self, p: Vec3) -> Pos2 {
        Pos2::new(
            (p.x - p.z) * self.scale + self.center.x,
            (p.x + p.z) * self.scale * 0.5 - p.y * self.scale + self.center.y,
        )
    }
}
