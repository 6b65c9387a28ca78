//! Presentation backends. The scene and controller only ever talk to a
//! `dyn RenderBackend`; each variant owns its own per-entity presentation
//! state keyed by [`EntityId`].

use egui::{Painter, Pos2, Rect, Vec2};
use strum_macros::Display;

use crate::scene::{EntityId, FurnitureEntity, SceneModel};

mod isometric;
#[cfg(test)]
pub(crate) mod testing;
mod three_d;

pub use isometric::BackendIsometric;
pub use three_d::{Backend3D, HIGHLIGHT_EMISSIVE, Renderer3D, room_scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BackendKind {
    #[strum(to_string = "3D")]
    ThreeD,
    #[strum(to_string = "isometric")]
    Isometric,
}

pub trait RenderBackend {
    fn kind(&self) -> BackendKind;

    /// Create presentation state for a newly placed entity.
    fn add(&mut self, entity: &FurnitureEntity);

    /// Release presentation state for a removed entity. Unknown ids are ignored.
    fn remove(&mut self, id: EntityId);

    /// Apply or clear the selection highlight.
    fn highlight(&mut self, id: EntityId, on: bool);

    /// The entity under `pointer` (absolute screen coordinates), if any.
    fn pick(&self, scene: &SceneModel, pointer: Pos2, viewport: Rect) -> Option<EntityId>;

    /// Update derived state from the scene, then paint one frame.
    fn render_frame(&mut self, scene: &SceneModel, painter: &Painter, viewport: Rect);

    /// Orbit drag in screen pixels. Ignored by backends without an orbit camera.
    fn on_orbit_drag(&mut self, _delta: Vec2) {}

    /// Scroll delta. Ignored by backends without an orbit camera.
    fn on_zoom(&mut self, _delta: f32) {}
}
