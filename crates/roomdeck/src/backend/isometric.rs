use egui::{Painter, Pos2, Rect};

use super::{BackendKind, RenderBackend};
use crate::isometric::{self, IsoProjection};
use crate::picking::pick_isometric;
use crate::scene::{EntityId, FurnitureEntity, SceneModel};

/// Fallback backend. Boxes carry no presentation state of their own; every
/// frame is rebuilt from the scene.
pub struct BackendIsometric {
    scale: f32,
    highlighted: Option<EntityId>,
}

impl Default for BackendIsometric {
    fn default() -> Self {
        Self::new(isometric::DEFAULT_SCALE)
    }
}

impl BackendIsometric {
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            highlighted: None,
        }
    }

    pub fn projection(&self, viewport: Rect) -> IsoProjection {
        IsoProjection::for_viewport(viewport, self.scale)
    }

    pub fn highlighted(&self) -> Option<EntityId> {
        self.highlighted
    }
}

impl RenderBackend for BackendIsometric {
    fn kind(&self) -> BackendKind {
        BackendKind::Isometric
    }

    fn add(&mut self, _entity: &FurnitureEntity) {}

    fn remove(&mut self, id: EntityId) {
        if self.highlighted == Some(id) {
            self.highlighted = None;
        }
    }

    fn highlight(&mut self, id: EntityId, on: bool) {
        if on {
            self.highlighted = Some(id);
        } else if self.highlighted == Some(id) {
            self.highlighted = None;
        }
    }

    fn pick(&self, scene: &SceneModel, pointer: Pos2, viewport: Rect) -> Option<EntityId> {
        pick_isometric(scene, &self.projection(viewport), pointer)
    }

    fn render_frame(&mut self, scene: &SceneModel, painter: &Painter, viewport: Rect) {
        let shapes = isometric::draw_list(scene, &self.projection(viewport), self.highlighted);
        isometric::paint(painter, viewport, shapes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn highlight_moves_and_clears() {
        let mut be = BackendIsometric::default();
        be.highlight(EntityId(1), true);
        be.highlight(EntityId(2), true);
        be.highlight(EntityId(1), false);
        assert_eq!(be.highlighted(), Some(EntityId(2)));
        be.remove(EntityId(2));
        assert_eq!(be.highlighted(), None);
    }

    #[test]
    fn pick_uses_viewport_anchored_projection() {
        let mut scene = SceneModel::new();
        let ids = scene.seed_default_layout();
        let be = BackendIsometric::default();
        let viewport = Rect::from_min_size(Pos2::ZERO, vec2(1024.0, 768.0));

        // bed at (3, -1), 0.8 tall
        let proj = be.projection(viewport);
        let at = proj.project(glam::Vec3::new(3.0, 0.8, -1.0));
        assert_eq!(be.pick(&scene, at, viewport), Some(ids[2]));
    }
}
