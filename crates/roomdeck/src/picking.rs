//! Screen-space hit testing for the isometric view.
//!
//! Entities are tested front to back (the exact reverse of paint order) and
//! the first whose projected top-face bounding box contains the pointer
//! wins. The bounding box is a loose fit for a rotated footprint, so clicks
//! just outside a turned item's corner can still select it.

use egui::Pos2;

use crate::isometric::{BoxPoints, IsoProjection, draw_order};
use crate::scene::{EntityId, SceneModel};

pub fn pick_isometric(scene: &SceneModel, proj: &IsoProjection, pointer: Pos2) -> Option<EntityId> {
    draw_order(scene)
        .into_iter()
        .rev()
        .find(|e| BoxPoints::of(e, proj).top_bounds().contains(pointer))
        .map(|e| e.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FurnitureType;
    use glam::Vec3;

    fn proj() -> IsoProjection {
        IsoProjection::new(32.0, Pos2::new(400.0, 400.0))
    }

    fn top_center(scene: &SceneModel, id: EntityId, proj: &IsoProjection) -> Pos2 {
        let e = scene.get(id).unwrap();
        proj.project(Vec3::new(e.position.x, e.size().height, e.position.z))
    }

    #[test]
    fn picks_each_default_item_at_its_top_center() {
        let mut scene = SceneModel::new();
        let ids = scene.seed_default_layout();
        let p = proj();
        for id in ids {
            assert_eq!(pick_isometric(&scene, &p, top_center(&scene, id, &p)), Some(id));
        }
    }

    #[test]
    fn empty_space_misses() {
        let mut scene = SceneModel::new();
        scene.seed_default_layout();
        assert_eq!(pick_isometric(&scene, &proj(), Pos2::new(5.0, 5.0)), None);
    }

    #[test]
    fn front_item_wins_on_overlap() {
        let mut scene = SceneModel::new();
        let back = scene.add(FurnitureType::Bed, Vec3::ZERO);
        let front = scene.add(FurnitureType::Table, Vec3::new(0.3, 0.0, 0.3));
        let p = proj();
        let at = top_center(&scene, front, &p);
        assert!(
            BoxPoints::of(scene.get(back).unwrap(), &p)
                .top_bounds()
                .contains(at)
        );
        assert_eq!(pick_isometric(&scene, &p, at), Some(front));
    }

    #[test]
    fn later_item_wins_on_equal_depth() {
        let mut scene = SceneModel::new();
        let _first = scene.add(FurnitureType::Sofa, Vec3::ZERO);
        let second = scene.add(FurnitureType::Sofa, Vec3::ZERO);
        let p = proj();
        let at = top_center(&scene, second, &p);
        assert_eq!(pick_isometric(&scene, &p, at), Some(second));
    }
}
