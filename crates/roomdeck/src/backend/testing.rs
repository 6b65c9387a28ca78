//! GPU-free [`Renderer3D`] for unit tests: a bare [`renderbud::Scene`] with
//! real picking, counting frames instead of drawing them.

use std::cell::Cell;

use egui::{Color32, Painter, Rect, Vec2};
use glam::Vec3;
use renderbud::{Facing, MeshId};

use super::three_d::{glow, material, scene_hits};
use super::Renderer3D;

pub struct SceneRenderer {
    pub scene: renderbud::Scene,
    pub frames: Cell<usize>,
}

impl SceneRenderer {
    pub fn new(scene: renderbud::Scene) -> Self {
        Self {
            scene,
            frames: Cell::new(0),
        }
    }
}

impl Renderer3D for SceneRenderer {
    type Mesh = MeshId;

    fn create_box(&mut self, size: Vec3, color: Color32, facing: Facing) -> MeshId {
        self.scene.create_box(size, material(color), facing)
    }

    fn add_to_scene(&mut self, mesh: MeshId) {
        assert!(self.scene.add_to_scene(mesh));
    }

    fn remove(&mut self, mesh: MeshId) {
        self.scene.remove_mesh(mesh);
    }

    fn set_transform(&mut self, mesh: MeshId, position: Vec3, yaw: f32) {
        self.scene.set_transform(
            mesh,
            renderbud::Transform {
                translation: position,
                yaw,
            },
        );
    }

    fn set_emissive(&mut self, mesh: MeshId, emissive: Option<Color32>) {
        self.scene.set_emissive(mesh, glow(emissive));
    }

    fn intersect(&self, camera: &renderbud::Camera, pointer: Vec2, viewport: Vec2) -> Vec<MeshId> {
        scene_hits(&self.scene, camera, pointer, viewport)
    }

    fn render(&self, _painter: &Painter, _viewport: Rect, _camera: &renderbud::Camera) {
        self.frames.set(self.frames.get() + 1);
    }
}
