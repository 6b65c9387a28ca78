use std::collections::HashMap;
use std::fmt::Debug;

use egui::{Color32, Painter, Pos2, Rect, Vec2};
use glam::Vec3;
use renderbud::egui::EguiRenderer;
use renderbud::{Facing, MeshId};
use tracing::{debug, warn};

use super::{BackendKind, RenderBackend};
use crate::camera::OrbitCamera;
use crate::scene::{EntityId, FurnitureEntity, SceneModel};

/// Emissive glow on the selected item
pub const HIGHLIGHT_EMISSIVE: Color32 = Color32::from_rgb(0x1e, 0x40, 0xaf);

/// What the 3D backend needs from a mesh renderer.
pub trait Renderer3D {
    type Mesh: Copy + Eq + Debug;

    /// Create a detached box mesh centered on its local origin.
    fn create_box(&mut self, size: Vec3, color: Color32, facing: Facing) -> Self::Mesh;

    fn add_to_scene(&mut self, mesh: Self::Mesh);

    fn remove(&mut self, mesh: Self::Mesh);

    fn set_transform(&mut self, mesh: Self::Mesh, position: Vec3, yaw: f32);

    /// `None` clears the glow.
    fn set_emissive(&mut self, mesh: Self::Mesh, emissive: Option<Color32>);

    /// Meshes under a viewport-relative pointer, nearest first.
    fn intersect(
        &self,
        camera: &renderbud::Camera,
        pointer: Vec2,
        viewport: Vec2,
    ) -> Vec<Self::Mesh>;

    fn render(&self, painter: &Painter, viewport: Rect, camera: &renderbud::Camera);
}

fn to_glam(v: Vec2) -> glam::Vec2 {
    glam::Vec2::new(v.x, v.y)
}

pub(crate) fn material(color: Color32) -> renderbud::Material {
    renderbud::Material::from_rgb8(color.r(), color.g(), color.b())
}

pub(crate) fn glow(emissive: Option<Color32>) -> Vec3 {
    emissive.map_or(Vec3::ZERO, |c| renderbud::rgb8(c.r(), c.g(), c.b()))
}

/// Scene meshes under a viewport-relative pointer, nearest first.
pub(crate) fn scene_hits(
    scene: &renderbud::Scene,
    camera: &renderbud::Camera,
    pointer: Vec2,
    viewport: Vec2,
) -> Vec<MeshId> {
    let ray = camera.screen_to_ray(to_glam(pointer), viewport.x, viewport.y);
    scene.intersect(&ray).into_iter().map(|(id, _)| id).collect()
}

impl Renderer3D for EguiRenderer {
    type Mesh = MeshId;

    fn create_box(&mut self, size: Vec3, color: Color32, facing: Facing) -> Self::Mesh {
        self.lock().scene_mut().create_box(size, material(color), facing)
    }

    fn add_to_scene(&mut self, mesh: Self::Mesh) {
        if !self.lock().scene_mut().add_to_scene(mesh) {
            warn!("tried to attach stale mesh {mesh:?}");
        }
    }

    fn remove(&mut self, mesh: Self::Mesh) {
        self.lock().scene_mut().remove_mesh(mesh);
    }

    fn set_transform(&mut self, mesh: Self::Mesh, position: Vec3, yaw: f32) {
        self.lock().scene_mut().set_transform(
            mesh,
            renderbud::Transform {
                translation: position,
                yaw,
            },
        );
    }

    fn set_emissive(&mut self, mesh: Self::Mesh, emissive: Option<Color32>) {
        self.lock().scene_mut().set_emissive(mesh, glow(emissive));
    }

    fn intersect(
        &self,
        camera: &renderbud::Camera,
        pointer: Vec2,
        viewport: Vec2,
    ) -> Vec<Self::Mesh> {
        scene_hits(self.lock().scene(), camera, pointer, viewport)
    }

    fn render(&self, painter: &Painter, viewport: Rect, camera: &renderbud::Camera) {
        self.paint(painter, viewport, camera);
    }
}

/// Lights and floor grid of the room. Decor meshes are added by
/// [`Backend3D::new`].
pub fn room_scene() -> renderbud::Scene {
    renderbud::Scene::new()
        .with_grid(renderbud::Grid {
            half_extent: ROOM_SIZE / 2.0,
            spacing: 1.0,
            color: renderbud::rgb8(0xcb, 0xd5, 0xf5),
            opacity: 0.25,
        })
        .with_lighting(renderbud::Lighting {
            point: Some(renderbud::PointLight {
                position: Vec3::new(-3.0, 4.0, 2.0),
                color: renderbud::rgb8(0xff, 0xf4, 0xe5),
                intensity: 0.7,
                range: 25.0,
                decay: 1.6,
            }),
            ..Default::default()
        })
}

struct Decor {
    size: Vec3,
    position: Vec3,
    color: Color32,
    facing: Facing,
}

impl Decor {
    fn solid(size: Vec3, position: Vec3, color: Color32) -> Self {
        Self {
            size,
            position,
            color,
            facing: Facing::Solid,
        }
    }

    /// Attached to the wall or ceiling whose interior side faces `inward`.
    fn on_shell(size: Vec3, position: Vec3, color: Color32, inward: Vec3) -> Self {
        Self {
            size,
            position,
            color,
            facing: Facing::Inward(inward),
        }
    }
}

const ROOM_SIZE: f32 = 16.0;
const ROOM_HEIGHT: f32 = 5.0;
const WALL_THICKNESS: f32 = 0.3;
const BASEBOARD_HEIGHT: f32 = 0.22;
const BASEBOARD_DEPTH: f32 = 0.08;

/// Floor, rug, walls, ceiling, baseboards, window, door and a floor lamp.
/// None of these are pickable.
fn room_decor() -> Vec<Decor> {
    let floor = Color32::from_rgb(0x9a, 0xa5, 0xb1);
    let white = Color32::from_rgb(0xf8, 0xfa, 0xfc);
    let wall = Color32::from_rgb(0xe2, 0xe8, 0xf0);
    let baseboard = Color32::from_rgb(0xcb, 0xd5, 0xf5);
    let window_frame = Color32::from_rgb(0x64, 0x74, 0x8b);
    let window_glass = Color32::from_rgb(0x93, 0xc5, 0xfd);
    let door = Color32::from_rgb(0xa1, 0x62, 0x07);
    let lamp_base = Color32::from_rgb(0x33, 0x41, 0x55);
    let lamp_shade = Color32::from_rgb(0xfe, 0xf3, 0xc7);

    let half = ROOM_SIZE / 2.0;
    let mid = ROOM_HEIGHT / 2.0;

    let mut decor = vec![
        Decor::solid(
            Vec3::new(ROOM_SIZE, 0.3, ROOM_SIZE),
            Vec3::new(0.0, -0.15, 0.0),
            floor,
        ),
        Decor::solid(Vec3::new(4.8, 0.05, 3.0), Vec3::new(0.0, 0.03, 0.6), white),
        Decor::on_shell(
            Vec3::new(ROOM_SIZE, 0.2, ROOM_SIZE),
            Vec3::new(0.0, ROOM_HEIGHT, 0.0),
            white,
            Vec3::NEG_Y,
        ),
    ];

    let across_x = Vec3::new(ROOM_SIZE, ROOM_HEIGHT, WALL_THICKNESS);
    let across_z = Vec3::new(WALL_THICKNESS, ROOM_HEIGHT, ROOM_SIZE);
    for (size, position, inward) in [
        (across_x, Vec3::new(0.0, mid, -half), Vec3::Z),
        (across_x, Vec3::new(0.0, mid, half), Vec3::NEG_Z),
        (across_z, Vec3::new(-half, mid, 0.0), Vec3::X),
        (across_z, Vec3::new(half, mid, 0.0), Vec3::NEG_X),
    ] {
        decor.push(Decor::on_shell(size, position, wall, inward));
    }

    let edge = half - BASEBOARD_DEPTH;
    let y = BASEBOARD_HEIGHT / 2.0;
    let along_x = Vec3::new(ROOM_SIZE, BASEBOARD_HEIGHT, BASEBOARD_DEPTH);
    let along_z = Vec3::new(BASEBOARD_DEPTH, BASEBOARD_HEIGHT, ROOM_SIZE);
    for (size, position, inward) in [
        (along_x, Vec3::new(0.0, y, -edge), Vec3::Z),
        (along_x, Vec3::new(0.0, y, edge), Vec3::NEG_Z),
        (along_z, Vec3::new(-edge, y, 0.0), Vec3::X),
        (along_z, Vec3::new(edge, y, 0.0), Vec3::NEG_X),
    ] {
        decor.push(Decor::on_shell(size, position, baseboard, inward));
    }

    // window on the back wall, door on the front wall
    let window = Vec3::new(-3.0, 2.7, -half + 0.2);
    decor.push(Decor::on_shell(
        Vec3::new(4.0, 2.4, 0.2),
        window,
        window_frame,
        Vec3::Z,
    ));
    decor.push(Decor::on_shell(
        Vec3::new(3.6, 2.0, 0.05),
        window + Vec3::new(0.0, 0.0, 0.08),
        window_glass,
        Vec3::Z,
    ));
    decor.push(Decor::on_shell(
        Vec3::new(1.4, 3.0, 0.15),
        Vec3::new(5.6, 1.5, half - 0.2),
        door,
        Vec3::NEG_Z,
    ));

    let lamp = Vec3::new(-5.0, 0.0, 4.5);
    decor.push(Decor::solid(
        Vec3::new(0.16, 3.0, 0.16),
        lamp + Vec3::new(0.0, 1.5, 0.0),
        lamp_base,
    ));
    decor.push(Decor::solid(
        Vec3::new(1.0, 0.9, 1.0),
        lamp + Vec3::new(0.0, 3.2, 0.0),
        lamp_shade,
    ));

    decor
}

/// 3D backend: one mesh per entity plus static room decor, viewed through
/// an [`OrbitCamera`].
pub struct Backend3D<R: Renderer3D> {
    renderer: R,
    camera: OrbitCamera,
    meshes: HashMap<EntityId, R::Mesh>,
    decor: Vec<R::Mesh>,
}

impl<R: Renderer3D> Backend3D<R> {
    pub fn new(mut renderer: R) -> Self {
        let decor = room_decor()
            .into_iter()
            .map(|d| {
                let mesh = renderer.create_box(d.size, d.color, d.facing);
                renderer.set_transform(mesh, d.position, 0.0);
                renderer.add_to_scene(mesh);
                mesh
            })
            .collect();

        Self {
            renderer,
            camera: OrbitCamera::default(),
            meshes: HashMap::new(),
            decor,
        }
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn mesh_for(&self, id: EntityId) -> Option<R::Mesh> {
        self.meshes.get(&id).copied()
    }

    pub fn num_decor(&self) -> usize {
        self.decor.len()
    }

    /// Copy entity placement onto the meshes.
    pub fn sync(&mut self, scene: &SceneModel) {
        for entity in scene.iter() {
            if let Some(&mesh) = self.meshes.get(&entity.id) {
                self.renderer
                    .set_transform(mesh, entity.position, entity.rotation);
            }
        }
    }
}

impl<R: Renderer3D> RenderBackend for Backend3D<R> {
    fn kind(&self) -> BackendKind {
        BackendKind::ThreeD
    }

    fn add(&mut self, entity: &FurnitureEntity) {
        let mesh = self.renderer.create_box(
            entity.size().to_vec3(),
            entity.kind.color(),
            Facing::Solid,
        );
        self.renderer
            .set_transform(mesh, entity.position, entity.rotation);
        self.renderer.add_to_scene(mesh);
        if let Some(old) = self.meshes.insert(entity.id, mesh) {
            debug!("replacing mesh for {}", entity.id);
            self.renderer.remove(old);
        }
    }

    fn remove(&mut self, id: EntityId) {
        if let Some(mesh) = self.meshes.remove(&id) {
            self.renderer.remove(mesh);
        }
    }

    fn highlight(&mut self, id: EntityId, on: bool) {
        if let Some(&mesh) = self.meshes.get(&id) {
            self.renderer
                .set_emissive(mesh, on.then_some(HIGHLIGHT_EMISSIVE));
        }
    }

    fn pick(&self, _scene: &SceneModel, pointer: Pos2, viewport: Rect) -> Option<EntityId> {
        let camera = self.camera.to_camera();
        let local = pointer - viewport.min;
        let hits = self.renderer.intersect(&camera, local, viewport.size());
        hits.into_iter().find_map(|mesh| {
            self.meshes
                .iter()
                .find(|(_, m)| **m == mesh)
                .map(|(id, _)| *id)
        })
    }

    fn render_frame(&mut self, scene: &SceneModel, painter: &Painter, viewport: Rect) {
        self.sync(scene);
        let camera = self.camera.to_camera();
        self.renderer.render(painter, viewport, &camera);
    }

    fn on_orbit_drag(&mut self, delta: Vec2) {
        self.camera.drag(to_glam(delta));
    }

    fn on_zoom(&mut self, delta: f32) {
        self.camera.zoom(delta);
    }
}
