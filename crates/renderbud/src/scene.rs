use glam::{Mat4, Vec2, Vec3};

use crate::camera::{Camera, Ray};
use crate::world::{BoxMesh, Facing, Material, MeshId, Transform, World, rgb8};

/// Warm fill light with a finite reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    /// Distance at which the light fades out completely. Zero means no cutoff.
    pub range: f32,
    /// Falloff exponent applied to distance.
    pub decay: f32,
}

/// Ambient term, one directional key light and an optional point light.
#[derive(Debug, Clone, Copy)]
pub struct Lighting {
    pub ambient: f32,
    /// Direction pointing from the scene toward the light.
    pub key_dir: Vec3,
    pub key_intensity: f32,
    pub point: Option<PointLight>,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.55,
            key_dir: Vec3::new(6.0, 10.0, 6.0).normalize(),
            key_intensity: 0.6,
            point: None,
        }
    }
}

/// Square floor grid centered on the origin.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    pub half_extent: f32,
    pub spacing: f32,
    pub color: Vec3,
    pub opacity: f32,
}

/// Ray-AABB intersection using the slab method.
/// Transforms the ray into the object's local space via the inverse world matrix.
/// Returns the distance along the ray if there's a hit.
fn ray_aabb(ray: &Ray, half: Vec3, world: &Mat4) -> Option<f32> {
    let inv = world.inverse();
    let lo = inv.transform_point3(ray.origin);
    let ld = inv.transform_vector3(ray.dir);
    let t1 = (-half - lo) / ld;
    let t2 = (half - lo) / ld;
    let tmin = t1.min(t2);
    let tmax = t1.max(t2);
    let enter = tmin.x.max(tmin.y).max(tmin.z);
    let exit = tmax.x.min(tmax.y).min(tmax.z);
    if exit >= enter.max(0.0) {
        Some(enter.max(0.0))
    } else {
        None
    }
}

/// Everything the GPU renderer draws, kept on the CPU side: the mesh arena,
/// lights, floor grid and clear color. Picking runs here too.
pub struct Scene {
    world: World,
    pub lighting: Lighting,
    grid: Option<Grid>,
    pub background: Vec3,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            lighting: Lighting::default(),
            grid: None,
            background: rgb8(0x0b, 0x11, 0x20),
        }
    }

    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn with_lighting(mut self, lighting: Lighting) -> Self {
        self.lighting = lighting;
        self
    }

    pub fn grid(&self) -> Option<Grid> {
        self.grid
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn create_box(&mut self, size: Vec3, material: Material, facing: Facing) -> MeshId {
        self.world.create_box(size, material, facing)
    }

    pub fn add_to_scene(&mut self, id: MeshId) -> bool {
        self.world.add_to_scene(id)
    }

    pub fn remove_mesh(&mut self, id: MeshId) -> bool {
        self.world.remove_mesh(id)
    }

    pub fn set_transform(&mut self, id: MeshId, transform: Transform) -> bool {
        self.world.set_transform(id, transform)
    }

    /// Set or clear (with `Vec3::ZERO`) the emissive glow of a mesh.
    pub fn set_emissive(&mut self, id: MeshId, emissive: Vec3) -> bool {
        self.world.set_emissive(id, emissive)
    }

    /// Scene meshes that should be drawn for a camera at `eye`.
    pub fn drawn_meshes(&self, eye: Vec3) -> impl Iterator<Item = (MeshId, &BoxMesh)> + '_ {
        self.world
            .scene_meshes()
            .filter(move |(_, mesh)| mesh.is_drawn_from(eye))
    }

    /// All scene meshes hit by the ray, nearest first.
    pub fn intersect(&self, ray: &Ray) -> Vec<(MeshId, f32)> {
        let mut hits: Vec<(MeshId, f32)> = self
            .world
            .scene_meshes()
            .filter_map(|(id, mesh)| {
                ray_aabb(ray, mesh.half_extents(), &mesh.world_matrix()).map(|t| (id, t))
            })
            .collect();
        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        hits
    }

    /// Pick the closest scene mesh under viewport-relative pixel coordinates.
    pub fn pick(&self, camera: &Camera, screen: Vec2, size: Vec2) -> Option<MeshId> {
        let ray = camera.screen_to_ray(screen, size.x, size.y);
        self.intersect(&ray).first().map(|(id, _)| *id)
    }
}
