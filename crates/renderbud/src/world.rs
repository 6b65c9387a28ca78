use glam::{Mat4, Quat, Vec3};

/// A unique handle for a mesh in the scene.
/// Uses arena index + generation to prevent stale handle reuse.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MeshId {
    pub index: u32,
    pub generation: u32,
}

/// Placement of a box mesh: translation of its center plus a yaw around +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub yaw: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            yaw: 0.0,
        }
    }
}

impl Transform {
    pub fn from_translation(t: Vec3) -> Self {
        Self {
            translation: t,
            ..Default::default()
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_y(self.yaw), self.translation)
    }
}

/// Surface parameters of a box. Colors are linear 0..1 RGB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub emissive: Vec3,
}

impl Material {
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: rgb8(r, g, b),
            emissive: Vec3::ZERO,
        }
    }
}

pub fn rgb8(r: u8, g: u8, b: u8) -> Vec3 {
    Vec3::new(r as f32, g as f32, b as f32) / 255.0
}

/// Whether a box is always drawn or only from inside a room shell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Facing {
    #[default]
    Solid,
    /// Wall or ceiling piece whose interior side faces `inward`. It is
    /// skipped while the eye is on the other side, which cuts the room open
    /// toward the camera.
    Inward(Vec3),
}

/// An axis-aligned box centered on its local origin.
#[derive(Clone, Debug)]
pub struct BoxMesh {
    /// Full extents (width, height, depth).
    pub size: Vec3,
    pub material: Material,
    pub transform: Transform,
    pub facing: Facing,
}

impl BoxMesh {
    pub fn is_drawn_from(&self, eye: Vec3) -> bool {
        match self.facing {
            Facing::Solid => true,
            Facing::Inward(inward) => (eye - self.transform.translation).dot(inward) > 0.0,
        }
    }

    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }

    pub fn world_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }
}

struct Slot {
    mesh: Option<BoxMesh>,
    generation: u32,
}

/// Arena of box meshes plus the ordered list of meshes attached to the
/// scene. Meshes can exist detached (created but not yet added).
#[derive(Default)]
pub struct World {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    /// Attached meshes in insertion order.
    scene: Vec<MeshId>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self, id: MeshId) -> bool {
        self.slots
            .get(id.index as usize)
            .is_some_and(|s| s.generation == id.generation && s.mesh.is_some())
    }

    pub fn create_box(&mut self, size: Vec3, material: Material, facing: Facing) -> MeshId {
        let mesh = BoxMesh {
            size,
            material,
            transform: Transform::default(),
            facing,
        };

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation += 1;
            slot.mesh = Some(mesh);
            return MeshId {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            mesh: Some(mesh),
            generation: 0,
        });
        MeshId {
            index,
            generation: 0,
        }
    }

    /// Attach a mesh to the scene. Returns false for stale handles; attaching
    /// twice is a no-op.
    pub fn add_to_scene(&mut self, id: MeshId) -> bool {
        if !self.is_valid(id) {
            return false;
        }
        if !self.scene.contains(&id) {
            self.scene.push(id);
        }
        true
    }

    /// Detach a mesh from the scene and free its slot.
    pub fn remove_mesh(&mut self, id: MeshId) -> bool {
        if !self.is_valid(id) {
            return false;
        }
        self.scene.retain(|m| *m != id);
        self.slots[id.index as usize].mesh = None;
        self.free_list.push(id.index);
        true
    }

    pub fn set_transform(&mut self, id: MeshId, transform: Transform) -> bool {
        match self.get_mut(id) {
            Some(mesh) => {
                mesh.transform = transform;
                true
            }
            None => false,
        }
    }

    pub fn set_emissive(&mut self, id: MeshId, emissive: Vec3) -> bool {
        match self.get_mut(id) {
            Some(mesh) => {
                mesh.material.emissive = emissive;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: MeshId) -> Option<&BoxMesh> {
        if !self.is_valid(id) {
            return None;
        }
        self.slots[id.index as usize].mesh.as_ref()
    }

    fn get_mut(&mut self, id: MeshId) -> Option<&mut BoxMesh> {
        if !self.is_valid(id) {
            return None;
        }
        self.slots[id.index as usize].mesh.as_mut()
    }

    /// Meshes attached to the scene, in insertion order.
    pub fn scene_meshes(&self) -> impl Iterator<Item = (MeshId, &BoxMesh)> + '_ {
        self.scene
            .iter()
            .filter_map(|&id| self.get(id).map(|mesh| (id, mesh)))
    }

    pub fn num_in_scene(&self) -> usize {
        self.scene.len()
    }
}
