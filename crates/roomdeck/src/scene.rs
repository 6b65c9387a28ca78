//! Furniture entities and the ordered scene that owns them

use glam::{Vec2, Vec3};
use tracing::debug;

use crate::catalog::FurnitureType;
use crate::error::{Error, Result};
use crate::spatial::{BoxSize, clamp_to_room};

/// Offset applied on x and z to a duplicated item.
pub const DUPLICATE_OFFSET: f32 = 0.8;

/// Stable identity of a placed item. Never reused within a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One placed furniture item
#[derive(Clone, Debug, PartialEq)]
pub struct FurnitureEntity {
    pub id: EntityId,
    pub kind: FurnitureType,
    /// Center of the box. `y` starts at half the catalog height and only
    /// changes through a position swap.
    pub position: Vec3,
    /// Yaw in radians
    pub rotation: f32,
}

impl FurnitureEntity {
    pub fn size(&self) -> BoxSize {
        self.kind.size()
    }

    /// Floor-plane position (x, z).
    pub fn floor_pos(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }

    /// Painter's-algorithm depth proxy
    pub fn depth_key(&self) -> f32 {
        self.position.x + self.position.z
    }
}

/// Ordered collection of furniture. Insertion order is preserved and is the
/// tie-break for draw order.
#[derive(Debug, Default)]
pub struct SceneModel {
    entities: Vec<FurnitureEntity>,
    next_id: u64,
}

impl SceneModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> EntityId {
        self.next_id += 1;
        EntityId(self.next_id)
    }

    fn index_of(&self, id: EntityId) -> Result<usize> {
        self.entities
            .iter()
            .position(|e| e.id == id)
            .ok_or(Error::NotFound(id))
    }

    /// Place a new item with its x/z taken from `position`. The item always
    /// rests on the floor, so `position.y` is ignored.
    pub fn add(&mut self, kind: FurnitureType, position: Vec3) -> EntityId {
        let id = self.next_id();
        let position = Vec3::new(position.x, kind.size().resting_y(), position.z);
        debug!("add {kind} {id} at ({:.2}, {:.2})", position.x, position.z);
        self.entities.push(FurnitureEntity {
            id,
            kind,
            position,
            rotation: 0.0,
        });
        id
    }

    /// Clone an item's type and position, shifted by [`DUPLICATE_OFFSET`] on
    /// x and z. The clone starts unrotated.
    pub fn duplicate(&mut self, id: EntityId) -> Result<EntityId> {
        let src = &self.entities[self.index_of(id)?];
        let (kind, pos) = (src.kind, src.position);
        Ok(self.add(
            kind,
            Vec3::new(pos.x + DUPLICATE_OFFSET, 0.0, pos.z + DUPLICATE_OFFSET),
        ))
    }

    /// Remove an item. Absent ids are ignored.
    pub fn remove(&mut self, id: EntityId) -> Option<FurnitureEntity> {
        let index = self.index_of(id).ok()?;
        debug!("remove {id}");
        Some(self.entities.remove(index))
    }

    /// Move on the floor plane, clamped to the room.
    pub fn move_by(&mut self, id: EntityId, dx: f32, dz: f32) -> Result<Vec3> {
        let index = self.index_of(id)?;
        let pos = &mut self.entities[index].position;
        pos.x = clamp_to_room(pos.x + dx);
        pos.z = clamp_to_room(pos.z + dz);
        debug!("move {id} to ({:.2}, {:.2})", pos.x, pos.z);
        Ok(*pos)
    }

    pub fn rotate(&mut self, id: EntityId, delta: f32) -> Result<f32> {
        let index = self.index_of(id)?;
        let entity = &mut self.entities[index];
        entity.rotation += delta;
        debug!("rotate {id} to {:.2} rad", entity.rotation);
        Ok(entity.rotation)
    }

    /// Exchange the full positions of two items. Rotation and type stay put.
    pub fn swap_positions(&mut self, a: EntityId, b: EntityId) -> Result<()> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if ia == ib {
            return Ok(());
        }

        let pa = self.entities[ia].position;
        self.entities[ia].position = self.entities[ib].position;
        self.entities[ib].position = pa;
        debug!("swapped {a} and {b}");
        Ok(())
    }

    pub fn get(&self, id: EntityId) -> Option<&FurnitureEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &FurnitureEntity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The starting room: a sofa, a table and a bed.
    pub fn seed_default_layout(&mut self) -> Vec<EntityId> {
        vec![
            self.add(FurnitureType::Sofa, Vec3::new(-2.0, 0.0, -2.0)),
            self.add(FurnitureType::Table, Vec3::new(0.0, 0.0, 1.0)),
            self.add(FurnitureType::Bed, Vec3::new(3.0, 0.0, -1.0)),
        ]
    }
}
