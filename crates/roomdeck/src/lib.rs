//! Roomdeck: arrange box furniture in a room.
//!
//! The room is drawn by one of two backends chosen once at startup: a
//! perspective 3D renderer when the 3D capability can be acquired, or a
//! software isometric view when it can't. Scene edits, selection and the
//! swap ritual live in [`RoomState`] and never depend on which backend is
//! active.

mod app;
mod args;
pub mod backend;
mod camera;
mod catalog;
mod error;
mod input;
pub mod isometric;
mod loader;
mod options;
mod picking;
mod room;
mod scene;
mod selector;
mod spatial;
mod status;
mod view;

pub use app::{RenderLoop, RoomdeckApp};
pub use args::Args;
pub use backend::{
    Backend3D, BackendIsometric, BackendKind, HIGHLIGHT_EMISSIVE, RenderBackend, Renderer3D,
    room_scene,
};
pub use camera::OrbitCamera;
pub use catalog::{CatalogEntry, FurnitureType};
pub use error::{CapabilityUnavailable, Error, Result, SourceFailure};
pub use input::{MOVE_STEP, ROTATE_STEP, key_command};
pub use loader::{Acquired, CapabilityLoader, CapabilitySource, FnSource, LoadResult, first_success};
pub use options::RoomdeckOptions;
pub use picking::pick_isometric;
pub use room::{RoomCommand, RoomState, SwapState};
pub use scene::{DUPLICATE_OFFSET, EntityId, FurnitureEntity, SceneModel};
pub use selector::{BackendSelector, Capability3D, Resolution, SelectorState};
pub use spatial::{BoxSize, ROOM_LIMIT, clamp_to_room, rotate_xz};
pub use status::{DEGRADED_NOTICE, NO_POSITION_LABEL, NO_SELECTION_LABEL, StatusReport, SwapStatus};
