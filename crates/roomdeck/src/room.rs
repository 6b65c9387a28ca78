//! Application state: the scene plus selection and swap mode, and the
//! commands that edit them.

use egui::{Pos2, Rect};
use glam::Vec3;
use tracing::{debug, info};

use crate::backend::RenderBackend;
use crate::catalog::FurnitureType;
use crate::error::{Error, Result};
use crate::scene::{EntityId, SceneModel};
use crate::status::{StatusReport, SwapStatus};

/// Two-step swap ritual. A candidate only exists while armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwapState {
    #[default]
    Off,
    Armed { candidate: Option<EntityId> },
}

impl SwapState {
    pub fn status(self) -> SwapStatus {
        match self {
            Self::Off => SwapStatus::Off,
            Self::Armed { candidate: None } => SwapStatus::AwaitingFirst,
            Self::Armed { candidate: Some(_) } => SwapStatus::AwaitingSecond,
        }
    }
}

/// Everything the UI can ask of the room
#[derive(Clone, Debug, PartialEq)]
pub enum RoomCommand {
    /// Place a new item at the origin and select it
    Add(FurnitureType),
    ToggleSwapMode,
    DuplicateSelected,
    RemoveSelected,
    MoveSelected { dx: f32, dz: f32 },
    RotateSelected(f32),
    /// Result of a hit test
    Pick(Option<EntityId>),
}

/// Scene plus interaction state. Every mutation goes through here so the
/// active backend sees matching add/remove/highlight calls.
#[derive(Debug, Default)]
pub struct RoomState {
    pub scene: SceneModel,
    selected: Option<EntityId>,
    swap: SwapState,
}

impl RoomState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<EntityId> {
        self.selected
    }

    pub fn swap(&self) -> SwapState {
        self.swap
    }

    pub fn status(&self) -> StatusReport {
        let selected = self.selected.and_then(|id| self.scene.get(id));
        StatusReport::new(selected, self.swap.status())
    }

    /// Seed the default layout and register it with the backend.
    pub fn seed(&mut self, backend: &mut dyn RenderBackend) {
        for id in self.scene.seed_default_layout() {
            if let Some(entity) = self.scene.get(id) {
                backend.add(entity);
            }
        }
        info!(
            "seeded {} items into the {} backend",
            self.scene.len(),
            backend.kind()
        );
    }

    pub fn apply(&mut self, cmd: RoomCommand, backend: &mut dyn RenderBackend) {
        debug!("command {cmd:?}");
        let res = match cmd {
            RoomCommand::Add(kind) => {
                self.add_furniture(kind, backend);
                Ok(())
            }
            RoomCommand::ToggleSwapMode => {
                self.toggle_swap_mode();
                Ok(())
            }
            RoomCommand::DuplicateSelected => self.duplicate_selected(backend),
            RoomCommand::RemoveSelected => {
                self.remove_selected(backend);
                Ok(())
            }
            RoomCommand::MoveSelected { dx, dz } => self.move_selected(dx, dz),
            RoomCommand::RotateSelected(delta) => self.rotate_selected(delta),
            RoomCommand::Pick(hit) => self.handle_pick(hit, backend),
        };

        if let Err(Error::NotFound(id)) = res {
            debug!("ignoring command on missing entity {id}");
        }
    }

    /// Hit test through the backend, then feed the result to the swap
    /// state machine.
    pub fn pick_at(&mut self, pointer: Pos2, viewport: Rect, backend: &mut dyn RenderBackend) {
        let hit = backend.pick(&self.scene, pointer, viewport);
        self.apply(RoomCommand::Pick(hit), backend);
    }

    pub fn add_furniture(
        &mut self,
        kind: FurnitureType,
        backend: &mut dyn RenderBackend,
    ) -> EntityId {
        let id = self.scene.add(kind, Vec3::ZERO);
        if let Some(entity) = self.scene.get(id) {
            backend.add(entity);
        }
        self.select(Some(id), backend);
        id
    }

    /// Change the selection, moving the highlight from the old entity to
    /// the new one. Selecting the current selection again does nothing.
    pub fn select(&mut self, id: Option<EntityId>, backend: &mut dyn RenderBackend) {
        if self.selected == id {
            return;
        }
        if let Some(old) = self.selected {
            backend.highlight(old, false);
        }
        self.selected = id;
        if let Some(new) = id {
            backend.highlight(new, true);
        }
    }

    pub fn toggle_swap_mode(&mut self) {
        self.swap = match self.swap {
            SwapState::Off => SwapState::Armed { candidate: None },
            SwapState::Armed { .. } => SwapState::Off,
        };
        info!("{}", self.swap.status());
    }

    pub fn handle_pick(
        &mut self,
        hit: Option<EntityId>,
        backend: &mut dyn RenderBackend,
    ) -> Result<()> {
        let Some(target) = hit else {
            // a miss clears the selection but leaves swap mode as it was
            self.select(None, backend);
            return Ok(());
        };

        match self.swap {
            SwapState::Off => self.select(Some(target), backend),

            SwapState::Armed { candidate: None } => {
                self.swap = SwapState::Armed {
                    candidate: Some(target),
                };
                self.select(Some(target), backend);
            }

            SwapState::Armed {
                candidate: Some(candidate),
            } if candidate == target => {
                debug!("swap cancelled on {target}");
                self.swap = SwapState::Off;
            }

            SwapState::Armed {
                candidate: Some(candidate),
            } => {
                self.swap = SwapState::Off;
                match self.scene.swap_positions(candidate, target) {
                    Ok(()) => info!("swapped positions of {candidate} and {target}"),
                    Err(err) => debug!("swap abandoned: {err}"),
                }
                self.select(Some(target), backend);
            }
        }

        Ok(())
    }

    pub fn move_selected(&mut self, dx: f32, dz: f32) -> Result<()> {
        let Some(id) = self.selected else {
            return Ok(());
        };
        self.scene.move_by(id, dx, dz).map(|_| ())
    }

    pub fn rotate_selected(&mut self, delta: f32) -> Result<()> {
        let Some(id) = self.selected else {
            return Ok(());
        };
        self.scene.rotate(id, delta).map(|_| ())
    }

    /// Clone the selected item and select the clone.
    pub fn duplicate_selected(&mut self, backend: &mut dyn RenderBackend) -> Result<()> {
        let Some(id) = self.selected else {
            return Ok(());
        };
        let clone = self.scene.duplicate(id)?;
        if let Some(entity) = self.scene.get(clone) {
            backend.add(entity);
        }
        self.select(Some(clone), backend);
        Ok(())
    }

    /// Remove the selected item. The selection is cleared even when the
    /// selected id was already gone. Removing the swap candidate leaves swap
    /// mode armed, waiting for a new first pick.
    pub fn remove_selected(&mut self, backend: &mut dyn RenderBackend) {
        let Some(id) = self.selected.take() else {
            return;
        };
        if self.swap == (SwapState::Armed { candidate: Some(id) }) {
            self.swap = SwapState::Armed { candidate: None };
        }
        if self.scene.remove(id).is_some() {
            backend.remove(id);
        }
    }
}
