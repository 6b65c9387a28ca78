//! Decides once per session which backend renders the room.

use poll_promise::Promise;
use strum_macros::Display;
use tracing::{info, warn};

use crate::backend::{Backend3D, BackendIsometric, RenderBackend, Renderer3D};
use crate::error::CapabilityUnavailable;
use crate::loader::{CapabilityLoader, LoadResult};
use crate::status::DEGRADED_NOTICE;

/// A usable 3D backend, produced by a capability source. The renderer is
/// wrapped in its [`Backend3D`] (room decor included) before it leaves the
/// source.
pub struct Capability3D {
    backend: Box<dyn RenderBackend + Send>,
    /// Human readable description of what backs the renderer
    pub description: String,
}

impl Capability3D {
    pub fn new<R>(description: impl Into<String>, renderer: R) -> Self
    where
        R: Renderer3D + Send + 'static,
        R::Mesh: Send,
    {
        Self {
            backend: Box::new(Backend3D::new(renderer)),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SelectorState {
    Acquiring,
    Ready3D,
    ReadyIsometric,
}

/// The chosen backend plus what to tell the user about it.
pub struct Resolution {
    pub backend: Box<dyn RenderBackend>,
    /// Degraded-mode notice, shown when 3D is unavailable
    pub notice: Option<&'static str>,
}

pub struct BackendSelector {
    state: SelectorState,
    pending: Option<Promise<LoadResult<Capability3D>>>,
    iso_scale: f32,
}

impl BackendSelector {
    /// Start acquiring the 3D capability in the background.
    pub fn start(loader: CapabilityLoader<Capability3D>, iso_scale: f32) -> Self {
        info!("trying {} 3D capability source(s)", loader.len());
        Self::from_promise(loader.spawn(), iso_scale)
    }

    /// Skip the capability search and go straight to the isometric view.
    pub fn isometric_only(iso_scale: f32) -> Self {
        info!("3D disabled, using the isometric view");
        Self::from_promise(
            Promise::from_ready(Err(CapabilityUnavailable::disabled())),
            iso_scale,
        )
    }

    pub fn from_promise(promise: Promise<LoadResult<Capability3D>>, iso_scale: f32) -> Self {
        Self {
            state: SelectorState::Acquiring,
            pending: Some(promise),
            iso_scale,
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    /// Returns the backend exactly once, on the first poll after the capability search
    /// finishes. Later polls return `None`.
    pub fn poll(&mut self) -> Option<Resolution> {
        if self.pending.as_ref()?.ready().is_none() {
            return None;
        }
        let result = self.pending.take()?.block_and_take();
        Some(self.resolve(result))
    }

    fn resolve(&mut self, result: LoadResult<Capability3D>) -> Resolution {
        match result {
            Ok(acquired) => {
                info!(
                    "using 3D backend: {} (from {})",
                    acquired.value.description, acquired.source
                );
                self.state = SelectorState::Ready3D;
                Resolution {
                    backend: acquired.value.backend,
                    notice: None,
                }
            }
            Err(err) => {
                warn!("{err}, falling back to the isometric view");
                for failure in &err.failures {
                    warn!("  {}: {}", failure.name, failure.reason);
                }
                self.state = SelectorState::ReadyIsometric;
                Resolution {
                    backend: Box::new(BackendIsometric::new(self.iso_scale)),
                    notice: Some(DEGRADED_NOTICE),
                }
            }
        }
    }
}
