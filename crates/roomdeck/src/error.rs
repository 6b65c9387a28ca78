use crate::scene::EntityId;

/// Roomdeck errors
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A command referenced an entity that is no longer in the scene.
    #[error("entity {0} not found")]
    NotFound(EntityId),

    #[error(transparent)]
    CapabilityUnavailable(#[from] CapabilityUnavailable),
}

/// Why a single capability source could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub name: String,
    pub reason: String,
}

/// Every configured 3D capability source failed (or none were configured).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("3D capability unavailable after {} attempt(s)", failures.len())]
pub struct CapabilityUnavailable {
    pub failures: Vec<SourceFailure>,
}

impl CapabilityUnavailable {
    /// 3D was never attempted, e.g. disabled from the command line.
    pub fn disabled() -> Self {
        Self {
            failures: Vec::new(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
