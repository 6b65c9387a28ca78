//! Ordered-retry acquisition of the 3D capability.
//!
//! Sources are tried in priority order. The first success short-circuits;
//! if every source fails the caller gets one [`CapabilityUnavailable`]
//! carrying each failure.

use poll_promise::Promise;
use tracing::{info, warn};

use crate::error::{CapabilityUnavailable, SourceFailure};

/// One place a capability might come from.
pub trait CapabilitySource<T>: Send {
    fn name(&self) -> &str;

    fn acquire(&mut self) -> Result<T, String>;
}

/// A source backed by a closure.
pub struct FnSource<F> {
    name: String,
    f: F,
}

impl<F> FnSource<F> {
    pub fn new<T>(name: impl Into<String>, f: F) -> Self
    where
        F: FnMut() -> Result<T, String> + Send,
    {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<T, F> CapabilitySource<T> for FnSource<F>
where
    F: FnMut() -> Result<T, String> + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn acquire(&mut self) -> Result<T, String> {
        (self.f)()
    }
}

/// A successfully acquired capability and the source that produced it.
#[derive(Debug)]
pub struct Acquired<T> {
    pub value: T,
    pub source: String,
}

/// Try each source in order and return the first success.
pub fn first_success<T>(
    sources: &mut [Box<dyn CapabilitySource<T>>],
) -> Result<Acquired<T>, CapabilityUnavailable> {
    let mut failures = Vec::with_capacity(sources.len());

    for source in sources.iter_mut() {
        match source.acquire() {
            Ok(value) => {
                info!("acquired 3D capability from {}", source.name());
                return Ok(Acquired {
                    value,
                    source: source.name().to_owned(),
                });
            }
            Err(reason) => {
                warn!("3D capability source {} failed: {reason}", source.name());
                failures.push(SourceFailure {
                    name: source.name().to_owned(),
                    reason,
                });
            }
        }
    }

    Err(CapabilityUnavailable { failures })
}

pub type LoadResult<T> = Result<Acquired<T>, CapabilityUnavailable>;

/// Owns an ordered list of sources and runs them once.
pub struct CapabilityLoader<T> {
    sources: Vec<Box<dyn CapabilitySource<T>>>,
}

impl<T> Default for CapabilityLoader<T> {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
        }
    }
}

impl<T: Send + 'static> CapabilityLoader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl CapabilitySource<T> + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Run the sources on the calling thread.
    pub fn acquire(mut self) -> LoadResult<T> {
        first_success(&mut self.sources)
    }

    /// Run the sources on a background thread.
    pub fn spawn(self) -> Promise<LoadResult<T>> {
        Promise::spawn_thread("capability-loader", move || self.acquire())
    }
}
