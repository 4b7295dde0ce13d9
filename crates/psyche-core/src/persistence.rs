//! Persistence extension points.
//!
//! The engine performs no I/O of its own. Collaborators that want durable
//! state implement [`MemoryPersistence`]; the engine calls
//! `load_initial_state` once at construction and `persist_state` only when
//! the caller asks for a snapshot. The default implementation is a no-op.
//!
//! The trait is object-safe (boxed futures) so backends can be selected at
//! runtime behind a `Box<dyn MemoryPersistence>`.

use std::future::Future;
use std::pin::Pin;

use psyche_types::error::MemoryError;
use psyche_types::event::Event;
use psyche_types::thought::Thought;

/// Boxed future type used by the object-safe persistence trait.
pub type PersistenceFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, MemoryError>> + Send + 'a>>;

/// Extension points for durable storage of the engine's state.
pub trait MemoryPersistence: Send + Sync {
    /// Load previously persisted state. Called once at engine construction.
    fn load_initial_state(&self) -> PersistenceFuture<'_, (Vec<Event>, Vec<Thought>)>;

    /// Persist a snapshot of the current state. Invoked opportunistically
    /// by the caller, never by the engine itself.
    fn persist_state<'a>(
        &'a self,
        events: &'a [Event],
        thoughts: &'a [Thought],
    ) -> PersistenceFuture<'a, ()>;
}

/// Default persistence: loads nothing, persists nowhere.
#[derive(Debug, Default)]
pub struct NoopPersistence;

impl MemoryPersistence for NoopPersistence {
    fn load_initial_state(&self) -> PersistenceFuture<'_, (Vec<Event>, Vec<Thought>)> {
        Box::pin(async { Ok((Vec::new(), Vec::new())) })
    }

    fn persist_state<'a>(
        &'a self,
        _events: &'a [Event],
        _thoughts: &'a [Thought],
    ) -> PersistenceFuture<'a, ()> {
        Box::pin(async { Ok(()) })
    }
}
