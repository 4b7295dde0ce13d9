//! Observability plumbing for Psyche.
//!
//! Hosts embedding the memory engine call [`tracing_setup::init_tracing`]
//! once at startup; the engine itself only emits `tracing` spans and events
//! and never touches the subscriber.

pub mod tracing_setup;
