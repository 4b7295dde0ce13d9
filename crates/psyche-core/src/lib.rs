//! Retention-and-retrieval engine for Psyche.
//!
//! The engine keeps two bounded, insertion-ordered collections -- events
//! and thoughts -- and serves relevance-ranked subsets of them per
//! specialization. Maintenance applies a probabilistic forgetting curve and
//! consolidates near-duplicate thoughts. Persistence is a port only: the
//! [`persistence::MemoryPersistence`] trait is implemented by collaborators,
//! never here.

pub mod consolidation;
pub mod engine;
pub mod extract;
pub mod forgetting;
pub mod insights;
pub mod persistence;
pub mod retrieval;
pub mod store;
