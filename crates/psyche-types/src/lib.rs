//! Shared domain types for Psyche.
//!
//! This crate contains the core domain types used across the Psyche memory
//! engine: Specialization, Event, Thought, configuration, and their
//! associated error and result types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod insights;
pub mod specialization;
pub mod thought;
