//! Extracted thought types.
//!
//! A `Thought` is a short insight extracted from a specialization's output,
//! tagged with a category and an optional owning specialization, and carrying
//! a confidence score in [0, 1]. Thoughts are consolidated, forgotten, or
//! trimmed by the engine; they are never edited in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::specialization::Specialization;

/// A short extracted insight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thought {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub content: String,
    /// Category tag. When `specialization` is absent, retrieval matches this
    /// tag against the requested specialization's category list instead.
    pub category: String,
    pub specialization: Option<Specialization>,
    /// Confidence in [0, 1]. Clamped at every construction site.
    pub confidence: f64,
}

impl Thought {
    /// Create a thought with a fresh v7 id and the current timestamp.
    ///
    /// Confidence outside [0, 1] is clamped.
    pub fn new(
        content: impl Into<String>,
        category: impl Into<String>,
        specialization: Option<Specialization>,
        confidence: f64,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            timestamp: Utc::now(),
            content: content.into(),
            category: category.into(),
            specialization,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}
