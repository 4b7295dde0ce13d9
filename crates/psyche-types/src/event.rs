//! Conversational event types.
//!
//! An `Event` is the stored record of one complete user/system exchange,
//! including per-specialization agent outputs and the emotional context
//! detected during the exchange. Events are immutable once created; the
//! engine removes them only through capacity trimming or forgetting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::collections::HashMap;
use std::time::Duration;

use crate::specialization::Specialization;

/// Output produced by one specialization during an exchange.
///
/// Embedded in an [`Event`] and shares its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentOutput {
    pub specialization: Specialization,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// How long the specialization took to produce this output.
    pub processing_time: Option<Duration>,
    /// Sampling temperature used, if it deviated from the default.
    pub temperature: Option<f64>,
}

impl AgentOutput {
    /// Create an output stamped with the current time and no overrides.
    pub fn new(specialization: Specialization, content: impl Into<String>) -> Self {
        Self {
            specialization,
            content: content.into(),
            timestamp: Utc::now(),
            processing_time: None,
            temperature: None,
        }
    }
}

/// A stored record of one complete user/system exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user_input: String,
    pub system_response: String,
    /// Emotion name to intensity in [0, 1]. Intensities are clamped at
    /// construction.
    pub emotional_context: HashMap<String, f64>,
    pub agent_outputs: Vec<AgentOutput>,
    pub conversation_context: String,
}

impl Event {
    /// Build an event from an [`Exchange`], assigning a fresh v7 id and
    /// the current timestamp.
    ///
    /// Emotion intensities outside [0, 1] are clamped rather than rejected.
    pub fn from_exchange(exchange: Exchange) -> Self {
        let emotional_context = exchange
            .emotional_context
            .into_iter()
            .map(|(name, intensity)| (name, intensity.clamp(0.0, 1.0)))
            .collect();

        Self {
            id: Uuid::now_v7(),
            timestamp: Utc::now(),
            user_input: exchange.user_input,
            system_response: exchange.system_response,
            emotional_context,
            agent_outputs: exchange.agent_outputs,
            conversation_context: exchange.conversation_context,
        }
    }
}

/// The caller-supplied bundle describing one exchange to record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exchange {
    pub user_input: String,
    pub system_response: String,
    pub agent_outputs: Vec<AgentOutput>,
    pub emotional_context: HashMap<String, f64>,
    pub conversation_context: String,
}
