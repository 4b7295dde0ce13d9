//! Read-only engine statistics.

use serde::{Deserialize, Serialize};

use std::collections::HashMap;

/// Bucket label for thoughts with no owning specialization.
pub const UNKNOWN_SPECIALIZATION: &str = "unknown";

/// Fixed summary string when nothing was recorded in the last 24 hours.
pub const NO_RECENT_ACTIVITY: &str = "no recent activity";

/// Snapshot of the store computed by the insights aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryInsights {
    pub total_events: usize,
    pub total_thoughts: usize,
    /// Event count as a percentage of the configured event limit.
    pub utilization_percent: f64,
    /// Specialization label to thought count. Ownerless thoughts count
    /// under [`UNKNOWN_SPECIALIZATION`].
    pub thoughts_by_specialization: HashMap<String, usize>,
    /// One-line summary of the last 24 hours of activity, or
    /// [`NO_RECENT_ACTIVITY`].
    pub recent_activity: String,
}
