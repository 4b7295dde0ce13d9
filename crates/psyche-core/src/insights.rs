//! Read-only statistics over the store.

use chrono::{DateTime, Duration, Utc};

use psyche_types::config::MemoryConfig;
use psyche_types::insights::{MemoryInsights, NO_RECENT_ACTIVITY, UNKNOWN_SPECIALIZATION};

use std::collections::HashMap;

use crate::store::MemoryStore;

/// Window for the recent-activity summary.
const RECENT_WINDOW_HOURS: i64 = 24;

/// Compute a statistics snapshot. Total: an empty store yields zeroed
/// counts and the fixed no-activity sentinel.
pub fn compute(store: &MemoryStore, config: &MemoryConfig, now: DateTime<Utc>) -> MemoryInsights {
    let total_events = store.event_count();
    let total_thoughts = store.thought_count();

    let utilization_percent = if config.max_events_in_memory == 0 {
        0.0
    } else {
        total_events as f64 / config.max_events_in_memory as f64 * 100.0
    };

    let mut thoughts_by_specialization: HashMap<String, usize> = HashMap::new();
    for thought in store.thoughts() {
        let label = match thought.specialization {
            Some(spec) => spec.label().to_string(),
            None => UNKNOWN_SPECIALIZATION.to_string(),
        };
        *thoughts_by_specialization.entry(label).or_insert(0) += 1;
    }

    let window_start = now - Duration::hours(RECENT_WINDOW_HOURS);
    let recent_events = store.events().filter(|e| e.timestamp > window_start).count();
    let recent_thoughts = store
        .thoughts()
        .filter(|t| t.timestamp > window_start)
        .count();
    let recent_activity = if recent_events == 0 && recent_thoughts == 0 {
        NO_RECENT_ACTIVITY.to_string()
    } else {
        format!("{recent_events} events and {recent_thoughts} thoughts in the last 24 hours")
    };

    MemoryInsights {
        total_events,
        total_thoughts,
        utilization_percent,
        thoughts_by_specialization,
        recent_activity,
    }
}
