//! Relevance scoring and top-K retrieval.
//!
//! Scores blend recency, query word overlap, and (for thoughts) confidence.
//! Overlap is a substring heuristic over lowercased text -- semantic
//! similarity is deliberately out of scope. Sorting is stable descending by
//! score, so equal scores keep store insertion order; that is the
//! deterministic tie-break. The result caps are fixed at 5 events and 10
//! thoughts regardless of store size.

use chrono::{DateTime, Utc};

use psyche_types::config::MemoryConfig;
use psyche_types::context::MemoryContext;
use psyche_types::event::Event;
use psyche_types::specialization::Specialization;
use psyche_types::thought::Thought;

use crate::store::MemoryStore;

/// Maximum events returned by a query.
const MAX_EVENTS_RETURNED: usize = 5;

/// Maximum thoughts returned by a query.
const MAX_THOUGHTS_RETURNED: usize = 10;

/// Recency scores fall linearly to zero over this horizon.
const RECENCY_HORIZON_DAYS: f64 = 30.0;

/// Rank the store against a (specialization, query) pair.
///
/// Read-only and total: an empty query or an empty store produces empty
/// result collections, never an error.
pub fn query(
    store: &MemoryStore,
    config: &MemoryConfig,
    specialization: Specialization,
    query_text: &str,
    now: DateTime<Utc>,
) -> MemoryContext {
    let words: Vec<String> = query_text
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut events: Vec<(f64, &Event)> = store
        .events()
        .map(|event| (score_event(event, &words, now), event))
        .collect();
    events.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    events.truncate(MAX_EVENTS_RETURNED);

    let mut thoughts: Vec<(f64, &Thought)> = store
        .thoughts()
        .filter(|thought| matches_specialization(thought, specialization))
        .map(|thought| (score_thought(thought, &words, now), thought))
        .collect();
    thoughts.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    thoughts.truncate(MAX_THOUGHTS_RETURNED);

    MemoryContext {
        events: events.into_iter().map(|(_, e)| e.clone()).collect(),
        thoughts: thoughts.into_iter().map(|(_, t)| t.clone()).collect(),
        time_window: config.maintenance_interval(),
    }
}

/// A thought is visible to a specialization when it is owned by it, or when
/// it has no owner and its category is among the specialization's tags.
fn matches_specialization(thought: &Thought, specialization: Specialization) -> bool {
    match thought.specialization {
        Some(owner) => owner == specialization,
        None => specialization
            .categories()
            .contains(&thought.category.as_str()),
    }
}

fn score_event(event: &Event, words: &[String], now: DateTime<Utc>) -> f64 {
    let haystack = format!(
        "{} {}",
        event.user_input.to_lowercase(),
        event.system_response.to_lowercase()
    );
    0.3 * recency(event.timestamp, now) + 0.7 * overlap(&haystack, words)
}

fn score_thought(thought: &Thought, words: &[String], now: DateTime<Utc>) -> f64 {
    let haystack = thought.content.to_lowercase();
    0.2 * recency(thought.timestamp, now)
        + 0.6 * overlap(&haystack, words)
        + 0.2 * thought.confidence
}

/// Linear decay from 1.0 (just now) to 0.0 at the horizon.
fn recency(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days = (now - timestamp).num_seconds() as f64 / 86_400.0;
    (1.0 - days / RECENCY_HORIZON_DAYS).max(0.0)
}

/// Fraction of query words appearing as substrings of the haystack.
/// A zero-word query scores 0.
fn overlap(haystack: &str, words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let matching = words.iter().filter(|word| haystack.contains(word.as_str())).count();
    matching as f64 / words.len() as f64
}
