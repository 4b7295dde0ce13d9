//! Retrieval result bundle.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::thought::Thought;

/// Relevance-ranked memory context returned by a query.
///
/// Events and thoughts are ordered by descending relevance score; ties keep
/// store insertion order. `time_window` carries the configured maintenance
/// interval as a hint for how fresh the collections are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryContext {
    pub events: Vec<Event>,
    pub thoughts: Vec<Thought>,
    #[serde(with = "duration_secs")]
    pub time_window: Duration,
}

/// Serialize a `chrono::Duration` as whole seconds.
mod duration_secs {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        value.num_seconds().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = i64::deserialize(deserializer)?;
        Ok(Duration::seconds(secs))
    }
}
