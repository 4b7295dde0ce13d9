//! Engine configuration.
//!
//! `MemoryConfig` controls capacity limits, similarity thresholds, and the
//! forgetting curve. All fields are immutable once the engine is built and
//! have sensible defaults, so an empty TOML table is a valid configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Configuration for the Psyche memory engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Maximum number of events held in memory.
    #[serde(default = "default_max_events")]
    pub max_events_in_memory: usize,

    /// Maximum number of thoughts held in memory.
    #[serde(default = "default_max_thoughts")]
    pub max_thoughts_in_memory: usize,

    /// Jaccard word-set similarity at or above which two same-category
    /// thoughts are consolidated.
    #[serde(default = "default_similarity_threshold")]
    pub thought_similarity_threshold: f64,

    /// Decay rate of the forgetting curve. Zero disables forgetting.
    #[serde(default = "default_forgetting_decay")]
    pub forgetting_curve_decay: f64,

    /// Whether maintenance runs the consolidation pass.
    #[serde(default = "default_consolidation_enabled")]
    pub consolidation_enabled: bool,

    /// Advisory interval between maintenance runs, in seconds. The engine
    /// never schedules itself; callers decide when to run maintenance.
    #[serde(default = "default_maintenance_interval_secs")]
    pub maintenance_interval_secs: u64,

    /// Reserved for a future vector-similarity scorer. No current effect.
    #[serde(default)]
    pub semantic_search_enabled: bool,
}

fn default_max_events() -> usize {
    10_000
}

fn default_max_thoughts() -> usize {
    20_000
}

fn default_similarity_threshold() -> f64 {
    0.85
}

fn default_forgetting_decay() -> f64 {
    0.1
}

fn default_consolidation_enabled() -> bool {
    true
}

fn default_maintenance_interval_secs() -> u64 {
    86_400
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_events_in_memory: default_max_events(),
            max_thoughts_in_memory: default_max_thoughts(),
            thought_similarity_threshold: default_similarity_threshold(),
            forgetting_curve_decay: default_forgetting_decay(),
            consolidation_enabled: default_consolidation_enabled(),
            maintenance_interval_secs: default_maintenance_interval_secs(),
            semantic_search_enabled: false,
        }
    }
}

impl MemoryConfig {
    /// The advisory maintenance interval as a duration.
    pub fn maintenance_interval(&self) -> Duration {
        Duration::seconds(self.maintenance_interval_secs as i64)
    }
}
