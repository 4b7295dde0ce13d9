//! Probabilistic forgetting of aged items.
//!
//! Items older than the 30-day cutoff are evaluated against the forgetting
//! curve; newer items are always kept. The curve produces a value that acts
//! as a keep-threshold floor: an item survives iff the sampled uniform value
//! exceeds it (`keep := r > p`). The value is intentionally not clamped --
//! very old items under high decay push it past 1 (certain removal), and
//! high-confidence thoughts push it negative (certain retention).

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::store::MemoryStore;

/// Age past which items enter forgetting evaluation.
const FORGETTING_CUTOFF_DAYS: i64 = 30;

/// Confidence weight subtracted from a thought's removal value, so firm
/// thoughts outlive shaky ones of the same age.
const CONFIDENCE_RETENTION_BONUS: f64 = 0.3;

/// Source of uniform values in [0, 1) for retention draws.
///
/// Injectable so tests can supply a fixed sequence and assert exact
/// keep/drop outcomes.
pub trait RetentionSampler: Send + Sync {
    fn next_value(&mut self) -> f64;
}

/// Default sampler backed by a seedable CSPRNG.
pub struct CurveSampler {
    rng: StdRng,
}

impl CurveSampler {
    /// Sampler seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sampler for reproducible maintenance runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RetentionSampler for CurveSampler {
    fn next_value(&mut self) -> f64 {
        self.rng.random()
    }
}

/// Counts of items removed by one forgetting pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ForgettingOutcome {
    pub events_removed: usize,
    pub thoughts_removed: usize,
}

/// Run one forgetting pass over both collections.
///
/// One independent draw is taken per evaluated item, in front-to-back
/// insertion order: events first, then thoughts.
pub fn run(
    store: &mut MemoryStore,
    decay: f64,
    now: DateTime<Utc>,
    sampler: &mut dyn RetentionSampler,
) -> ForgettingOutcome {
    let cutoff = now - Duration::days(FORGETTING_CUTOFF_DAYS);
    let mut outcome = ForgettingOutcome::default();

    store.events.retain(|event| {
        if event.timestamp > cutoff {
            return true;
        }
        let value = decay * days_since(event.timestamp, now) / 30.0;
        let keep = sampler.next_value() > value;
        if !keep {
            outcome.events_removed += 1;
        }
        keep
    });

    store.thoughts.retain(|thought| {
        if thought.timestamp > cutoff {
            return true;
        }
        let value = decay * days_since(thought.timestamp, now) / 30.0
            - thought.confidence * CONFIDENCE_RETENTION_BONUS;
        let keep = sampler.next_value() > value;
        if !keep {
            outcome.thoughts_removed += 1;
        }
        keep
    });

    outcome
}

fn days_since(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - timestamp).num_seconds() as f64 / 86_400.0
}
