//! The serialized-access engine facade.
//!
//! `MemoryEngine` exposes the four public operations -- record, query,
//! maintain, insights -- over a single `tokio::sync::RwLock`. Mutations
//! (record, maintain) take the write guard; reads (query, insights) share
//! the read guard, so no reader ever observes a partially appended
//! exchange. Maintenance holds the write guard for its full forgetting +
//! consolidation pass; concurrent calls queue behind it. Nothing here
//! performs I/O -- suspension exists only to yield the lock.

use chrono::Utc;
use tokio::sync::RwLock;

use psyche_types::config::MemoryConfig;
use psyche_types::context::MemoryContext;
use psyche_types::error::MemoryError;
use psyche_types::event::{Event, Exchange};
use psyche_types::insights::MemoryInsights;
use psyche_types::specialization::Specialization;
use psyche_types::thought::Thought;

use crate::consolidation;
use crate::extract::extract_thoughts;
use crate::forgetting::{self, CurveSampler, RetentionSampler};
use crate::insights;
use crate::persistence::{MemoryPersistence, NoopPersistence};
use crate::retrieval;
use crate::store::MemoryStore;

/// Store plus the sampler feeding the forgetting curve, guarded together.
struct EngineState {
    store: MemoryStore,
    sampler: Box<dyn RetentionSampler>,
}

/// The Psyche memory engine.
pub struct MemoryEngine {
    config: MemoryConfig,
    state: RwLock<EngineState>,
    persistence: Box<dyn MemoryPersistence>,
}

impl MemoryEngine {
    /// Engine with an OS-seeded sampler and no-op persistence.
    pub fn new(config: MemoryConfig) -> Self {
        Self::with_sampler(config, Box::new(CurveSampler::from_os()))
    }

    /// Engine with a caller-supplied retention sampler, for deterministic
    /// maintenance.
    pub fn with_sampler(config: MemoryConfig, sampler: Box<dyn RetentionSampler>) -> Self {
        Self {
            config,
            state: RwLock::new(EngineState {
                store: MemoryStore::new(),
                sampler,
            }),
            persistence: Box::new(NoopPersistence),
        }
    }

    /// Engine seeded from a persistence collaborator.
    ///
    /// `load_initial_state` is awaited exactly once; the loaded sequences
    /// are trimmed to the configured capacity.
    pub async fn with_persistence(
        config: MemoryConfig,
        persistence: Box<dyn MemoryPersistence>,
    ) -> Result<Self, MemoryError> {
        Self::with_persistence_and_sampler(config, persistence, Box::new(CurveSampler::from_os()))
            .await
    }

    /// Engine seeded from persistence with a caller-supplied sampler.
    pub async fn with_persistence_and_sampler(
        config: MemoryConfig,
        persistence: Box<dyn MemoryPersistence>,
        sampler: Box<dyn RetentionSampler>,
    ) -> Result<Self, MemoryError> {
        let (events, thoughts) = persistence.load_initial_state().await?;
        let store = MemoryStore::with_state(events, thoughts, &config);
        Ok(Self {
            config,
            state: RwLock::new(EngineState { store, sampler }),
            persistence,
        })
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Store one exchange and return the created event.
    ///
    /// Validation runs before any store access, so a rejected call leaves
    /// no partial mutation. Thought extraction and the FIFO capacity trim
    /// happen under the same write guard as the append.
    #[tracing::instrument(
        name = "memory_record",
        skip(self, exchange),
        fields(agent_outputs = exchange.agent_outputs.len())
    )]
    pub async fn record(&self, exchange: Exchange) -> Result<Event, MemoryError> {
        if exchange.user_input.trim().is_empty() {
            return Err(MemoryError::EmptyUserInput);
        }
        if exchange.system_response.trim().is_empty() {
            return Err(MemoryError::EmptySystemResponse);
        }

        let thoughts = extract_thoughts(&exchange.agent_outputs);
        let event = Event::from_exchange(exchange);

        let mut state = self.state.write().await;
        state.store.append(event.clone(), thoughts, &self.config);
        tracing::debug!(
            events = state.store.event_count(),
            thoughts = state.store.thought_count(),
            "exchange recorded"
        );
        Ok(event)
    }

    /// Retrieve the relevance-ranked context for a specialization.
    ///
    /// `token_budget_hint` is accepted for signature stability but does not
    /// vary the fixed 5-event/10-thought result caps.
    #[tracing::instrument(
        name = "memory_query",
        skip(self, query_text),
        fields(specialization = %specialization)
    )]
    pub async fn query(
        &self,
        specialization: Specialization,
        query_text: &str,
        _token_budget_hint: Option<u32>,
    ) -> MemoryContext {
        let state = self.state.read().await;
        retrieval::query(
            &state.store,
            &self.config,
            specialization,
            query_text,
            Utc::now(),
        )
    }

    /// Run one maintenance pass: forgetting, then consolidation (when
    /// enabled). Holds the write guard for the full duration; there is no
    /// incremental maintenance and no cancellation.
    #[tracing::instrument(name = "memory_maintain", skip(self))]
    pub async fn maintain(&self) {
        let mut state = self.state.write().await;
        let now = Utc::now();

        let EngineState { store, sampler } = &mut *state;
        let outcome = forgetting::run(
            store,
            self.config.forgetting_curve_decay,
            now,
            sampler.as_mut(),
        );

        let merged_groups = if self.config.consolidation_enabled {
            consolidation::run(&mut store.thoughts, self.config.thought_similarity_threshold)
        } else {
            0
        };

        tracing::info!(
            events_forgotten = outcome.events_removed,
            thoughts_forgotten = outcome.thoughts_removed,
            thoughts_merged = merged_groups,
            events = store.event_count(),
            thoughts = store.thought_count(),
            "maintenance pass complete"
        );
    }

    /// Compute a read-only statistics snapshot.
    pub async fn insights(&self) -> MemoryInsights {
        let state = self.state.read().await;
        insights::compute(&state.store, &self.config, Utc::now())
    }

    /// Hand a snapshot of the current state to the persistence
    /// collaborator. A no-op unless one was supplied at construction.
    pub async fn persist(&self) -> Result<(), MemoryError> {
        let (events, thoughts): (Vec<Event>, Vec<Thought>) = {
            let state = self.state.read().await;
            (
                state.store.events().cloned().collect(),
                state.store.thoughts().cloned().collect(),
            )
        };
        self.persistence.persist_state(&events, &thoughts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::PersistenceFuture;
    use chrono::Duration;
    use psyche_types::event::AgentOutput;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    fn exchange(input: &str, response: &str, outputs: Vec<AgentOutput>) -> Exchange {
        Exchange {
            user_input: input.to_string(),
            system_response: response.to_string(),
            agent_outputs: outputs,
            emotional_context: HashMap::new(),
            conversation_context: String::new(),
        }
    }

    /// Loads a fixed state; records every persisted snapshot size.
    struct StubPersistence {
        events: Vec<Event>,
        thoughts: Vec<Thought>,
        persisted: Arc<Mutex<Vec<(usize, usize)>>>,
    }

    impl StubPersistence {
        fn with_state(events: Vec<Event>, thoughts: Vec<Thought>) -> Self {
            Self {
                events,
                thoughts,
                persisted: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn persisted_log(&self) -> Arc<Mutex<Vec<(usize, usize)>>> {
            Arc::clone(&self.persisted)
        }
    }

    impl MemoryPersistence for StubPersistence {
        fn load_initial_state(&self) -> PersistenceFuture<'_, (Vec<Event>, Vec<Thought>)> {
            let state = (self.events.clone(), self.thoughts.clone());
            Box::pin(async move { Ok(state) })
        }

        fn persist_state<'a>(
            &'a self,
            events: &'a [Event],
            thoughts: &'a [Thought],
        ) -> PersistenceFuture<'a, ()> {
            self.persisted
                .lock()
                .unwrap()
                .push((events.len(), thoughts.len()));
            Box::pin(async { Ok(()) })
        }
    }

    #[tokio::test]
    async fn test_record_returns_event_and_extracts_thoughts() {
        let engine = MemoryEngine::new(MemoryConfig::default());
        let event = engine
            .record(exchange(
                "How are you feeling today?",
                "I'm doing well, thank you.",
                vec![AgentOutput::new(
                    Specialization::Cortex,
                    "I sense curiosity. This is a thoughtful response about emotions and context awareness indeed.",
                )],
            ))
            .await
            .unwrap();

        assert_eq!(event.user_input, "How are you feeling today?");
        let insights = engine.insights().await;
        assert_eq!(insights.total_events, 1);
        assert!(insights.total_thoughts >= 1);
    }

    #[tokio::test]
    async fn test_record_rejects_blank_input_without_mutation() {
        let engine = MemoryEngine::new(MemoryConfig::default());
        let err = engine
            .record(exchange("   ", "a response", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, MemoryError::EmptyUserInput));

        let err = engine.record(exchange("a question", "", vec![])).await.unwrap_err();
        assert!(matches!(err, MemoryError::EmptySystemResponse));

        let insights = engine.insights().await;
        assert_eq!(insights.total_events, 0);
        assert_eq!(insights.total_thoughts, 0);
    }

    #[tokio::test]
    async fn test_capacity_trim_drops_oldest_event() {
        let config = MemoryConfig {
            max_events_in_memory: 2,
            ..MemoryConfig::default()
        };
        let engine = MemoryEngine::new(config);
        for input in ["first question", "second question", "third question"] {
            engine.record(exchange(input, "noted", vec![])).await.unwrap();
        }

        let insights = engine.insights().await;
        assert_eq!(insights.total_events, 2);

        let ctx = engine.query(Specialization::Cortex, "question", None).await;
        let inputs: Vec<_> = ctx.events.iter().map(|e| e.user_input.as_str()).collect();
        assert!(!inputs.contains(&"first question"));
        assert!(inputs.contains(&"second question"));
        assert!(inputs.contains(&"third question"));
    }

    #[tokio::test]
    async fn test_query_filters_by_specialization() {
        let engine = MemoryEngine::new(MemoryConfig::default());
        engine
            .record(exchange(
                "what do you make of this?",
                "two minds weighed in",
                vec![
                    AgentOutput::new(Specialization::Seer, "A repeating weekly cadence shows up."),
                    AgentOutput::new(Specialization::Prudence, "The downside risk looks contained."),
                ],
            ))
            .await
            .unwrap();

        let ctx = engine.query(Specialization::Seer, "cadence", None).await;
        assert_eq!(ctx.thoughts.len(), 1);
        assert_eq!(ctx.thoughts[0].specialization, Some(Specialization::Seer));

        let ctx = engine.query(Specialization::Oracle, "cadence", None).await;
        assert!(ctx.thoughts.is_empty());
    }

    #[tokio::test]
    async fn test_empty_store_insights() {
        let engine = MemoryEngine::new(MemoryConfig::default());
        let insights = engine.insights().await;
        assert_eq!(insights.total_events, 0);
        assert_eq!(insights.total_thoughts, 0);
        assert_eq!(insights.utilization_percent, 0.0);
        assert_eq!(insights.recent_activity, "no recent activity");
    }

    #[tokio::test]
    async fn test_maintain_with_zero_decay_keeps_aged_items() {
        let mut aged = Event::from_exchange(exchange("an old question", "an old answer", vec![]));
        aged.timestamp = Utc::now() - Duration::days(90);
        let aged_thought = Thought {
            id: Uuid::now_v7(),
            timestamp: Utc::now() - Duration::days(90),
            content: "a long-held belief".to_string(),
            category: "analysis".to_string(),
            specialization: Some(Specialization::Cortex),
            confidence: 0.0,
        };
        let config = MemoryConfig {
            forgetting_curve_decay: 0.0,
            consolidation_enabled: false,
            ..MemoryConfig::default()
        };
        let engine = MemoryEngine::with_persistence_and_sampler(
            config,
            Box::new(StubPersistence::with_state(vec![aged], vec![aged_thought])),
            Box::new(CurveSampler::seeded(42)),
        )
        .await
        .unwrap();

        engine.maintain().await;
        let insights = engine.insights().await;
        assert_eq!(insights.total_events, 1);
        assert_eq!(insights.total_thoughts, 1);
    }

    #[tokio::test]
    async fn test_maintain_consolidates_near_duplicates() {
        let config = MemoryConfig {
            thought_similarity_threshold: 0.5,
            ..MemoryConfig::default()
        };
        let engine = MemoryEngine::new(config);
        engine
            .record(exchange(
                "how does the user seem?",
                "content, mostly",
                vec![AgentOutput::new(
                    Specialization::Conscience,
                    "The user seems happy today. The user seems happy and content.",
                )],
            ))
            .await
            .unwrap();
        assert_eq!(engine.insights().await.total_thoughts, 2);

        engine.maintain().await;

        let ctx = engine.query(Specialization::Conscience, "happy", None).await;
        assert_eq!(ctx.thoughts.len(), 1);
        assert!(ctx.thoughts[0].content.contains(" | "));
        let boosted = ctx.thoughts[0].confidence;
        assert!((boosted - 0.7 * 1.1).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_maintain_respects_consolidation_toggle() {
        let config = MemoryConfig {
            thought_similarity_threshold: 0.5,
            consolidation_enabled: false,
            ..MemoryConfig::default()
        };
        let engine = MemoryEngine::new(config);
        engine
            .record(exchange(
                "how does the user seem?",
                "content, mostly",
                vec![AgentOutput::new(
                    Specialization::Conscience,
                    "The user seems happy today. The user seems happy and content.",
                )],
            ))
            .await
            .unwrap();

        engine.maintain().await;
        assert_eq!(engine.insights().await.total_thoughts, 2);
    }

    #[tokio::test]
    async fn test_with_persistence_loads_and_persist_snapshots() {
        let seeded_event = Event::from_exchange(exchange("remembered", "yes", vec![]));
        let stub = StubPersistence::with_state(vec![seeded_event], vec![]);
        let log = stub.persisted_log();
        let engine = MemoryEngine::with_persistence(MemoryConfig::default(), Box::new(stub))
            .await
            .unwrap();

        assert_eq!(engine.insights().await.total_events, 1);
        engine.record(exchange("another", "sure", vec![])).await.unwrap();
        engine.persist().await.unwrap();

        let snapshots = log.lock().unwrap();
        assert_eq!(snapshots.as_slice(), [(2, 0)]);
    }

    #[tokio::test]
    async fn test_reads_share_access_under_long_queries() {
        let engine = std::sync::Arc::new(MemoryEngine::new(MemoryConfig::default()));
        engine.record(exchange("hello there", "hi", vec![])).await.unwrap();

        let a = {
            let engine = engine.clone();
            tokio::spawn(async move { engine.query(Specialization::Cortex, "hello", None).await })
        };
        let b = {
            let engine = engine.clone();
            tokio::spawn(async move { engine.insights().await })
        };
        let ctx = a.await.unwrap();
        let insights = b.await.unwrap();
        assert_eq!(ctx.events.len(), 1);
        assert_eq!(insights.total_events, 1);
    }
}
