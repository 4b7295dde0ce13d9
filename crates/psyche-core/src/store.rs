//! The bounded event/thought store.
//!
//! Both collections are append-only from the caller's point of view;
//! removal happens through capacity trimming here and through maintenance
//! (forgetting, consolidation). Trimming is pure FIFO by insertion order --
//! it has no awareness of relevance or confidence, so a highly relevant old
//! thought can be discarded before a low-value recent one. That is the
//! documented behavior, not an accident.

use std::collections::VecDeque;

use psyche_types::config::MemoryConfig;
use psyche_types::event::Event;
use psyche_types::thought::Thought;

/// Owns the two insertion-ordered collections.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) events: VecDeque<Event>,
    pub(crate) thoughts: VecDeque<Thought>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from previously persisted state.
    ///
    /// The loaded sequences are taken as-is; capacity is enforced so a
    /// snapshot written under a larger configuration still fits.
    pub fn with_state(events: Vec<Event>, thoughts: Vec<Thought>, config: &MemoryConfig) -> Self {
        let mut store = Self {
            events: events.into(),
            thoughts: thoughts.into(),
        };
        store.enforce_capacity(config);
        store
    }

    /// Append one event and its derived thoughts, then trim to capacity.
    pub fn append(&mut self, event: Event, thoughts: Vec<Thought>, config: &MemoryConfig) {
        self.events.push_back(event);
        self.thoughts.extend(thoughts);
        self.enforce_capacity(config);
    }

    /// Remove the oldest items from whichever sequence exceeds its limit,
    /// by exactly the excess amount.
    fn enforce_capacity(&mut self, config: &MemoryConfig) {
        while self.events.len() > config.max_events_in_memory {
            self.events.pop_front();
        }
        while self.thoughts.len() > config.max_thoughts_in_memory {
            self.thoughts.pop_front();
        }
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn thought_count(&self) -> usize {
        self.thoughts.len()
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn thoughts(&self) -> impl Iterator<Item = &Thought> {
        self.thoughts.iter()
    }
}
