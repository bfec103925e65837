//! Request Dispatcher
//!
//! Per-operation invocation state for the AI tools. Each result slot moves
//! through `Idle -> Pending -> Ready | Failed` and keeps the last
//! successful payload. Every request is stamped with a generation counter;
//! a completion carrying an old stamp is discarded, so a slot always shows
//! the outcome of the most recently started request.

use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::catalog::ResultKey;
use crate::results::ToolOutput;

/// Lifecycle of one result slot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToolState {
    /// Never run (or dismissed)
    #[default]
    Idle,
    /// A request is in flight
    Pending,
    /// The last request succeeded; the result map holds its payload
    Ready,
    /// The last request failed; any earlier payload is kept underneath
    Failed(String),
}

/// Tracks in-flight requests and the last result per operation.
#[derive(Debug, Default)]
pub struct Dispatcher {
    states: HashMap<ResultKey, ToolState>,
    results: HashMap<ResultKey, ToolOutput>,
    generations: HashMap<ResultKey, u64>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a slot pending and return the generation stamp the eventual
    /// completion must carry.
    pub fn begin(&mut self, key: ResultKey) -> u64 {
        let generation = self.generations.entry(key).or_insert(0);
        *generation += 1;
        self.states.insert(key, ToolState::Pending);
        debug!("{} request started (generation {})", key, generation);
        *generation
    }

    /// Record a completion for a slot.
    ///
    /// Success stores the payload and marks the slot `Ready`; failure marks
    /// it `Failed` and leaves the stored payload untouched. A completion
    /// whose generation is no longer current is discarded and the slot is
    /// left as-is. Returns whether the completion was accepted.
    pub fn settle(
        &mut self,
        key: ResultKey,
        generation: u64,
        outcome: Result<ToolOutput, String>,
    ) -> bool {
        let current = self.generations.get(&key).copied().unwrap_or(0);
        if generation != current {
            debug!(
                "{} completion discarded (generation {} superseded by {})",
                key, generation, current
            );
            return false;
        }

        match outcome {
            Ok(output) => {
                info!("{} request finished", key);
                self.results.insert(key, output);
                self.states.insert(key, ToolState::Ready);
            }
            Err(reason) => {
                warn!("{} request failed: {}", key, reason);
                self.states.insert(key, ToolState::Failed(reason));
            }
        }
        true
    }

    /// Current state of a slot
    pub fn state(&self, key: ResultKey) -> &ToolState {
        self.states.get(&key).unwrap_or(&ToolState::Idle)
    }

    /// Last successful payload for a slot, if any
    pub fn result(&self, key: ResultKey) -> Option<&ToolOutput> {
        self.results.get(&key)
    }

    /// True while any slot has a request in flight
    pub fn is_busy(&self) -> bool {
        self.states.values().any(|s| *s == ToolState::Pending)
    }

    /// Drop one slot's payload and reset it to idle, leaving the others
    /// untouched. An in-flight request for the slot is invalidated.
    pub fn clear_result(&mut self, key: ResultKey) {
        self.results.remove(&key);
        self.states.insert(key, ToolState::Idle);
        *self.generations.entry(key).or_insert(0) += 1;
    }

    /// Drop every payload and reset all slots.
    pub fn clear_all(&mut self) {
        self.results.clear();
        self.states.clear();
        for generation in self.generations.values_mut() {
            *generation += 1;
        }
    }

    /// Number of stored payloads
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}
