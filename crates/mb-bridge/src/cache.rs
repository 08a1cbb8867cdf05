//! Shared execution-context cache
//!
//! Loading a project is expensive. Each resource instance owns one cache
//! slot with compile-once-or-wait semantics: the first caller loads while
//! holding the guard, concurrent callers block on the guard and then share
//! the built `Arc`. A failed load is surfaced to every waiter and never
//! cached, so the next call retries from scratch. The cache is scoped to
//! the resource instance; two resources never share a slot.

use crate::error::BridgeResult;
use mb_core::ProjectGraph;
use std::sync::{Arc, Mutex, OnceLock};

/// A cached compiled project plus values derived lazily from it.
#[derive(Debug)]
pub struct ContextEntry {
    graph: ProjectGraph,
    schedule: OnceLock<String>,
}

impl ContextEntry {
    fn new(graph: ProjectGraph) -> Self {
        Self {
            graph,
            schedule: OnceLock::new(),
        }
    }

    /// The compiled project graph
    pub fn graph(&self) -> &ProjectGraph {
        &self.graph
    }

    /// The derived schedule, computing it on first request.
    ///
    /// Lives and dies with the entry: a reloaded graph gets a fresh slot.
    pub fn schedule_or_derive<F>(&self, derive: F) -> &str
    where
        F: FnOnce(&ProjectGraph) -> String,
    {
        self.schedule.get_or_init(|| derive(&self.graph))
    }
}

/// Per-resource compile-once-or-wait slot.
#[derive(Debug, Default)]
pub struct ContextCache {
    slot: Mutex<Option<Arc<ContextEntry>>>,
}

impl ContextCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached entry, loading it if absent.
    ///
    /// The load runs while the guard is held, so concurrent callers block
    /// until it finishes and then observe the same result: exactly one load
    /// per lifetime on the success path. On failure the slot stays empty
    /// and the error propagates to every caller that raced this load.
    pub fn get_or_load<F>(&self, load: F) -> BridgeResult<Arc<ContextEntry>>
    where
        F: FnOnce() -> BridgeResult<ProjectGraph>,
    {
        let mut slot = self.slot.lock().unwrap_or_else(|p| p.into_inner());

        if let Some(entry) = slot.as_ref() {
            return Ok(Arc::clone(entry));
        }

        let graph = load()?;
        let entry = Arc::new(ContextEntry::new(graph));
        *slot = Some(Arc::clone(&entry));
        Ok(entry)
    }

    /// True when a compiled project is cached
    pub fn is_loaded(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .is_some()
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
