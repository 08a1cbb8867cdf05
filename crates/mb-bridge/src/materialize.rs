//! Concurrency-bounded materialization
//!
//! Models run level by level in DAG order. Within a level, executions are
//! dispatched as tasks gated by a semaphore sized to the configured
//! concurrency limit. A failed model marks its transitive dependents as
//! skipped; observing cancellation stops new dispatch without killing
//! executions already in flight.

use crate::cache::ContextEntry;
use mb_core::ModelName;
use mb_engine::{ModelOutcome, RunReport, TransformEngine};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

/// Cooperative cancellation flag shared between the orchestrator and a
/// materialization pass.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; already-dispatched executions keep running.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Run the selected models, bounded by `concurrency_limit`, and map every
/// model to its own outcome.
pub(crate) async fn run_selection(
    engine: &Arc<dyn TransformEngine>,
    entry: &Arc<ContextEntry>,
    selection: Vec<ModelName>,
    concurrency_limit: usize,
    cancel: &CancelFlag,
) -> RunReport {
    let mut report = RunReport::new();
    let semaphore = Arc::new(Semaphore::new(concurrency_limit));
    let levels = entry.graph().dag().execution_levels(&selection);
    let selected: BTreeSet<ModelName> = selection.into_iter().collect();

    // Models whose upstream failed; they are never dispatched.
    let mut poisoned: BTreeSet<ModelName> = BTreeSet::new();

    log::debug!(
        "materializing {} models in {} levels (limit {})",
        selected.len(),
        levels.len(),
        concurrency_limit
    );

    for level in levels {
        let mut handles = Vec::new();

        for name in level {
            if cancel.is_cancelled() {
                report.cancelled = true;
                report.record(
                    name,
                    ModelOutcome::Skipped {
                        reason: "cancelled".to_string(),
                    },
                );
                continue;
            }

            if poisoned.contains(&name) {
                report.record(
                    name,
                    ModelOutcome::Skipped {
                        reason: "upstream failure".to_string(),
                    },
                );
                continue;
            }

            let engine = Arc::clone(engine);
            let entry = Arc::clone(entry);
            let semaphore = Arc::clone(&semaphore);

            handles.push(tokio::spawn(async move {
                let _permit = match semaphore.acquire().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        return (
                            name,
                            ModelOutcome::Skipped {
                                reason: "dispatch gate closed".to_string(),
                            },
                        );
                    }
                };

                let Some(model) = entry.graph().get_model(&name) else {
                    return (
                        name,
                        ModelOutcome::Skipped {
                            reason: "model missing from compiled graph".to_string(),
                        },
                    );
                };

                let start = Instant::now();
                let outcome = match engine.execute_model(entry.graph(), model).await {
                    Ok(()) => ModelOutcome::Succeeded {
                        duration_ms: u64::try_from(start.elapsed().as_millis())
                            .unwrap_or(u64::MAX),
                    },
                    Err(e) => ModelOutcome::Failed {
                        error: e.to_string(),
                    },
                };
                (name, outcome)
            }));
        }

        for handle in handles {
            match handle.await {
                Ok((name, outcome)) => {
                    if matches!(outcome, ModelOutcome::Failed { .. }) {
                        log::warn!("model {} failed during materialization", name);
                        for dependent in entry.graph().dag().descendants(&name) {
                            if selected.contains(&dependent) {
                                poisoned.insert(dependent);
                            }
                        }
                    }
                    report.record(name, outcome);
                }
                Err(e) => {
                    log::warn!("materialization task join error: {}", e);
                }
            }
        }
    }

    report
}
