//! Per-model run reporting
//!
//! A materialization pass never collapses into one aggregate pass/fail:
//! every dispatched model gets its own outcome, and dependents of a failed
//! model are recorded as skipped rather than silently dropped.

use chrono::{DateTime, Utc};
use mb_core::ModelName;
use serde::{Deserialize, Serialize};

/// Outcome of one model within a materialization pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ModelOutcome {
    /// The model materialized successfully
    Succeeded { duration_ms: u64 },
    /// The engine reported a failure for this model
    Failed { error: String },
    /// The model was never dispatched
    Skipped { reason: String },
}

impl ModelOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ModelOutcome::Succeeded { .. })
    }
}

/// One model's entry in a run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRun {
    /// Model name
    pub model: ModelName,

    /// What happened to it
    #[serde(flatten)]
    pub outcome: ModelOutcome,

    /// When the outcome was recorded
    pub finished_at: DateTime<Utc>,
}

/// Aggregated result of one materialization pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// When the pass started
    pub started_at: DateTime<Utc>,

    /// Per-model outcomes, in completion order
    pub runs: Vec<ModelRun>,

    /// True when dispatch stopped because cancellation was observed
    pub cancelled: bool,
}

impl RunReport {
    /// Start an empty report
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            runs: Vec::new(),
            cancelled: false,
        }
    }

    /// Record an outcome for a model
    pub fn record(&mut self, model: ModelName, outcome: ModelOutcome) {
        self.runs.push(ModelRun {
            model,
            outcome,
            finished_at: Utc::now(),
        });
    }

    /// Look up the outcome for a model, if it was recorded
    pub fn outcome_for(&self, model: &str) -> Option<&ModelOutcome> {
        self.runs
            .iter()
            .find(|r| r.model == model)
            .map(|r| &r.outcome)
    }

    /// Number of succeeded models
    pub fn succeeded(&self) -> usize {
        self.runs.iter().filter(|r| r.outcome.is_success()).count()
    }

    /// Number of failed models
    pub fn failed(&self) -> usize {
        self.runs
            .iter()
            .filter(|r| matches!(r.outcome, ModelOutcome::Failed { .. }))
            .count()
    }

    /// Number of skipped models
    pub fn skipped(&self) -> usize {
        self.runs
            .iter()
            .filter(|r| matches!(r.outcome, ModelOutcome::Skipped { .. }))
            .count()
    }

    /// True when every recorded model succeeded and nothing was cancelled
    pub fn is_success(&self) -> bool {
        !self.cancelled && self.runs.iter().all(|r| r.outcome.is_success())
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
