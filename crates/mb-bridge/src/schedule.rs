//! Consolidated schedule derivation
//!
//! One project gets one orchestrator schedule: the finest declared model
//! cadence, bucketed to a recommended expression so every model's run
//! requirement is satisfied by at least that many runs.

use mb_core::{cadence_interval_seconds, recommended_expression, ProjectGraph, DEFAULT_SCHEDULE};

/// Derive the recommended schedule expression for a project.
///
/// With `ignore_cron` set, model cadences are bypassed entirely and the
/// platform default is returned. Always returns a non-empty, valid
/// expression for a loaded project.
pub fn derive_schedule(graph: &ProjectGraph, ignore_cron: bool) -> String {
    if ignore_cron {
        return DEFAULT_SCHEDULE.to_string();
    }

    let finest = graph
        .models()
        .filter_map(|m| m.cron.as_deref())
        .filter_map(cadence_interval_seconds)
        .min();

    match finest {
        Some(interval) => recommended_expression(interval).to_string(),
        None => DEFAULT_SCHEDULE.to_string(),
    }
}
