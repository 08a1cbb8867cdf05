//! External dependency validation
//!
//! Walks every external reference declared by every model and checks it
//! against the recognized-sources registry. Violations are collected and
//! returned as data, never raised: an empty list is the success condition,
//! and a project with five bad references reports all five.

use mb_core::{ModelName, ProjectGraph, SourceResolution};
use serde::Serialize;
use std::fmt;

/// Why a reference failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationReason {
    /// Nothing registered matches the reference
    Unresolved,
    /// A bare table name matches tables in more than one source schema
    Ambiguous,
}

/// One unresolvable external reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Model declaring the reference
    pub model: ModelName,
    /// The external reference as declared
    pub reference: String,
    /// Why it failed
    pub reason: ValidationReason,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            ValidationReason::Unresolved => write!(
                f,
                "external reference '{}' declared by model '{}' does not resolve to any recognized source",
                self.reference, self.model
            ),
            ValidationReason::Ambiguous => write!(
                f,
                "external reference '{}' declared by model '{}' matches tables in multiple source schemas",
                self.reference, self.model
            ),
        }
    }
}

/// Check every model's external references against the registry.
///
/// A reference resolves when it names an internal model or a recognized
/// source table. Never short-circuits; each (model, reference) pair is
/// reported at most once (references are deduplicated per model upstream).
pub fn validate_external_dependencies(graph: &ProjectGraph) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for model in graph.models() {
        for reference in &model.sources {
            // A reference may point at another model rather than a source
            if graph.get_model(reference).is_some() {
                continue;
            }

            let reason = match graph.registry().resolve(reference) {
                SourceResolution::Resolved => continue,
                SourceResolution::Unknown => ValidationReason::Unresolved,
                SourceResolution::Ambiguous { .. } => ValidationReason::Ambiguous,
            };

            errors.push(ValidationError {
                model: model.name.clone(),
                reference: reference.clone(),
                reason,
            });
        }
    }

    errors
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
