//! Transformation engine trait definition

use crate::error::EngineResult;
use async_trait::async_trait;
use mb_core::{Model, ProjectGraph};
use std::path::PathBuf;

/// Everything an engine needs to compile a project directory.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    /// Directory containing the project structure and config file
    pub project_dir: PathBuf,

    /// Target warehouse connection profile
    pub gateway: String,

    /// Engine environment to plan and run against
    pub environment: String,
}

/// Transformation engine abstraction driven by the bridge.
///
/// Implementations must be Send + Sync; the bridge shares one engine across
/// worker threads and dispatches model executions concurrently.
#[async_trait]
pub trait TransformEngine: Send + Sync {
    /// Compile the project directory into an immutable project graph.
    ///
    /// Performs filesystem (and possibly gateway) I/O. Called at most once
    /// per resource lifetime on success; retried on failure.
    fn load_project(&self, request: &LoadRequest) -> EngineResult<ProjectGraph>;

    /// Materialize one model against the configured gateway.
    ///
    /// The bridge guarantees that all of the model's internal dependencies
    /// within the current run have already succeeded when this is called.
    async fn execute_model(&self, graph: &ProjectGraph, model: &Model) -> EngineResult<()>;

    /// Engine identifier for logging
    fn engine_type(&self) -> &'static str;
}
