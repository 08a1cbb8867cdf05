//! mb-engine - Transformation-engine seam for modelbridge
//!
//! This crate defines the `TransformEngine` trait the bridge drives, the
//! filesystem project loader, and the per-model run report types. Real
//! warehouse execution lives behind the trait; a dry-run implementation is
//! provided for wiring and deployment checks.

pub mod error;
pub mod loader;
pub mod report;
pub mod traits;

pub use error::{EngineError, EngineResult};
pub use loader::{load_project_dir, DryRunEngine, ProjectConfig};
pub use report::{ModelOutcome, ModelRun, RunReport};
pub use traits::{LoadRequest, TransformEngine};
