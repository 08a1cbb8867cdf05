//! mb-core - Core library for modelbridge
//!
//! This crate provides the shared types used across all modelbridge
//! components: strongly-typed names, asset keys, the compiled project
//! graph, the dependency DAG, the recognized-sources registry, and
//! cadence analysis.

pub mod asset_key;
pub mod cadence;
pub mod dag;
pub mod error;
pub mod model;
pub mod model_name;
mod name_type;
pub mod project;
pub mod source;
pub mod source_name;

pub use asset_key::AssetKey;
pub use cadence::{cadence_interval_seconds, recommended_expression, DEFAULT_SCHEDULE};
pub use dag::ModelDag;
pub use error::{CoreError, CoreResult};
pub use model::Model;
pub use model_name::ModelName;
pub use project::{ProjectGraph, ProjectParts};
pub use source::{SourceFile, SourceRegistry, SourceResolution, SourceTable};
pub use source_name::SourceName;
