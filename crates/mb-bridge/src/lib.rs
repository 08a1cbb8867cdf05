//! mb-bridge - translates a SQL-transformation project into the asset and
//! materialization model of a data-orchestration platform.
//!
//! The [`resource::BridgeResource`] owns a single compiled project graph
//! (loaded once, shared across threads), translates it into keyed asset
//! nodes, derives a consolidated run schedule, validates external
//! references, and materializes models with a bounded concurrency gate.

pub mod assets;
pub mod cache;
pub mod config;
pub mod error;
pub mod materialize;
pub mod resource;
pub mod schedule;
pub mod translator;
pub mod validate;

pub use assets::{build_asset_graph, AssetGraph, AssetGroup, AssetNode};
pub use cache::{ContextCache, ContextEntry};
pub use config::{Gateway, ResourceConfig};
pub use error::{BridgeError, BridgeResult};
pub use materialize::CancelFlag;
pub use resource::BridgeResource;
pub use schedule::derive_schedule;
pub use translator::{AssetNaming, PrefixNaming};
pub use validate::{validate_external_dependencies, ValidationError, ValidationReason};
