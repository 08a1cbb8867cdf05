//! The bridge resource
//!
//! A `BridgeResource` is the orchestrator-facing handle for one project:
//! it owns the context cache for its lifetime, loads the project through
//! the configured engine exactly once, and exposes the translated reads
//! (models, schedule, validation) plus the asset factory and materializer.
//!
//! The handle is cheap to clone and safe to share across worker threads;
//! clones share the same cache slot.

use crate::assets::{build_asset_graph, AssetGroup};
use crate::cache::{ContextCache, ContextEntry};
use crate::config::ResourceConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::materialize::{run_selection, CancelFlag};
use crate::schedule::derive_schedule;
use crate::translator::{AssetNaming, PrefixNaming};
use crate::validate::{validate_external_dependencies, ValidationError};
use mb_core::{Model, ModelName};
use mb_engine::{RunReport, TransformEngine};
use std::sync::Arc;

struct Inner {
    config: ResourceConfig,
    engine: Arc<dyn TransformEngine>,
    naming: Arc<dyn AssetNaming>,
    cache: ContextCache,
}

/// Orchestrator resource bridging one transformation project.
#[derive(Clone)]
pub struct BridgeResource {
    inner: Arc<Inner>,
}

impl BridgeResource {
    /// Build a resource with the default naming strategy.
    ///
    /// Fails fast on invalid configuration; no project I/O happens here.
    pub fn new(config: ResourceConfig, engine: Arc<dyn TransformEngine>) -> BridgeResult<Self> {
        Self::with_translator(config, engine, Arc::new(PrefixNaming::default()))
    }

    /// Build a resource with a caller-supplied naming strategy.
    pub fn with_translator(
        config: ResourceConfig,
        engine: Arc<dyn TransformEngine>,
        naming: Arc<dyn AssetNaming>,
    ) -> BridgeResult<Self> {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                engine,
                naming,
                cache: ContextCache::new(),
            }),
        })
    }

    /// The resource configuration
    pub fn config(&self) -> &ResourceConfig {
        &self.inner.config
    }

    /// The configured naming strategy
    pub fn naming(&self) -> &dyn AssetNaming {
        self.inner.naming.as_ref()
    }

    /// The compiled project context, loading it on first call.
    ///
    /// Single-flight: concurrent callers trigger at most one load and share
    /// the result. A failed load is returned to every waiter and retried on
    /// the next call.
    pub fn get_context(&self) -> BridgeResult<Arc<ContextEntry>> {
        let inner = &self.inner;
        inner.cache.get_or_load(|| {
            log::info!(
                "loading project {} (gateway {}, engine {})",
                inner.config.project_dir.display(),
                inner.config.gateway,
                inner.engine.engine_type()
            );
            let graph = inner.engine.load_project(&inner.config.load_request())?;
            Ok(graph)
        })
    }

    /// All models in stable name order; two calls against the same compiled
    /// graph return equal sequences.
    pub fn get_models(&self) -> BridgeResult<Vec<Model>> {
        let entry = self.get_context()?;
        Ok(entry.graph().models().cloned().collect())
    }

    /// The consolidated schedule expression, derived lazily and cached with
    /// the compiled graph.
    pub fn get_recommended_schedule(&self) -> BridgeResult<String> {
        let entry = self.get_context()?;
        let ignore_cron = self.inner.config.ignore_cron;
        Ok(entry
            .schedule_or_derive(|graph| derive_schedule(graph, ignore_cron))
            .to_string())
    }

    /// Check every declared external reference; empty means all resolve.
    pub fn validate_external_dependencies(&self) -> BridgeResult<Vec<ValidationError>> {
        let entry = self.get_context()?;
        Ok(validate_external_dependencies(entry.graph()))
    }

    /// Translate the project into a deployable asset group bound to this
    /// resource.
    pub fn build_asset_group(&self, name: impl Into<String>) -> BridgeResult<AssetGroup> {
        let entry = self.get_context()?;
        let assets = build_asset_graph(entry.graph(), self.inner.naming.as_ref());
        Ok(AssetGroup::new(name.into(), assets, self.clone()))
    }

    /// Materialize the selected models (all models when `selection` is
    /// `None`), bounded by the configured concurrency limit.
    ///
    /// Per-model failures land in the report; only selection and load
    /// problems surface as errors.
    pub async fn materialize(
        &self,
        selection: Option<Vec<ModelName>>,
        cancel: &CancelFlag,
    ) -> BridgeResult<RunReport> {
        let entry = self.get_context()?;

        let selection = match selection {
            Some(names) => {
                for name in &names {
                    if entry.graph().get_model(name).is_none() {
                        return Err(BridgeError::UnknownModel {
                            name: name.to_string(),
                        });
                    }
                }
                names
            }
            None => entry.graph().model_names(),
        };

        let report = run_selection(
            &self.inner.engine,
            &entry,
            selection,
            self.inner.config.concurrency_limit,
            cancel,
        )
        .await;

        log::info!(
            "materialization finished: {} succeeded, {} failed, {} skipped{}",
            report.succeeded(),
            report.failed(),
            report.skipped(),
            if report.cancelled { " (cancelled)" } else { "" }
        );

        Ok(report)
    }
}
