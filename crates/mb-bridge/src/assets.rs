//! Graph translation and the deployable asset group
//!
//! Translation is a pure function from the compiled project graph to the
//! orchestrator's asset graph: one node per model, upstream references for
//! every internal dependency edge, and declared-but-unmaterialized
//! placeholders for external references. The asset group then binds the
//! translated nodes to the resource that can materialize them.

use crate::error::BridgeResult;
use crate::materialize::CancelFlag;
use crate::resource::BridgeResource;
use crate::translator::AssetNaming;
use mb_core::{AssetKey, ModelName, ProjectGraph};
use mb_engine::RunReport;
use serde::Serialize;
use std::collections::BTreeSet;

/// One materializable asset derived from a model
#[derive(Debug, Clone, Serialize)]
pub struct AssetNode {
    /// Stable orchestrator-facing key
    pub key: AssetKey,

    /// The model this asset materializes
    pub model: ModelName,

    /// Keys of upstream assets within the project
    pub upstream: BTreeSet<AssetKey>,

    /// Keys of declared external upstreams (never materialized here,
    /// surfaced so the orchestrator can display provenance)
    pub external_upstream: BTreeSet<AssetKey>,

    /// The model's own cadence, if declared
    pub cron: Option<String>,

    /// Model description carried through for display
    pub description: Option<String>,
}

/// The translated asset graph, nodes in stable model-name order
#[derive(Debug, Clone, Serialize)]
pub struct AssetGraph {
    nodes: Vec<AssetNode>,
}

impl AssetGraph {
    /// Nodes in stable order
    pub fn nodes(&self) -> &[AssetNode] {
        &self.nodes
    }

    /// Number of asset nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of internal dependency edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.upstream.len()).sum()
    }

    /// Find a node by its asset key
    pub fn get(&self, key: &AssetKey) -> Option<&AssetNode> {
        self.nodes.iter().find(|n| &n.key == key)
    }

    /// Find the node materializing a model
    pub fn get_by_model(&self, model: &str) -> Option<&AssetNode> {
        self.nodes.iter().find(|n| n.model == model)
    }
}

/// Translate a compiled project graph into an asset graph.
///
/// Deterministic: translating the same graph twice with the same naming
/// strategy yields structurally identical output. Models with no
/// dependencies and no dependents still get a node.
pub fn build_asset_graph(graph: &ProjectGraph, naming: &dyn AssetNaming) -> AssetGraph {
    let nodes = graph
        .models()
        .map(|model| AssetNode {
            key: naming.asset_key(model),
            model: model.name.clone(),
            upstream: model
                .depends_on
                .iter()
                .filter_map(|dep| graph.get_model(dep))
                .map(|dep| naming.asset_key(dep))
                .collect(),
            external_upstream: model
                .sources
                .iter()
                .map(|reference| naming.external_asset_key(reference))
                .collect(),
            cron: model.cron.clone(),
            description: model.description.clone(),
        })
        .collect();

    AssetGraph { nodes }
}

/// A deployable asset group: translated nodes bound to the resource that
/// materializes them.
///
/// The resource is the group's execution-time dependency; invoking
/// [`materialize`](Self::materialize) delegates model execution to the
/// resource's engine and maps per-model outcomes back onto asset nodes.
#[derive(Clone)]
pub struct AssetGroup {
    name: String,
    assets: AssetGraph,
    resource: BridgeResource,
}

impl AssetGroup {
    pub(crate) fn new(name: String, assets: AssetGraph, resource: BridgeResource) -> Self {
        Self {
            name,
            assets,
            resource,
        }
    }

    /// Group name as registered with the orchestrator
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The translated asset graph
    pub fn assets(&self) -> &AssetGraph {
        &self.assets
    }

    /// The resource this group executes through
    pub fn resource(&self) -> &BridgeResource {
        &self.resource
    }

    /// Materialize every asset in the group (or a selection), returning the
    /// per-model report.
    pub async fn materialize(
        &self,
        selection: Option<Vec<ModelName>>,
        cancel: &CancelFlag,
    ) -> BridgeResult<RunReport> {
        self.resource.materialize(selection, cancel).await
    }

    /// Outcome lookup keyed by asset rather than model.
    pub fn outcome_for_key<'r>(
        &self,
        report: &'r RunReport,
        key: &AssetKey,
    ) -> Option<&'r mb_engine::ModelOutcome> {
        let node = self.assets.get(key)?;
        report.outcome_for(&node.model)
    }
}

#[cfg(test)]
#[path = "assets_test.rs"]
mod tests;
