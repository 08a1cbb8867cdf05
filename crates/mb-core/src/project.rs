//! The compiled project graph
//!
//! A `ProjectGraph` is the expensive, immutable result of loading a project
//! directory: every model, the validated dependency DAG between them, and
//! the registry of recognized external sources. It is built once and shared
//! read-only afterwards; nothing mutates it after construction.

use crate::dag::ModelDag;
use crate::error::{CoreError, CoreResult};
use crate::model::Model;
use crate::model_name::ModelName;
use crate::source::{SourceFile, SourceRegistry};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// All fields needed to construct a [`ProjectGraph`].
#[derive(Debug)]
pub struct ProjectParts {
    /// Project root directory
    pub root: PathBuf,
    /// Project name (from project.yml)
    pub name: String,
    /// Models discovered in the project
    pub models: Vec<Model>,
    /// Source definitions discovered in the project
    pub sources: Vec<SourceFile>,
}

/// An immutable, validated project graph.
#[derive(Debug)]
pub struct ProjectGraph {
    root: PathBuf,
    name: String,
    models: BTreeMap<ModelName, Model>,
    registry: SourceRegistry,
    dag: ModelDag,
}

impl ProjectGraph {
    /// Build and validate a project graph from loader output.
    ///
    /// Rejects duplicate model names, dependencies on models that do not
    /// exist, and dependency cycles. The loader's input is expected to be
    /// acyclic already; the cycle check here is a defensive re-check.
    pub fn new(parts: ProjectParts) -> CoreResult<Self> {
        let mut models: BTreeMap<ModelName, Model> = BTreeMap::new();
        for model in parts.models {
            if models.contains_key(model.name.as_str()) {
                return Err(CoreError::DuplicateModel {
                    name: model.name.to_string(),
                });
            }
            models.insert(model.name.clone(), model);
        }

        for model in models.values() {
            for dep in &model.depends_on {
                if !models.contains_key(dep.as_str()) {
                    return Err(CoreError::ModelNotFound {
                        name: dep.to_string(),
                    });
                }
            }
        }

        let dependencies: BTreeMap<ModelName, BTreeSet<ModelName>> = models
            .values()
            .map(|m| (m.name.clone(), m.depends_on.clone()))
            .collect();
        let dag = ModelDag::build(&dependencies)?;

        let registry = SourceRegistry::build(&parts.sources)?;

        log::debug!(
            "validated project graph '{}': {} models, {} dependency edges",
            parts.name,
            models.len(),
            dag.edge_count()
        );

        Ok(Self {
            root: parts.root,
            name: parts.name,
            models,
            registry,
            dag,
        })
    }

    /// Project root directory
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Project name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Models in stable name order; identical across calls for the same graph.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Number of models in the project
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Get a model by name
    pub fn get_model(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// All model names in stable order
    pub fn model_names(&self) -> Vec<ModelName> {
        self.models.keys().cloned().collect()
    }

    /// The validated dependency DAG
    pub fn dag(&self) -> &ModelDag {
        &self.dag
    }

    /// The recognized-sources registry
    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
