//! Filesystem project loading
//!
//! A project directory holds a `project.yml` config plus YAML node files
//! discovered recursively from the configured paths. Each node file carries
//! a `kind` field (`model` or `sources`) that routes it to the right parser.

use crate::error::{EngineError, EngineResult};
use crate::traits::{LoadRequest, TransformEngine};
use async_trait::async_trait;
use mb_core::{CoreError, CoreResult, Model, ProjectGraph, ProjectParts, SourceFile};
use serde::Deserialize;
use std::path::Path;

/// Project configuration from project.yml
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directories containing model definition files
    #[serde(default = "default_model_paths")]
    pub model_paths: Vec<String>,

    /// Directories containing source definition files
    #[serde(default = "default_source_paths")]
    pub source_paths: Vec<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_model_paths() -> Vec<String> {
    vec!["models".to_string()]
}

fn default_source_paths() -> Vec<String> {
    vec!["sources".to_string()]
}

impl ProjectConfig {
    /// Load project.yml from the project root
    pub fn load(root: &Path) -> CoreResult<Self> {
        let path = root.join("project.yml");
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
            message: e.to_string(),
        })
    }
}

/// Minimal YAML probe to route node files by their `kind` field
#[derive(Deserialize)]
struct KindProbe {
    #[serde(default)]
    kind: Option<String>,
}

/// Load and validate a complete project graph from a directory.
pub fn load_project_dir(root: &Path) -> CoreResult<ProjectGraph> {
    if !root.is_dir() {
        return Err(CoreError::ProjectNotFound {
            path: root.display().to_string(),
        });
    }

    let config = ProjectConfig::load(root)?;

    let mut models = Vec::new();
    for model_path in &config.model_paths {
        discover_nodes(&root.join(model_path), "model", &mut models, Model::load)?;
    }

    let mut sources = Vec::new();
    for source_path in &config.source_paths {
        discover_nodes(&root.join(source_path), "sources", &mut sources, SourceFile::load)?;
    }

    if models.is_empty() {
        return Err(CoreError::ConfigInvalid {
            message: format!(
                "project '{}' defines no models under {:?}",
                config.name, config.model_paths
            ),
        });
    }

    log::debug!(
        "loaded project '{}': {} models, {} source files",
        config.name,
        models.len(),
        sources.len()
    );

    ProjectGraph::new(ProjectParts {
        root: root.to_path_buf(),
        name: config.name,
        models,
        sources,
    })
}

/// Recursively discover YAML node files whose `kind` matches, loading each
/// with the supplied parser.
fn discover_nodes<T>(
    dir: &Path,
    kind: &str,
    items: &mut Vec<T>,
    load: fn(&Path) -> CoreResult<T>,
) -> CoreResult<()> {
    if !dir.exists() {
        return Ok(());
    }

    for entry in std::fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
        path: dir.display().to_string(),
        source: e,
    })? {
        let entry = entry.map_err(|e| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();

        if path.is_dir() {
            discover_nodes(&path, kind, items, load)?;
            continue;
        }
        if !path.extension().is_some_and(|e| e == "yml" || e == "yaml") {
            continue;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("cannot read {}: {}", path.display(), e);
                continue;
            }
        };

        // Route by kind before attempting a full parse. Model files may omit
        // the kind field; it defaults to "model".
        let probe: KindProbe = match serde_yaml::from_str(&content) {
            Ok(p) => p,
            Err(_) => continue,
        };
        let file_kind = probe.kind.as_deref().unwrap_or("model");
        if file_kind != kind {
            continue;
        }

        items.push(load(&path)?);
    }

    Ok(())
}

/// Engine that loads projects from the filesystem and treats every model
/// execution as a logged no-op.
///
/// Useful for wiring checks and deployment validation where the asset graph,
/// schedule, and dependency validation matter but nothing should touch the
/// warehouse.
#[derive(Debug, Default)]
pub struct DryRunEngine {
    _priv: (),
}

impl DryRunEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransformEngine for DryRunEngine {
    fn load_project(&self, request: &LoadRequest) -> EngineResult<ProjectGraph> {
        load_project_dir(&request.project_dir).map_err(EngineError::from)
    }

    async fn execute_model(&self, graph: &ProjectGraph, model: &Model) -> EngineResult<()> {
        log::info!("dry-run: skipping execution of {}.{}", graph.name(), model.name);
        Ok(())
    }

    fn engine_type(&self) -> &'static str {
        "dry-run"
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
