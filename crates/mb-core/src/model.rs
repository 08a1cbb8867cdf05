//! Model definitions
//!
//! A model is one named transformation unit with internal dependencies
//! (other models), external source references, and an optional run cadence.

use crate::error::{CoreError, CoreResult};
use crate::model_name::ModelName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// A model definition file (from .yml with kind: model)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    /// Must be "model" - enforced during parsing
    #[serde(default)]
    pub kind: ModelKind,

    /// Qualified model name, unique within a project
    pub name: ModelName,

    /// Names of internal models this model depends on
    #[serde(default)]
    pub depends_on: BTreeSet<ModelName>,

    /// External references (`schema.table` or bare table names) consumed
    /// by this model but not produced by the project
    #[serde(default)]
    pub sources: BTreeSet<String>,

    /// Cron cadence governing when this model should run
    #[serde(default)]
    pub cron: Option<String>,

    /// Description of the model
    #[serde(default)]
    pub description: Option<String>,
}

/// Enforces kind: model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    #[default]
    Model,
}

impl Model {
    /// Create a model with just a name; used by builders and tests.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            kind: ModelKind::Model,
            name: ModelName::new(name),
            depends_on: BTreeSet::new(),
            sources: BTreeSet::new(),
            cron: None,
            description: None,
        }
    }

    /// Load and validate a model definition from a YAML file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        let model: Model =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ModelParseError {
                path: path.display().to_string(),
                details: e.to_string(),
            })?;

        Ok(model)
    }

    /// True if the model declares neither dependencies nor sources.
    pub fn is_standalone(&self) -> bool {
        self.depends_on.is_empty() && self.sources.is_empty()
    }
}
