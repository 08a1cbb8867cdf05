//! Recognized external sources
//!
//! Sources describe tables that exist in the warehouse but are not produced
//! by the project (e.g. tables loaded by ingestion pipelines). Models may
//! reference them; the bridge validates those references against the
//! registry built here.

use crate::error::{CoreError, CoreResult};
use crate::source_name::SourceName;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// A source definition file (from .yml with kind: sources)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Must be "sources" - enforced during parsing
    pub kind: SourceKind,

    /// Logical name for this source group
    pub name: SourceName,

    /// Schema the tables live in
    pub schema: String,

    /// Description of the source group
    #[serde(default)]
    pub description: Option<String>,

    /// Tables in this source
    pub tables: Vec<SourceTable>,
}

/// Enforces kind: sources
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Sources,
}

/// A single table within a source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceTable {
    /// Logical name used in model references
    pub name: String,

    /// Actual table name in the warehouse (if different from name)
    #[serde(default)]
    pub identifier: Option<String>,

    /// Description of the table
    #[serde(default)]
    pub description: Option<String>,
}

impl SourceFile {
    /// Load and validate a source file from a path
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        let source: SourceFile =
            serde_yaml::from_str(&content).map_err(|e| CoreError::SourceParseError {
                path: path.display().to_string(),
                details: e.to_string(),
            })?;

        if source.tables.is_empty() {
            return Err(CoreError::SourceEmptyTables {
                name: source.name.to_string(),
                path: path.display().to_string(),
            });
        }

        let mut seen = BTreeSet::new();
        for table in &source.tables {
            if !seen.insert(&table.name) {
                return Err(CoreError::SourceDuplicateTable {
                    table: table.name.clone(),
                    source_name: source.name.to_string(),
                });
            }
        }

        Ok(source)
    }
}

/// Outcome of resolving one external reference against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceResolution {
    /// The reference maps to exactly one registered table
    Resolved,
    /// A bare table name matches tables in more than one schema
    Ambiguous { schemas: Vec<String> },
    /// Nothing registered matches the reference
    Unknown,
}

/// Lookup structure over all registered sources.
///
/// Qualified references (`schema.table`) are matched exactly; bare table
/// names are matched across schemas and flagged ambiguous when more than
/// one schema registers the same table name.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    qualified: BTreeSet<String>,
    by_table: BTreeMap<String, BTreeSet<String>>,
}

impl SourceRegistry {
    /// Build the registry from parsed source files.
    ///
    /// Duplicate source group names across files are rejected.
    pub fn build(sources: &[SourceFile]) -> CoreResult<Self> {
        let mut seen_names = BTreeSet::new();
        let mut registry = Self::default();

        for source in sources {
            if !seen_names.insert(source.name.clone()) {
                return Err(CoreError::SourceDuplicateName {
                    name: source.name.to_string(),
                });
            }
            for table in &source.tables {
                registry.register(&source.schema, &table.name);
                if let Some(ident) = &table.identifier {
                    if ident != &table.name {
                        registry.register(&source.schema, ident);
                    }
                }
            }
        }

        Ok(registry)
    }

    fn register(&mut self, schema: &str, table: &str) {
        self.qualified.insert(format!("{}.{}", schema, table));
        self.by_table
            .entry(table.to_string())
            .or_default()
            .insert(schema.to_string());
    }

    /// Resolve one external reference.
    pub fn resolve(&self, reference: &str) -> SourceResolution {
        if reference.contains('.') {
            if self.qualified.contains(reference) {
                return SourceResolution::Resolved;
            }
            return SourceResolution::Unknown;
        }

        match self.by_table.get(reference) {
            None => SourceResolution::Unknown,
            Some(schemas) if schemas.len() == 1 => SourceResolution::Resolved,
            Some(schemas) => SourceResolution::Ambiguous {
                schemas: schemas.iter().cloned().collect(),
            },
        }
    }

    /// Number of registered qualified tables
    pub fn len(&self) -> usize {
        self.qualified.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.qualified.is_empty()
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
