//! Pluggable asset naming
//!
//! The translator maps model names and external references to orchestrator
//! asset keys. Keys must be pure, deterministic functions of their input:
//! the orchestrator matches assets across runs by key, so the same model
//! must always map to the same key.

use mb_core::{AssetKey, Model};

/// Naming strategy mapping the project's names onto asset keys.
///
/// Implementations must be stateless with respect to the mapping: calling
/// either method twice with the same input must return the same key.
pub trait AssetNaming: Send + Sync {
    /// Asset key for an internal model
    fn asset_key(&self, model: &Model) -> AssetKey;

    /// Asset key for a declared external reference (`schema.table` or bare
    /// table name); these become unmaterialized upstream placeholders
    fn external_asset_key(&self, reference: &str) -> AssetKey;
}

/// Default naming strategy: an optional namespace prefix followed by the
/// dot-split segments of the model name; external references go under a
/// dedicated external namespace.
#[derive(Debug, Clone)]
pub struct PrefixNaming {
    prefix: Vec<String>,
    external_prefix: Vec<String>,
}

impl PrefixNaming {
    /// Strategy with the given namespace prefix for model keys.
    pub fn new<I, S>(prefix: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefix: prefix.into_iter().map(Into::into).collect(),
            external_prefix: vec!["external".to_string()],
        }
    }

    /// Override the namespace used for external references.
    pub fn with_external_prefix<I, S>(mut self, prefix: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.external_prefix = prefix.into_iter().map(Into::into).collect();
        self
    }

    fn key_under(&self, prefix: &[String], name: &str) -> AssetKey {
        let segments = prefix
            .iter()
            .map(String::as_str)
            .chain(name.split('.'))
            .map(str::to_string);
        // Model and reference names are non-empty, so at least one segment
        // survives the empty filter.
        AssetKey::try_new(segments).unwrap_or_else(|| AssetKey::new([name]))
    }
}

impl Default for PrefixNaming {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl AssetNaming for PrefixNaming {
    fn asset_key(&self, model: &Model) -> AssetKey {
        self.key_under(&self.prefix, model.name.as_str())
    }

    fn external_asset_key(&self, reference: &str) -> AssetKey {
        self.key_under(&self.external_prefix, reference)
    }
}
