//! Hierarchical asset keys for the orchestrator side of the bridge.
//!
//! An `AssetKey` is the stable identifier the orchestrator uses to match a
//! materializable unit across runs. Keys are derived deterministically from
//! model names by a naming strategy; the same input must always yield the
//! same key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A hierarchical, orchestrator-facing asset identifier.
///
/// Segments are non-empty strings; `Display` joins them with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetKey(Vec<String>);

impl AssetKey {
    /// Create a key from segments, dropping empty segments.
    ///
    /// Returns `None` if no non-empty segment remains.
    pub fn try_new<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments
            .into_iter()
            .map(Into::into)
            .filter(|s| !s.is_empty())
            .collect();
        if segments.is_empty() {
            None
        } else {
            Some(Self(segments))
        }
    }

    /// Create a key from segments, panicking if no non-empty segment remains.
    ///
    /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::try_new(segments).expect("AssetKey must have at least one non-empty segment")
    }

    /// The key's path segments.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The final segment (the model-level name).
    pub fn leaf(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_key_display() {
        let key = AssetKey::new(["jaffle", "staging", "stg_customers"]);
        assert_eq!(key.to_string(), "jaffle/staging/stg_customers");
        assert_eq!(key.leaf(), "stg_customers");
    }

    #[test]
    fn test_asset_key_drops_empty_segments() {
        let key = AssetKey::new(["", "raw", "orders"]);
        assert_eq!(key.segments(), &["raw".to_string(), "orders".to_string()]);
    }

    #[test]
    fn test_asset_key_all_empty_is_none() {
        assert!(AssetKey::try_new(["", ""]).is_none());
    }

    #[test]
    fn test_asset_key_equality_is_structural() {
        let a = AssetKey::new(["raw", "orders"]);
        let b = AssetKey::new(vec!["raw".to_string(), "orders".to_string()]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_asset_key_serde() {
        let key = AssetKey::new(["raw", "orders"]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#"["raw","orders"]"#);
        let back: AssetKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
