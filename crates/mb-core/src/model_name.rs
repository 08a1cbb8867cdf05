//! Strongly-typed model name wrapper.

use crate::name_type::name_type;

name_type! {
    /// Strongly-typed wrapper for qualified model names.
    ///
    /// Prevents accidental mixing of model names with source names, asset
    /// key segments, or other string types.
    pub struct ModelName;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name_creation() {
        let name = ModelName::new("stg_customers");
        assert_eq!(name.as_str(), "stg_customers");
        assert_eq!(format!("{}", name), "stg_customers");
    }

    #[test]
    fn test_model_name_rejects_empty() {
        assert!(ModelName::try_new("").is_none());
    }

    #[test]
    fn test_model_name_compares_against_str() {
        let name = ModelName::new("customers");
        assert!(name == *"customers");
        assert!(name == "customers");
    }

    #[test]
    fn test_model_name_deserialize_rejects_empty() {
        let result: Result<ModelName, _> = serde_yaml::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_model_name_borrow_lookup() {
        use std::collections::BTreeMap;
        let mut map: BTreeMap<ModelName, i32> = BTreeMap::new();
        map.insert(ModelName::new("customers"), 1);
        assert_eq!(map.get("customers"), Some(&1));
    }
}
