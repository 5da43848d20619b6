//! Configuration
//!
//! Every field has a default, so a partial JSON override is enough.

use serde::{Deserialize, Serialize};

use crate::error::{ListError, ListResult};

/// How ids are assigned to new lists and items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// `count + 1`; may reuse an id after a deletion
    CountBased,
    /// `max id + 1`; identical to `CountBased` until something is deleted
    #[default]
    NextAfterMax,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key of the storage slot holding the serialized lists
    pub storage_key: String,
    /// Title shown while no list is active
    pub default_title: String,
    /// Label of the empty option in the list selector
    pub select_placeholder: String,
    pub id_policy: IdPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: "lists".to_string(),
            default_title: "Shopping List".to_string(),
            select_placeholder: "Select a list".to_string(),
            id_policy: IdPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> ListResult<Self> {
        serde_json::from_str(json).map_err(|e| ListError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = Config::from_json(r#"{"id_policy":"count_based"}"#).unwrap();

        assert_eq!(config.id_policy, IdPolicy::CountBased);
        assert_eq!(config.storage_key, "lists");
        assert_eq!(config.default_title, "Shopping List");
    }

    #[test]
    fn test_invalid_json() {
        let err = Config::from_json("{storage_key:").unwrap_err();
        assert!(matches!(err, ListError::Config(_)));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(Config::from_json(r#"{"id_policy":"random"}"#).is_err());
    }
}
