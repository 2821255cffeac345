//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Key field used when none is configured
pub const DEFAULT_KEY_FIELD: &str = "name";

/// Weight assumed for edges linked without an explicit weight
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Graph configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Payload field whose value identifies a vertex
    #[serde(default = "default_key_field")]
    pub key_field: String,

    /// Weight used by weighted algorithms for edges that carry none
    #[serde(default = "default_weight")]
    pub default_weight: f64,
}

fn default_key_field() -> String {
    DEFAULT_KEY_FIELD.to_string()
}

fn default_weight() -> f64 {
    DEFAULT_EDGE_WEIGHT
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            key_field: default_key_field(),
            default_weight: default_weight(),
        }
    }
}
