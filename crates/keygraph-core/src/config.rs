//! Graph configuration for keygraph
//!
//! Configuration can be built in code or loaded from a TOML file:
//!
//! ```toml
//! key_field = "name"
//! default_weight = 1.0
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};

pub use types::{GraphConfig, DEFAULT_EDGE_WEIGHT, DEFAULT_KEY_FIELD};

impl GraphConfig {
    /// Create a configuration with the given key field and default weight
    pub fn with_key_field(key_field: impl Into<String>) -> Self {
        Self {
            key_field: key_field.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), key_field = %config.key_field, "loaded config");
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GraphConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GraphError::invalid_value("config serialization", e))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.key_field.trim().is_empty() {
            return Err(GraphError::invalid_value("key_field", "(empty)"));
        }
        if !self.default_weight.is_finite() || self.default_weight < 0.0 {
            return Err(GraphError::invalid_value(
                "default_weight",
                self.default_weight,
            ));
        }
        Ok(())
    }
}
