//! Options for the async helpers
//!
//! ```yaml
//! max_parallel: 4
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Concurrency settings used by [`map_async_with`](crate::map_async_with)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsyncConfig {
    /// Maximum number of callbacks in flight. `None` runs them all at once.
    pub max_parallel: Option<usize>,
}

impl AsyncConfig {
    pub fn bounded(max_parallel: usize) -> Self {
        Self {
            max_parallel: Some(max_parallel),
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.max_parallel {
            Some(0) => Err(Error::Config(
                "max_parallel must be greater than zero".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
