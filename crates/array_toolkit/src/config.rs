//! # Toolkit Configuration
//!
//! Settings are loaded once from TOML. Every field has a default, so an
//! empty file is a valid configuration.
//!
//! ```toml
//! # Reject text renderings longer than this many bytes (omit for no limit)
//! max_text_len = 2000
//! # Initial buffer reservation for text rendering
//! text_capacity = 2000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ToolkitError, ToolkitResult};
use crate::text::{DEFAULT_TEXT_CAPACITY, EMPTY_TEXT};

/// Configuration for an [`ArrayToolkit`](crate::ArrayToolkit).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolkitConfig {
    /// Hard limit on text rendering length, in bytes. `None` grows without limit.
    pub max_text_len: Option<usize>,
    /// Initial buffer reservation for text rendering.
    pub text_capacity: usize,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            max_text_len: None,
            text_capacity: DEFAULT_TEXT_CAPACITY,
        }
    }
}

impl ToolkitConfig {
    /// Config matching the historical fixed 2000-byte text buffer.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            max_text_len: Some(DEFAULT_TEXT_CAPACITY),
            text_capacity: DEFAULT_TEXT_CAPACITY,
        }
    }

    /// Sets the text length limit.
    #[must_use]
    pub fn with_max_text_len(mut self, max_text_len: Option<usize>) -> Self {
        self.max_text_len = max_text_len;
        self
    }

    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::InvalidConfig`] on malformed TOML, unknown keys, or
    /// values rejected by [`validate`](Self::validate).
    pub fn from_toml_str(source: &str) -> ToolkitResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| ToolkitError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        debug!(?config, "toolkit config loaded");
        Ok(config)
    }

    /// Reads, parses and validates a TOML config file.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::InvalidConfig`] if the file cannot be read or is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> ToolkitResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            ToolkitError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Serializes the config to TOML.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::InvalidConfig`] if serialization fails.
    pub fn to_toml_string(&self) -> ToolkitResult<String> {
        toml::to_string(self).map_err(|e| ToolkitError::InvalidConfig(e.to_string()))
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::InvalidConfig`] if `text_capacity` is zero or
    /// `max_text_len` cannot hold even the empty rendering.
    pub fn validate(&self) -> ToolkitResult<()> {
        if self.text_capacity == 0 {
            return Err(ToolkitError::InvalidConfig(
                "text_capacity must be greater than zero".to_string(),
            ));
        }
        if let Some(limit) = self.max_text_len {
            if limit < EMPTY_TEXT.len() {
                return Err(ToolkitError::InvalidConfig(format!(
                    "max_text_len {limit} is shorter than the empty rendering {EMPTY_TEXT:?}"
                )));
            }
        }
        Ok(())
    }
}
