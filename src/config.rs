//! Job configuration
//!
//! Immutable per-attempt settings for cluster output, loaded from YAML
//! or built programmatically. The configuration is fixed for the
//! lifetime of a task attempt; nothing here performs I/O after load.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default number of records per compressed block
pub const DEFAULT_BLOCK_LINE_COUNT: usize = 3000;

/// Default partition-name modifier
pub const DEFAULT_PART_MODIFIER: &str = "a-";

/// Default compression codec identifier
pub const DEFAULT_CODEC: &str = "gzip";

/// Job configuration for one task attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Records per compressed block before a new summary entry is emitted
    #[serde(default = "default_block_line_count")]
    pub block_line_count: usize,

    /// Literal fragment in default partition basenames
    #[serde(default = "default_part_modifier")]
    pub part_modifier: String,

    /// Compression codec identifier
    #[serde(default = "default_codec")]
    pub codec: String,

    /// Naming overrides keyed by partition ordinal; an override is
    /// used verbatim in place of the default basename
    #[serde(default)]
    pub name_overrides: HashMap<u32, String>,
}

fn default_block_line_count() -> usize {
    DEFAULT_BLOCK_LINE_COUNT
}

fn default_part_modifier() -> String {
    DEFAULT_PART_MODIFIER.to_string()
}

fn default_codec() -> String {
    DEFAULT_CODEC.to_string()
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            block_line_count: default_block_line_count(),
            part_modifier: default_part_modifier(),
            codec: default_codec(),
            name_overrides: HashMap::new(),
        }
    }
}

impl JobConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of records per compressed block
    #[must_use]
    pub fn with_block_line_count(mut self, count: usize) -> Self {
        self.block_line_count = count;
        self
    }

    /// Set the partition-name modifier
    #[must_use]
    pub fn with_part_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.part_modifier = modifier.into();
        self
    }

    /// Set the compression codec identifier
    #[must_use]
    pub fn with_codec(mut self, codec: impl Into<String>) -> Self {
        self.codec = codec.into();
        self
    }

    /// Add a naming override for an ordinal
    #[must_use]
    pub fn with_name_override(mut self, ordinal: u32, name: impl Into<String>) -> Self {
        self.name_overrides.insert(ordinal, name.into());
        self
    }

    /// Parse a configuration from YAML and validate it
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: JobConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.block_line_count == 0 {
            return Err(Error::invalid_value(
                "block_line_count",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Look up the naming override for an ordinal, if any
    pub fn name_override(&self, ordinal: u32) -> Option<&str> {
        self.name_overrides.get(&ordinal).map(String::as_str)
    }
}
