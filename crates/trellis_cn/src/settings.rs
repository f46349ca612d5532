//! Trellis settings
//!
//! Settings are read from a TOML file; every key is optional.
//!
//! ```toml
//! [script]
//! selector_function = "jQuery"
//!
//! [sequence]
//! start = 0
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use trellis_core::{
    Result, ScriptBuffer, SequenceAllocator, TrellisError, DEFAULT_SELECTOR_FUNCTION,
};

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub script: ScriptSettings,
    #[serde(default)]
    pub sequence: SequenceSettings,
}

/// How client commands are rendered to script
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScriptSettings {
    /// Function used to look elements up (`jQuery`, `$`, ...)
    #[serde(default = "default_selector_function")]
    pub selector_function: String,
}

fn default_selector_function() -> String {
    DEFAULT_SELECTOR_FUNCTION.to_string()
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            selector_function: default_selector_function(),
        }
    }
}

/// Button id sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SequenceSettings {
    /// First id handed out (masked to 15 bits)
    #[serde(default)]
    pub start: u16,
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TrellisError::Config(e.to_string()))
    }

    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded trellis settings");
        Ok(settings)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TrellisError::Config(e.to_string()))
    }

    /// An empty script buffer rendering with the configured selector function
    pub fn script_buffer(&self) -> ScriptBuffer {
        ScriptBuffer::with_selector_function(self.script.selector_function.clone())
    }

    /// A fresh allocator starting at the configured id
    pub fn allocator(&self) -> SequenceAllocator {
        SequenceAllocator::starting_at(self.sequence.start)
    }
}
