//! Configuration management for `sprint_board`.
//!
//! Configuration is loaded from `.board/config.yaml`. Missing file means
//! defaults; missing keys fall back individually.

use std::fs;
use std::path::Path;

use board_lib::{BoardError, ExpandPolicy, Result};
use serde::{Deserialize, Serialize};

/// Template written by `sb init`.
pub const CONFIG_TEMPLATE: &str = "# Sprint Board Configuration
# expand_first: 2
# debounce_ms: 300
";

/// Workspace configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// How many sprints open expanded when the board first loads.
    pub expand_first: usize,
    /// Delay between the last filter edit and the re-fetch.
    pub debounce_ms: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            expand_first: 2,
            debounce_ms: 300,
        }
    }
}

impl BoardConfig {
    /// Load config from a YAML file, or defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .map_err(|e| BoardError::Config(format!("cannot read {}: {e}", path.display())))?;
        // A comment-only template parses as a null document.
        serde_yaml::from_str::<Option<Self>>(&contents)
            .map(Option::unwrap_or_default)
            .map_err(|e| BoardError::Config(format!("invalid config {}: {e}", path.display())))
    }

    #[must_use]
    pub const fn expand_policy(&self) -> ExpandPolicy {
        ExpandPolicy {
            expand_first: self.expand_first,
        }
    }

    #[must_use]
    pub const fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}
