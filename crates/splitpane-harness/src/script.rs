#![forbid(unsafe_code)]

//! Scenario scripts: a layout config plus an ordered list of commands.
//!
//! ```json
//! {
//!   "name": "drag_then_collapse",
//!   "config": { "min_left_width": 200, "min_right_width": 200, "init_left_width_perc": 50 },
//!   "steps": [
//!     { "op": "init", "width": 1000, "right_enabled": true },
//!     { "op": "manual_resize", "delta": -450 }
//!   ]
//! }
//! ```
//!
//! Every `config` field is optional and falls back to the layout defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use splitpane_layout::{SplitCommand, SplitConfig};

use crate::error::{HarnessError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub config: SplitConfig,
    pub steps: Vec<SplitCommand>,
}

impl ReplayScript {
    /// Parse and validate a script from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(text)?;
        script.validate()?;
        Ok(script)
    }

    /// Read a script from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| HarnessError::ReadScript {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(HarnessError::EmptyScript);
        }
        self.config.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_script_with_defaults() {
        let script =
            ReplayScript::from_json(r#"{"steps":[{"op":"init","width":800,"right_enabled":false}]}"#)
                .expect("valid script");
        assert!(script.name.is_empty());
        assert_eq!(script.config, SplitConfig::default());
        assert_eq!(script.steps.len(), 1);
    }

    #[test]
    fn empty_steps_rejected() {
        let err = ReplayScript::from_json(r#"{"steps":[]}"#).unwrap_err();
        assert!(matches!(err, HarnessError::EmptyScript));
    }

    #[test]
    fn invalid_config_rejected() {
        let err = ReplayScript::from_json(
            r#"{"config":{"init_left_width_perc":140},"steps":[{"op":"toggle_left"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, HarnessError::Layout(_)));
    }

    #[test]
    fn unknown_operation_is_json_error() {
        let err = ReplayScript::from_json(r#"{"steps":[{"op":"maximize"}]}"#).unwrap_err();
        assert!(matches!(err, HarnessError::Json(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ReplayScript::load(Path::new("/nonexistent/split.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/split.json"));
    }
}
