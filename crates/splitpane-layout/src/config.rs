#![forbid(unsafe_code)]

//! Construction-time configuration and the breakpoint selection rule.
//!
//! # Usage
//!
//! ```
//! use splitpane_layout::{SplitConfig, StrategyKind};
//!
//! let config = SplitConfig::default()
//!     .with_min_left_width(200.0)
//!     .with_min_right_width(200.0)
//!     .with_init_left_width_perc(50.0);
//!
//! assert_eq!(config.strategy_for(399.0), StrategyKind::OnePane);
//! assert_eq!(config.strategy_for(400.0), StrategyKind::TwoPane);
//! ```

use serde::{Deserialize, Serialize};

use crate::{SplitLayoutError, StrategyKind};

/// Default minimum width of the left pane, in pixels.
pub const DEFAULT_MIN_LEFT_WIDTH: f64 = 300.0;
/// Default minimum width of the right pane, in pixels.
pub const DEFAULT_MIN_RIGHT_WIDTH: f64 = 300.0;
/// Default share of the container claimed by the left pane, in percent.
pub const DEFAULT_INIT_LEFT_WIDTH_PERC: f64 = 25.0;

/// Immutable split layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub min_left_width: f64,
    pub min_right_width: f64,
    /// Initial left share (0..=100) when both panes fit.
    pub init_left_width_perc: f64,
    /// When false, divider drags leave the geometry untouched.
    pub manual_resize: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            min_left_width: DEFAULT_MIN_LEFT_WIDTH,
            min_right_width: DEFAULT_MIN_RIGHT_WIDTH,
            init_left_width_perc: DEFAULT_INIT_LEFT_WIDTH_PERC,
            manual_resize: true,
        }
    }
}

impl SplitConfig {
    /// Build a config from the three geometry parameters.
    #[must_use]
    pub fn new(min_left_width: f64, min_right_width: f64, init_left_width_perc: f64) -> Self {
        Self {
            min_left_width,
            min_right_width,
            init_left_width_perc,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_min_left_width(mut self, width: f64) -> Self {
        self.min_left_width = width;
        self
    }

    #[must_use]
    pub fn with_min_right_width(mut self, width: f64) -> Self {
        self.min_right_width = width;
        self
    }

    #[must_use]
    pub fn with_init_left_width_perc(mut self, perc: f64) -> Self {
        self.init_left_width_perc = perc;
        self
    }

    #[must_use]
    pub fn with_manual_resize(mut self, enabled: bool) -> Self {
        self.manual_resize = enabled;
        self
    }

    /// Reject negative or non-finite minimums and percentages outside 0..=100.
    pub fn validate(&self) -> Result<(), SplitLayoutError> {
        for (field, value) in [
            ("min_left_width", self.min_left_width),
            ("min_right_width", self.min_right_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SplitLayoutError::InvalidConfig { field, value });
            }
        }
        let perc = self.init_left_width_perc;
        if !perc.is_finite() || !(0.0..=100.0).contains(&perc) {
            return Err(SplitLayoutError::InvalidConfig {
                field: "init_left_width_perc",
                value: perc,
            });
        }
        Ok(())
    }

    /// Smallest container width that can show both panes at their minimums.
    #[must_use]
    pub fn required_two_pane_width(&self) -> f64 {
        self.min_left_width + self.min_right_width
    }

    /// Strategy that is authoritative for a container of `width` pixels.
    ///
    /// Narrow containers (combined minimums exceed the width) show one pane.
    #[must_use]
    pub fn strategy_for(&self, width: f64) -> StrategyKind {
        if self.required_two_pane_width() > width {
            StrategyKind::OnePane
        } else {
            StrategyKind::TwoPane
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_host_component() {
        let config = SplitConfig::default();
        assert_eq!(config.min_left_width, 300.0);
        assert_eq!(config.min_right_width, 300.0);
        assert_eq!(config.init_left_width_perc, 25.0);
        assert!(config.manual_resize);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn strategy_boundary_is_inclusive_for_two_pane() {
        let config = SplitConfig::new(200.0, 200.0, 50.0);
        assert_eq!(config.required_two_pane_width(), 400.0);
        assert_eq!(config.strategy_for(0.0), StrategyKind::OnePane);
        assert_eq!(config.strategy_for(399.9), StrategyKind::OnePane);
        assert_eq!(config.strategy_for(400.0), StrategyKind::TwoPane);
        assert_eq!(config.strategy_for(1920.0), StrategyKind::TwoPane);
    }

    #[test]
    fn zero_minimums_always_two_pane() {
        let config = SplitConfig::new(0.0, 0.0, 50.0);
        assert_eq!(config.strategy_for(0.0), StrategyKind::TwoPane);
    }

    #[test]
    fn validate_rejects_negative_minimum() {
        let config = SplitConfig::default().with_min_right_width(-1.0);
        assert_eq!(
            config.validate(),
            Err(SplitLayoutError::InvalidConfig {
                field: "min_right_width",
                value: -1.0
            })
        );
    }

    #[test]
    fn validate_rejects_out_of_range_percentage() {
        for perc in [-0.5, 100.5] {
            let config = SplitConfig::default().with_init_left_width_perc(perc);
            assert!(matches!(
                config.validate(),
                Err(SplitLayoutError::InvalidConfig {
                    field: "init_left_width_perc",
                    ..
                })
            ));
        }
        assert!(
            SplitConfig::default()
                .with_init_left_width_perc(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SplitConfig =
            serde_json::from_str(r#"{"min_left_width": 120, "manual_resize": false}"#)
                .expect("config should parse");
        assert_eq!(config.min_left_width, 120.0);
        assert_eq!(config.min_right_width, DEFAULT_MIN_RIGHT_WIDTH);
        assert!(!config.manual_resize);
    }
}
