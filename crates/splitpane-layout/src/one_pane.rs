#![forbid(unsafe_code)]

//! One-Pane strategy: the two panes act as mutually exclusive tabs.
//!
//! Exactly one pane is open at all times and it always receives the full
//! container width. There is no divider, so manual resizes are inert.

use crate::strategy::{merge_right_open, require_previous};
use crate::{SplitGeometry, SplitLayoutError, SplitStrategy, StrategyKind};

/// Geometry computation when only one pane fits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnePaneStrategy {
    width: f64,
    right_open: Option<bool>,
    previous: Option<SplitGeometry>,
}

impl OnePaneStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn show(&mut self, right_open: bool) -> SplitGeometry {
        let geometry = SplitGeometry {
            left_open: !right_open,
            right_open,
            left_width: if right_open { 0.0 } else { self.width },
            right_width: if right_open { self.width } else { 0.0 },
            width: self.width,
            strategy: StrategyKind::OnePane,
        };
        self.right_open = merge_right_open(self.right_open, right_open);
        self.previous = Some(geometry);
        geometry
    }

    fn showing_right(&self) -> bool {
        self.right_open.unwrap_or(false)
    }
}

impl SplitStrategy for OnePaneStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::OnePane
    }

    fn previous(&self) -> Option<&SplitGeometry> {
        self.previous.as_ref()
    }

    fn init(&mut self, width: f64, right_enabled: bool) -> SplitGeometry {
        self.width = width;
        if self.right_open.is_none() && right_enabled {
            self.right_open = Some(true);
        }
        self.show(self.showing_right())
    }

    fn on_breakpoint_change(
        &mut self,
        width: f64,
        _right_enabled: bool,
        _left_open: bool,
        right_open: bool,
    ) {
        self.width = width;
        self.right_open = Some(right_open);
        self.show(right_open);
    }

    fn on_resize(&mut self, width: f64) -> Result<SplitGeometry, SplitLayoutError> {
        require_previous(self.previous(), "resize")?;
        self.width = width;
        Ok(self.show(self.showing_right()))
    }

    fn on_manual_resize(&mut self, _delta: f64) -> Result<SplitGeometry, SplitLayoutError> {
        require_previous(self.previous(), "manual_resize")
    }

    fn on_open_left(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        require_previous(self.previous(), "open_left")?;
        Ok(self.show(false))
    }

    fn on_close_left(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        require_previous(self.previous(), "close_left")?;
        Ok(self.show(true))
    }

    fn on_open_right(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        require_previous(self.previous(), "open_right")?;
        Ok(self.show(true))
    }

    fn on_close_right(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        require_previous(self.previous(), "close_right")?;
        Ok(self.show(false))
    }

    fn on_toggle_left(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        let previous = require_previous(self.previous(), "toggle_left")?;
        // Left becomes open exactly when it was closed.
        Ok(self.show(previous.left_open))
    }

    fn on_toggle_right(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        let previous = require_previous(self.previous(), "toggle_right")?;
        Ok(self.show(!previous.right_open))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
