#![forbid(unsafe_code)]

//! Two-Pane strategy: master and detail side by side.
//!
//! Reachable states are `both open`, `left only` and `right only`; every
//! transition that would close the last open pane opens the other one
//! instead.
//!
//! # Invariants
//!
//! 1. With both panes open, `left_width + right_width == width`.
//! 2. When the container holds both minimums, an open pane is never narrower
//!    than its minimum, except for the `0` produced by a divider flick.
//! 3. The remembered split is overwritten by every both-open geometry and
//!    is never cleared.
//! 4. Open flags are seeded from the outgoing strategy only on the first
//!    breakpoint entry; returning later restores this strategy's own flags.
//!
//! # Clamping
//!
//! Resize-driven clamping snaps a too-small pane up to its minimum. Divider
//! drags use break-to-zero clamping instead: a pane dragged below its minimum
//! collapses and the other pane takes the whole width.

use crate::strategy::{merge_right_open, require_previous};
use crate::{SplitConfig, SplitGeometry, SplitLayoutError, SplitStrategy, StrategyKind};

/// Geometry computation when both panes fit.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoPaneStrategy {
    min_left_width: f64,
    min_right_width: f64,
    init_left_width_perc: f64,
    width: f64,
    left_open: bool,
    right_open: Option<bool>,
    previous: Option<SplitGeometry>,
    /// Widths of the last geometry that had both panes open.
    last_split: Option<(f64, f64)>,
}

impl TwoPaneStrategy {
    #[must_use]
    pub fn new(min_left_width: f64, min_right_width: f64, init_left_width_perc: f64) -> Self {
        Self {
            min_left_width,
            min_right_width,
            init_left_width_perc,
            width: 0.0,
            left_open: true,
            right_open: None,
            previous: None,
            last_split: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &SplitConfig) -> Self {
        Self::new(
            config.min_left_width,
            config.min_right_width,
            config.init_left_width_perc,
        )
    }

    /// Left/right widths remembered from the last both-open geometry.
    #[must_use]
    pub fn last_split(&self) -> Option<(f64, f64)> {
        self.last_split
    }

    fn right_open(&self) -> bool {
        self.right_open.unwrap_or(false)
    }

    fn next(
        &mut self,
        left_open: bool,
        left_width: f64,
        right_open: bool,
        right_width: f64,
    ) -> SplitGeometry {
        let geometry = SplitGeometry {
            left_open,
            right_open,
            left_width,
            right_width,
            width: self.width,
            strategy: StrategyKind::TwoPane,
        };
        if geometry.both_open() {
            self.last_split = Some((left_width, right_width));
        }
        self.left_open = left_open;
        self.right_open = merge_right_open(self.right_open, right_open);
        self.previous = Some(geometry);
        geometry
    }

    fn emit_current_flags(&mut self) -> SplitGeometry {
        if !self.left_open && !self.right_open() {
            self.left_open = true;
        }
        let (left, right) = self.init_widths();
        self.next(self.left_open, left, self.right_open(), right)
    }

    fn init_widths(&self) -> (f64, f64) {
        if self.left_open && self.right_open() {
            let left = self.fit_left(self.init_left_width());
            return (left, self.width - left);
        }
        (
            if self.left_open { self.width } else { 0.0 },
            if self.right_open() { self.width } else { 0.0 },
        )
    }

    fn init_left_width(&self) -> f64 {
        if !self.right_open() {
            return self.width;
        }
        self.remembered_left_width()
    }

    fn init_right_width(&self) -> f64 {
        if !self.left_open {
            return self.width;
        }
        self.width - self.remembered_left_width()
    }

    fn remembered_left_width(&self) -> f64 {
        match self.last_split {
            Some((left, _)) if left > 0.0 => left,
            _ => self.left_width_percent(),
        }
    }

    fn left_width_percent(&self) -> f64 {
        self.width * (self.init_left_width_perc / 100.0)
    }

    fn normalize_left(&self, width: f64, break_to_zero: bool) -> f64 {
        normalize(width, self.min_left_width, break_to_zero)
    }

    fn normalize_right(&self, width: f64, break_to_zero: bool) -> f64 {
        normalize(width, self.min_right_width, break_to_zero)
    }

    /// Whether the container can show both panes at their minimums.
    fn fits_both(&self) -> bool {
        self.width >= self.min_left_width + self.min_right_width
    }

    /// Clamp a left width up to its minimum and down so the right pane keeps
    /// its minimum.
    fn fit_left(&self, width: f64) -> f64 {
        let left = self.normalize_left(width, false);
        if self.fits_both() {
            left.min(self.width - self.min_right_width)
        } else {
            left
        }
    }

    fn fit_right(&self, width: f64) -> f64 {
        let right = self.normalize_right(width, false);
        if self.fits_both() {
            right.min(self.width - self.min_left_width)
        } else {
            right
        }
    }

    /// Scale independently clamped widths so they sum to the container width.
    fn rebalance(&self, left: f64, right: f64) -> (f64, f64) {
        let total = left + right;
        if total <= 0.0 {
            return (0.0, self.width);
        }
        let mut next_left = self.width * (left / total);
        let mut next_right = self.width - next_left;
        if self.fits_both() {
            if next_left < self.min_left_width {
                next_left = self.min_left_width;
                next_right = self.width - next_left;
            } else if next_right < self.min_right_width {
                next_right = self.min_right_width;
                next_left = self.width - next_right;
            }
        }
        (next_left, next_right)
    }
}

/// Clamp `width` against `min`, snapping to zero instead when `break_to_zero`.
fn normalize(width: f64, min: f64, break_to_zero: bool) -> f64 {
    if width < min {
        if break_to_zero { 0.0 } else { min }
    } else {
        width
    }
}

impl SplitStrategy for TwoPaneStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TwoPane
    }

    fn previous(&self) -> Option<&SplitGeometry> {
        self.previous.as_ref()
    }

    fn init(&mut self, width: f64, right_enabled: bool) -> SplitGeometry {
        self.width = width;
        if self.right_open.is_none() && right_enabled {
            self.right_open = Some(true);
        }
        self.emit_current_flags()
    }

    fn on_breakpoint_change(
        &mut self,
        width: f64,
        _right_enabled: bool,
        _left_open: bool,
        right_open: bool,
    ) {
        self.width = width;
        // Only the first entry seeds flags; later entries keep the user's arrangement.
        if self.previous.is_some() {
            return;
        }
        self.right_open = Some(right_open);
        self.emit_current_flags();
    }

    fn on_resize(&mut self, width: f64) -> Result<SplitGeometry, SplitLayoutError> {
        let previous = require_previous(self.previous(), "resize")?;
        self.width = width;

        if self.left_open && self.right_open() {
            let ratio = if previous.width > 0.0 {
                previous.left_width / previous.width
            } else {
                self.init_left_width_perc / 100.0
            };
            let left = self.normalize_left(self.width * ratio, false);
            let right = self.normalize_right(self.width - left, false);
            let (left, right) = self.rebalance(left, right);
            return Ok(self.next(true, left, true, right));
        }

        let (left_open, right_open) = (self.left_open, self.right_open());
        Ok(self.next(
            left_open,
            if left_open { self.width } else { 0.0 },
            right_open,
            if right_open { self.width } else { 0.0 },
        ))
    }

    fn on_manual_resize(&mut self, delta: f64) -> Result<SplitGeometry, SplitLayoutError> {
        let previous = require_previous(self.previous(), "manual_resize")?;
        let left = self.normalize_left(previous.left_width + delta, true);
        let right = self.normalize_right(self.width - left, true);
        if left <= 0.0 && right <= 0.0 {
            // Container too small for either pane; keep what is shown.
            return Ok(previous);
        }
        let width = self.width;
        Ok(self.next(
            left > 0.0,
            if right > 0.0 { left } else { width },
            right > 0.0,
            if left > 0.0 { right } else { width },
        ))
    }

    fn on_open_left(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        require_previous(self.previous(), "open_left")?;
        if !self.right_open() {
            let width = self.width;
            return Ok(self.next(true, width, false, 0.0));
        }
        let left = self.fit_left(self.init_left_width());
        let right = self.width - left;
        Ok(self.next(true, left, true, right))
    }

    fn on_close_left(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        require_previous(self.previous(), "close_left")?;
        let width = self.width;
        Ok(self.next(false, 0.0, true, width))
    }

    fn on_open_right(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        require_previous(self.previous(), "open_right")?;
        if !self.left_open {
            let width = self.width;
            return Ok(self.next(false, 0.0, true, width));
        }
        let right = self.fit_right(self.init_right_width());
        let left = self.width - right;
        Ok(self.next(true, left, true, right))
    }

    fn on_close_right(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        require_previous(self.previous(), "close_right")?;
        let width = self.width;
        Ok(self.next(true, width, false, 0.0))
    }

    fn on_toggle_left(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        require_previous(self.previous(), "toggle_left")?;
        if self.left_open {
            self.on_close_left()
        } else {
            self.on_open_left()
        }
    }

    fn on_toggle_right(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        require_previous(self.previous(), "toggle_right")?;
        if self.right_open() {
            self.on_close_right()
        } else {
            self.on_open_right()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
