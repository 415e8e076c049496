#![forbid(unsafe_code)]

//! Geometry descriptors emitted by the split layout.
//!
//! A [`SplitGeometry`] is the complete output of one layout operation: which
//! panes are visible, how many pixels each one gets, and which strategy
//! produced the numbers. Hosts apply it as width/visibility styling and never
//! feed it back except through the coordinator.
//!
//! # Invariants
//!
//! 1. At least one pane is open.
//! 2. A closed pane reports a width of exactly `0`.
//! 3. One-Pane geometry has exactly one open pane.
//! 4. Two-Pane geometry with both panes open satisfies
//!    `left_width + right_width == width`.
//!
//! [`SplitGeometry::check_invariants`] verifies all of the above and is used
//! by the property suites and the replay harness.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tolerance used when comparing summed widths against the container width.
pub const WIDTH_EPSILON: f64 = 1e-6;

/// One of the two logical regions managed by the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pane {
    /// Master pane.
    Left,
    /// Detail pane.
    Right,
}

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Which breakpoint strategy produced a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Only one pane fits; panes behave as mutually exclusive tabs.
    OnePane,
    /// Both panes fit side by side.
    TwoPane,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnePane => write!(f, "one_pane"),
            Self::TwoPane => write!(f, "two_pane"),
        }
    }
}

/// Computed open flags and pixel widths for both panes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitGeometry {
    pub left_open: bool,
    pub right_open: bool,
    pub left_width: f64,
    pub right_width: f64,
    /// Total container width, as supplied by the host.
    pub width: f64,
    pub strategy: StrategyKind,
}

impl SplitGeometry {
    /// Whether `pane` is visible.
    #[must_use]
    pub const fn is_open(&self, pane: Pane) -> bool {
        match pane {
            Pane::Left => self.left_open,
            Pane::Right => self.right_open,
        }
    }

    /// Reported width of `pane`.
    #[must_use]
    pub const fn width_of(&self, pane: Pane) -> f64 {
        match pane {
            Pane::Left => self.left_width,
            Pane::Right => self.right_width,
        }
    }

    /// Both panes are visible.
    #[must_use]
    pub const fn both_open(&self) -> bool {
        self.left_open && self.right_open
    }

    /// Number of visible panes (0..=2).
    #[must_use]
    pub fn open_count(&self) -> usize {
        usize::from(self.left_open) + usize::from(self.right_open)
    }

    /// Verify the structural invariants of this geometry.
    ///
    /// `min_left`/`min_right` are only enforced for Two-Pane geometry with
    /// both panes open and a container wide enough to hold both minimums.
    pub fn check_invariants(&self, min_left: f64, min_right: f64) -> Result<(), GeometryViolation> {
        if self.open_count() == 0 {
            return Err(GeometryViolation::BothClosed);
        }
        for pane in [Pane::Left, Pane::Right] {
            if !self.is_open(pane) && self.width_of(pane) != 0.0 {
                return Err(GeometryViolation::ClosedPaneHasWidth {
                    pane,
                    width: self.width_of(pane),
                });
            }
        }
        match self.strategy {
            StrategyKind::OnePane => {
                if self.both_open() {
                    return Err(GeometryViolation::NotExclusive);
                }
            }
            StrategyKind::TwoPane if self.both_open() => {
                let sum = self.left_width + self.right_width;
                if (sum - self.width).abs() > WIDTH_EPSILON {
                    return Err(GeometryViolation::SumMismatch {
                        sum,
                        width: self.width,
                    });
                }
                if self.width + WIDTH_EPSILON >= min_left + min_right {
                    for (pane, min) in [(Pane::Left, min_left), (Pane::Right, min_right)] {
                        let width = self.width_of(pane);
                        if width + WIDTH_EPSILON < min {
                            return Err(GeometryViolation::BelowMinimum { pane, width, min });
                        }
                    }
                }
            }
            StrategyKind::TwoPane => {}
        }
        Ok(())
    }
}

/// A broken geometry invariant, reported by [`SplitGeometry::check_invariants`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryViolation {
    BothClosed,
    ClosedPaneHasWidth { pane: Pane, width: f64 },
    NotExclusive,
    SumMismatch { sum: f64, width: f64 },
    BelowMinimum { pane: Pane, width: f64, min: f64 },
}

impl fmt::Display for GeometryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothClosed => write!(f, "both panes are closed"),
            Self::ClosedPaneHasWidth { pane, width } => {
                write!(f, "closed {pane} pane reports width {width}")
            }
            Self::NotExclusive => write!(f, "one-pane geometry has both panes open"),
            Self::SumMismatch { sum, width } => {
                write!(f, "pane widths sum to {sum} but container is {width}")
            }
            Self::BelowMinimum { pane, width, min } => {
                write!(f, "{pane} pane width {width} is below its minimum {min}")
            }
        }
    }
}

impl std::error::Error for GeometryViolation {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
