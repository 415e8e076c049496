#![forbid(unsafe_code)]

//! Responsive master/detail split layout.
//!
//! [`SplitLayout`] computes the open flags and pixel widths of a left
//! (master) and right (detail) pane across container resizes, divider drags
//! and open/close/toggle actions. It owns two breakpoint strategies and
//! consults one of them per operation:
//!
//! - [`TwoPaneStrategy`] when the container holds both panes' minimum widths,
//! - [`OnePaneStrategy`] otherwise, where the panes behave as exclusive tabs.
//!
//! The engine is pure arithmetic over host-supplied numbers: it never touches
//! rendering and every operation is synchronous and O(1). Hosts apply the
//! returned [`SplitGeometry`] to their own widgets.

pub mod command;
pub mod config;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod one_pane;
pub mod registry;
pub mod split_layout;
pub mod strategy;
pub mod two_pane;

pub use command::SplitCommand;
pub use config::{
    DEFAULT_INIT_LEFT_WIDTH_PERC, DEFAULT_MIN_LEFT_WIDTH, DEFAULT_MIN_RIGHT_WIDTH, SplitConfig,
};
pub use drag::{DividerDrag, DividerDragEffect, DividerDragNoopReason, DividerDragState};
pub use error::SplitLayoutError;
pub use geometry::{GeometryViolation, Pane, SplitGeometry, StrategyKind, WIDTH_EPSILON};
pub use one_pane::OnePaneStrategy;
pub use registry::SplitLayoutRegistry;
pub use split_layout::SplitLayout;
pub use strategy::SplitStrategy;
pub use two_pane::TwoPaneStrategy;
