#![forbid(unsafe_code)]

//! Divider drag lifecycle.
//!
//! ```text
//! Idle -> Grabbed -> Idle
//!          (pointer moves forward deltas to the layout)
//! ```
//!
//! The host feeds raw pointer events (press on the divider, relative
//! horizontal movement over the container, release, pointer leaving the
//! container). Movement is only turned into a manual resize while the
//! divider is grabbed, and a drag ends as soon as the pointer leaves.

use serde::{Deserialize, Serialize};

use crate::{SplitGeometry, SplitLayout, SplitLayoutError};

/// Current drag lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DividerDragState {
    #[default]
    Idle,
    Grabbed {
        /// Sum of all movement forwarded since the press.
        total_delta: f64,
    },
}

/// Why a drag event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerDragNoopReason {
    NotGrabbed,
    AlreadyGrabbed,
    ManualResizeDisabled,
    ZeroMovement,
}

/// Outcome of one drag event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DividerDragEffect {
    Grabbed,
    Moved {
        delta: f64,
        geometry: SplitGeometry,
    },
    Released {
        total_delta: f64,
    },
    Noop {
        reason: DividerDragNoopReason,
    },
}

/// Pointer-driven divider drag for one [`SplitLayout`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DividerDrag {
    state: DividerDragState,
}

impl DividerDrag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> DividerDragState {
        self.state
    }

    #[must_use]
    pub const fn is_grabbed(&self) -> bool {
        matches!(self.state, DividerDragState::Grabbed { .. })
    }

    /// Pointer pressed on the divider.
    pub fn press(&mut self, layout: &SplitLayout) -> DividerDragEffect {
        if !layout.config().manual_resize {
            return DividerDragEffect::Noop {
                reason: DividerDragNoopReason::ManualResizeDisabled,
            };
        }
        if self.is_grabbed() {
            return DividerDragEffect::Noop {
                reason: DividerDragNoopReason::AlreadyGrabbed,
            };
        }
        self.state = DividerDragState::Grabbed { total_delta: 0.0 };
        DividerDragEffect::Grabbed
    }

    /// Pointer moved horizontally by `movement_x` pixels over the container.
    pub fn pointer_move(
        &mut self,
        layout: &mut SplitLayout,
        movement_x: f64,
    ) -> Result<DividerDragEffect, SplitLayoutError> {
        let DividerDragState::Grabbed { total_delta } = self.state else {
            return Ok(DividerDragEffect::Noop {
                reason: DividerDragNoopReason::NotGrabbed,
            });
        };
        if movement_x == 0.0 {
            return Ok(DividerDragEffect::Noop {
                reason: DividerDragNoopReason::ZeroMovement,
            });
        }
        let geometry = layout.on_manual_resize(movement_x)?;
        self.state = DividerDragState::Grabbed {
            total_delta: total_delta + movement_x,
        };
        Ok(DividerDragEffect::Moved {
            delta: movement_x,
            geometry,
        })
    }

    /// Pointer released anywhere over the container.
    pub fn release(&mut self) -> DividerDragEffect {
        match std::mem::take(&mut self.state) {
            DividerDragState::Grabbed { total_delta } => DividerDragEffect::Released { total_delta },
            DividerDragState::Idle => DividerDragEffect::Noop {
                reason: DividerDragNoopReason::NotGrabbed,
            },
        }
    }

    /// Pointer left the container; ends any drag in progress.
    pub fn leave(&mut self) -> DividerDragEffect {
        self.release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SplitConfig;

    fn layout() -> SplitLayout {
        let mut layout =
            SplitLayout::new(SplitConfig::new(200.0, 200.0, 50.0)).expect("valid config");
        layout.init(1000.0, true).expect("init");
        layout
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut layout = layout();
        let mut drag = DividerDrag::new();
        assert_eq!(
            drag.pointer_move(&mut layout, 40.0).unwrap(),
            DividerDragEffect::Noop {
                reason: DividerDragNoopReason::NotGrabbed
            }
        );
        assert_eq!(layout.geometry().unwrap().left_width, 500.0);
    }

    #[test]
    fn grabbed_moves_resize_layout() {
        let mut layout = layout();
        let mut drag = DividerDrag::new();
        assert_eq!(drag.press(&layout), DividerDragEffect::Grabbed);
        drag.pointer_move(&mut layout, 30.0).unwrap();
        let effect = drag.pointer_move(&mut layout, 20.0).unwrap();
        let DividerDragEffect::Moved { delta, geometry } = effect else {
            panic!("expected a move, got {effect:?}");
        };
        assert_eq!(delta, 20.0);
        assert_eq!(geometry.left_width, 550.0);
        assert_eq!(
            drag.release(),
            DividerDragEffect::Released { total_delta: 50.0 }
        );
        assert!(!drag.is_grabbed());
    }

    #[test]
    fn leave_ends_drag() {
        let mut layout = layout();
        let mut drag = DividerDrag::new();
        drag.press(&layout);
        drag.leave();
        drag.pointer_move(&mut layout, 100.0).unwrap();
        assert_eq!(layout.geometry().unwrap().left_width, 500.0);
    }

    #[test]
    fn double_press_and_zero_movement_are_noops() {
        let mut layout = layout();
        let mut drag = DividerDrag::new();
        drag.press(&layout);
        assert_eq!(
            drag.press(&layout),
            DividerDragEffect::Noop {
                reason: DividerDragNoopReason::AlreadyGrabbed
            }
        );
        assert!(matches!(
            drag.pointer_move(&mut layout, 0.0).unwrap(),
            DividerDragEffect::Noop {
                reason: DividerDragNoopReason::ZeroMovement
            }
        ));
    }

    #[test]
    fn disabled_manual_resize_refuses_grab() {
        let layout =
            SplitLayout::new(SplitConfig::default().with_manual_resize(false)).expect("config");
        let mut drag = DividerDrag::new();
        assert_eq!(
            drag.press(&layout),
            DividerDragEffect::Noop {
                reason: DividerDragNoopReason::ManualResizeDisabled
            }
        );
        assert_eq!(drag.state(), DividerDragState::Idle);
    }

    #[test]
    fn move_before_init_propagates_error() {
        let mut layout = SplitLayout::new(SplitConfig::default()).expect("config");
        let mut drag = DividerDrag::new();
        drag.press(&layout);
        assert!(drag.pointer_move(&mut layout, 5.0).is_err());
    }
}
