#![forbid(unsafe_code)]

//! Layout coordinator: picks the authoritative strategy for the current
//! container width and forwards every operation to it.
//!
//! # Usage
//!
//! ```
//! use splitpane_layout::{SplitConfig, SplitLayout, StrategyKind};
//!
//! let mut layout = SplitLayout::new(SplitConfig::new(200.0, 200.0, 50.0))?;
//! let g = layout.init(1000.0, true)?;
//! assert_eq!((g.left_width, g.right_width), (500.0, 500.0));
//!
//! // Narrower than both minimums: one pane at a time.
//! let g = layout.on_resize(300.0)?;
//! assert_eq!(g.strategy, StrategyKind::OnePane);
//! # Ok::<(), splitpane_layout::SplitLayoutError>(())
//! ```
//!
//! # Invariants
//!
//! 1. Both strategies live as long as the coordinator; switching only
//!    changes which one is consulted, so the remembered split survives
//!    breakpoint round trips.
//! 2. When an operation switches strategy, the incoming strategy receives
//!    the outgoing geometry's open flags before the operation runs.
//! 3. The returned geometry is cached and is the only state callers see.
//!
//! # Failure Modes
//!
//! - Any operation other than `init` before `init`: `NotInitialized`.
//! - Non-finite widths or deltas: `InvalidWidth` / `InvalidDelta`.
//! - Negative widths are clamped to `0`.
//!
//! A coordinator is single-owner state; hosts running several layouts keep
//! one coordinator per layout (see [`crate::SplitLayoutRegistry`]).

use tracing::{debug, debug_span, info, warn};

use crate::{
    OnePaneStrategy, SplitCommand, SplitConfig, SplitGeometry, SplitLayoutError, SplitStrategy,
    StrategyKind, TwoPaneStrategy,
};

/// Responsive master/detail layout state for one mounted split view.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitLayout {
    config: SplitConfig,
    one_pane: OnePaneStrategy,
    two_pane: TwoPaneStrategy,
    right_enabled: bool,
    current: Option<SplitGeometry>,
}

impl SplitLayout {
    /// Build a coordinator after validating `config`.
    pub fn new(config: SplitConfig) -> Result<Self, SplitLayoutError> {
        config.validate()?;
        Ok(Self {
            config,
            one_pane: OnePaneStrategy::new(),
            two_pane: TwoPaneStrategy::from_config(&config),
            right_enabled: false,
            current: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Last geometry returned by any operation.
    #[must_use]
    pub fn geometry(&self) -> Option<SplitGeometry> {
        self.current
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    /// Strategy that produced the cached geometry.
    #[must_use]
    pub fn active_strategy(&self) -> Option<StrategyKind> {
        self.current.map(|g| g.strategy)
    }

    /// Whether the host reported a right pane at the last `init`.
    #[must_use]
    pub fn right_enabled(&self) -> bool {
        self.right_enabled
    }

    /// Read access to the Two-Pane strategy (remembered split, etc.).
    #[must_use]
    pub fn two_pane(&self) -> &TwoPaneStrategy {
        &self.two_pane
    }

    pub fn init(&mut self, width: f64, right_enabled: bool) -> Result<SplitGeometry, SplitLayoutError> {
        self.apply(SplitCommand::Init {
            width,
            right_enabled,
        })
    }

    pub fn on_resize(&mut self, width: f64) -> Result<SplitGeometry, SplitLayoutError> {
        self.apply(SplitCommand::Resize { width })
    }

    pub fn on_manual_resize(&mut self, delta: f64) -> Result<SplitGeometry, SplitLayoutError> {
        self.apply(SplitCommand::ManualResize { delta })
    }

    pub fn on_open_left(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        self.apply(SplitCommand::OpenLeft)
    }

    pub fn on_close_left(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        self.apply(SplitCommand::CloseLeft)
    }

    pub fn on_open_right(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        self.apply(SplitCommand::OpenRight)
    }

    pub fn on_close_right(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        self.apply(SplitCommand::CloseRight)
    }

    pub fn on_toggle_left(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        self.apply(SplitCommand::ToggleLeft)
    }

    pub fn on_toggle_right(&mut self) -> Result<SplitGeometry, SplitLayoutError> {
        self.apply(SplitCommand::ToggleRight)
    }

    /// Run one operation, caching and returning the produced geometry.
    pub fn apply(&mut self, command: SplitCommand) -> Result<SplitGeometry, SplitLayoutError> {
        let _span = debug_span!("split_layout.apply", operation = command.name()).entered();
        let result = self.apply_inner(command);
        if let Err(error) = &result {
            warn!(operation = command.name(), %error, "split layout operation rejected");
        }
        result
    }

    fn apply_inner(&mut self, command: SplitCommand) -> Result<SplitGeometry, SplitLayoutError> {
        let command = sanitize(command)?;
        let width = match command.width() {
            Some(width) => width,
            None => {
                self.current
                    .ok_or(SplitLayoutError::NotInitialized {
                        operation: command.name(),
                    })?
                    .width
            }
        };

        if let (SplitCommand::ManualResize { .. }, Some(current)) = (command, self.current)
            && !self.config.manual_resize
        {
            debug!("manual resize disabled; geometry unchanged");
            return Ok(current);
        }

        if let SplitCommand::Init { right_enabled, .. } = command {
            self.right_enabled = right_enabled;
        }

        let kind = self.config.strategy_for(width);
        if let Some(previous) = self.current
            && previous.strategy != kind
        {
            info!(
                from = %previous.strategy,
                to = %kind,
                width,
                "split layout breakpoint crossed"
            );
            let right_enabled = self.right_enabled;
            self.strategy_mut(kind).on_breakpoint_change(
                width,
                right_enabled,
                previous.left_open,
                previous.right_open,
            );
        }

        let geometry = self.strategy_mut(kind).apply(command)?;
        debug!(
            strategy = %geometry.strategy,
            width = geometry.width,
            left_open = geometry.left_open,
            right_open = geometry.right_open,
            left_width = geometry.left_width,
            right_width = geometry.right_width,
            "split layout geometry"
        );
        self.current = Some(geometry);
        Ok(geometry)
    }

    fn strategy_mut(&mut self, kind: StrategyKind) -> &mut dyn SplitStrategy {
        match kind {
            StrategyKind::OnePane => &mut self.one_pane,
            StrategyKind::TwoPane => &mut self.two_pane,
        }
    }
}

/// Reject non-finite input and clamp negative widths to zero.
fn sanitize(command: SplitCommand) -> Result<SplitCommand, SplitLayoutError> {
    let clamp_width = |width: f64| {
        if width.is_finite() {
            Ok(width.max(0.0))
        } else {
            Err(SplitLayoutError::InvalidWidth { width })
        }
    };
    Ok(match command {
        SplitCommand::Init {
            width,
            right_enabled,
        } => SplitCommand::Init {
            width: clamp_width(width)?,
            right_enabled,
        },
        SplitCommand::Resize { width } => SplitCommand::Resize {
            width: clamp_width(width)?,
        },
        SplitCommand::ManualResize { delta } if !delta.is_finite() => {
            return Err(SplitLayoutError::InvalidDelta { delta });
        }
        other => other,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn layout() -> SplitLayout {
        SplitLayout::new(SplitConfig::new(200.0, 200.0, 50.0)).expect("valid config")
    }

    #[test]
    fn new_rejects_invalid_config() {
        let err = SplitLayout::new(SplitConfig::default().with_init_left_width_perc(150.0));
        assert!(matches!(err, Err(SplitLayoutError::InvalidConfig { .. })));
    }

    #[test]
    fn init_wide_uses_two_pane() {
        let mut layout = layout();
        let g = layout.init(1000.0, true).unwrap();
        assert_eq!(g.strategy, StrategyKind::TwoPane);
        assert_eq!((g.left_width, g.right_width), (500.0, 500.0));
        assert_eq!(layout.geometry(), Some(g));
        assert!(layout.right_enabled());
    }

    #[test]
    fn init_narrow_uses_one_pane() {
        let mut layout = layout();
        let g = layout.init(399.0, false).unwrap();
        assert_eq!(g.strategy, StrategyKind::OnePane);
        assert_eq!((g.left_open, g.right_open), (true, false));
        assert_eq!(g.left_width, 399.0);
    }

    #[test]
    fn operations_before_init_fail_fast() {
        let mut layout = layout();
        assert_eq!(
            layout.on_manual_resize(10.0),
            Err(SplitLayoutError::NotInitialized {
                operation: "manual_resize"
            })
        );
        assert_eq!(
            layout.on_toggle_right(),
            Err(SplitLayoutError::NotInitialized {
                operation: "toggle_right"
            })
        );
        assert!(layout.on_resize(800.0).is_err());
        assert!(!layout.is_initialized());
    }

    #[test]
    fn shrinking_below_minimums_keeps_surviving_pane() {
        let mut layout = layout();
        layout.init(1000.0, false).unwrap();
        let g = layout.on_resize(300.0).unwrap();
        assert_eq!(g.strategy, StrategyKind::OnePane);
        assert_eq!((g.left_open, g.right_open), (true, false));
        assert_eq!((g.left_width, g.right_width), (300.0, 0.0));
    }

    #[test]
    fn shrinking_with_both_open_shows_right() {
        let mut layout = layout();
        layout.init(1000.0, true).unwrap();
        let g = layout.on_resize(350.0).unwrap();
        assert_eq!((g.left_open, g.right_open), (false, true));
        assert_eq!(g.right_width, 350.0);
    }

    #[test]
    fn split_survives_breakpoint_round_trip() {
        let mut layout = layout();
        layout.init(1000.0, true).unwrap();
        layout.on_manual_resize(100.0).unwrap(); // 600 / 400
        layout.on_resize(300.0).unwrap();
        let g = layout.on_resize(1000.0).unwrap();
        assert_eq!(g.strategy, StrategyKind::TwoPane);
        assert!(g.both_open());
        assert_eq!((g.left_width, g.right_width), (600.0, 400.0));
    }

    #[test]
    fn two_pane_arrangement_survives_narrow_tab_choice() {
        let mut layout = layout();
        layout.init(1000.0, true).unwrap();
        layout.on_resize(300.0).unwrap();
        layout.on_open_left().unwrap();
        let g = layout.on_resize(1000.0).unwrap();
        assert_eq!(layout.active_strategy(), Some(StrategyKind::TwoPane));
        assert!(g.both_open());
        assert_eq!((g.left_width, g.right_width), (500.0, 500.0));
    }

    #[test]
    fn first_two_pane_entry_takes_one_pane_tab_choice() {
        let mut layout = layout();
        layout.init(300.0, true).unwrap();
        assert_eq!(layout.active_strategy(), Some(StrategyKind::OnePane));
        layout.on_open_left().unwrap();
        let g = layout.on_resize(1000.0).unwrap();
        assert_eq!((g.left_open, g.right_open), (true, false));
        assert_eq!(g.left_width, 1000.0);
    }

    #[test]
    fn manual_resize_disabled_is_inert() {
        let mut layout =
            SplitLayout::new(SplitConfig::new(200.0, 200.0, 50.0).with_manual_resize(false))
                .expect("valid config");
        assert!(layout.on_manual_resize(10.0).is_err());
        let g = layout.init(1000.0, true).unwrap();
        assert_eq!(layout.on_manual_resize(-450.0).unwrap(), g);
    }

    #[test]
    fn non_finite_input_rejected_and_state_kept() {
        let mut layout = layout();
        let g = layout.init(1000.0, true).unwrap();
        assert!(matches!(
            layout.on_resize(f64::NAN),
            Err(SplitLayoutError::InvalidWidth { .. })
        ));
        assert!(matches!(
            layout.on_manual_resize(f64::INFINITY),
            Err(SplitLayoutError::InvalidDelta { .. })
        ));
        assert_eq!(layout.geometry(), Some(g));
    }

    #[test]
    fn negative_width_clamps_to_zero() {
        let mut layout = layout();
        let g = layout.init(-50.0, false).unwrap();
        assert_eq!(g.width, 0.0);
        assert_eq!(g.strategy, StrategyKind::OnePane);
        assert_eq!(g.left_width, 0.0);
        assert!(g.left_open);
    }

    #[traced_test]
    #[test]
    fn breakpoint_crossing_is_logged() {
        let mut layout = layout();
        layout.init(1000.0, true).unwrap();
        layout.on_resize(300.0).unwrap();
        assert!(logs_contain("split layout breakpoint crossed"));
    }

    #[traced_test]
    #[test]
    fn rejected_operation_is_logged() {
        let mut layout = layout();
        let _ = layout.on_open_left();
        assert!(logs_contain("split layout operation rejected"));
    }
}
