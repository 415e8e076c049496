#![forbid(unsafe_code)]

//! The interface shared by both breakpoint strategies.
//!
//! Each strategy owns its own mutable state (open flags, last width, last
//! emitted geometry) and keeps it for the lifetime of the coordinator, even
//! while bypassed. The coordinator dispatches to exactly one of them per
//! operation.
//!
//! # Failure Modes
//!
//! Every state-dependent operation returns
//! [`SplitLayoutError::NotInitialized`] until `init` or
//! `on_breakpoint_change` has produced a first geometry.

use crate::{SplitCommand, SplitGeometry, SplitLayoutError, StrategyKind};

/// Geometry computation for one breakpoint regime.
pub trait SplitStrategy {
    /// Tag stamped on every geometry this strategy emits.
    fn kind(&self) -> StrategyKind;

    /// Last geometry this strategy emitted.
    fn previous(&self) -> Option<&SplitGeometry>;

    /// Seed state for a container and return the first geometry.
    fn init(&mut self, width: f64, right_enabled: bool) -> SplitGeometry;

    /// Called when the coordinator switches to this strategy, with the
    /// outgoing strategy's last open flags.
    fn on_breakpoint_change(
        &mut self,
        width: f64,
        right_enabled: bool,
        left_open: bool,
        right_open: bool,
    );

    fn on_resize(&mut self, width: f64) -> Result<SplitGeometry, SplitLayoutError>;

    fn on_manual_resize(&mut self, delta: f64) -> Result<SplitGeometry, SplitLayoutError>;

    fn on_open_left(&mut self) -> Result<SplitGeometry, SplitLayoutError>;

    fn on_close_left(&mut self) -> Result<SplitGeometry, SplitLayoutError>;

    fn on_open_right(&mut self) -> Result<SplitGeometry, SplitLayoutError>;

    fn on_close_right(&mut self) -> Result<SplitGeometry, SplitLayoutError>;

    fn on_toggle_left(&mut self) -> Result<SplitGeometry, SplitLayoutError>;

    fn on_toggle_right(&mut self) -> Result<SplitGeometry, SplitLayoutError>;

    /// Run `command` against this strategy.
    fn apply(&mut self, command: SplitCommand) -> Result<SplitGeometry, SplitLayoutError> {
        match command {
            SplitCommand::Init {
                width,
                right_enabled,
            } => Ok(self.init(width, right_enabled)),
            SplitCommand::Resize { width } => self.on_resize(width),
            SplitCommand::ManualResize { delta } => self.on_manual_resize(delta),
            SplitCommand::OpenLeft => self.on_open_left(),
            SplitCommand::CloseLeft => self.on_close_left(),
            SplitCommand::OpenRight => self.on_open_right(),
            SplitCommand::CloseRight => self.on_close_right(),
            SplitCommand::ToggleLeft => self.on_toggle_left(),
            SplitCommand::ToggleRight => self.on_toggle_right(),
        }
    }
}

/// Fetch the last emitted geometry or fail with `NotInitialized`.
pub(crate) fn require_previous(
    previous: Option<&SplitGeometry>,
    operation: &'static str,
) -> Result<SplitGeometry, SplitLayoutError> {
    previous
        .copied()
        .ok_or(SplitLayoutError::NotInitialized { operation })
}

/// Merge a newly emitted right-open flag into the seeded flag.
///
/// The flag stays undetermined until the right pane is shown for the first
/// time, so a later `init` with the right pane enabled can still seed it.
pub(crate) fn merge_right_open(seeded: Option<bool>, right_open: bool) -> Option<bool> {
    match (seeded, right_open) {
        (None, false) => None,
        _ => Some(right_open),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_previous_reports_operation() {
        assert_eq!(
            require_previous(None, "toggle_left"),
            Err(SplitLayoutError::NotInitialized {
                operation: "toggle_left"
            })
        );
    }

    #[test]
    fn right_open_stays_undetermined_until_shown() {
        assert_eq!(merge_right_open(None, false), None);
        assert_eq!(merge_right_open(None, true), Some(true));
        assert_eq!(merge_right_open(Some(true), false), Some(false));
    }
}
