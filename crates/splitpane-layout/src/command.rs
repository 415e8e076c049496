#![forbid(unsafe_code)]

//! Serializable form of the public layout operations.
//!
//! The coordinator, the registry and the replay harness all speak
//! [`SplitCommand`]; the typed methods on [`crate::SplitLayout`] are thin
//! wrappers that build one and call `apply`.

use serde::{Deserialize, Serialize};

/// One layout operation with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SplitCommand {
    /// Establish the first geometry for a container.
    Init { width: f64, right_enabled: bool },
    /// The container changed size.
    Resize { width: f64 },
    /// The divider moved by `delta` pixels (positive grows the left pane).
    ManualResize { delta: f64 },
    OpenLeft,
    CloseLeft,
    OpenRight,
    CloseRight,
    ToggleLeft,
    ToggleRight,
}

impl SplitCommand {
    /// Stable operation name used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::Resize { .. } => "resize",
            Self::ManualResize { .. } => "manual_resize",
            Self::OpenLeft => "open_left",
            Self::CloseLeft => "close_left",
            Self::OpenRight => "open_right",
            Self::CloseRight => "close_right",
            Self::ToggleLeft => "toggle_left",
            Self::ToggleRight => "toggle_right",
        }
    }

    /// Container width carried by the command, if any.
    #[must_use]
    pub const fn width(&self) -> Option<f64> {
        match self {
            Self::Init { width, .. } | Self::Resize { width } => Some(*width),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_json_shape() {
        let cmd: SplitCommand =
            serde_json::from_str(r#"{"op":"manual_resize","delta":-450}"#).expect("parse");
        assert_eq!(cmd, SplitCommand::ManualResize { delta: -450.0 });

        let json = serde_json::to_string(&SplitCommand::ToggleRight).expect("serialize");
        assert_eq!(json, r#"{"op":"toggle_right"}"#);
    }

    #[test]
    fn names_match_serde_tags() {
        let cmd = SplitCommand::Init {
            width: 10.0,
            right_enabled: true,
        };
        let json = serde_json::to_value(cmd).expect("serialize");
        assert_eq!(json["op"], cmd.name());
    }

    #[test]
    fn width_only_for_sizing_commands() {
        assert_eq!(SplitCommand::Resize { width: 640.0 }.width(), Some(640.0));
        assert_eq!(SplitCommand::OpenLeft.width(), None);
    }
}
