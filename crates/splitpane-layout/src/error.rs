#![forbid(unsafe_code)]

//! Errors reported by the split layout engine.

use std::fmt;

/// Failure of a layout operation or configuration check.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitLayoutError {
    /// A state-dependent operation ran before `init` established geometry.
    NotInitialized { operation: &'static str },
    /// Container width was NaN or infinite.
    InvalidWidth { width: f64 },
    /// Divider drag delta was NaN or infinite.
    InvalidDelta { delta: f64 },
    /// A configuration field is out of range.
    InvalidConfig { field: &'static str, value: f64 },
    /// No layout is registered under this id.
    UnknownLayout { id: String },
    /// A layout is already registered under this id.
    DuplicateLayout { id: String },
}

impl fmt::Display for SplitLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized { operation } => {
                write!(f, "split layout operation `{operation}` called before init")
            }
            Self::InvalidWidth { width } => {
                write!(f, "container width must be finite (got {width})")
            }
            Self::InvalidDelta { delta } => {
                write!(f, "manual resize delta must be finite (got {delta})")
            }
            Self::InvalidConfig { field, value } => {
                write!(f, "invalid split layout config: {field} = {value}")
            }
            Self::UnknownLayout { id } => write!(f, "no split layout registered as `{id}`"),
            Self::DuplicateLayout { id } => {
                write!(f, "a split layout is already registered as `{id}`")
            }
        }
    }
}

impl std::error::Error for SplitLayoutError {}
