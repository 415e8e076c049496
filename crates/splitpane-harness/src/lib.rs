#![forbid(unsafe_code)]

//! Scenario replay for `splitpane-layout`.
//!
//! A scenario is a JSON [`ReplayScript`]: a layout config and a list of
//! commands. [`replay`] feeds it through a fresh [`splitpane_layout::SplitLayout`]
//! and produces a JSONL trace with a BLAKE3 checksum, so geometry changes
//! show up as checksum drift in CI.

pub mod cli;
pub mod error;
pub mod logging;
pub mod replay;
pub mod script;

pub use cli::run_from_env;
pub use error::{HarnessError, Result};
pub use replay::{
    ReplayLine, ReplayOptions, ReplayRecord, ReplayReport, ReplaySummary, compute_checksum,
    replay, write_jsonl,
};
pub use script::ReplayScript;
