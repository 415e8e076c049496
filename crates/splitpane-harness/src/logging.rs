#![forbid(unsafe_code)]

//! Subscriber setup for the replay binary.
//!
//! Filtering follows `RUST_LOG` and defaults to `warn`. Output goes to
//! stderr so JSONL traces on stdout stay machine-readable.

use tracing_subscriber::EnvFilter;

use crate::error::{HarnessError, Result};

const DEFAULT_FILTER: &str = "warn";

pub fn init_logging(json: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| HarnessError::Logging(err.to_string()))
}
