#![forbid(unsafe_code)]

//! Deterministic replay of a [`ReplayScript`] with a JSONL trace.
//!
//! # JSONL Schema
//!
//! ```json
//! {"event":"step","index":0,"operation":"init","command":{"op":"init","width":1000.0,"right_enabled":true},"geometry":{...}}
//! {"event":"step","index":1,"operation":"resize","command":{...},"error":"..."}
//! {"event":"summary","name":"demo","steps":2,"errors":1,"violations":0,"checksum":"blake3:..."}
//! ```
//!
//! # Invariants
//!
//! - A rejected command is recorded on its step and replay continues; the
//!   layout keeps its previous geometry.
//! - The checksum covers the step lines only, in order, so two runs of the
//!   same script on the same build always agree.

use std::io::Write;

use serde::{Deserialize, Serialize};
use splitpane_layout::{SplitCommand, SplitGeometry, SplitLayout};
use tracing::{debug, info_span, warn};

use crate::error::Result;
use crate::script::ReplayScript;

const CHECKSUM_PREFIX: &str = "blake3:";

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    /// Check every emitted geometry against the layout invariants.
    pub check_invariants: bool,
}

/// Outcome of a single scripted command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayRecord {
    pub index: usize,
    pub operation: String,
    pub command: SplitCommand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<SplitGeometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaySummary {
    pub name: String,
    pub steps: usize,
    pub errors: usize,
    pub violations: usize,
    pub checksum: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReplayLine {
    Step(ReplayRecord),
    Summary(ReplaySummary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub records: Vec<ReplayRecord>,
    pub summary: ReplaySummary,
}

impl ReplayReport {
    /// First record carrying an invariant violation, if any.
    #[must_use]
    pub fn first_violation(&self) -> Option<&ReplayRecord> {
        self.records.iter().find(|record| record.violation.is_some())
    }

    /// Geometry after the last accepted command.
    #[must_use]
    pub fn final_geometry(&self) -> Option<SplitGeometry> {
        self.records.iter().rev().find_map(|record| record.geometry)
    }
}

/// Run every step of `script` through a fresh layout.
pub fn replay(script: &ReplayScript, options: ReplayOptions) -> Result<ReplayReport> {
    let _span = info_span!("splitpane.replay", name = %script.name, steps = script.steps.len())
        .entered();
    let mut layout = SplitLayout::new(script.config)?;
    let min_left = script.config.min_left_width;
    let min_right = script.config.min_right_width;

    let mut records = Vec::with_capacity(script.steps.len());
    let mut errors = 0;
    let mut violations = 0;
    for (index, command) in script.steps.iter().copied().enumerate() {
        let mut record = ReplayRecord {
            index,
            operation: command.name().to_owned(),
            command,
            geometry: None,
            error: None,
            violation: None,
        };
        match layout.apply(command) {
            Ok(geometry) => {
                if options.check_invariants
                    && let Err(violation) = geometry.check_invariants(min_left, min_right)
                {
                    warn!(index, %violation, "geometry invariant violated");
                    violations += 1;
                    record.violation = Some(violation.to_string());
                }
                record.geometry = Some(geometry);
            }
            Err(err) => {
                debug!(index, error = %err, "step rejected");
                errors += 1;
                record.error = Some(err.to_string());
            }
        }
        records.push(record);
    }

    let checksum = compute_checksum(&records)?;
    let summary = ReplaySummary {
        name: script.name.clone(),
        steps: records.len(),
        errors,
        violations,
        checksum,
    };
    Ok(ReplayReport { records, summary })
}

/// BLAKE3 digest over the serialized step lines.
pub fn compute_checksum(records: &[ReplayRecord]) -> Result<String> {
    let mut hasher = blake3::Hasher::new();
    for record in records {
        hasher.update(&serde_json::to_vec(record)?);
        hasher.update(b"\n");
    }
    Ok(format!("{CHECKSUM_PREFIX}{}", hasher.finalize().to_hex()))
}

/// Write the report as JSONL: one line per step, then the summary.
pub fn write_jsonl<W: Write>(report: &ReplayReport, mut out: W) -> Result<()> {
    for record in &report.records {
        serde_json::to_writer(&mut out, &ReplayLine::Step(record.clone()))?;
        out.write_all(b"\n")?;
    }
    serde_json::to_writer(&mut out, &ReplayLine::Summary(report.summary.clone()))?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
