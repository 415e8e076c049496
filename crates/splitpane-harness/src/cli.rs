use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::error::{HarnessError, Result};
use crate::logging::init_logging;
use crate::replay::{ReplayOptions, ReplayReport, replay, write_jsonl};
use crate::script::ReplayScript;

#[derive(Debug, Parser)]
#[command(
    name = "splitpane-replay",
    about = "Replay split layout scenarios and verify their geometry traces",
    version
)]
pub struct Cli {
    /// Emit logs as JSON on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay a scenario and write its JSONL trace.
    Replay(ReplayArgs),

    /// Print the trace checksum of a scenario.
    Checksum(ChecksumArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// Scenario script (JSON).
    pub script: PathBuf,

    /// Write the trace here instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Fail unless the trace checksum equals this value.
    #[arg(long)]
    pub expect: Option<String>,

    /// Fail if any emitted geometry breaks the layout invariants.
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ChecksumArgs {
    /// Scenario script (JSON).
    pub script: PathBuf,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json)?;
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Replay(args) => run_replay(&args).map(|_| ()),
        Commands::Checksum(args) => {
            let script = ReplayScript::load(&args.script)?;
            let report = replay(&script, ReplayOptions::default())?;
            println!("{}", report.summary.checksum);
            Ok(())
        }
    }
}

/// Replay, write the trace, then enforce `--check` and `--expect`.
pub fn run_replay(args: &ReplayArgs) -> Result<ReplayReport> {
    let script = ReplayScript::load(&args.script)?;
    let report = replay(
        &script,
        ReplayOptions {
            check_invariants: args.check,
        },
    )?;

    match &args.output {
        Some(path) => write_jsonl(&report, BufWriter::new(File::create(path)?))?,
        None => write_jsonl(&report, io::stdout().lock())?,
    }
    info!(
        steps = report.summary.steps,
        errors = report.summary.errors,
        checksum = %report.summary.checksum,
        "replay finished"
    );

    if let Some(record) = report.first_violation() {
        return Err(HarnessError::InvariantViolations {
            count: report.summary.violations,
            first_index: record.index,
            message: record.violation.clone().unwrap_or_default(),
        });
    }
    if let Some(expected) = &args.expect
        && *expected != report.summary.checksum
    {
        return Err(HarnessError::ChecksumMismatch {
            expected: expected.clone(),
            actual: report.summary.checksum.clone(),
        });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands};

    #[test]
    fn replay_flags_parse() {
        let cli = Cli::try_parse_from([
            "splitpane-replay",
            "--log-json",
            "replay",
            "scenario.json",
            "-o",
            "trace.jsonl",
            "--expect",
            "blake3:00",
            "--check",
        ])
        .expect("parses");
        assert!(cli.log_json);
        match cli.command {
            Commands::Replay(args) => {
                assert_eq!(args.script.to_str(), Some("scenario.json"));
                assert_eq!(args.output.unwrap().to_str(), Some("trace.jsonl"));
                assert_eq!(args.expect.as_deref(), Some("blake3:00"));
                assert!(args.check);
            }
            Commands::Checksum(_) => panic!("expected replay"),
        }
    }

    #[test]
    fn checksum_requires_script() {
        assert!(Cli::try_parse_from(["splitpane-replay", "checksum"]).is_err());
    }
}
