#![no_main]

use libfuzzer_sys::fuzz_target;
use splitpane_harness::{ReplayOptions, ReplayScript, replay, write_jsonl};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }
    // Arbitrary scripts must either fail to parse or replay without panicking.
    let Ok(script) = ReplayScript::from_json(text) else {
        return;
    };
    let Ok(report) = replay(&script, ReplayOptions { check_invariants: true }) else {
        return;
    };
    assert_eq!(report.records.len(), script.steps.len());
    let mut out = Vec::new();
    let _ = write_jsonl(&report, &mut out);
});
