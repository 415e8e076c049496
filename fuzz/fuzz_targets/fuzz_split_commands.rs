#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use splitpane_layout::{DividerDrag, SplitCommand, SplitConfig, SplitLayout};

#[derive(Debug, Arbitrary)]
enum Op {
    Init { width: u16, right_enabled: bool },
    Resize { width: u16 },
    ManualResize { delta: i16 },
    OpenLeft,
    CloseLeft,
    OpenRight,
    CloseRight,
    ToggleLeft,
    ToggleRight,
    Press,
    Move { movement_x: i16 },
    Release,
}

#[derive(Debug, Arbitrary)]
struct Input {
    min_left: u16,
    min_right: u16,
    perc: u8,
    manual_resize: bool,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let config = SplitConfig::new(
        f64::from(input.min_left % 1000),
        f64::from(input.min_right % 1000),
        f64::from(input.perc % 101),
    )
    .with_manual_resize(input.manual_resize);
    let Ok(mut layout) = SplitLayout::new(config) else {
        return;
    };
    let mut drag = DividerDrag::new();

    for op in input.ops.into_iter().take(256) {
        let command = match op {
            Op::Init { width, right_enabled } => SplitCommand::Init {
                width: f64::from(width),
                right_enabled,
            },
            Op::Resize { width } => SplitCommand::Resize {
                width: f64::from(width),
            },
            Op::ManualResize { delta } => SplitCommand::ManualResize {
                delta: f64::from(delta),
            },
            Op::OpenLeft => SplitCommand::OpenLeft,
            Op::CloseLeft => SplitCommand::CloseLeft,
            Op::OpenRight => SplitCommand::OpenRight,
            Op::CloseRight => SplitCommand::CloseRight,
            Op::ToggleLeft => SplitCommand::ToggleLeft,
            Op::ToggleRight => SplitCommand::ToggleRight,
            Op::Press => {
                let _ = drag.press(&layout);
                continue;
            }
            Op::Move { movement_x } => {
                let _ = drag.pointer_move(&mut layout, f64::from(movement_x));
                continue;
            }
            Op::Release => {
                let _ = drag.release();
                continue;
            }
        };

        // Only pre-init operations may fail on finite input.
        let initialized = layout.is_initialized();
        match layout.apply(command) {
            Ok(geometry) => {
                assert_eq!(geometry.strategy, config.strategy_for(geometry.width));
                if let Err(violation) =
                    geometry.check_invariants(config.min_left_width, config.min_right_width)
                {
                    panic!("{violation} after {command:?}: {geometry:?}");
                }
            }
            Err(err) => assert!(!initialized, "{command:?} rejected after init: {err}"),
        }
    }
});
