//! Benchmarks for split layout operations.
//!
//! Run with: cargo bench -p splitpane-layout

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use splitpane_layout::{SplitCommand, SplitConfig, SplitLayout};
use std::hint::black_box;

fn initialized() -> SplitLayout {
    let mut layout = SplitLayout::new(SplitConfig::new(200.0, 200.0, 30.0)).expect("config");
    layout.init(1280.0, true).expect("init");
    layout
}

fn bench_resize_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("split/resize_sweep");

    for steps in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("widths", steps), &steps, |b, &steps| {
            b.iter_batched(
                initialized,
                |mut layout| {
                    for i in 0..steps {
                        // Oscillate across the one/two pane breakpoint.
                        let width = 200.0 + (i % 160) as f64 * 10.0;
                        black_box(layout.on_resize(width).expect("finite width"));
                    }
                    layout
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    c.bench_function("split/manual_resize", |b| {
        b.iter_batched(
            initialized,
            |mut layout| {
                for delta in [-3.0, 5.0, -8.0, 13.0, -21.0, 34.0] {
                    black_box(layout.on_manual_resize(delta).expect("finite delta"));
                }
                layout
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_command_mix(c: &mut Criterion) {
    let commands = [
        SplitCommand::ToggleLeft,
        SplitCommand::ToggleLeft,
        SplitCommand::CloseRight,
        SplitCommand::OpenRight,
        SplitCommand::ManualResize { delta: 40.0 },
        SplitCommand::Resize { width: 900.0 },
        SplitCommand::Resize { width: 300.0 },
        SplitCommand::Resize { width: 1280.0 },
    ];
    c.bench_function("split/command_mix", |b| {
        b.iter_batched(
            initialized,
            |mut layout| {
                for command in commands {
                    black_box(layout.apply(command).expect("initialized"));
                }
                layout
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_resize_sweep, bench_drag, bench_command_mix);
criterion_main!(benches);
