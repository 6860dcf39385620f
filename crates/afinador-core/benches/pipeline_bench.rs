//! Criterion benchmarks for the pitch detection pipeline
//!
//! Run with: cargo bench -p afinador-core
#![allow(missing_docs)]

use afinador_core::{TunerEngine, TunerParams, goertzel};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const SAMPLE_RATE: f32 = 44100.0;
const FRAME_LENGTHS: &[usize] = &[1024, 2048, 4096];

fn sine_frame(freq_hz: f32, len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * freq_hz * t).sin() * 0.5
        })
        .collect()
}

fn bench_goertzel(c: &mut Criterion) {
    let mut group = c.benchmark_group("Goertzel");

    for &len in FRAME_LENGTHS {
        let frame = sine_frame(110.0, len);
        group.bench_with_input(BenchmarkId::new("magnitude", len), &len, |b, _| {
            b.iter(|| {
                black_box(goertzel::magnitude(
                    black_box(&frame),
                    black_box(110.0),
                    SAMPLE_RATE,
                ))
            });
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("TunerEngine");

    for &len in FRAME_LENGTHS {
        let params = TunerParams {
            frame_len: len,
            ..TunerParams::default()
        };
        let frame = sine_frame(110.0, len);

        group.bench_with_input(BenchmarkId::new("process_frame", len), &len, |b, _| {
            let mut engine = TunerEngine::new(params.clone());
            b.iter(|| black_box(engine.process_frame(black_box(&frame))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_goertzel, bench_full_pipeline);
criterion_main!(benches);
