// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stride_core::stepper::{step_difference, step_sum};

const STEP_COUNTS: [u64; 3] = [100, 10_000, 1_000_000];

fn bench_step_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_sum");
    for steps in STEP_COUNTS {
        group.bench_with_input(BenchmarkId::new("i64", steps), &steps, |b, &steps| {
            b.iter(|| step_sum(black_box(0i64), black_box(3), steps))
        });
        group.bench_with_input(BenchmarkId::new("f64", steps), &steps, |b, &steps| {
            b.iter(|| step_sum(black_box(0.0f64), black_box(3.0), steps))
        });
    }
    group.finish();
}

fn bench_step_difference(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_difference");
    for steps in STEP_COUNTS {
        group.bench_with_input(BenchmarkId::new("i64", steps), &steps, |b, &steps| {
            b.iter(|| step_difference(black_box(0i64), black_box(3), steps))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step_sum, bench_step_difference);
criterion_main!(benches);
