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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use intmath::{IntMath, MachineInt, Operand, Operation, arith};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const PAIRS: usize = 4096;

fn random_pairs(seed: u64) -> Vec<(i64, i64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..PAIRS)
        .map(|_| (rng.random::<i64>(), rng.random::<i64>()))
        .collect()
}

fn fold_typed<T: MachineInt>(pairs: &[(T, T)], f: fn(T, T) -> T) -> T {
    pairs
        .iter()
        .fold(T::ZERO, |acc, &(x, y)| arith::add(acc, f(x, y)))
}

fn bench_typed_core(c: &mut Criterion) {
    let pairs = random_pairs(42);
    let mut group = c.benchmark_group("typed_core");
    group.throughput(Throughput::Elements(PAIRS as u64));

    let ops: [(&str, fn(i64, i64) -> i64); 3] = [
        ("add", arith::add),
        ("subtract", arith::subtract),
        ("multiply", arith::multiply),
    ];
    for (name, f) in ops {
        group.bench_with_input(BenchmarkId::new(name, PAIRS), &pairs, |b, pairs| {
            b.iter(|| fold_typed(black_box(pairs), f))
        });
    }
    group.bench_with_input(BenchmarkId::new("divide", PAIRS), &pairs, |b, pairs| {
        b.iter(|| {
            black_box(pairs)
                .iter()
                .filter_map(|&(x, y)| arith::divide(x, y).ok())
                .fold(0i64, arith::add)
        })
    });
    group.finish();
}

fn bench_guarded(c: &mut Criterion) {
    let operands: Vec<[Operand; 2]> = random_pairs(7)
        .into_iter()
        .map(|(x, y)| [Operand::from(x), Operand::from(y)])
        .collect();
    let mut group = c.benchmark_group("guarded_apply");
    group.throughput(Throughput::Elements(PAIRS as u64));

    for op in [Operation::Add, Operation::Multiply, Operation::Divide] {
        group.bench_with_input(BenchmarkId::new(op.name(), PAIRS), &operands, |b, ops| {
            b.iter(|| {
                black_box(ops)
                    .iter()
                    .filter_map(|pair| IntMath::<i64>::apply(op, pair).ok())
                    .fold(0i64, arith::add)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_typed_core, bench_guarded);
criterion_main!(benches);
