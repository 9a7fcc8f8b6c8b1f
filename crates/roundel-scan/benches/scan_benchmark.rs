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
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use roundel_core::geometry::Point;
use roundel_model::alphabet::LabelAlphabet;
use roundel_model::index::LabelIndex;
use roundel_model::point_set::{PointSet, PointSetBuilder};
use roundel_scan::monitor::no_op::NoOperationMonitor;
use roundel_scan::ranking::RankedSequence;
use roundel_scan::scanner::BoundaryScanner;
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_points(rng: &mut ChaCha8Rng, size: usize, alphabet: LabelAlphabet) -> PointSet<i64> {
    let bound = (size as i64).max(16);
    let num_labels = alphabet.len();
    let mut builder = PointSetBuilder::with_capacity(alphabet, size);
    for i in 0..size {
        let x = rng.random_range(-bound..bound);
        let y = rng.random_range(-bound..bound);
        let label = if num_labels >= size {
            i
        } else {
            rng.random_range(0..num_labels)
        };
        builder.add_point(Point::new(x, y), LabelIndex::new(label));
    }
    builder.build()
}

/// One symbol per point, drawn from the CJK block so the scan never collides.
fn distinct_alphabet(size: usize) -> LabelAlphabet {
    let symbols = (0x4E00u32..)
        .filter_map(char::from_u32)
        .take(size);
    LabelAlphabet::new(symbols).expect("CJK symbols are distinct and unreserved")
}

fn bench_letters(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let mut group = c.benchmark_group("scan_letters");

    for size in SIZES {
        let points = random_points(&mut rng, size, LabelAlphabet::letters(26));
        let mut scanner = BoundaryScanner::preallocated(size, 26);
        let mut monitor = NoOperationMonitor::new();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("scan", size), &points, |b, points| {
            b.iter(|| black_box(scanner.scan(black_box(points), &mut monitor)))
        });
    }
    group.finish();
}

fn bench_distinct(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(0xd15c);
    let mut group = c.benchmark_group("scan_distinct");

    for size in SIZES {
        let points = random_points(&mut rng, size, distinct_alphabet(size));
        assert!(points.has_distinct_labels());

        let mut scanner = BoundaryScanner::preallocated(size, size);
        let mut monitor = NoOperationMonitor::new();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("scan", size), &points, |b, points| {
            b.iter(|| black_box(scanner.scan(black_box(points), &mut monitor)))
        });

        // Full pass without the ranking cost.
        let ranked = RankedSequence::from_points(&points);
        group.bench_with_input(BenchmarkId::new("scan_ranked", size), &points, |b, points| {
            b.iter(|| black_box(scanner.scan_ranked(black_box(points), &ranked, &mut monitor)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_letters, bench_distinct);
criterion_main!(benches);
