use criterion::{black_box, criterion_group, criterion_main, Criterion};

use polysweep::{find_intersections, generators::checkerboard_segments, sweep, Segments};

fn just_the_sweep(c: &mut Criterion) {
    let segs: Segments = checkerboard_segments(10).into_iter().collect();

    c.bench_function("just the sweep", |b| {
        b.iter(|| sweep::sweep(black_box(&segs)))
    });
}

fn from_slice(c: &mut Criterion) {
    let segs = checkerboard_segments(10);

    c.bench_function("find intersections", |b| {
        b.iter(|| find_intersections(black_box(&segs)))
    });
}

criterion_group!(benches, just_the_sweep, from_slice);
criterion_main!(benches);
