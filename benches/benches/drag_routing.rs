// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use understory_draggable::DragHost;

fn mounted(len: u32) -> DragHost<u32, ()> {
    let mut host = DragHost::new();
    for id in 0..len {
        host.mount(id, ());
    }
    host
}

fn bench_move_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("draggable/pointer_move");

    // Moves are routed through surface listeners, so cost should track the
    // number of active drags rather than the number of mounted elements.
    for len in [16_u32, 256, 4_096] {
        group.throughput(Throughput::Elements(64));
        group.bench_with_input(BenchmarkId::new("one_active", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut host = mounted(len);
                    host.pointer_down(&(len / 2), Point::ORIGIN);
                    host
                },
                |mut host| {
                    for i in 0..64 {
                        let x = f64::from(i);
                        black_box(host.pointer_move(Point::new(x, x)));
                    }
                    black_box(host);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_gesture(c: &mut Criterion) {
    c.bench_function("draggable/down_move_up", |b| {
        let mut host = mounted(1);
        b.iter(|| {
            host.pointer_down(&0, Point::new(10.0, 10.0));
            black_box(host.pointer_move(Point::new(15.0, 20.0)));
            black_box(host.pointer_up());
        });
    });
}

criterion_group!(benches, bench_move_routing, bench_gesture);
criterion_main!(benches);
