// Copyright 2025 the Rcam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rcam_pubsub::{Callback, Dispatcher};
use rcam_widgets::{Hamburger, InputEvent};

type Counter = Cell<u64>;

fn counting() -> Callback<u64, Counter> {
    Callback::new(|c: &Counter, n: &u64| {
        c.set(c.get().wrapping_add(*n));
        Ok(())
    })
}

fn fanout(n: usize) -> (Dispatcher<u64, Counter>, Rc<Counter>) {
    let d = Dispatcher::new();
    let counter = Rc::new(Counter::new(0));
    for _ in 0..n {
        d.subscribe("tick", &counting(), &counter);
    }
    (d, counter)
}

fn bench_publish(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish_fanout");
    for n in [1_usize, 16, 256] {
        let (d, counter) = fanout(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("subscribers_{n}"), |b| {
            b.iter(|| {
                d.publish(black_box("tick"), black_box(&1)).unwrap();
            });
        });
        black_box(counter.get());
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    // Subscribe then unsubscribe every handle on a topic that already has neighbors.
    c.bench_function("subscribe_unsubscribe_64", |b| {
        b.iter_batched(
            || {
                let (d, counter) = fanout(64);
                let handles: Vec<_> = (0..64).map(|_| counting()).collect();
                (d, counter, handles)
            },
            |(d, counter, handles)| {
                for h in &handles {
                    d.subscribe("tick", h, &counter);
                }
                for h in &handles {
                    d.unsubscribe("tick", h, &counter);
                }
                black_box(d.subscriber_count("tick"));
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_widget_tap(c: &mut Criterion) {
    c.bench_function("hamburger_tap", |b| {
        let mut button = Hamburger::default();
        b.iter(|| {
            button.activate_input();
            button.handle_event(InputEvent::PointerStart).unwrap();
            black_box(button.handle_event(InputEvent::PointerEnd).unwrap());
        });
    });
}

criterion_group!(benches, bench_publish, bench_churn, bench_widget_tap);
criterion_main!(benches);
