// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast scheduling operations.
//!
//! Measures the performance of:
//! - Show/expire churn through the display slot
//! - Preemption and resumption cycles
//! - Queue overflow under sustained submission

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toasts::toasts::{QueueCapacity, Scheduler, SchedulerOptions, Toast};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark a full show-then-expire cycle through the slot.
fn bench_show_expire_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler_churn");

    group.bench_function("show_expire_cycle", |b| {
        b.iter(|| {
            let mut scheduler = Scheduler::new();
            let mut now = Instant::now();
            for i in 0..64 {
                scheduler.show_at(Toast::new(format!("toast {i}")), now);
                now += Duration::from_secs(5);
                scheduler.tick_at(now);
            }
            black_box(&scheduler);
        });
    });

    group.finish();
}

/// Benchmark preemption and resumption cycles.
///
/// Each iteration interrupts a long-running toast with an urgent one,
/// lets the urgent one expire, and resumes the original.
fn bench_preempt_resume(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler_churn");

    group.bench_function("preempt_resume", |b| {
        b.iter(|| {
            let mut scheduler = Scheduler::new();
            let t0 = Instant::now();
            scheduler.show_at(Toast::new("base").with_duration(Duration::from_secs(60)), t0);

            let mut now = t0;
            for i in 0..32 {
                now += Duration::from_secs(1);
                scheduler.show_at(
                    Toast::new(format!("urgent {i}"))
                        .high_priority()
                        .with_duration(Duration::from_secs(1)),
                    now,
                );
                now += Duration::from_secs(1);
                scheduler.tick_at(now);
            }
            black_box(&scheduler);
        });
    });

    group.finish();
}

/// Benchmark sustained submission against a small queue.
fn bench_queue_overflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler_churn");

    group.bench_function("queue_overflow", |b| {
        b.iter(|| {
            let mut scheduler = Scheduler::with_options(SchedulerOptions::new(
                QueueCapacity::new(5),
                false,
            ));
            let t0 = Instant::now();
            for i in 0..128 {
                scheduler.show_at(Toast::new(format!("toast {i}")), t0);
            }
            black_box(&scheduler);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_show_expire_cycle,
    bench_preempt_resume,
    bench_queue_overflow
);
criterion_main!(benches);
