//! # Msg-Stream Benchmarks
//!
//! | Operation | Expected cost |
//! |-----------|---------------|
//! | `append` | O(1) amortized |
//! | `clear` | O(n) drop |
//! | `read_all` | O(n) copy |
//! | `read_range` | O(k) copy of the section |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use msg_stream::{BoundedMessageBuffer, MessageBufferApi, MessageBufferService, MAX_MESSAGE_LEN};
use rand::Rng;
use std::time::Duration;

const FILL_SIZES: [usize; 4] = [16, 64, 256, 1024];

fn random_messages(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=MAX_MESSAGE_LEN);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn filled(messages: &[String]) -> BoundedMessageBuffer {
    let mut stream = BoundedMessageBuffer::with_limit(messages.len()).unwrap();
    for message in messages {
        stream.append(message.as_str()).unwrap();
    }
    stream
}

// ============================================================================
// MUTATIONS
// ============================================================================

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    group.measurement_time(Duration::from_secs(5));

    for size in FILL_SIZES {
        let messages = random_messages(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("fill", size), &messages, |b, msgs| {
            b.iter(|| {
                let mut stream = BoundedMessageBuffer::with_limit(msgs.len()).unwrap();
                for message in msgs {
                    stream.append(message.as_str()).unwrap();
                }
                black_box(stream.len())
            })
        });
    }

    let messages = random_messages(256);
    group.bench_function("fill_via_service", |b| {
        b.iter(|| {
            let mut service = MessageBufferService::new("bench");
            for message in &messages {
                service.append(message.clone()).unwrap();
            }
            black_box(service.status().len)
        })
    });

    group.finish();
}

fn bench_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("clear");

    for size in FILL_SIZES {
        let messages = random_messages(size);
        group.bench_with_input(BenchmarkId::new("full_stream", size), &messages, |b, msgs| {
            b.iter_batched(
                || filled(msgs),
                |mut stream| {
                    stream.clear().unwrap();
                    black_box(stream.is_empty())
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// ============================================================================
// READS
// ============================================================================

fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");

    for size in FILL_SIZES {
        let stream = filled(&random_messages(size));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("read_all", size), &stream, |b, s| {
            b.iter(|| black_box(s.read_all().unwrap()))
        });

        let (low, high) = (size / 4, size / 2);
        group.bench_with_input(BenchmarkId::new("read_range_quarter", size), &stream, |b, s| {
            b.iter(|| black_box(s.read_range(black_box(low), black_box(high)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_append, bench_clear, bench_reads);
criterion_main!(benches);
