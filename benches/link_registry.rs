//! LinkRegistry 性能基准测试

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use petalshop::links::{LinkRegistry, encode_base62};
use std::hint::black_box;
use std::sync::Arc;

/// MD5 + Base62 编码
fn bench_short_code_for(c: &mut Criterion) {
    c.bench_function("short_code_for", |b| {
        b.iter(|| LinkRegistry::short_code_for(black_box("http://127.0.0.1:8080/orders/details/42")));
    });

    c.bench_function("encode_base62/u32_max", |b| {
        b.iter(|| encode_base62(black_box(u32::MAX)));
    });
}

/// 已存在的 URL 重复 shorten（只读路径）
fn bench_shorten_existing(c: &mut Criterion) {
    let registry = LinkRegistry::new();
    registry.shorten("https://example.com/promo", "general");

    c.bench_function("shorten/existing", |b| {
        b.iter(|| registry.shorten(black_box("https://example.com/promo"), "general"));
    });
}

/// 不同 URL 的 shorten，覆盖插入路径
fn bench_shorten_new(c: &mut Criterion) {
    let urls: Vec<String> = (0..100)
        .map(|i| format!("https://example.com/orders/details/{}", i))
        .collect();

    c.bench_function("shorten/new_urls", |b| {
        b.iter_batched(
            LinkRegistry::new,
            |registry| {
                for url in &urls {
                    registry.shorten(url, "order_tracking");
                }
                registry
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// 多线程并发 expand（点击计数）
fn bench_concurrent_expand(c: &mut Criterion) {
    let registry = Arc::new(LinkRegistry::new());
    let codes: Vec<String> = (0..64)
        .map(|i| registry.shorten(&format!("https://example.com/p/{}", i), "general"))
        .collect();

    let mut group = c.benchmark_group("expand/concurrent");
    for num_threads in [1, 2, 4, 8] {
        group.throughput(Throughput::Elements(1000));
        group.bench_with_input(
            BenchmarkId::new("threads", num_threads),
            &num_threads,
            |b, &num_threads| {
                b.iter(|| {
                    std::thread::scope(|s| {
                        for t in 0..num_threads {
                            let registry = &registry;
                            let codes = &codes;
                            s.spawn(move || {
                                for i in 0..(1000 / num_threads) {
                                    let code = &codes[(t + i) % codes.len()];
                                    let _ = black_box(registry.expand(code));
                                }
                            });
                        }
                    });
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_short_code_for,
    bench_shorten_existing,
    bench_shorten_new,
    bench_concurrent_expand
);
criterion_main!(benches);
