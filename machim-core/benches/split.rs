//! Splitting throughput benchmarks
//!
//! Run with: cargo bench --bench split

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use machim_core::{SplitConfig, Splitter};
use std::hint::black_box;

/// Repeat a mixed-register paragraph up to `size` bytes.
fn generate_text(size: usize) -> String {
    let paragraph = "밥을 먹었다. 정말 맛있었다 너무 좋아요 내일도 먹겠죠. \
                     그는 \"괜찮다.\" 라고 말했다. 결과가 좋음 다들 만족함 진짜 좋아요ㅋㅋㅋ ";
    let mut text = paragraph.repeat(size / paragraph.len() + 1);
    let mut end = size.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let splitter = Splitter::default();

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("split", size), &text, |b, text| {
            b.iter(|| {
                let _ = splitter.split(black_box(text));
            });
        });
    }

    group.finish();
}

fn bench_registers(c: &mut Criterion) {
    let mut group = c.benchmark_group("registers");
    let splitter = Splitter::default();
    let size = 102_400;

    let formal = "위원회는 오늘 결과를 발표했다. 시장은 조용히 반응했다. ".repeat(size / 80);
    let informal = "오늘 날씨 진짜 좋아요 내일도 좋겠죠 완전 부러움 ".repeat(size / 70);
    let noisy = "진짜 좋아요ㅋㅋㅋ 최고다!!! 내일 봐요~~ 🇰🇷🎉 ".repeat(size / 70);

    for (name, text) in [("formal", formal), ("informal", informal), ("noisy", noisy)] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("register", name), &text, |b, text| {
            b.iter(|| {
                let _ = splitter.split(black_box(text));
            });
        });
    }

    group.finish();
}

fn bench_configurations(c: &mut Criterion) {
    let mut group = c.benchmark_group("configurations");
    let text = generate_text(102_400);

    let configs = [
        ("default", SplitConfig::default()),
        (
            "no_templates",
            SplitConfig::builder().colloquial_templates(false).build(),
        ),
        (
            "no_enclosures",
            SplitConfig::builder().enclosure_protection(false).build(),
        ),
    ];

    for (name, config) in configs {
        let splitter = Splitter::new(config);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("config", name), &text, |b, text| {
            b.iter(|| {
                let _ = splitter.split(black_box(text));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_registers, bench_configurations);
criterion_main!(benches);
