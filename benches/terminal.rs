//! Terminal core benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use anko_core::{EraseDisplay, Terminal};

fn bench_print(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal");

    let text = "Hello, World! ".repeat(64);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("print_chars", |b| {
        b.iter(|| {
            let mut term = Terminal::new(80, 24);
            for ch in text.chars() {
                term.print(ch);
            }
            black_box(term)
        })
    });

    group.finish();
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal");

    group.bench_function("scroll", |b| {
        b.iter(|| {
            let mut term = Terminal::new(80, 24);
            for i in 0..100 {
                for ch in format!("Line {}: Some text content here", i).chars() {
                    term.print(ch);
                }
                term.carriage_return();
                term.linefeed();
            }
            black_box(term)
        })
    });

    group.finish();
}

fn bench_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal");

    group.bench_function("erase_display", |b| {
        b.iter(|| {
            let mut term = Terminal::new(80, 24);
            for ch in "X".repeat(80 * 24).chars() {
                term.print(ch);
            }
            term.erase_display(EraseDisplay::Complete);
            black_box(term)
        })
    });

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal");

    group.bench_function("resize", |b| {
        b.iter(|| {
            let mut term = Terminal::new(80, 24);
            for ch in "Hello, World!".repeat(20).chars() {
                term.print(ch);
            }
            term.resize(120, 40);
            term.resize(80, 24);
            term.resize(132, 50);
            black_box(term)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_print, bench_scroll, bench_erase, bench_resize);
criterion_main!(benches);
