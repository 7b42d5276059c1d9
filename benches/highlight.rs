//! Benchmarks for the per-redraw syntax highlight pass.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ced::buffer::TextBuffer;
use ced::highlight::highlight_rows;

fn c_source(lines: usize) -> TextBuffer {
    let mut out = Vec::with_capacity(lines);
    out.push("#include <stdio.h>".to_string());
    out.push("/* generated benchmark input */".to_string());
    for i in 0..lines.saturating_sub(2) {
        out.push(format!(
            "static int compute_{i}(int x) {{ return (x + {i}) * 2; }} // \"quoted\""
        ));
    }
    TextBuffer::from_lines(&out)
}

fn bench_highlight_screen(c: &mut Criterion) {
    let buffer = c_source(500);
    c.bench_function("highlight_one_screen", |b| {
        b.iter(|| highlight_rows(black_box(&buffer), 200..240));
    });
}

fn bench_highlight_large_range(c: &mut Criterion) {
    let buffer = c_source(500);
    c.bench_function("highlight_500_rows", |b| {
        b.iter(|| highlight_rows(black_box(&buffer), 0..500));
    });
}

criterion_group!(benches, bench_highlight_screen, bench_highlight_large_range);
criterion_main!(benches);
