use criterion::{black_box, criterion_group, criterion_main, Criterion};
use richtext_parser::{parse, raw_text, serialize};

fn sample_markup(paragraphs: usize) -> String {
    let paragraph = "Lorem <b>ipsum</b> dolor <i>sit <b>amet</b>, consectetur</i> adipiscing \
                     <c>elit</c>, sed do <+3>eiusmod</+3> tempor <-3>incididunt</-3> ut labore. ";
    paragraph.repeat(paragraphs)
}

fn parse_short_text(c: &mut Criterion) {
    let source = "Hello <b>bold</b> and <i>italic <c>underlined</c></i> world";

    c.bench_function("parse_short_text", |b| b.iter(|| parse(black_box(source))));
}

fn parse_long_text(c: &mut Criterion) {
    let source = sample_markup(50);

    c.bench_function("parse_long_text", |b| b.iter(|| parse(black_box(&source))));
}

fn serialize_long_text(c: &mut Criterion) {
    let tree = parse(&sample_markup(50));

    c.bench_function("serialize_long_text", |b| {
        b.iter(|| serialize(black_box(&tree)))
    });

    c.bench_function("raw_text_long_text", |b| b.iter(|| raw_text(black_box(&tree))));
}

criterion_group!(benches, parse_short_text, parse_long_text, serialize_long_text);
criterion_main!(benches);
