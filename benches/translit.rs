use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use azscript::translit::{transliterate, transliterate_text};

fn bench_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("transliterate");
    for word in ["o", "salam", "gecələr", "azərbaycan"] {
        group.bench_with_input(BenchmarkId::from_parameter(word), word, |b, w| {
            b.iter(|| transliterate(w));
        });
    }
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let text = "azərbaycan dili cənubi qafqazda geniş yayılmış bir türk dilidir";
    c.bench_function("transliterate_text/sentence", |b| {
        b.iter(|| transliterate_text(text));
    });
}

criterion_group!(benches, bench_words, bench_text);
criterion_main!(benches);
