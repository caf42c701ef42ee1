use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kana_core::{convert, ConversionType};

static ROMAJI_INPUTS: &[(&str, &str)] = &[
    ("short", "kyou"),
    ("medium", "kyou ha ii tenki desu ne"),
    ("long", "watashi ha kyou ha ii tenki da to omoimasu. konnichiwa, ra-men wo tabemashou!"),
];

static KANA_INPUTS: &[(&str, &str)] = &[
    ("short", "きょう"),
    ("medium", "きょうはいいてんきですね"),
    ("long", "わたしはきょうはいいてんきだとおもいます。コンニチワ、ラーメンをたべましょう！"),
];

fn bench_to_kana(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert/hiragana");
    for &(label, romaji) in ROMAJI_INPUTS {
        group.bench_with_input(BenchmarkId::new(label, romaji.len()), &romaji, |b, &romaji| {
            b.iter(|| convert(romaji, ConversionType::Hiragana));
        });
    }
    group.finish();
}

fn bench_to_romaji(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert/romaji");
    for &(label, kana) in KANA_INPUTS {
        group.bench_with_input(BenchmarkId::new(label, kana.len()), &kana, |b, &kana| {
            b.iter(|| convert(kana, ConversionType::Romaji));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_to_kana, bench_to_romaji);
criterion_main!(benches);
