use criterion::{black_box, criterion_group, criterion_main, Criterion};
use editdistance::{levenshtein, levenshtein_matrix};

fn bench_levenshtein(c: &mut Criterion) {
    let short_a = b"kitten".as_slice();
    let short_b = b"sitting".as_slice();
    let long_a: Vec<u8> = (0..512).map(|i| b'a' + (i % 7) as u8).collect();
    let long_b: Vec<u8> = (0..512).map(|i| b'a' + (i % 5) as u8).collect();

    c.bench_function("levenshtein short", |b| {
        b.iter(|| levenshtein(black_box(short_a), black_box(short_b)))
    });

    c.bench_function("levenshtein 512x512", |b| {
        b.iter(|| levenshtein(black_box(&long_a), black_box(&long_b)))
    });

    c.bench_function("levenshtein_matrix 512x512", |b| {
        b.iter(|| levenshtein_matrix(black_box(&long_a), black_box(&long_b)).unwrap())
    });
}

criterion_group!(benches, bench_levenshtein);
criterion_main!(benches);
