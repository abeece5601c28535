use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seqsniff::{classify, name_amino_acids, transcribe};

pub fn classify_sequences(c: &mut Criterion) {
    let dna = "GATTACA".repeat(1000);
    let protein = "MVLSPADKTNVKAAWGKVGAHAGEYGAEALERMFLSFPTTKTYFPHF".repeat(100);

    c.bench_function("classify dna", |b| b.iter(|| classify(black_box(&dna))));
    c.bench_function("classify protein", |b| {
        b.iter(|| classify(black_box(&protein)))
    });
    c.bench_function("transcribe", |b| b.iter(|| transcribe(black_box(&dna))));
    c.bench_function("name amino acids", |b| {
        b.iter(|| name_amino_acids(black_box(&protein)))
    });
}

criterion_group!(benches, classify_sequences);
criterion_main!(benches);
