//! Benchmark du balayage de motifs et de palindromes
//!
//! Documente la limite d'échelle du balayage en force brute: le contrat
//! vise des séquences courtes saisies à la main, pas des génomes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use genealchemy_core::DnaSequence;

fn sample_dna(len: usize) -> String {
    const BASES: [char; 4] = ['A', 'T', 'C', 'G'];
    (0..len).map(|i| BASES[(i * 7 + i / 3) % 4]).collect()
}

fn bench_find_motif(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_motif");
    for len in [50, 200, 800] {
        let dna = DnaSequence::new(sample_dna(len));
        group.bench_with_input(BenchmarkId::from_parameter(len), &dna, |b, dna| {
            b.iter(|| dna.find_motif(black_box("GATC")).unwrap());
        });
    }
    group.finish();
}

fn bench_find_palindromes(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_palindromes");
    for len in [50, 200, 800] {
        let dna = DnaSequence::new(sample_dna(len));
        group.bench_with_input(BenchmarkId::from_parameter(len), &dna, |b, dna| {
            b.iter(|| black_box(dna.find_palindromes()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_motif, bench_find_palindromes);
criterion_main!(benches);
