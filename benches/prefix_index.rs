use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shelfkit::ds::PrefixIndex;

fn words(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..16);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn bench_prefix_insert(c: &mut Criterion) {
    let words = words(4096);
    c.bench_function("prefix_insert_4096", |b| {
        b.iter_batched(
            PrefixIndex::new,
            |mut index| {
                for word in &words {
                    index.insert(std::hint::black_box(word));
                }
                index
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_prefix_suggestions(c: &mut Criterion) {
    let index: PrefixIndex = words(4096).into_iter().collect();
    c.bench_function("prefix_suggestions_short", |b| {
        b.iter(|| std::hint::black_box(index.suggestions(std::hint::black_box("ab"))))
    });
    c.bench_function("prefix_suggestions_limited", |b| {
        b.iter(|| std::hint::black_box(index.suggestions_limited(std::hint::black_box("a"), 10)))
    });
}

criterion_group!(benches, bench_prefix_insert, bench_prefix_suggestions);
criterion_main!(benches);
