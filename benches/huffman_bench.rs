use criterion::{criterion_group, criterion_main, Criterion};
use huffcode::standard::standard_table;
use huffcode::{FrequencyTable, HuffmanTree};

const TEXT: &str = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOGHUFFMANENCODINGISAGREEDYALGORITHM";

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_build");
    let standard = standard_table();
    // wide alphabet to exercise the queue
    let wide = FrequencyTable::from_pairs(
        (0..512u32).map(|i| (char::from_u32(0x4e00 + i).unwrap(), 1 + (i as u64 * 7919) % 1000)),
    )
    .unwrap();

    group.bench_function("standard_26", |b| {
        b.iter(|| HuffmanTree::build(&standard).unwrap())
    });
    group.bench_function("wide_512", |b| b.iter(|| HuffmanTree::build(&wide).unwrap()));
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_codec");
    let tree = HuffmanTree::build(&standard_table()).unwrap();
    let input = TEXT.repeat(100);

    group.bench_function("encode", |b| b.iter(|| tree.encode(&input).unwrap()));

    let bits = tree.encode(&input).unwrap();
    group.bench_function("decode", |b| b.iter(|| tree.decode(&bits).unwrap()));
}

criterion_group!(benches, bench_build, bench_codec);
criterion_main!(benches);
