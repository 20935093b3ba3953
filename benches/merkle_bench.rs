//! Benchmarks for Merkle registry operations.
//!
//! Every append and every proof rebuilds the tree from all leaves, so costs
//! grow linearly with the leaf count.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use merkle_registry::{reduce, verify, Keccak256Pair, MerkleTree, Node};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_leaves(n: usize) -> Vec<Node> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    (0..n).map(|_| rng.gen()).collect()
}

fn filled_tree(leaves: &[Node]) -> MerkleTree {
    let mut tree = MerkleTree::new();
    for leaf in leaves {
        tree.add_leaf(*leaf);
    }
    tree
}

/// Benchmark a full reduction pass.
fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for n in [16usize, 256, 1000, 4096].iter() {
        let leaves = random_leaves(*n);
        group.throughput(Throughput::Elements(*n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &leaves, |b, leaves| {
            b.iter(|| black_box(reduce(&Keccak256Pair, leaves)));
        });
    }

    group.finish();
}

/// Benchmark one append on a tree that already holds `n` leaves.
fn bench_add_leaf(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_leaf");

    for n in [16usize, 256, 1000].iter() {
        let leaves = random_leaves(*n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &leaves, |b, leaves| {
            b.iter_batched(
                || filled_tree(leaves),
                |mut tree| black_box(tree.add_leaf([0xAB; 32])),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark proof generation and verification.
fn bench_proof(c: &mut Criterion) {
    let mut group = c.benchmark_group("proof");

    for n in [16usize, 256, 1000].iter() {
        let leaves = random_leaves(*n);
        let tree = filled_tree(&leaves);
        let index = (*n as u64) / 2;
        let proof = tree.build_proof(index).unwrap();
        let root = tree.merkle_root();

        group.bench_with_input(BenchmarkId::new("build", n), &tree, |b, tree| {
            b.iter(|| black_box(tree.build_proof(index).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("verify", n), &proof, |b, proof| {
            b.iter(|| {
                black_box(verify(&Keccak256Pair, &leaves[index as usize], proof.siblings(), &root))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduce, bench_add_leaf, bench_proof);
criterion_main!(benches);
