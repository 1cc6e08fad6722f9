use criterion::{Criterion, criterion_group, criterion_main};
use npuzzle::puzzle::board::Board;
use npuzzle::puzzle::heuristic::manhattan;
use npuzzle::puzzle::search::Strategy;
use std::hint::black_box;

// Moderately scrambled, Manhattan distance 7 from the goal.
const SCRAMBLED: [u32; 9] = [5, 1, 2, 4, 7, 0, 6, 3, 8];

fn bench_strategies(c: &mut Criterion) {
    let board = Board::new(SCRAMBLED.to_vec(), 3).unwrap();

    let mut group = c.benchmark_group("eight_puzzle - strategy");

    group.bench_function("bfs", |b| {
        b.iter(|| {
            let (solution, stats) = Strategy::Bfs.run(board.clone());
            black_box((solution, stats));
        })
    });

    group.bench_function("dfs", |b| {
        b.iter(|| {
            let (solution, stats) = Strategy::Dfs.run(board.clone());
            black_box((solution, stats));
        })
    });

    group.bench_function("ast", |b| {
        b.iter(|| {
            let (solution, stats) = Strategy::AStar.run(board.clone());
            black_box((solution, stats));
        })
    });

    group.finish();
}

fn bench_heuristic(c: &mut Criterion) {
    let board = Board::new(SCRAMBLED.to_vec(), 3).unwrap();

    c.bench_function("manhattan", |b| {
        b.iter(|| black_box(manhattan(black_box(&board))))
    });
}

fn bench_expansion(c: &mut Criterion) {
    let board = Board::new(SCRAMBLED.to_vec(), 3).unwrap();

    c.bench_function("successors", |b| {
        b.iter(|| black_box(black_box(&board).successors()))
    });
}

criterion_group!(benches, bench_strategies, bench_heuristic, bench_expansion);

criterion_main!(benches);
