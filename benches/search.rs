//! 搜索基准
//!
//! 用法: cargo bench --bench search

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nrow_ai::ai::eval::evaluate;
use nrow_ai::ai::ordering::order_moves;
use nrow_ai::ai::search::search;
use nrow_ai::test_positions::{EMPTY_3X3, LARGE_1};
use nrow_ai::{Board, Piece};

fn bench_full_search_3x3(c: &mut Criterion) {
    let board = Board::from_notation(EMPTY_3X3).unwrap();

    c.bench_function("search_empty_3x3_depth9", |b| {
        b.iter(|| {
            let mut work = board.clone();
            black_box(search(&mut work, Piece::Ai, 9, None))
        })
    });
}

fn bench_midgame_9x9(c: &mut Criterion) {
    let board = Board::from_notation(LARGE_1).unwrap();

    c.bench_function("search_midgame_9x9_depth3", |b| {
        b.iter(|| {
            let mut work = board.clone();
            black_box(search(&mut work, Piece::Player, 3, None))
        })
    });
}

fn bench_evaluate_9x9(c: &mut Criterion) {
    let board = Board::from_notation(LARGE_1).unwrap();

    c.bench_function("evaluate_midgame_9x9", |b| {
        b.iter(|| black_box(evaluate(&board, Piece::Player)))
    });
}

fn bench_order_moves_9x9(c: &mut Criterion) {
    let board = Board::from_notation(LARGE_1).unwrap();

    c.bench_function("order_moves_midgame_9x9", |b| {
        b.iter(|| black_box(order_moves(&board)))
    });
}

criterion_group!(
    benches,
    bench_full_search_3x3,
    bench_midgame_9x9,
    bench_evaluate_9x9,
    bench_order_moves_9x9,
);
criterion_main!(benches);
