//! Rules Engine Benchmarks
//!
//! Performance benchmarks for move generation and move execution using Criterion.

use std::hint::black_box;

use chess_rules::move_gen::{has_any_legal_move, legal_moves, movement_shape};
use chess_rules::{Board, Match, Side, Square};
use criterion::{criterion_group, criterion_main, Criterion};

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col).unwrap()
}

fn bench_new_match(c: &mut Criterion) {
    c.bench_function("new_match", |b| b.iter(|| black_box(Match::new())));
}

fn bench_movement_shape_all_squares(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("movement_shape_starting_position", |b| {
        b.iter(|| {
            let total: usize = Square::all()
                .map(|square| movement_shape(&board, square, None).len())
                .sum();
            black_box(total)
        })
    });
}

fn bench_legal_moves_all_squares(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| {
            let total: usize = Square::all()
                .map(|square| legal_moves(&board, square, None).len())
                .sum();
            black_box(total)
        })
    });
}

fn bench_terminal_detection(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("has_any_legal_move_both_sides", |b| {
        b.iter(|| {
            black_box((
                has_any_legal_move(&board, Side::White, None),
                has_any_legal_move(&board, Side::Black, None),
            ))
        })
    });
}

fn bench_opening_sequence(c: &mut Criterion) {
    let moves = [
        (sq(6, 4), sq(4, 4)),
        (sq(1, 4), sq(3, 4)),
        (sq(7, 6), sq(5, 5)),
        (sq(0, 1), sq(2, 2)),
        (sq(7, 5), sq(4, 2)),
        (sq(0, 6), sq(2, 5)),
        (sq(7, 4), sq(7, 6)),
    ];

    c.bench_function("attempt_move_opening_sequence", |b| {
        b.iter(|| {
            let mut game = Match::new();
            for &(from, to) in &moves {
                let _ = game.attempt_move(from, to, None);
            }
            black_box(game.half_move_number())
        })
    });
}

criterion_group!(
    benches,
    bench_new_match,
    bench_movement_shape_all_squares,
    bench_legal_moves_all_squares,
    bench_terminal_detection,
    bench_opening_sequence,
);
criterion_main!(benches);
