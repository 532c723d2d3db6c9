use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_engine::SessionRng;
use tictactoe_engine::game::{Board, BotType, apply_action, calculate_move, minimax};

fn bench_minimax_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_3x3_empty_board", |b| {
        let board = Board::initial_state();
        b.iter(|| minimax(black_box(&board)));
    });
}

fn bench_minimax_mid_game(c: &mut Criterion) {
    c.bench_function("minimax_3x3_mid_game", |b| {
        let board: Board = "XO./.X./O..".parse().unwrap();
        b.iter(|| minimax(black_box(&board)));
    });
}

fn bench_full_self_play(c: &mut Criterion) {
    c.bench_function("minimax_3x3_full_self_play", |b| {
        b.iter(|| {
            let mut rng = SessionRng::new(0);
            let mut board = Board::initial_state();
            while let Some(action) = calculate_move(BotType::Minimax, &board, &mut rng).unwrap() {
                board = apply_action(&board, action).unwrap();
            }
            board
        });
    });
}

criterion_group!(benches, bench_minimax_empty_board, bench_minimax_mid_game, bench_full_self_play);
criterion_main!(benches);
