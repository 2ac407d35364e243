use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_bingo::{detect_lines, BingoGame, Board, CellIndex, GameRng, RevealSet};

fn bench_generate(c: &mut Criterion) {
    let mut rng = GameRng::new(42);
    c.bench_function("board_generate", |b| b.iter(|| Board::generate(black_box(&mut rng))));
}

fn bench_fill_board(c: &mut Criterion) {
    c.bench_function("draw_until_full", |b| {
        b.iter(|| {
            let mut game = BingoGame::seeded(black_box(7));
            while !game.is_all_cells_opened() {
                game.random_draw();
            }
            game.draw_count()
        })
    });
}

fn bench_detect_lines(c: &mut Criterion) {
    let half: RevealSet = (0..36).step_by(2).filter_map(CellIndex::new).collect();
    let full: RevealSet = CellIndex::all().collect();

    c.bench_function("detect_lines_half", |b| b.iter(|| detect_lines(black_box(&half))));
    c.bench_function("detect_lines_full", |b| b.iter(|| detect_lines(black_box(&full))));
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = BingoGame::seeded(3);
    for _ in 0..60 {
        game.random_draw();
    }
    c.bench_function("snapshot", |b| b.iter(|| black_box(&game).snapshot()));
}

criterion_group!(benches, bench_generate, bench_fill_board, bench_detect_lines, bench_snapshot);
criterion_main!(benches);
