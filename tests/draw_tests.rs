//! Random draw integration tests.

use rust_bingo::{BingoGame, DrawOutcome, EngineConfig, POINT_REWARD, TOTAL_CELLS};

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_first_draw_always_reveals() {
    for seed in 0..20 {
        let mut game = BingoGame::seeded(seed);
        let outcome = game.random_draw();

        let number = outcome.number().unwrap();
        let cell = outcome.revealed_cell().expect("nothing is open yet");
        assert_eq!(game.board().number_at(cell), number);
    }
}

#[test]
fn test_each_draw_resolves_exactly_once() {
    let mut game = BingoGame::seeded(7);

    for _ in 0..200 {
        let opened_before = game.revealed().len();
        let points_before = game.points();
        let count_before = game.draw_count();

        let outcome = game.random_draw();
        if outcome == DrawOutcome::BoardComplete {
            break;
        }

        let opened = game.revealed().len() - opened_before;
        let earned = game.points() - points_before;
        match outcome {
            DrawOutcome::Revealed { .. } => {
                assert_eq!(opened, 1);
                assert_eq!(earned, 0);
            }
            DrawOutcome::Rewarded { points, .. } => {
                assert_eq!(opened, 0);
                assert_eq!(earned, POINT_REWARD);
                assert_eq!(points, game.points());
            }
            DrawOutcome::BoardComplete => unreachable!(),
        }
        assert_eq!(game.draw_count(), count_before + 1);
    }
}

#[test]
fn test_reward_means_cell_was_open() {
    let mut game = BingoGame::seeded(11);

    for _ in 0..100 {
        let before = game.revealed().clone();
        if let DrawOutcome::Rewarded { number, .. } = game.random_draw() {
            let cell = game.board().cell_of(number).unwrap();
            assert!(before.contains(cell));
        }
    }
}

#[test]
fn test_last_drawn_tracks_every_draw() {
    let mut game = BingoGame::seeded(3);
    assert_eq!(game.last_drawn_number(), None);

    for _ in 0..30 {
        let outcome = game.random_draw();
        assert_eq!(game.last_drawn_number(), outcome.number());
    }
}

// =============================================================================
// Completion
// =============================================================================

#[test]
fn test_draws_eventually_fill_board() {
    let mut game = BingoGame::seeded(2024);
    let mut draws = 0;

    while !game.is_all_cells_opened() {
        game.random_draw();
        draws += 1;
        assert!(draws < 10_000, "board never filled");
    }

    assert_eq!(game.revealed().len(), TOTAL_CELLS);
    assert_eq!(game.draw_count(), draws);
    // Every draw past the 36 reveals was a duplicate
    assert_eq!(game.points(), (draws - TOTAL_CELLS as u32) * POINT_REWARD);
}

#[test]
fn test_full_board_refuses_draws() {
    let mut game = BingoGame::seeded(99);
    while !game.is_all_cells_opened() {
        game.random_draw();
    }
    let before = game.snapshot();
    let rng_before = game.rng_state();

    for _ in 0..5 {
        assert_eq!(game.random_draw(), DrawOutcome::BoardComplete);
    }

    assert_eq!(game.snapshot(), before);
    // No randomness consumed either
    assert_eq!(game.rng_state(), rng_before);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_game() {
    let mut a = BingoGame::new(EngineConfig::default().with_seed(12345));
    let mut b = BingoGame::new(EngineConfig::default().with_seed(12345));

    for _ in 0..100 {
        assert_eq!(a.random_draw(), b.random_draw());
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_different_seeds_differ() {
    let a = BingoGame::seeded(111);
    let b = BingoGame::seeded(222);

    assert_ne!(a.board(), b.board());
}
