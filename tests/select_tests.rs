//! Manual select integration tests.

use rust_bingo::{BingoGame, CellIndex, SelectError, POINT_COST};

/// Draw until the balance reaches `target`.
fn farm_points(game: &mut BingoGame, target: u32) {
    let mut draws = 0;
    while game.points() < target {
        game.random_draw();
        draws += 1;
        assert!(draws < 10_000, "could not reach {} points", target);
    }
}

fn first_closed(game: &BingoGame) -> usize {
    game.revealed().unrevealed().next().expect("a closed cell").raw()
}

// =============================================================================
// Success
// =============================================================================

#[test]
fn test_select_spends_and_opens() {
    let mut game = BingoGame::seeded(42);
    farm_points(&mut game, POINT_COST);

    let points = game.points();
    let count = game.draw_count();
    let opened = game.revealed().len();
    let last = game.last_drawn_number();
    let index = first_closed(&game);

    let outcome = game.manual_select(index).unwrap();

    assert_eq!(outcome.cell.raw(), index);
    assert_eq!(outcome.number, game.board().number_at(outcome.cell));
    assert_eq!(outcome.points, points - POINT_COST);
    assert_eq!(game.points(), points - POINT_COST);
    assert_eq!(game.draw_count(), count + 1);
    assert_eq!(game.revealed().len(), opened + 1);
    assert_eq!(game.last_drawn_number(), last);
}

#[test]
fn test_select_turns_mode_off() {
    let mut game = BingoGame::seeded(8);
    farm_points(&mut game, POINT_COST);
    game.set_manual_select_mode(true);

    let index = first_closed(&game);
    game.manual_select(index).unwrap();

    assert!(!game.manual_select_mode());
}

#[test]
fn test_select_without_mode() {
    let mut game = BingoGame::seeded(8);
    farm_points(&mut game, POINT_COST);
    assert!(!game.manual_select_mode());

    let index = first_closed(&game);
    assert!(game.manual_select(index).is_ok());
}

#[test]
fn test_consecutive_selects() {
    let mut game = BingoGame::seeded(21);
    farm_points(&mut game, 3 * POINT_COST);
    let points = game.points();

    for i in 1..=3 {
        let index = first_closed(&game);
        let outcome = game.manual_select(index).unwrap();
        assert_eq!(outcome.points, points - i * POINT_COST);
    }
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn test_select_with_no_points() {
    let mut game = BingoGame::seeded(1);
    let before = game.snapshot();

    let result = game.manual_select(0);

    assert_eq!(result, Err(SelectError::InsufficientPoints { points: 0, cost: POINT_COST }));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_select_just_below_cost() {
    let mut game = BingoGame::seeded(5);
    farm_points(&mut game, POINT_COST);
    // Spend down to below the cost
    while game.points() >= POINT_COST {
        let index = first_closed(&game);
        game.manual_select(index).unwrap();
    }
    let before = game.snapshot();

    let index = first_closed(&game);
    assert!(matches!(game.manual_select(index), Err(SelectError::InsufficientPoints { .. })));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_select_open_cell() {
    let mut game = BingoGame::seeded(13);
    farm_points(&mut game, POINT_COST);
    let open = game.revealed().iter().next().unwrap();
    game.set_manual_select_mode(true);
    let before = game.snapshot();

    assert_eq!(game.manual_select(open.raw()), Err(SelectError::AlreadyRevealed(open)));
    assert_eq!(game.snapshot(), before);
    assert!(game.manual_select_mode());
}

#[test]
fn test_select_off_board() {
    let mut game = BingoGame::seeded(13);
    farm_points(&mut game, POINT_COST);
    let before = game.snapshot();

    for index in [36, 100, usize::MAX] {
        assert_eq!(game.manual_select(index), Err(SelectError::OutOfRange(index)));
    }
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_selectable_cells_match_check() {
    let mut game = BingoGame::seeded(17);
    farm_points(&mut game, POINT_COST);

    let selectable: Vec<CellIndex> = game.selectable_cells().collect();
    assert_eq!(selectable.len(), game.revealed().unrevealed_count());

    for cell in CellIndex::all() {
        let ok = game.check_select(cell.raw()).is_ok();
        assert_eq!(ok, selectable.contains(&cell));
    }
}

// =============================================================================
// Finishing with points
// =============================================================================

#[test]
fn test_complete_with_points() {
    let mut game = BingoGame::seeded(77);
    let mut draws = 0;
    while !game.can_complete_with_points() && !game.is_all_cells_opened() {
        game.random_draw();
        draws += 1;
        assert!(draws < 10_000);
    }

    while !game.is_all_cells_opened() {
        let index = first_closed(&game);
        game.manual_select(index).unwrap();
    }

    assert!(!game.can_complete_with_points());
    assert_eq!(game.bingo_lines().len(), 14);
}
