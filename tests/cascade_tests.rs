//! Cascade controller tests: transition rule, pacing, phase ordering and
//! the re-entrancy guard, driven through `GameState::tick`.

use tui_match_three::core::{Board, GameState};
use tui_match_three::types::{Cell, Color, Config, Item, ItemId, ItemKind, Status};

fn normal(id: u32, color: Color) -> Cell {
    Some(Item {
        id: ItemId(id),
        color,
        kind: ItemKind::Normal,
    })
}

/// 2x4 board with a red triple in column 0: unstable, and too narrow for
/// row matches, so the first clear is fully predictable.
fn unstable_board() -> Board {
    Board::from_columns(vec![
        vec![
            normal(1, Color::Red),
            normal(2, Color::Red),
            normal(3, Color::Red),
            normal(4, Color::Blue),
        ],
        vec![
            normal(5, Color::Yellow),
            normal(6, Color::Green),
            normal(7, Color::Purple),
            normal(8, Color::Yellow),
        ],
    ])
}

/// Stable 2x4 board (no runs possible across 2 columns, none in columns).
fn stable_board() -> Board {
    Board::from_columns(vec![
        vec![
            normal(1, Color::Red),
            normal(2, Color::Blue),
            normal(3, Color::Green),
            normal(4, Color::Yellow),
        ],
        vec![
            normal(5, Color::Green),
            normal(6, Color::Yellow),
            normal(7, Color::Red),
            normal(8, Color::Purple),
        ],
    ])
}

#[test]
fn test_unstable_board_starts_cascade() {
    let mut game = GameState::with_board(Config::headless(2, 4), 1, unstable_board());
    assert_eq!(game.status(), Status::Idle);

    game.tick(0);
    assert_eq!(game.status(), Status::Collapsing);
    assert!(game.cascade_busy());
}

#[test]
fn test_stable_board_never_starts_cascade() {
    let mut game = GameState::with_board(Config::headless(2, 4), 1, stable_board());
    for _ in 0..10 {
        game.tick(0);
    }
    assert_eq!(game.status(), Status::Idle);
    assert!(!game.cascade_busy());
    assert_eq!(game.board(), &stable_board());
}

#[test]
fn test_grab_blocks_cascade_start() {
    let mut game = GameState::with_board(Config::headless(2, 4), 1, unstable_board());
    game.grab((0, 0));

    for _ in 0..10 {
        game.tick(0);
    }
    assert_eq!(game.status(), Status::Idle);
    assert!(!game.cascade_busy());

    // Releasing the grab lets the cascade begin.
    game.drop((0, 0));
    game.tick(0);
    assert_eq!(game.status(), Status::Collapsing);
}

#[test]
fn test_phases_run_clear_collapse_fill_in_order() {
    let mut game = GameState::with_board(Config::headless(2, 4), 1, unstable_board());

    // Tick 1: transition rule fires and the Clear phase runs (zero delay).
    game.tick(0);
    assert_eq!(game.board().get((0, 0)), None);
    assert_eq!(game.board().get((0, 1)), None);
    assert_eq!(game.board().get((0, 2)), None);
    assert_eq!(game.board().get((0, 3)), normal(4, Color::Blue));

    // Tick 2: Collapse. The blue item sinks to the bottom of column 0.
    game.tick(0);
    assert_eq!(game.board().get((0, 3)), normal(4, Color::Blue));
    assert_eq!(game.board().get((0, 0)), None);

    // Tick 3: Fill. No empties remain.
    game.tick(0);
    for column in 0..2i8 {
        for row in 0..4i8 {
            assert!(game.board().get((column, row)).is_some());
        }
    }
}

#[test]
fn test_cascade_reaches_stable_fixed_point() {
    let mut game = GameState::with_board(Config::headless(2, 4), 7, unstable_board());

    let mut saw_collapsing = false;
    for _ in 0..1000 {
        game.tick(0);
        saw_collapsing |= game.status() == Status::Collapsing;
        if game.status() == Status::Idle && !game.cascade_busy() {
            break;
        }
    }

    assert!(saw_collapsing);
    assert_eq!(game.status(), Status::Idle);
    assert!(!game.cascade_busy());
    assert!(game.board().is_stable(&game.config().rules));
    // Fill leaves no holes behind.
    for column in 0..2i8 {
        for row in 0..4i8 {
            assert!(game.board().get((column, row)).is_some());
        }
    }
}

#[test]
fn test_pacing_delay_spaces_out_publications() {
    let config = Config {
        phase_delay_ms: 100,
        ..Config::headless(2, 4)
    };
    let mut game = GameState::with_board(config, 1, unstable_board());

    // Transition rule fires immediately, but the first phase waits out the
    // pacing delay.
    game.tick(0);
    assert_eq!(game.status(), Status::Collapsing);
    let version_before = game.version();

    game.tick(50);
    assert_eq!(game.version(), version_before, "no phase inside the pause");
    game.tick(50);
    assert!(game.version() > version_before, "clear published after 100ms");
    assert_eq!(game.board().get((0, 0)), None);
}

#[test]
fn test_one_cascade_at_a_time() {
    let mut game = GameState::with_board(Config::headless(2, 4), 1, unstable_board());

    game.tick(0);
    assert!(game.cascade_busy());
    let version_after_clear = game.version();

    // Re-evaluating the transition rule mid-cascade must not restart it:
    // the next tick collapses, it does not clear again.
    game.tick(0);
    assert_eq!(game.version(), version_after_clear + 1);
    assert_eq!(game.board().get((0, 3)), normal(4, Color::Blue));
}

#[test]
fn test_deal_in_board_settles_itself() {
    // The freshly dealt random board is cascaded to stability with no user
    // input at all.
    let mut game = GameState::new(Config::headless(7, 7), 42);
    for _ in 0..10_000 {
        game.tick(0);
        if game.columns() > 0 && game.status() == Status::Idle && !game.cascade_busy() {
            break;
        }
    }
    assert_eq!(game.columns(), 7);
    assert_eq!(game.status(), Status::Idle);
    assert!(game.board().is_stable(&game.config().rules));
}
