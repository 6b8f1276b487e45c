//! End-to-end session tests: deal-in, grab/drop, optimistic swap revert
//! and the swap-into-cascade path.

use tui_match_three::core::{Board, GameState};
use tui_match_three::types::{Cell, Color, Config, Item, ItemId, ItemKind, Status};

fn normal(id: u32, color: Color) -> Cell {
    Some(Item {
        id: ItemId(id),
        color,
        kind: ItemKind::Normal,
    })
}

/// Stable 2x4 board where swapping (0,2) and (1,2) completes a red triple
/// in column 0.
fn one_move_board() -> Board {
    Board::from_columns(vec![
        vec![
            normal(101, Color::Red),
            normal(102, Color::Red),
            normal(103, Color::Blue),
            normal(104, Color::Green),
        ],
        vec![
            normal(105, Color::Yellow),
            normal(106, Color::Green),
            normal(107, Color::Red),
            normal(108, Color::Purple),
        ],
    ])
}

/// Stable 2x2 board; every swap on it stays stable.
fn dead_board() -> Board {
    Board::from_columns(vec![
        vec![normal(101, Color::Red), normal(102, Color::Blue)],
        vec![normal(103, Color::Green), normal(104, Color::Yellow)],
    ])
}

#[test]
fn test_deal_in_contract() {
    // Default config: 500ms deal-in, real pacing delays, so the cascade
    // cannot publish in the same tick the board deals in.
    let mut game = GameState::new(Config::default(), 9);

    // Empty board published immediately.
    assert_eq!(game.columns(), 0);
    assert_eq!(game.version(), 0);

    game.tick(499);
    assert_eq!(game.columns(), 0, "still inside the deal-in window");
    game.tick(1);
    assert_eq!(game.columns(), 7);
    assert_eq!(game.rows(), 7);
    assert_eq!(game.version(), 1);
}

#[test]
fn test_non_adjacent_drop_leaves_board_unchanged() {
    let mut game = GameState::with_board(Config::headless(2, 4), 1, one_move_board());

    game.grab((0, 0));
    game.drop((1, 2));
    assert_eq!(game.board(), &one_move_board());
    assert_eq!(game.grabbed(), None);

    // Diagonal is not adjacent either.
    game.grab((0, 0));
    game.drop((1, 1));
    assert_eq!(game.board(), &one_move_board());
}

#[test]
fn test_matching_swap_triggers_cascade_to_stability() {
    let mut game = GameState::with_board(Config::headless(2, 4), 5, one_move_board());

    game.grab((0, 2));
    game.drop((1, 2));

    // Optimistic publication: the swap is visible immediately.
    assert_eq!(game.board().get((0, 2)), normal(107, Color::Red));
    assert_eq!(game.board().get((1, 2)), normal(103, Color::Blue));

    let mut saw_collapsing = false;
    for _ in 0..1000 {
        game.tick(0);
        saw_collapsing |= game.status() == Status::Collapsing;
        if game.status() == Status::Idle && !game.cascade_busy() {
            break;
        }
    }

    assert!(saw_collapsing, "cascade must have run");
    assert_eq!(game.status(), Status::Idle);
    assert!(game.board().is_stable(&game.config().rules));
    // The red triple is gone; whatever filled in is fresh.
    assert_ne!(game.board().get((0, 0)), normal(101, Color::Red));
}

#[test]
fn test_stable_swap_reverts_after_delay() {
    let config = Config {
        revert_delay_ms: 100,
        ..Config::headless(2, 2)
    };
    let mut game = GameState::with_board(config, 1, dead_board());

    game.grab((0, 0));
    game.drop((0, 1));

    // Swapped state is visible during the revert window.
    assert_eq!(game.board().get((0, 0)), normal(102, Color::Blue));
    assert_eq!(game.board().get((0, 1)), normal(101, Color::Red));

    game.tick(50);
    assert_eq!(game.status(), Status::Idle, "a no-match swap never collapses");
    assert_eq!(game.board().get((0, 0)), normal(102, Color::Blue));

    game.tick(50);
    assert_eq!(game.board(), &dead_board(), "reverted to the pre-swap board");
    assert_eq!(game.status(), Status::Idle);
}

#[test]
fn test_swap_requires_both_grab_and_drop() {
    let mut game = GameState::with_board(Config::headless(2, 2), 1, dead_board());

    // Drop without a grab is a no-op.
    game.drop((0, 1));
    assert_eq!(game.board(), &dead_board());

    // Dropping on the grabbed cell releases without swapping.
    game.grab((0, 0));
    game.drop((0, 0));
    assert_eq!(game.grabbed(), None);
    assert_eq!(game.board(), &dead_board());
}

#[test]
fn test_out_of_range_grab_and_drop_are_safe() {
    let mut game = GameState::with_board(Config::headless(2, 2), 1, dead_board());

    game.grab((-1, 0));
    game.drop((0, 0));
    // Adjacent by distance, but the swap no-ops on the missing cell.
    assert_eq!(game.board(), &dead_board());

    game.grab((10, 10));
    game.drop((9, 10));
    assert_eq!(game.board(), &dead_board());
}

#[test]
fn test_grab_rejected_while_collapsing() {
    let unstable = Board::from_columns(vec![
        vec![
            normal(101, Color::Red),
            normal(102, Color::Red),
            normal(103, Color::Red),
        ],
        vec![
            normal(104, Color::Blue),
            normal(105, Color::Green),
            normal(106, Color::Yellow),
        ],
    ]);
    let mut game = GameState::with_board(Config::headless(2, 3), 1, unstable);

    game.tick(0);
    assert_eq!(game.status(), Status::Collapsing);

    game.grab((0, 0));
    assert_eq!(game.grabbed(), None);

    // A drop arriving mid-cascade must not swap anything.
    let before = game.board().clone();
    game.drop((0, 1));
    assert_eq!(game.board(), &before);
}

#[test]
fn test_versions_increase_monotonically() {
    let mut game = GameState::new(Config::headless(3, 3), 2);
    let mut last = game.version();
    for _ in 0..200 {
        game.tick(0);
        assert!(game.version() >= last);
        last = game.version();
    }
}

#[test]
fn test_same_seed_same_session() {
    let mut a = GameState::new(Config::headless(7, 7), 1234);
    let mut b = GameState::new(Config::headless(7, 7), 1234);
    for _ in 0..500 {
        a.tick(0);
        b.tick(0);
        assert_eq!(a.board(), b.board());
        assert_eq!(a.status(), b.status());
    }
}
