//! Property tests for board bookkeeping and move resolution.

mod common;

use proptest::prelude::*;

use slime_wars::board::{squares_adjacent_to, squares_within_distance};
use slime_wars::rules::captures;
use slime_wars::{BoardState, Color, Origin, Position, RulesEngine, SlimeWarsRules};

use common::scan_empty;

fn any_color() -> impl Strategy<Value = Color> {
    (0u8..=3, 0u8..=3).prop_map(|(r, g)| Color::new(r, g).unwrap())
}

fn any_player_color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::PALETTE.to_vec())
}

/// A board with a random fill, mostly empty so moves stay possible.
fn any_board() -> impl Strategy<Value = BoardState> {
    (4usize..=9, 4usize..=9)
        .prop_flat_map(|(w, h)| {
            let cell = prop_oneof![
                3 => Just(Color::EMPTY),
                2 => any_player_color(),
            ];
            (Just(w), Just(h), prop::collection::vec(cell, w * h))
        })
        .prop_map(|(w, h, cells)| {
            let mut board = BoardState::new(w, h);
            for (i, color) in cells.into_iter().enumerate() {
                let (x, y) = ((i % w) as i32, (i / w) as i32);
                board.set_color(x, y, color).unwrap();
            }
            board
        })
}

/// Neighborhood size from the clipped square around the center.
fn expected_neighbors(width: usize, height: usize, x: i32, y: i32, d: i32) -> usize {
    let cols = ((x + d).min(width as i32 - 1) - (x - d).max(0) + 1) as usize;
    let rows = ((y + d).min(height as i32 - 1) - (y - d).max(0) + 1) as usize;
    cols * rows - 1
}

proptest! {
    #[test]
    fn prop_counter_matches_scan_after_writes(
        writes in prop::collection::vec((0i32..6, 0i32..6, any_color()), 0..200),
    ) {
        let mut board = BoardState::new(6, 6);
        for (x, y, color) in writes {
            board.set_color(x, y, color).unwrap();
            prop_assert_eq!(board.empty_squares(), scan_empty(&board));
        }
        prop_assert!(board.empty_squares() <= 36);
    }

    #[test]
    fn prop_cycling_sixteen_times_is_identity(x in 0i32..5, y in 0i32..5, start in any_color()) {
        let mut board = BoardState::new(5, 5);
        board.set_color(x, y, start).unwrap();
        for _ in 0..16 {
            board.cycle_color(x, y).unwrap();
            prop_assert_eq!(board.empty_squares(), scan_empty(&board));
        }
        prop_assert_eq!(board.current_color(x, y).unwrap(), start);
    }

    #[test]
    fn prop_neighborhood_size(w in 4usize..12, h in 4usize..12, fx in 0.0f64..1.0, fy in 0.0f64..1.0, d in 1u32..=2) {
        let board = BoardState::new(w, h);
        let x = (fx * w as f64) as i32;
        let y = (fy * h as f64) as i32;

        let cells = squares_within_distance(&board, x, y, d).unwrap();
        prop_assert_eq!(cells.len(), expected_neighbors(w, h, x, y, d as i32));
        prop_assert!(cells.iter().all(|s| s.position() != Position::new(x, y)));
        prop_assert!(cells.iter().all(|s| Position::new(x, y).distance(s.position()) <= d));
    }

    #[test]
    fn prop_captures_are_occupied_foreign_neighbors(
        board in any_board(),
        color in any_player_color(),
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let x = (fx * board.width() as f64) as i32;
        let y = (fy * board.height() as f64) as i32;
        let target = Position::new(x, y);

        let flipped = captures(&board, target, color).unwrap();
        let expected: Vec<Position> = squares_adjacent_to(&board, x, y)
            .unwrap()
            .iter()
            .filter(|s| !s.color.is_empty() && s.color != color)
            .map(|s| s.position())
            .collect();

        let got: Vec<Position> = flipped.iter().map(|s| s.position()).collect();
        prop_assert_eq!(got, expected);
        prop_assert!(flipped.iter().all(|s| s.color == color));
    }

    #[test]
    fn prop_occupied_target_yields_no_updates(
        board in any_board(),
        color in any_player_color(),
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let x = (fx * board.width() as f64) as i32;
        let y = (fy * board.height() as f64) as i32;
        prop_assume!(!board.current_color(x, y).unwrap().is_empty());

        let rules = SlimeWarsRules;
        let updates = rules
            .calculate_board_updates(&board, color, Position::new(x, y), Origin::Unselected)
            .unwrap();
        prop_assert!(updates.is_empty());
    }

    #[test]
    fn prop_legal_placements_apply_cleanly(board in any_board(), color in any_player_color()) {
        let rules = SlimeWarsRules;
        let own_before = board.count_of(color);

        prop_assert_eq!(
            rules.has_any_valid_move(&board, color),
            !rules.legal_placements(&board, color).is_empty()
        );

        for (target, origin) in rules.legal_placements(&board, color) {
            let updates = rules.calculate_board_updates(&board, color, target, origin).unwrap();
            prop_assert!(!updates.is_empty());
            prop_assert_eq!(updates[0].position(), target);

            let mut after = board.clone();
            after.apply_all(&updates).unwrap();
            prop_assert_eq!(after.empty_squares(), scan_empty(&after));
            prop_assert_eq!(after.current_color(target.x, target.y).unwrap(), color);

            // A jump moves a cell; a clone adds one. Captures only add.
            let gained = after.count_of(color) as i64 - own_before as i64;
            let jumped = origin.position().is_some_and(|o| o.distance(target) == 2);
            let min_gain = if jumped { 0 } else { 1 };
            prop_assert!(gained >= min_gain);
        }
    }
}
