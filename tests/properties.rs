//! Property tests for the transition model and the search.
//!
//! Invariants covered:
//! - `step` is deterministic and leaves its input untouched.
//! - Tipping a standing block over and rolling it back restores it.
//! - Opposite moves undo each other from every orientation.
//! - Whatever the solver returns replays legally onto the target, and is never
//!   longer than a route found by a random walk.

use proptest::prelude::*;

use bloxorz::solver::{self, replay, verify_solution, SolveOptions, SolveOutcome};
use bloxorz::{BlockState, Map, Move, Orientation};

fn any_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::ALL.to_vec())
}

fn any_orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::Standing),
        Just(Orientation::LyingX),
        Just(Orientation::LyingY),
    ]
}

fn any_state() -> impl Strategy<Value = BlockState> {
    (-20i32..20, -20i32..20, any_orientation())
        .prop_map(|(x, y, orientation)| BlockState::new((x, y), orientation))
}

/// An all-passable map with the start and target at the given cells.
fn open_map(width: usize, height: usize, start: (usize, usize), target: (usize, usize)) -> Map {
    let rows: Vec<String> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    if (x, y) == start {
                        'B'
                    } else if (x, y) == target {
                        'X'
                    } else {
                        '1'
                    }
                })
                .collect()
        })
        .collect();
    Map::parse(&rows).unwrap()
}

/// Random rows of `0`/`1` with `B` and `X` dropped on distinct cells.
fn any_map() -> impl Strategy<Value = Map> {
    (2usize..7, 2usize..7)
        .prop_flat_map(|(width, height)| {
            let cells = width * height;
            (
                Just(width),
                prop::collection::vec(prop::bool::weighted(0.75), cells),
                0..cells,
                0..cells - 1,
            )
        })
        .prop_map(|(width, open, start, target)| {
            // skip over the start so the two markers never share a cell
            let target = if target >= start { target + 1 } else { target };
            let rows: Vec<String> = open
                .chunks(width)
                .enumerate()
                .map(|(y, row)| {
                    row.iter()
                        .enumerate()
                        .map(|(x, &passable)| match y * width + x {
                            i if i == start => 'B',
                            i if i == target => 'X',
                            _ if passable => '1',
                            _ => '0',
                        })
                        .collect()
                })
                .collect();
            Map::parse(&rows).unwrap()
        })
}

proptest! {
    #[test]
    fn step_is_pure(state in any_state(), direction in any_move()) {
        let before = state;
        let first = state.step(direction);
        let second = state.step(direction);
        prop_assert_eq!(first, second);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn opposite_moves_roundtrip(state in any_state(), direction in any_move()) {
        prop_assert_eq!(state.step(direction).step(direction.opposite()), state);
    }

    #[test]
    fn standing_block_tips_and_returns_on_open_map(x in 2usize..6, y in 2usize..6) {
        let map = open_map(8, 8, (x, y), (0, 0));
        let start = BlockState::standing(map.start());
        for (there, back) in [(Move::Right, Move::Left), (Move::Down, Move::Up)] {
            let end = replay(&map, start, &[there, back]).unwrap();
            prop_assert_eq!(end, start);
        }
    }

    #[test]
    fn cells_stay_adjacent(state in any_state(), direction in any_move()) {
        let next = state.step(direction);
        let cells: Vec<_> = next.cells().collect();
        let (w, h) = next.orientation.extent();
        prop_assert_eq!(cells.len() as i32, w * h);
        prop_assert_eq!(cells[0], next.anchor);
        if let [(ax, ay), (bx, by)] = cells[..] {
            prop_assert_eq!((bx - ax).abs() + (by - ay).abs(), 1);
        }
    }

    #[test]
    fn solutions_replay_onto_target(map in any_map()) {
        let outcome = solver::solve_map(&map, &SolveOptions::default());
        if let SolveOutcome::Solved(solution) = &outcome {
            prop_assert!(verify_solution(&map, &solution.moves));
        } else {
            prop_assert_eq!(outcome, SolveOutcome::NotFound);
        }
    }

    #[test]
    fn solutions_are_no_longer_than_random_walks(
        map in any_map(),
        walk in prop::collection::vec(any_move(), 0..40),
    ) {
        // keep the legal prefix of the walk and see whether it ever stood on the target
        let mut state = BlockState::standing(map.start());
        let mut walked = None;
        for (index, &direction) in walk.iter().enumerate() {
            let next = state.step(direction);
            if !map.is_legal(&next) {
                continue;
            }
            state = next;
            if state.is_standing_on(map.target()) {
                walked = Some(index + 1);
                break;
            }
        }

        if let Some(steps) = walked {
            let solution = solver::solve_map(&map, &SolveOptions::default()).into_solution();
            prop_assert!(solution.is_some());
            prop_assert!(solution.map_or(0, |s| s.len()) <= steps);
        }
    }

    #[test]
    fn budget_never_exceeded(map in any_map(), max_nodes in 0usize..30) {
        let (outcome, stats) = solver::solve_with_stats(
            &map,
            map.start(),
            map.target(),
            &SolveOptions::with_max_nodes(max_nodes),
        );
        prop_assert!(stats.explored <= max_nodes);
        if let SolveOutcome::BudgetExhausted { explored } = outcome {
            prop_assert_eq!(explored, max_nodes);
        }
    }
}
