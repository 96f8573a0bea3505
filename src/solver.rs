//! Breadth-first search over block states.
//!
//! Every move costs the same, so the first time BFS dequeues the goal state
//! the path recorded to it is a shortest one. Neighbors are expanded in
//! [`Move::ALL`] order, which makes the returned route reproducible among
//! routes of equal length.

use std::collections::hash_map::Entry;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;

use crate::error::{ParseMoveError, ReplayError};
use crate::geometry::{BlockState, Cell, Move};
use crate::grid::Map;

/// A sequence of moves from the start to the target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Move>,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Formats the moves as a string of `R`, `L`, `D` and `U`.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.moves.iter().try_for_each(|direction| write!(f, "{direction}"))
    }
}

impl FromStr for Solution {
    type Err = ParseMoveError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let moves = text
            .trim()
            .chars()
            .enumerate()
            .map(|(position, code)| Move::from_code(code).ok_or(ParseMoveError { code, position }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Solution { moves })
    }
}

/// Search limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Maximum number of states to expand before giving up. `None` searches
    /// the whole reachable space.
    pub max_nodes: Option<usize>,
}

impl SolveOptions {
    pub fn with_max_nodes(max_nodes: usize) -> Self {
        Self {
            max_nodes: Some(max_nodes),
        }
    }
}

/// Result of a search. None of these are errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A shortest route to the goal.
    Solved(Solution),
    /// Every reachable state was explored without standing on the target.
    NotFound,
    /// The node budget ran out first.
    BudgetExhausted { explored: usize },
}

impl SolveOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }
}

/// Counters from a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// States taken off the frontier and expanded.
    pub explored: usize,
    /// Distinct states recorded, including the start.
    pub discovered: usize,
}

/// Legal states one move away from `state`, in [`Move::ALL`] order.
pub fn neighbors(map: &Map, state: BlockState) -> impl Iterator<Item = (Move, BlockState)> + '_ {
    Move::ALL
        .into_iter()
        .map(move |direction| (direction, state.step(direction)))
        .filter(move |(_, next)| map.is_legal(next))
}

/// Finds a shortest route for a block standing on `start` to stand on `target`.
pub fn solve(map: &Map, start: Cell, target: Cell, options: &SolveOptions) -> SolveOutcome {
    solve_with_stats(map, start, target, options).0
}

/// Solves `map` from its `B` marker to its `X` marker.
pub fn solve_map(map: &Map, options: &SolveOptions) -> SolveOutcome {
    solve(map, map.start(), map.target(), options)
}

/// Like [`solve`], also reporting how much of the state space was searched.
pub fn solve_with_stats(
    map: &Map,
    start: Cell,
    target: Cell,
    options: &SolveOptions,
) -> (SolveOutcome, SolveStats) {
    let start = BlockState::standing(start);
    if !map.is_legal(&start) {
        log::debug!("start {:?} is not legal, nothing to search", start.anchor);
        return (SolveOutcome::NotFound, SolveStats::default());
    }

    // each discovered state maps to the state and move it was first reached by
    let mut parents: FxHashMap<BlockState, Option<(BlockState, Move)>> = FxHashMap::default();
    parents.insert(start, None);
    let mut frontier = VecDeque::from([start]);
    let mut explored = 0;

    let outcome = loop {
        let Some(state) = frontier.pop_front() else {
            break SolveOutcome::NotFound;
        };

        if state.is_standing_on(target) {
            break SolveOutcome::Solved(reconstruct(&parents, state));
        }

        if options.max_nodes.is_some_and(|max| explored >= max) {
            log::warn!("node budget of {explored} exhausted before reaching {target:?}");
            break SolveOutcome::BudgetExhausted { explored };
        }
        explored += 1;

        for (direction, next) in neighbors(map, state) {
            if let Entry::Vacant(entry) = parents.entry(next) {
                entry.insert(Some((state, direction)));
                frontier.push_back(next);
            }
        }
    };

    let stats = SolveStats {
        explored,
        discovered: parents.len(),
    };
    log::debug!(
        "search finished: {} after {} expanded, {} discovered",
        match &outcome {
            SolveOutcome::Solved(solution) => format!("solved in {} moves", solution.len()),
            SolveOutcome::NotFound => "no route".to_string(),
            SolveOutcome::BudgetExhausted { .. } => "budget exhausted".to_string(),
        },
        stats.explored,
        stats.discovered
    );

    (outcome, stats)
}

/// Walks predecessor links back from `goal` to the start.
fn reconstruct(
    parents: &FxHashMap<BlockState, Option<(BlockState, Move)>>,
    goal: BlockState,
) -> Solution {
    let mut moves = Vec::new();
    let mut current = goal;

    while let Some(&Some((previous, direction))) = parents.get(&current) {
        moves.push(direction);
        current = previous;
    }

    moves.reverse();
    Solution { moves }
}

/// Applies `moves` to `start`, checking every intermediate state.
///
/// Returns the final state, or the first move that breaks legality.
pub fn replay(map: &Map, start: BlockState, moves: &[Move]) -> Result<BlockState, ReplayError> {
    if !map.is_legal(&start) {
        return Err(ReplayError::IllegalStart(start));
    }

    moves
        .iter()
        .enumerate()
        .try_fold(start, |state, (index, &direction)| {
            let next = state.step(direction);
            if map.is_legal(&next) {
                Ok(next)
            } else {
                Err(ReplayError::IllegalMove {
                    index,
                    direction,
                    state: next,
                })
            }
        })
}

/// Whether `moves` take the block from the map's start to standing on its
/// target without ever leaving solid ground.
pub fn verify_solution(map: &Map, moves: &[Move]) -> bool {
    replay(map, BlockState::standing(map.start()), moves)
        .is_ok_and(|end| end.is_standing_on(map.target()))
}
