//! Bloxorz Solver Library
//!
//! Finds the shortest sequence of rolls that brings a 1x1x2 block from its
//! start cell to stand upright on the target cell of a grid map.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod levels;
pub mod persistence;
pub mod solver;

pub use error::{MapError, ParseMoveError, ReplayError, Result};
pub use geometry::{Block, BlockState, Cell, Move, Orientation};
pub use grid::{Map, Marker};
pub use solver::{Solution, SolveOptions, SolveOutcome, SolveStats};

/// Parses `rows` and returns the shortest move string, or `None` when the
/// target cannot be reached.
///
/// Map errors are reported before any search runs.
pub fn solve_rows<S: AsRef<str>>(rows: &[S]) -> Result<Option<String>> {
    let map = Map::parse(rows)?;
    let outcome = solver::solve_map(&map, &SolveOptions::default());
    Ok(outcome.into_solution().map(|solution| solution.to_string()))
}
