//! File I/O for maps and solutions.
//!
//! Map files hold one row per line using `0`, `1`, `B` and `X`. Solution
//! files hold the move string on a single line.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::grid::Map;
use crate::solver::Solution;

/// Reads and parses a map file.
pub fn load_map(path: impl AsRef<Path>) -> Result<Map> {
    let text = fs::read_to_string(path)?;
    text.parse()
}

/// Writes a solution as its move string followed by a newline.
pub fn save_solution(path: impl AsRef<Path>, solution: &Solution) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "{solution}")?;
    Ok(())
}
