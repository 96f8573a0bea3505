//! Map representation, parsing and legality checks.
//!
//! The map is stored as a flat row-major array of markers. Anything outside
//! its bounds counts as blocked.

use std::str::FromStr;

use crate::error::{MapError, Result};
use crate::geometry::{BlockState, Cell};

/// Character drawn for cells covered by the block in [`Map::render`].
pub const BLOCK_CHAR: char = '#';

/// Contents of a single map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    Blocked,
    Passable,
    /// Passable cell the block starts on.
    BlockStart,
    /// Passable cell the block must stand on to finish.
    Target,
}

impl Marker {
    pub const fn from_char(marker: char) -> Option<Marker> {
        match marker {
            '0' => Some(Marker::Blocked),
            '1' => Some(Marker::Passable),
            'B' => Some(Marker::BlockStart),
            'X' => Some(Marker::Target),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Marker::Blocked => '0',
            Marker::Passable => '1',
            Marker::BlockStart => 'B',
            Marker::Target => 'X',
        }
    }

    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Marker::Blocked)
    }
}

/// Converts in-bounds coordinates to an index into the flat cell array.
#[inline(always)]
fn cell_to_idx(width: usize, (x, y): Cell) -> usize {
    y as usize * width + x as usize
}

/// A rectangular puzzle map with exactly one start and one target.
///
/// Read-only once parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    cells: Vec<Marker>,
    width: usize,
    height: usize,
    start: Cell,
    target: Cell,
}

impl Map {
    /// Parses a map from rows of `0`, `1`, `B` and `X`.
    ///
    /// Rows must all have the same length, and `B` and `X` must each appear
    /// exactly once.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Map> {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut target = None;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, marker_char) in row.chars().enumerate() {
                let cell = (x as i32, y as i32);
                let marker = Marker::from_char(marker_char).ok_or(MapError::UnknownMarker {
                    marker: marker_char,
                    cell,
                })?;

                let slot = match marker {
                    Marker::BlockStart => Some(&mut start),
                    Marker::Target => Some(&mut target),
                    _ => None,
                };
                if let Some(slot) = slot {
                    if slot.replace(cell).is_some() {
                        return Err(MapError::DuplicateMarker {
                            marker: marker_char,
                        });
                    }
                }

                cells.push(marker);
            }
        }

        let start = start.ok_or(MapError::MissingMarker {
            marker: Marker::BlockStart.to_char(),
        })?;
        let target = target.ok_or(MapError::MissingMarker {
            marker: Marker::Target.to_char(),
        })?;

        Ok(Map {
            cells,
            width,
            height: rows.len(),
            start,
            target,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell marked `B`.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Cell marked `X`.
    pub fn target(&self) -> Cell {
        self.target
    }

    /// Marker at `cell`, or `None` when the cell lies outside the map.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Marker> {
        let (x, y) = cell;
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.cells[cell_to_idx(self.width, cell)])
    }

    /// Whether every cell covered by `state` is on the map and passable.
    #[inline]
    pub fn is_legal(&self, state: &BlockState) -> bool {
        state
            .cells()
            .all(|cell| self.get(cell).is_some_and(Marker::is_passable))
    }

    /// Draws the map one row per line, with the block's cells as `#`.
    pub fn render(&self, block: Option<&BlockState>) -> String {
        let mut chars: Vec<char> = self.cells.iter().map(|marker| marker.to_char()).collect();

        if let Some(state) = block {
            for cell in state.cells() {
                if self.get(cell).is_some() {
                    chars[cell_to_idx(self.width, cell)] = BLOCK_CHAR;
                }
            }
        }

        chars
            .chunks(self.width)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Parses newline-separated map text. Blank lines around the map are ignored.
impl FromStr for Map {
    type Err = MapError;

    fn from_str(text: &str) -> Result<Map> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let first = lines.iter().position(|line| !line.is_empty());
        let last = lines.iter().rposition(|line| !line.is_empty());

        match (first, last) {
            (Some(first), Some(last)) => Map::parse(&lines[first..=last]),
            _ => Err(MapError::Empty),
        }
    }
}

/// Whether `state` may occupy `map`. See [`Map::is_legal`].
pub fn is_legal(map: &Map, state: &BlockState) -> bool {
    map.is_legal(state)
}
