//! Error types for map loading, move strings and solution replay.

use thiserror::Error;

use crate::geometry::{BlockState, Cell, Move};

/// Result type for map loading.
pub type Result<T> = std::result::Result<T, MapError>;

/// Why a map was rejected.
///
/// Everything except `MissingMarker` and `Io` means the map text itself is
/// malformed.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown marker {marker:?} at {cell:?}")]
    UnknownMarker { marker: char, cell: Cell },
    #[error("marker {marker:?} appears more than once")]
    DuplicateMarker { marker: char },
    #[error("map has no {marker:?} marker")]
    MissingMarker { marker: char },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MapError {
    /// Whether the map text itself is malformed, as opposed to missing a marker
    /// or failing to load.
    pub fn is_invalid_map(&self) -> bool {
        matches!(
            self,
            MapError::Empty
                | MapError::RaggedRow { .. }
                | MapError::UnknownMarker { .. }
                | MapError::DuplicateMarker { .. }
        )
    }
}

/// A move sequence that leaves the map or lands on a blocked cell.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("starting position {0:?} is not legal")]
    IllegalStart(BlockState),
    #[error("move {index} ({direction}) leads to illegal position {state:?}")]
    IllegalMove {
        index: usize,
        direction: Move,
        state: BlockState,
    },
}

/// A move string containing something other than `R`, `L`, `D` or `U`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid move code {code:?} at position {position}")]
pub struct ParseMoveError {
    pub code: char,
    pub position: usize,
}
