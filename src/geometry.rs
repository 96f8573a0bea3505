//! Block positions, orientations and the move transition table.
//!
//! A block is a 1x1x2 cuboid. Seen from above it covers either one cell
//! (standing on its end) or two adjacent cells (lying along the x or y axis).
//! Its position is the anchor cell, the top-left-most cell it covers.

use std::fmt;

use crate::grid::Map;

/// A grid cell as `(x, y)`: column then row, origin at the top-left.
pub type Cell = (i32, i32);

/// One of the four unit moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Right,
    Left,
    Down,
    Up,
}

impl Move {
    /// All moves, in the order the solver expands them.
    pub const ALL: [Move; 4] = [Move::Right, Move::Left, Move::Down, Move::Up];

    /// Unit direction of the move.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Move::Right => (1, 0),
            Move::Left => (-1, 0),
            Move::Down => (0, 1),
            Move::Up => (0, -1),
        }
    }

    /// Single-letter code used in solution strings.
    pub const fn code(self) -> char {
        match self {
            Move::Right => 'R',
            Move::Left => 'L',
            Move::Down => 'D',
            Move::Up => 'U',
        }
    }

    pub fn from_code(code: char) -> Option<Move> {
        match code {
            'R' => Some(Move::Right),
            'L' => Some(Move::Left),
            'D' => Some(Move::Down),
            'U' => Some(Move::Up),
            _ => None,
        }
    }

    /// The move that points the other way.
    pub const fn opposite(self) -> Move {
        match self {
            Move::Right => Move::Left,
            Move::Left => Move::Right,
            Move::Down => Move::Up,
            Move::Up => Move::Down,
        }
    }

    const fn is_horizontal(self) -> bool {
        matches!(self, Move::Right | Move::Left)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Footprint shape of the block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Upright, covering a single cell.
    Standing,
    /// Lying along x, covering the anchor and the cell to its right.
    LyingX,
    /// Lying along y, covering the anchor and the cell below it.
    LyingY,
}

impl Orientation {
    /// Footprint width and height in cells.
    pub const fn extent(self) -> (i32, i32) {
        match self {
            Orientation::Standing => (1, 1),
            Orientation::LyingX => (2, 1),
            Orientation::LyingY => (1, 2),
        }
    }
}

/// Immutable block position: anchor cell plus orientation.
///
/// Two states are the same iff both fields match, which is what the solver
/// keys its visited set on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockState {
    pub anchor: Cell,
    pub orientation: Orientation,
}

impl BlockState {
    pub const fn new(anchor: Cell, orientation: Orientation) -> Self {
        Self {
            anchor,
            orientation,
        }
    }

    /// A block standing upright on `cell`.
    pub const fn standing(cell: Cell) -> Self {
        Self::new(cell, Orientation::Standing)
    }

    /// Whether the block stands upright exactly on `cell`.
    pub fn is_standing_on(&self, cell: Cell) -> bool {
        self.orientation == Orientation::Standing && self.anchor == cell
    }

    /// The cells covered by the block, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (x, y) = self.anchor;
        let second = match self.orientation {
            Orientation::Standing => None,
            Orientation::LyingX => Some((x + 1, y)),
            Orientation::LyingY => Some((x, y + 1)),
        };
        std::iter::once(self.anchor).chain(second)
    }

    /// Computes the state after rolling the block one unit in `direction`.
    ///
    /// Never fails: the result may lie off the map or on blocked cells, which
    /// is for [`Map::is_legal`] to decide.
    ///
    /// | orientation | move | result | anchor delta |
    /// |---|---|---|---|
    /// | Standing | Right / Left | LyingX | (1,0) / (-2,0) |
    /// | Standing | Down / Up | LyingY | (0,1) / (0,-2) |
    /// | LyingX | Right / Left | Standing | (2,0) / (-1,0) |
    /// | LyingX | Down / Up | LyingX | (0,1) / (0,-1) |
    /// | LyingY | Down / Up | Standing | (0,2) / (0,-1) |
    /// | LyingY | Right / Left | LyingY | (1,0) / (-1,0) |
    #[must_use]
    pub fn step(self, direction: Move) -> BlockState {
        let (x, y) = self.anchor;
        let (dx, dy) = direction.delta();

        let (orientation, (ax, ay)) = match (self.orientation, direction.is_horizontal()) {
            // tipping over: the block lands beside the cell it stood on
            (Orientation::Standing, true) => (Orientation::LyingX, roll_out(dx, dy)),
            (Orientation::Standing, false) => (Orientation::LyingY, roll_out(dx, dy)),
            // rolling along the long axis stands the block up past its far end
            (Orientation::LyingX, true) | (Orientation::LyingY, false) => {
                (Orientation::Standing, roll_up(dx, dy))
            }
            // rolling across the long axis translates the footprint
            (Orientation::LyingX, false) | (Orientation::LyingY, true) => {
                (self.orientation, (dx, dy))
            }
        };

        BlockState::new((x + ax, y + ay), orientation)
    }
}

/// Anchor delta when a standing block tips over: one cell forward in the
/// positive direction, two cells back in the negative one.
const fn roll_out(dx: i32, dy: i32) -> (i32, i32) {
    (tip(dx), tip(dy))
}

const fn tip(d: i32) -> i32 {
    match d {
        1 => 1,
        -1 => -2,
        _ => 0,
    }
}

/// Anchor delta when a lying block stands up: two cells forward in the
/// positive direction, one cell back in the negative one.
const fn roll_up(dx: i32, dy: i32) -> (i32, i32) {
    (rise(dx), rise(dy))
}

const fn rise(d: i32) -> i32 {
    match d {
        1 => 2,
        -1 => -1,
        _ => 0,
    }
}

/// A block that moves in place.
///
/// Wraps a [`BlockState`] for callers that want to drive a single block move
/// by move; the solver itself works on plain states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    state: BlockState,
}

impl Block {
    /// A block standing on `cell`.
    pub const fn new(cell: Cell) -> Self {
        Self {
            state: BlockState::standing(cell),
        }
    }

    pub const fn state(&self) -> BlockState {
        self.state
    }

    /// Rolls the block if the move is legal on `map`.
    ///
    /// Returns `false` and leaves the block where it was otherwise.
    pub fn try_move(&mut self, map: &Map, direction: Move) -> bool {
        let next = self.state.step(direction);
        if map.is_legal(&next) {
            self.state = next;
            true
        } else {
            false
        }
    }
}

impl From<BlockState> for Block {
    fn from(state: BlockState) -> Self {
        Self { state }
    }
}
