//! Built-in levels.
//!
//! Each level carries a reference solution known to reach the target. The
//! solver is free to return a different route of the same length.

use crate::error::Result;
use crate::grid::Map;

/// A named map with a known-good solution.
pub struct Level {
    pub name: &'static str,
    pub rows: &'static [&'static str],
    /// A legal move string from start to target.
    pub reference: &'static str,
}

impl Level {
    /// Parses the level's map.
    pub fn map(&self) -> Result<Map> {
        Map::parse(self.rows)
    }
}

/// All built-in levels, easiest first.
pub const LEVELS: &[Level] = &[
    Level {
        name: "first-steps",
        rows: &[
            "1110000000",
            "1B11110000",
            "1111111110",
            "0111111111",
            "0000011X11",
            "0000001110",
        ],
        reference: "RRDRRRD",
    },
    Level {
        name: "the-bridge",
        rows: &[
            "000000111111100",
            "111100111001100",
            "111111111001111",
            "1B11000000011X1",
            "111100000001111",
            "000000000000111",
        ],
        reference: "ULDRURRRRUURRRDDDRU",
    },
    Level {
        name: "long-way-round",
        rows: &[
            "00011111110000",
            "00011111110000",
            "11110000011100",
            "11100000001100",
            "11100000001100",
            "1B100111111111",
            "11100111111111",
            "000001X1001111",
            "00000111001111",
        ],
        reference: "ULURRURRRRRRDRDDDDDRULLLLLLD",
    },
    Level {
        name: "staircase",
        rows: &[
            "11111100000",
            "1B111100000",
            "11110111100",
            "11100111110",
            "10000001111",
            "11110000111",
            "11110000111",
            "00110111111",
            "01111111111",
            "0110011X100",
            "01100011100",
        ],
        reference: "DRURURDDRRDDDLD",
    },
    Level {
        name: "detour",
        rows: &[
            "000001111110000",
            "000001001110000",
            "000001001111100",
            "B11111000001111",
            "0000111000011X1",
            "000011100000111",
            "000000100110000",
            "000000111110000",
            "000000111110000",
            "000000011100000",
        ],
        reference: "RRRDRDDRDDRULLLUULUUURRRDDLURRDRDDR",
    },
];

/// Looks up a built-in level by index.
pub fn level(index: usize) -> Option<&'static Level> {
    LEVELS.get(index)
}
