//! Named seed patterns.

use crate::{Grid, Result};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// The ten-cell seed the demo starts from: a 3x3 block with one extra
/// cell on its right edge. Settles into a still life, it never dies out.
pub const DEMO_SEED: Pattern = Pattern {
    name: "Demo block",
    cells: &[
        (7, 6),
        (6, 6),
        (6, 5),
        (6, 4),
        (5, 6),
        (5, 5),
        (5, 4),
        (4, 4),
        (4, 5),
        (4, 6),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(1, 1), (2, 1), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(1, 2), (2, 2), (3, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(2, 1), (3, 1), (4, 1), (1, 2), (2, 2), (3, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(1, 1), (2, 1), (1, 2), (2, 2), (3, 3), (4, 3), (3, 4), (4, 4)],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
];

impl Pattern {
    /// Seed every cell of the pattern into `grid`.
    ///
    /// Every coordinate is validated before the first cell is seeded, so a
    /// pattern that does not fit the grid fails with `InvalidCoordinate`
    /// and leaves the field untouched.
    pub fn apply(&self, grid: &mut Grid) -> Result<()> {
        for &(x, y) in self.cells {
            grid.cell(x, y)?;
        }
        for &(x, y) in self.cells {
            grid.seed(x, y)?;
        }
        Ok(())
    }
}
