//! Console rendering of grid snapshots.

use std::fmt;
use std::io::{self, Write};

use crate::Grid;

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells().chunks(self.width()) {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Write a separator line of `width` dashes followed by the field body,
/// one row of `width` glyphs per row index.
pub fn dump<W: Write>(grid: &Grid, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(grid.width()))?;
    write!(out, "{grid}")
}
