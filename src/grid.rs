use crate::{Cell, Error, Result};

/// Relative coordinates of the Moore neighborhood.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed-size rectangular field of cells.
///
/// Cells are stored row-major: the cell at `(x, y)` lives at index
/// `y * width + x`. Every generation is an immutable snapshot:
/// [`Grid::next_gen`] returns a new grid and never touches the receiver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a fully dead field.
    pub fn blank(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            cells: vec![Cell::Dead; width * height],
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells in the field.
    pub fn cap(&self) -> usize {
        self.width * self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::InvalidCoordinate {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Cell state at `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    /// Row-major cell storage.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mark the cell at `(x, y)` live.
    ///
    /// Seeding an already-live cell is a no-op. An out-of-range coordinate
    /// fails with [`Error::InvalidCoordinate`] and leaves the field
    /// untouched.
    pub fn seed(&mut self, x: usize, y: usize) -> Result<()> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = Cell::Live;
        Ok(())
    }

    /// Live cells among the Moore neighbors of `(x, y)`.
    ///
    /// Offsets that land outside the field are skipped: edges are hard
    /// boundaries, there is no wraparound.
    fn count_neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || nx >= self.width as isize || ny < 0 || ny >= self.height as isize {
                continue;
            }
            if self.cells[self.index(nx as usize, ny as usize)].is_live() {
                count += 1;
            }
        }
        count
    }

    fn next_state(&self, x: usize, y: usize) -> Cell {
        let count = self.count_neighbors(x, y);
        match (self.cells[self.index(x, y)], count) {
            (Cell::Dead, 3) => Cell::Live,
            (Cell::Live, c) if !(2..=3).contains(&c) => Cell::Dead,
            (Cell::Live, _) => Cell::Live,
            (state, _) => state,
        }
    }

    /// Compute the next generation as a new grid of the same dimensions,
    /// leaving the receiver unchanged.
    pub fn next_gen(&self) -> Grid {
        let mut cells = vec![Cell::Dead; self.cap()];
        for y in 0..self.height {
            for x in 0..self.width {
                cells[self.index(x, y)] = self.next_state(x, y);
            }
        }
        Grid {
            cells,
            width: self.width,
            height: self.height,
        }
    }

    /// True when every cell is dead.
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_live())
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_live()).count()
    }

    /// Fill the field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for cell in self.cells.iter_mut() {
            *cell = if rng.gen_bool(fill_rate) {
                Cell::Live
            } else {
                Cell::Dead
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_all_dead() {
        let grid = Grid::blank(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cap(), 12);
        assert_eq!(grid.cells().len(), 12);
        assert!(grid.is_extinct());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_blank_rejects_zero_dimensions() {
        assert!(matches!(
            Grid::blank(0, 5),
            Err(Error::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(matches!(
            Grid::blank(5, 0),
            Err(Error::InvalidDimension { width: 5, height: 0 })
        ));
        assert!(matches!(
            Grid::blank(0, 0),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_seed_and_cell_roundtrip() {
        let mut grid = Grid::blank(5, 5).unwrap();
        grid.seed(2, 3).unwrap();
        assert_eq!(grid.cell(2, 3).unwrap(), Cell::Live);
        assert_eq!(grid.cell(3, 2).unwrap(), Cell::Dead);
        // row-major mapping: (x, y) lives at y * width + x
        assert_eq!(grid.cells()[3 * 5 + 2], Cell::Live);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let mut grid = Grid::blank(5, 5).unwrap();
        grid.seed(1, 1).unwrap();
        grid.seed(1, 1).unwrap();
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_seed_out_of_range_fails_and_leaves_grid_untouched() {
        let mut grid = Grid::blank(3, 3).unwrap();
        let before = grid.cells().to_vec();
        assert!(matches!(
            grid.seed(3, 0),
            Err(Error::InvalidCoordinate {
                x: 3,
                y: 0,
                width: 3,
                height: 3
            })
        ));
        assert!(matches!(
            grid.seed(0, 3),
            Err(Error::InvalidCoordinate { .. })
        ));
        assert_eq!(grid.cells(), before.as_slice());
    }

    #[test]
    fn test_cell_out_of_range_fails() {
        let grid = Grid::blank(2, 2).unwrap();
        assert!(grid.cell(2, 0).is_err());
        assert!(grid.cell(0, 2).is_err());
        assert!(grid.cell(1, 1).is_ok());
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut grid = Grid::blank(5, 5).unwrap();
        grid.seed(2, 2).unwrap();
        assert!(grid.next_gen().is_extinct());
    }

    #[test]
    fn test_birth_on_exactly_three_neighbors() {
        let mut grid = Grid::blank(5, 5).unwrap();
        grid.seed(1, 1).unwrap();
        grid.seed(2, 1).unwrap();
        grid.seed(1, 2).unwrap();
        let next = grid.next_gen();
        // (2, 2) has exactly 3 live neighbors and comes alive
        assert_eq!(next.cell(2, 2).unwrap(), Cell::Live);
        // the three parents each have 2 live neighbors and survive
        assert_eq!(next.population(), 4);
    }

    #[test]
    fn test_overcrowded_cell_dies() {
        let mut grid = Grid::blank(5, 5).unwrap();
        // plus shape: center has 4 live neighbors
        for (x, y) in [(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)] {
            grid.seed(x, y).unwrap();
        }
        let next = grid.next_gen();
        assert_eq!(next.cell(2, 2).unwrap(), Cell::Dead);
    }

    #[test]
    fn test_population_matches_direct_scan() {
        let mut grid = Grid::blank(16, 16).unwrap();
        grid.randomize(Some(42), 0.3);
        let scanned = grid.cells().iter().filter(|c| c.is_live()).count();
        assert_eq!(grid.population(), scanned);
        assert_eq!(grid.is_extinct(), grid.population() == 0);
    }

    #[test]
    fn test_randomize_is_reproducible() {
        let mut a = Grid::blank(16, 16).unwrap();
        let mut b = Grid::blank(16, 16).unwrap();
        a.randomize(Some(7), 0.5);
        b.randomize(Some(7), 0.5);
        assert_eq!(a, b);

        let mut c = Grid::blank(16, 16).unwrap();
        c.randomize(Some(8), 0.5);
        assert_ne!(a, c);
    }
}
