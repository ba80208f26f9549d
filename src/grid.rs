use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::cell::Cell;

/// Offsets of the eight cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimensions {width}x{height}, both sides must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// A fixed size, bounded matrix of [`Cell`]s.
///
/// Cells are stored row-major: cell `(x, y)` lives at `y * width + x`. There is no
/// wraparound; cells along the edges simply have fewer neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,

    /// Number of ticks since construction (or since the last [`Grid::clear`])
    generation: u64,

    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `width` by `height` grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };

        if width == 0 || height == 0 {
            return Err(invalid);
        }

        let len = width.checked_mul(height).ok_or(invalid)?;
        let mut cells = Vec::with_capacity(len);

        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::dead(x, y));
            }
        }

        Ok(Self {
            width,
            height,
            generation: 0,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        let i = self.index(x, y)?;

        Ok(&self.cells[i])
    }

    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, GridError> {
        self.cell(x, y).map(Cell::is_alive)
    }

    /// Coordinates of every live cell, row by row
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter(|c| c.is_alive())
            .map(Cell::position)
            .collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// The cells bordering `(x, y)` that lie inside the grid. Interior cells have 8 of these,
    /// edge cells 5 and corner cells 3.
    pub fn neighbors_of(
        &self,
        x: usize,
        y: usize,
    ) -> Result<impl Iterator<Item = &Cell>, GridError> {
        self.index(x, y)?;

        Ok(self.neighbors(x, y))
    }

    pub fn live_neighbor_count(&self, x: usize, y: usize) -> Result<usize, GridError> {
        Ok(self.neighbors_of(x, y)?.filter(|c| c.is_alive()).count())
    }

    pub fn set_alive(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.cells[i].set_alive();

        Ok(())
    }

    pub fn set_dead(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.cells[i].set_dead();

        Ok(())
    }

    pub fn toggle(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.cells[i].toggle();

        Ok(())
    }

    /// Bring every listed cell to life. Either all coordinates are in bounds and all cells are
    /// set, or the grid is left untouched.
    pub fn seed<I>(&mut self, coords: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let indices = coords
            .into_iter()
            .map(|(x, y)| self.index(x, y))
            .collect::<Result<Vec<_>, _>>()?;

        for i in indices {
            self.cells[i].set_alive();
        }

        Ok(())
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::set_dead);
        self.generation = 0;
    }

    /// Advance the grid by one generation.
    ///
    /// Every cell first decides its next state against the current generation, and only
    /// once all of them have decided are the decisions applied. Mixing the two would let a
    /// cell see a neighbor that has already moved on.
    pub fn tick(&mut self) {
        // decide
        for i in 0..self.cells.len() {
            let (x, y) = self.cells[i].position();
            let n = self.neighbors(x, y).filter(|c| c.is_alive()).count();

            self.cells[i].decide_next_state(n);
        }

        // apply
        for cell in self.cells.iter_mut() {
            cell.commit();
        }

        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.population(),
            "tick"
        );
    }

    fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = &Cell> {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let x = x.checked_add_signed(dx)?;
            let y = y.checked_add_signed(dy)?;

            self.get(x, y)
        })
    }

    fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[y * self.width + x])
        } else {
            None
        }
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.width);

        writeln!(
            f,
            "generation {} ({}x{})",
            self.generation, self.width, self.height
        )?;
        writeln!(f, "+{border}+")?;

        for row in self.cells.chunks(self.width) {
            write!(f, "|")?;
            for cell in row {
                write!(f, "{}", if cell.is_alive() { '#' } else { '.' })?;
            }
            writeln!(f, "|")?;
        }

        writeln!(f, "+{border}+")
    }
}

#[cfg(test)]
mod test {
    use super::Grid;
    use super::GridError;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 4),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(Grid::new(4, 0).is_err());
        assert!(Grid::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn cells_match_their_position() {
        let grid = Grid::new(4, 3).unwrap();

        for (i, cell) in grid.cells().enumerate() {
            assert_eq!(cell.position(), (i % 4, i / 4));
        }
    }

    #[test]
    fn neighbor_counts_on_non_square_grid() {
        let grid = Grid::new(5, 3).unwrap();
        let count = |x, y| grid.neighbors_of(x, y).unwrap().count();

        assert_eq!(count(0, 0), 3);
        assert_eq!(count(4, 0), 3);
        assert_eq!(count(0, 2), 3);
        assert_eq!(count(4, 2), 3);
        assert_eq!(count(2, 0), 5);
        assert_eq!(count(4, 1), 5);
        assert_eq!(count(2, 1), 8);
    }

    #[test]
    fn neighbors_of_single_cell_grid() {
        let grid = Grid::new(1, 1).unwrap();

        assert_eq!(grid.neighbors_of(0, 0).unwrap().count(), 0);
    }

    #[test]
    fn neighbors_exclude_the_center() {
        let grid = Grid::new(3, 3).unwrap();
        let positions: Vec<_> = grid.neighbors_of(1, 1).unwrap().map(|c| c.position()).collect();

        assert!(!positions.contains(&(1, 1)));
        assert_eq!(positions.len(), 8);
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut grid = Grid::new(3, 2).unwrap();
        let err = GridError::OutOfBounds {
            x: 3,
            y: 0,
            width: 3,
            height: 2,
        };

        assert_eq!(grid.toggle(3, 0), Err(err));
        assert_eq!(grid.cell(3, 0).err(), Some(err));
        assert!(grid.neighbors_of(0, 2).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn seed_is_all_or_nothing() {
        let mut grid = Grid::new(3, 3).unwrap();

        assert!(grid.seed([(0, 0), (1, 1), (3, 3)]).is_err());
        assert_eq!(grid.population(), 0);

        grid.seed([(0, 0), (1, 1)]).unwrap();
        assert_eq!(grid.live_cells(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn tick_counts_generations_and_clear_resets() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_alive(1, 1).unwrap();

        grid.tick();
        grid.tick();
        assert_eq!(grid.generation(), 2);

        grid.set_alive(0, 0).unwrap();
        grid.clear();
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn live_neighbor_count_ignores_dead_cells() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.seed([(0, 0), (2, 2), (1, 1)]).unwrap();

        assert_eq!(grid.live_neighbor_count(1, 1).unwrap(), 2);
        assert_eq!(grid.live_neighbor_count(0, 1).unwrap(), 2);
        assert_eq!(grid.live_neighbor_count(2, 0).unwrap(), 1);
    }
}
