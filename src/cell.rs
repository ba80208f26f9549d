/// A single position of the [`Grid`](crate::grid::Grid).
///
/// A cell carries two flags. `alive` is what the rest of the world sees. `pending_death` is
/// scratch space for [`Grid::tick`](crate::grid::Grid::tick): it is written while every
/// cell decides its next state, and read back once all of them have decided. Outside of a
/// tick its value carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    pending_death: bool,

    x: usize,
    y: usize,
}

impl Cell {
    /// Create a dead cell at `(x, y)`.
    pub const fn dead(x: usize, y: usize) -> Self {
        Self {
            alive: false,
            pending_death: true,
            x,
            y,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Turns the cell on
    pub fn set_alive(&mut self) {
        self.alive = true;
        self.pending_death = false;
    }

    /// Turns the cell off
    pub fn set_dead(&mut self) {
        self.alive = false;
        self.pending_death = true;
    }

    pub fn toggle(&mut self) {
        if self.alive {
            self.set_dead();
        } else {
            self.set_alive();
        }
    }

    /// Decide what this cell is going to be next generation, given how many of its neighbors
    /// are currently alive. Only `pending_death` is touched; `alive` stays as-is until
    /// [`Cell::commit`].
    ///
    ///   - alive, fewer than 2 neighbors: dies (under-population)
    ///   - alive, 2 or 3 neighbors: survives
    ///   - alive, more than 3 neighbors: dies (over-population)
    ///   - dead, exactly 3 neighbors: born (reproduction)
    ///
    /// A dead cell with any other count keeps its previous `pending_death`, which is always
    /// `true` for a dead cell.
    pub fn decide_next_state(&mut self, live_neighbors: usize) {
        if self.alive {
            if live_neighbors < 2 {
                self.pending_death = true;
            }
            if live_neighbors == 2 || live_neighbors == 3 {
                self.pending_death = false;
            }
            if live_neighbors > 3 {
                self.pending_death = true;
            }
        } else if live_neighbors == 3 {
            self.pending_death = false;
        }
    }

    /// Apply the decision made by [`Cell::decide_next_state`].
    pub fn commit(&mut self) {
        if self.pending_death {
            self.set_dead();
        } else {
            self.set_alive();
        }
    }
}
