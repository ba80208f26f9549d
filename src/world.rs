use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::grid::Grid;
use crate::grid::GridError;

/// Everything that the ticker thread and the UI both touch
struct State {
    grid: Grid,

    /// Whether [`World::step`] advances the grid
    running: bool,
}

/// A [`Grid`] that can be shared between threads.
///
/// All reads and writes go through a single lock. A tick holds the write lock for both of
/// its phases, so nobody can observe or toggle a cell in between them.
pub struct World {
    state: RwLock<State>,
}

impl World {
    /// Wrap `grid`. The world starts out running.
    pub fn new(grid: Grid) -> Self {
        Self {
            state: RwLock::new(State {
                grid,
                running: true,
            }),
        }
    }

    /// Advance the grid by one generation if the world is running. Returns whether it did.
    pub fn step(&self) -> bool {
        let mut state = self.write();

        if !state.running {
            return false;
        }

        state.grid.tick();
        true
    }

    /// Advance the grid by one generation, running or not
    pub fn tick(&self) {
        self.write().grid.tick();
    }

    pub fn start(&self) {
        self.set_running(true);
    }

    pub fn pause(&self) {
        self.set_running(false);
    }

    /// Flip between running and paused. Returns the new state.
    pub fn toggle_running(&self) -> bool {
        let mut state = self.write();
        state.running = !state.running;

        info!(running = state.running, "toggled simulation");

        state.running
    }

    pub fn is_running(&self) -> bool {
        self.read().running
    }

    pub fn toggle(&self, x: usize, y: usize) -> Result<(), GridError> {
        self.write().grid.toggle(x, y)?;

        debug!(x, y, "toggled cell");

        Ok(())
    }

    pub fn set_alive(&self, x: usize, y: usize) -> Result<(), GridError> {
        self.write().grid.set_alive(x, y)
    }

    pub fn clear(&self) {
        self.write().grid.clear();

        info!("cleared grid");
    }

    /// Run `f` against the grid while holding the read lock
    pub fn with_grid<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Grid) -> R,
    {
        f(&self.read().grid)
    }

    /// Copy out everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        let state = self.read();
        let grid = &state.grid;

        Snapshot {
            width: grid.width(),
            height: grid.height(),
            generation: grid.generation(),
            population: grid.population(),
            running: state.running,
            alive: grid.cells().map(|c| c.is_alive()).collect(),
        }
    }

    fn set_running(&self, running: bool) {
        self.write().running = running;

        info!(running, "set simulation state");
    }

    // A panic while the lock is held can only come from outside the grid (a tick on a valid
    // grid never panics), so the state behind a poisoned lock is still whole.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(|e| {
            warn!("world lock poisoned, recovering");
            PoisonError::into_inner(e)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(|e| {
            warn!("world lock poisoned, recovering");
            PoisonError::into_inner(e)
        })
    }
}

/// A consistent copy of the visible state of a [`World`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    pub generation: u64,
    pub population: usize,
    pub running: bool,

    /// Row-major, `alive[y * width + x]`
    alive: Vec<bool>,
}

impl Snapshot {
    /// `None` when `(x, y)` is out of bounds
    pub fn is_alive(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.width && y < self.height {
            Some(self.alive[y * self.width + x])
        } else {
            None
        }
    }

    /// Every cell as `(x, y, alive)`, row by row
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let w = self.width;

        self.alive
            .iter()
            .enumerate()
            .map(move |(i, &alive)| (i % w, i / w, alive))
    }
}
