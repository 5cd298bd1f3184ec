use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{cell::CellState, grid::Grid};

/// A read-only view on the current generation of a [`Simulation`](crate::Simulation).
///
/// Handles stay valid for the lifetime of the simulation and always see the most
/// recently committed generation.
#[derive(Debug, Clone)]
pub struct GridHandle {
    grid: Arc<RwLock<Grid>>,
}

impl GridHandle {
    pub(crate) fn new(grid: Arc<RwLock<Grid>>) -> Self {
        Self { grid }
    }

    /// Runs `f` against the current generation without copying it.
    ///
    /// The read lock is held only for the duration of `f`, so `f` must not
    /// advance the simulation this handle belongs to.
    pub fn with_grid<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Grid) -> T,
    {
        f(&read_grid(&self.grid))
    }

    pub fn snapshot(&self) -> Grid {
        self.with_grid(Grid::clone)
    }

    pub fn size(&self) -> usize {
        self.with_grid(Grid::size)
    }

    pub fn population(&self) -> usize {
        self.with_grid(|grid| grid.count_cells(CellState::Alive))
    }
}

// The grid is only ever replaced wholesale, so a poisoned lock still holds a
// complete generation.
pub(crate) fn read_grid(grid: &RwLock<Grid>) -> RwLockReadGuard<'_, Grid> {
    grid.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_grid(grid: &RwLock<Grid>) -> RwLockWriteGuard<'_, Grid> {
    grid.write().unwrap_or_else(PoisonError::into_inner)
}
