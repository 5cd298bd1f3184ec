use std::sync::{Arc, RwLock, RwLockReadGuard};

use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use cell::CellState;
use config::SeedConfig;
use error::Result;
use grid::Grid;
use observer::{Observer, ObserverRegistry};

pub use handle::GridHandle;

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod observer;
pub mod pos;
pub mod rule;

mod handle;

/// Owns the current generation and the observers interested in it.
///
/// Each [`Simulation::advance`] computes the next generation from the current one
/// only, commits it in one swap and then notifies every observer, in
/// subscription order, before returning.
pub struct Simulation {
    grid: Arc<RwLock<Grid>>,
    observers: ObserverRegistry,
    generation: u64,
    parallel: bool,
}

impl Simulation {
    pub fn create(n_locations: usize, live_fraction: f64) -> Result<Self> {
        let grid = Grid::random(n_locations, live_fraction)?;
        Ok(Self::seeded_from(grid))
    }

    pub fn from_config(config: &SeedConfig) -> Result<Self> {
        config.validate()?;

        let grid = match config.rng_seed {
            Some(seed) => Grid::seeded(
                config.n_locations,
                config.live_fraction,
                &mut StdRng::seed_from_u64(seed),
            )?,
            None => Grid::random(config.n_locations, config.live_fraction)?,
        };

        let mut simulation = Self::seeded_from(grid);
        simulation.set_parallel(config.parallel);
        Ok(simulation)
    }

    /// Starts from a prepared grid, bypassing random seeding.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid: Arc::new(RwLock::new(grid)),
            observers: ObserverRegistry::new(),
            generation: 0,
            parallel: false,
        }
    }

    fn seeded_from(grid: Grid) -> Self {
        debug!(
            size = grid.size(),
            population = grid.count_cells(CellState::Alive),
            "seeded simulation"
        );

        Self::from_grid(grid)
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: Observer + 'static,
    {
        self.observers.subscribe(observer);
    }

    pub fn advance(&mut self) {
        let next_grid = {
            let grid = handle::read_grid(&self.grid);

            if self.parallel {
                grid.par_next_generation()
            } else {
                grid.next_generation()
            }
        };

        *handle::write_grid(&self.grid) = next_grid;
        self.generation += 1;

        let failures = self.observers.notify_all();
        debug!(generation = self.generation, failures, "committed generation");
    }

    pub fn snapshot(&self) -> RwLockReadGuard<'_, Grid> {
        handle::read_grid(&self.grid)
    }

    pub fn handle(&self) -> GridHandle {
        GridHandle::new(self.grid.clone())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.snapshot().count_cells(CellState::Alive)
    }

    pub fn size(&self) -> usize {
        self.snapshot().size()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }
}
