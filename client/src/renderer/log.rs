use libgame::{GridHandle, observer::Observer};
use tracing::info;

/// Logs the population every `every` generations.
pub struct PopulationLog {
    grid: GridHandle,
    every: u64,
    generation: u64,
}

impl PopulationLog {
    pub fn new(grid: GridHandle, every: u64) -> Self {
        Self {
            grid,
            every: every.max(1),
            generation: 0,
        }
    }
}

impl Observer for PopulationLog {
    fn notify(&mut self) -> anyhow::Result<()> {
        self.generation += 1;

        if self.generation % self.every == 0 {
            info!(
                generation = self.generation,
                population = self.grid.population(),
                "population"
            );
        }

        Ok(())
    }
}
