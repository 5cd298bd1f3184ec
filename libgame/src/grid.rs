use std::{fmt, iter};

use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    cell::CellState,
    config,
    error::{GameError, Result},
    pos::Position,
    rule,
};

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// A square, hard-edged matrix of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// An all-dead grid of side `size`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GameError::EmptyGrid);
        }

        let cell_count = size.checked_mul(size).ok_or(GameError::TooLarge(size))?;

        Ok(Self {
            size,
            cells: vec![CellState::default(); cell_count],
        })
    }

    pub fn from_rows<R>(rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = Vec<CellState>>,
    {
        let rows = rows.into_iter().collect_vec();
        let size = rows.len();

        if size == 0 {
            return Err(GameError::EmptyGrid);
        }

        if let Some((row, cells)) = rows.iter().find_position(|cells| cells.len() != size) {
            return Err(GameError::NotSquare {
                row,
                len: cells.len(),
                size,
            });
        }

        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn with_alive<P, I>(size: usize, positions: I) -> Result<Self>
    where
        P: Into<Position>,
        I: IntoIterator<Item = P>,
    {
        let mut grid = Self::new(size)?;
        for pos in positions {
            grid.set(pos, CellState::Alive)?;
        }

        Ok(grid)
    }

    /// Seeds `floor(n_locations * live_fraction)` alive cells among `n_locations`,
    /// shuffles them and folds the result row-major into a square of side
    /// `floor(sqrt(n_locations))`. Entries past `size * size` are dropped.
    pub fn seeded<R>(n_locations: usize, live_fraction: f64, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        config::validate_seed_params(n_locations, live_fraction)?;

        let live_count = ((n_locations as f64 * live_fraction) as usize).min(n_locations);
        let dead_count = n_locations - live_count;

        let mut cells = iter::repeat_n(CellState::Alive, live_count)
            .chain(iter::repeat_n(CellState::Dead, dead_count))
            .collect_vec();

        cells.shuffle(rng);

        let size = n_locations.isqrt();
        cells.truncate(size * size);

        Ok(Self { size, cells })
    }

    pub fn random(n_locations: usize, live_fraction: f64) -> Result<Self> {
        Self::seeded(n_locations, live_fraction, &mut rand::rng())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get<P>(&self, pos: P) -> Result<CellState>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        self.pos_to_index(pos)
            .map(|index| self.cells[index])
            .ok_or(GameError::OutOfBounds {
                pos,
                size: self.size,
            })
    }

    pub fn set<P>(&mut self, pos: P, state: CellState) -> Result<()>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        let index = self.pos_to_index(pos).ok_or(GameError::OutOfBounds {
            pos,
            size: self.size,
        })?;

        self.cells[index] = state;
        Ok(())
    }

    /// The states of the up to eight in-bounds cells surrounding `pos`.
    /// Never fails: candidates outside the grid are skipped, not wrapped.
    pub fn neighbors<P>(&self, pos: P) -> impl Iterator<Item = CellState> + '_
    where
        P: Into<Position>,
    {
        let center = pos.into();

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(move |[rel_row, rel_col]| {
                let pos = Position {
                    row: center.row.checked_add_signed(*rel_row)?,
                    col: center.col.checked_add_signed(*rel_col)?,
                };

                self.pos_to_index(pos).map(|index| self.cells[index])
            })
    }

    pub fn live_neighbor_count<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        self.neighbors(pos).filter(|state| state.is_alive()).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.size)
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, state)| (self.index_to_pos(index), *state))
    }

    pub fn count_cells(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }

    /// Computes the following generation into a fresh grid, reading only `self`.
    pub fn next_generation(&self) -> Grid {
        let cells = (0..self.cells.len())
            .map(|index| self.next_cell(index))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Same as [`Grid::next_generation`], with the per-cell work spread over the rayon pool.
    pub fn par_next_generation(&self) -> Grid {
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|index| self.next_cell(index))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    fn next_cell(&self, index: usize) -> CellState {
        let live_neighbors = self.live_neighbor_count(self.index_to_pos(index));
        rule::next_state(self.cells[index], live_neighbors)
    }

    fn pos_to_index(&self, Position { row, col }: Position) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }

        Some(col + row * self.size)
    }

    fn index_to_pos(&self, index: usize) -> Position {
        Position {
            row: index / self.size,
            col: index % self.size,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|state| if state.is_alive() { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}
