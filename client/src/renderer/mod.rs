use std::io::Write;

use colored::Colorize;
use libgame::{GridHandle, cell::CellState, observer::Observer};

pub mod log;

const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[H";

/// Redraws the whole grid on every generation.
pub struct TerminalView<W> {
    grid: GridHandle,
    out: W,
    color: bool,

    /// Generations seen through `notify`, independent of whether drawing them worked.
    generation: u64,
    frames: u64,
}

impl<W> TerminalView<W>
where
    W: Write,
{
    pub fn new(grid: GridHandle, out: W) -> Self {
        Self {
            grid,
            out,
            color: true,
            generation: 0,
            frames: 0,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let frame = self.grid.with_grid(|grid| {
            let mut frame = String::with_capacity(grid.size() * (grid.size() * 2 + 1) + 64);
            frame.push_str(CLEAR_AND_HOME);

            for row in grid.rows() {
                for cell in row {
                    frame.push_str(&self.draw_cell(*cell));
                }
                frame.push('\n');
            }

            frame.push_str(&format!(
                "generation {} | population {}\n",
                self.generation,
                grid.count_cells(CellState::Alive)
            ));

            frame
        });

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;

        self.frames += 1;
        Ok(())
    }

    fn draw_cell(&self, cell: CellState) -> String {
        match (cell, self.color) {
            (CellState::Alive, true) => "██".red().to_string(),
            (CellState::Alive, false) => "##".to_owned(),
            (CellState::Dead, _) => "  ".to_owned(),
        }
    }
}

impl<W> Observer for TerminalView<W>
where
    W: Write,
{
    fn notify(&mut self) -> anyhow::Result<()> {
        self.generation += 1;
        self.render()
    }
}
