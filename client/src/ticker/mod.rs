use std::sync::mpsc::{Receiver, TryRecvError};

use libgame::Simulation;
use sleeper::Sleeper;
use tracing::{debug, info};

use crate::{cli::Command, config::ClientConfig};

pub mod sleeper;

/// Drives a [`Simulation`] on a fixed cadence, applying commands between ticks.
pub struct Ticker {
    simulation: Simulation,
    commands: Receiver<Command>,
    sleeper: Sleeper,
    running: bool,
    max_generations: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

impl Ticker {
    pub fn new(simulation: Simulation, commands: Receiver<Command>, config: &ClientConfig) -> Self {
        Self {
            simulation,
            commands,
            sleeper: Sleeper::per_second(config.ticks_per_second),
            running: !config.start_paused,
            max_generations: config.max_generations,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn run(&mut self) {
        loop {
            if self.handle_commands() == Flow::Exit {
                break;
            }

            if self.running {
                self.simulation.advance();
            }

            if self.limit_reached() {
                info!(
                    generation = self.simulation.generation(),
                    "reached generation limit"
                );
                break;
            }

            self.sleeper.sleep();
        }

        info!(
            generation = self.simulation.generation(),
            population = self.simulation.population(),
            "stopped"
        );
    }

    fn handle_commands(&mut self) -> Flow {
        loop {
            match self.commands.try_recv() {
                Ok(command) => {
                    if self.apply(command) == Flow::Exit {
                        return Flow::Exit;
                    }
                }
                Err(TryRecvError::Empty) => return Flow::Continue,
                // Without an input source a paused ticker could never resume.
                Err(TryRecvError::Disconnected) if !self.running => return Flow::Exit,
                Err(TryRecvError::Disconnected) => return Flow::Continue,
            }
        }
    }

    fn apply(&mut self, command: Command) -> Flow {
        debug!(?command, "applying command");

        match command {
            Command::Step(times) => {
                for _ in 0..times {
                    if self.limit_reached() {
                        break;
                    }
                    self.simulation.advance();
                }
            }
            Command::Pause => self.running = false,
            Command::Run => self.running = true,
            Command::Rate(rate) => self.sleeper.set_rate(rate),
            Command::Exit => return Flow::Exit,
        }

        Flow::Continue
    }

    fn limit_reached(&self) -> bool {
        self.max_generations
            .is_some_and(|max_generations| self.simulation.generation() >= max_generations)
    }
}
