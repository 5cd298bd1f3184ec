use std::{
    env, io,
    sync::mpsc,
    thread,
};

use anyhow::Context;
use config::ClientConfig;
use libgame::{Simulation, observer::Observer};
use renderer::{TerminalView, log::PopulationLog};
use ticker::Ticker;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod renderer;
mod ticker;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = match env::args().nth(1) {
        Some(config_path) => ClientConfig::load(&config_path)
            .with_context(|| format!("Couldn't load config from {config_path}"))?,
        None => ClientConfig::default(),
    };

    let mut simulation =
        Simulation::from_config(&config.seed).context("Couldn't create simulation")?;

    info!(
        size = simulation.size(),
        population = simulation.population(),
        parallel = simulation.is_parallel(),
        "starting simulation"
    );

    if config.render {
        let mut view = TerminalView::new(simulation.handle(), io::stdout()).with_color(config.color);
        view.notify().context("Couldn't draw initial generation")?;
        simulation.subscribe(view);
    }

    let log = PopulationLog::new(simulation.handle(), config.log_every);
    simulation.subscribe(log);

    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || cli::run_cli(sender));

    Ticker::new(simulation, receiver, &config).run();
    Ok(())
}
