use std::{io, sync::mpsc::Sender};

use anyhow::{Context, bail, ensure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Step(usize),
    Pause,
    Run,
    Rate(u64),
    Exit,
}

/// Reads commands from stdin, one per line, until EOF or until the ticker goes away.
pub fn run_cli(sender: Sender<Command>) {
    for line_res in io::stdin().lines() {
        let line = match line_res {
            Ok(line) => line,
            Err(err) => {
                eprintln!("! {err}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(command) => {
                if sender.send(command).is_err() || command == Command::Exit {
                    break;
                }
            }
            Err(e) => eprintln!("! {e:?}"),
        }
    }
}

pub fn parse_command(line: &str) -> anyhow::Result<Command> {
    let mut args = line.split_whitespace();

    let command = match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;
            Command::Step(times)
        }

        "pause" | "stop" => Command::Pause,

        "run" => Command::Run,

        "rate" => {
            let rate = args
                .next()
                .context("missing ticks per second")?
                .parse::<u64>()?;

            ensure!(rate > 0, "Rate must be positive");
            Command::Rate(rate)
        }

        "exit" | "quit" => Command::Exit,

        _ => bail!("Unknown command"),
    };

    Ok(command)
}
