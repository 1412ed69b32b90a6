mod cli;
mod config;
mod input;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use duelchess::game::session::GameSession;
use duelchess::game::square::Square;
use duelchess::ui::renderer::{BoardRenderer, RenderOptions};
use env_logger::Env;
use log::{debug, info, warn};

use crate::input::Input;

fn main() -> Result<()> {
    // Initialize logger
    let env = Env::default().filter_or("DUELCHESS_LOG_LEVEL", "info");
    env_logger::Builder::from_env(env).init();

    let cli = cli::Cli::parse();
    let cfg = config::Config::load(cli.config.as_ref()).context("loading configuration")?;
    debug!("using {cfg:?}");
    let options = cfg.render_options();

    match cli.command {
        Some(cli::Commands::Play) | None => {
            let stdin = io::stdin();
            play(stdin.lock(), io::stdout().lock(), &options)
        }
        Some(cli::Commands::Replay { squares }) => replay(&squares, io::stdout().lock(), &options),
    }
}

/// Reads one activation per line until `quit` or end of input.
fn play(input: impl BufRead, mut out: impl Write, options: &RenderOptions) -> Result<()> {
    let mut session = GameSession::new();
    write!(out, "{}", BoardRenderer::render(&session.snapshot(), options))?;

    for line in input.lines() {
        let line = line.context("reading input")?;
        match input::parse(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Restart) => {
                info!("starting a new game");
                session = GameSession::new();
                write!(out, "{}", BoardRenderer::render(&session.snapshot(), options))?;
            }
            Ok(Input::Activate(square)) => {
                let delta = session.activate_square(square);
                write!(out, "{}", BoardRenderer::render(&delta, options))?;
            }
            Err(input::InputError::Empty) => {}
            Err(err) => {
                warn!("{err}");
                writeln!(out, "{err}")?;
            }
        }
        out.flush()?;
    }
    Ok(())
}

fn replay(squares: &[String], mut out: impl Write, options: &RenderOptions) -> Result<()> {
    let mut session = GameSession::new();
    for text in squares {
        let square: Square = text
            .parse()
            .with_context(|| format!("invalid square {text:?}"))?;
        session.activate_square(square);
    }
    write!(out, "{}", BoardRenderer::render(&session.snapshot(), options))?;
    Ok(())
}
