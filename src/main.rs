//! Terminal 2048 runner (default binary).
//!
//! Puts the terminal in raw mode, runs the game loop over crossterm input and
//! the framebuffer renderer, and restores the terminal on every way out.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ConfigBuilder, WriteLogger};

use term_2048::engine::{run, EndReason, Game};
use term_2048::input::TerminalInput;
use term_2048::term::{restore_terminal, TerminalDisplay};

/// Slide tiles, merge equal numbers, reach 2048.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for tile placement (defaults to the system clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Write debug logs to this file
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.log.as_deref())?;
    install_panic_hook();

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("starting with seed {}", seed);

    let mut display = TerminalDisplay::new();
    let result = display.enter().and_then(|()| play(seed, &mut display));

    // Always try to restore terminal state.
    let _ = display.exit();

    let reason = result?;
    info!("ended: {:?}", reason);
    println!("{}", reason.farewell());
    Ok(())
}

fn play(seed: u32, display: &mut TerminalDisplay) -> Result<EndReason> {
    let mut game = Game::new(seed);
    let mut input = TerminalInput::new();
    run(&mut game, &mut input, display)
}

fn setup_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    WriteLogger::init(
        LevelFilter::Debug,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .build(),
        file,
    )
    .context("failed to install logger")?;
    Ok(())
}

/// Leave raw mode before the default hook prints the panic message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
