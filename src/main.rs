mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ball_collision::compute::TICK;
use ball_collision::game_loop::{sleep_budget, GameLoop, LoopState};
use ball_collision::input::{command_for, Command};
use ball_collision::render::render_frame;
use display::TerminalRenderer;

#[derive(Parser)]
#[command(name = "ball_collision")]
#[command(about = "Dodge the big balls, grab power-ups, score points")]
struct Args {
    /// Seed for the spawn RNG (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal belongs to the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits (`Ok`) or the loop faults (`Err`).
fn run<W: Write>(out: W, rx: &mpsc::Receiver<Event>, rng: StdRng) -> anyhow::Result<()> {
    let mut renderer = TerminalRenderer::new(out);
    let mut game = GameLoop::new(rng);
    render_frame(&mut renderer, &game.state).context("failed to draw the first frame")?;
    let started = Instant::now();

    loop {
        let tick_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            match command_for(&key) {
                Some(Command::Move(direction)) => game.steer(direction),
                Some(Command::Quit) => {
                    info!(score = game.state.score, ticks = game.state.ticks, "player quit");
                    return Ok(());
                }
                None => {}
            }
        }

        game.step(started.elapsed(), &mut renderer);
        if let LoopState::Faulted(fault) = game.status() {
            bail!("game halted after {} ticks: {fault}", game.state.ticks);
        }

        thread::sleep(sleep_budget(tick_start.elapsed(), TICK));
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(seed = ?args.seed, "starting");

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let setup = out
        .execute(terminal::EnterAlternateScreen)
        .and_then(|out| out.execute(cursor::Hide))
        .map(|_| ());

    let result = match setup {
        Ok(()) => {
            // Dedicate a thread exclusively to blocking event reads, sending
            // them through a channel so the game loop never blocks on I/O.
            let (tx, rx) = mpsc::channel::<Event>();
            thread::spawn(move || {
                while let Ok(ev) = event::read() {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
            });
            run(&mut out, &rx, rng)
        }
        Err(err) => Err(anyhow::Error::new(err).context("failed to prepare the terminal")),
    };

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        error!("{err:#}");
    }
    result
}
