//! blockfall terminal runner (default binary).
//!
//! crossterm supplies input and the framebuffer renderer draws each frame.
//! Gravity runs off wall-clock time measured around `event::poll`.

use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use blockfall::app::App;
use blockfall::config::{ConfigOverrides, GameConfig};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle in the terminal",
    long_about = "Stack falling pieces on a 10x20 board and clear full rows.\n\n\
        CONTROLS:\n  Left/Right h/l  Move      Up k      Rotate     Down j     Soft drop\n  \
        Space           Hard drop  S/Enter   Start      P          Pause\n  \
        R               Reset      Q/Esc     Quit (asks first)   Ctrl-C  Quit now"
)]
struct Args {
    /// JSON config file; command-line flags override its values.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the piece sequence (random when omitted).
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// Fastest allowed gravity interval in milliseconds.
    #[arg(long, value_name = "MS")]
    min_tick_ms: Option<u32>,

    /// Terminal columns per board cell.
    #[arg(long, value_name = "COLS")]
    cell_width: Option<u16>,

    /// Write logs to this file.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log filter directive (e.g. `debug`); `RUST_LOG` takes precedence.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Quit on Q/Esc without the confirmation dialog.
    #[arg(long)]
    no_confirm_quit: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            seed: self.seed,
            min_tick_interval_ms: self.min_tick_ms,
            cell_width: self.cell_width,
            log_file: self.log_file.clone(),
            log_level: self.log_level.clone(),
            no_confirm_quit: self.no_confirm_quit,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = GameConfig::resolve(args.config.as_deref(), &args.overrides())?;
    logging::init(&config)?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(seed, ?config, "starting");
    let mut app = App::new(&config, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut app, GameView::new(config.cell_width, 1));
    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    let summary = app.session().summary();
    info!(score = summary.score, lines = summary.lines, "exiting");
    println!(
        "Thanks for playing! Score {} | Lines {} | Level {}",
        summary.score, summary.lines, summary.level
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, app: &mut App, view: GameView) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    while !app.should_quit() {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(&view, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let ready = event::poll(app.poll_timeout())?;

        // Time spent waiting belongs to the state before the key.
        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        last = now;
        app.advance(elapsed);

        if ready {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }
    Ok(())
}
