//! Blockfall runner (default binary).
//!
//! Interactive mode uses crossterm for input and the framebuffer renderer.
//! Plain mode (`--plain`, or when stdin is not a terminal) reads one command
//! per line from stdin and prints every frame as text.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;

use blockfall::core::{GameResult, GameState, UniformSource};
use blockfall::input::{LineInput, TerminalInput};
use blockfall::term::{GameView, TerminalScreen, TextRenderer};
use blockfall::types::{GridConfig, DEFAULT_COLS, DEFAULT_ROWS};

/// Turn-based falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Turn-based falling-block puzzle in the terminal. Every key press is one turn; clearing n rows at once scores n².",
    long_about = "Blockfall is a falling-block puzzle without a gravity timer: the piece \
        only moves when you press a key.\n\n\
        CONTROLS:\n  Left/h/a    Move left     Right/l/d   Move right\n  \
        Up/k/w/x    Rotate CW     z/y         Rotate CCW\n  \
        Down/j/s    Soft drop     Space/Enter Hard drop\n  q / Esc     Quit\n\n\
        In plain mode each line of stdin is one command: a key character above \
        or an event name such as `left` or `hardDrop`."
)]
struct Args {
    /// Playfield width in columns.
    #[arg(long, default_value_t = DEFAULT_COLS, value_name = "COLS")]
    cols: u16,

    /// Playfield height in rows.
    #[arg(long, default_value_t = DEFAULT_ROWS, value_name = "ROWS")]
    rows: u16,

    /// Seed for the piece sequence. Defaults to the current time.
    #[arg(long, value_name = "SEED")]
    seed: Option<u32>,

    /// Read commands line by line from stdin and print text frames.
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = GridConfig::new(args.cols, args.rows).context("invalid playfield size")?;
    let seed = args.seed.unwrap_or_else(time_seed);

    let mut game = GameState::new(config, UniformSource::new(seed));

    let result = if args.plain || !io::stdin().is_tty() {
        run_plain(&mut game)?
    } else {
        run_terminal(&mut game)?
    };

    println!(
        "score {} lines {} pieces {} ({:?}, seed {})",
        result.score, result.lines, result.pieces, result.reason, seed
    );
    Ok(())
}

fn run_terminal(game: &mut GameState) -> Result<GameResult> {
    let mut screen = TerminalScreen::new(GameView::default());
    screen.enter()?;

    let result = game.play::<_, _, anyhow::Error>(&mut TerminalInput::new(), &mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run_plain(game: &mut GameState) -> Result<GameResult> {
    let stdin = io::stdin();
    let mut input = LineInput::new(stdin.lock());
    let mut renderer = TextRenderer::new(io::stdout().lock());
    game.play::<_, _, anyhow::Error>(&mut input, &mut renderer)
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
