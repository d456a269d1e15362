use std::io;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event;

use terminal_portfolio::app::{App, AppConfig, Screen};
use terminal_portfolio::config::{
    DEFAULT_TARGET_SCORE, DEFAULT_TILE_COUNT, GridSize, THEME_DEFAULT,
};
use terminal_portfolio::feedback::{BellFeedback, Feedback, NullFeedback};
use terminal_portfolio::history::{self, CommandHistory};
use terminal_portfolio::terminal_runtime::TerminalSession;
use terminal_portfolio::ui;

/// How long the event loop blocks waiting for input between frames.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Terminal-styled portfolio landing page with a snake-game gate")]
struct Cli {
    /// Grid tiles per axis for the snake gate.
    #[arg(long, default_value_t = DEFAULT_TILE_COUNT, value_parser = clap::value_parser!(u16).range(4..=100))]
    grid_size: u16,

    /// Food to eat before the site unlocks.
    #[arg(long, default_value_t = DEFAULT_TARGET_SCORE, value_parser = clap::value_parser!(u32).range(1..=1000))]
    target_score: u32,

    /// Disable terminal-bell feedback.
    #[arg(long)]
    quiet: bool,

    /// Skip the terminal and the gate, open the site screen directly.
    #[arg(long)]
    skip_intro: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let grid = GridSize {
        width: cli.grid_size,
        height: cli.grid_size,
    };

    // The snake grows by one cell per point, so a target past this ceiling
    // would fill the board and leave the food nowhere to respawn.
    let max_target = grid.max_target_score();
    if cli.target_score > max_target {
        eprintln!(
            "error: --target-score {} cannot be won on a {}x{} grid (maximum is {max_target})",
            cli.target_score, cli.grid_size, cli.grid_size,
        );
        return ExitCode::from(2);
    }

    // Load before raw mode so a warning is actually visible.
    let persisted = match history::load_history() {
        Ok(history) => history,
        Err(error) => {
            eprintln!("Warning: could not load command history: {error}");
            CommandHistory::new()
        }
    };

    let feedback: Rc<dyn Feedback> = if cli.quiet {
        Rc::new(NullFeedback)
    } else {
        Rc::new(BellFeedback)
    };

    let config = AppConfig {
        grid,
        target_score: cli.target_score,
        skip_intro: cli.skip_intro,
    };

    let mut app = App::new(config, persisted, feedback);

    if let Err(error) = run(&mut app) {
        eprintln!("error: {error}");
        return ExitCode::FAILURE;
    }

    if let Err(error) = history::save_history(app.console().history()) {
        eprintln!("Failed to save command history: {error}");
    }

    ExitCode::SUCCESS
}

fn run(app: &mut App) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;

    loop {
        session.terminal_mut().draw(|frame| match app.screen() {
            Screen::Console => ui::console::render(frame, app.console(), &THEME_DEFAULT),
            Screen::Game => {
                if let Some(game) = app.game() {
                    ui::game::render(frame, game, &THEME_DEFAULT);
                }
            }
            Screen::Site => ui::site::render(frame, &THEME_DEFAULT),
        })?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            let event = event::read()?;
            app.handle_event(&event, Instant::now());
        }

        app.advance(Instant::now());

        if app.should_quit() {
            return Ok(());
        }
    }
}
