use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use othello_duel::ai::Difficulty;
use othello_duel::config::AppConfig;
use othello_duel::ui::App;

/// Play Othello against the computer in your terminal.
#[derive(Parser)]
#[command(name = "othello_duel", about = "Othello against a heuristic AI")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, default_value = "othello.toml")]
    config: PathBuf,

    /// Board width (even, 6-16); overrides the config file
    #[arg(long)]
    width: Option<usize>,

    /// Board height (even, 6-16); overrides the config file
    #[arg(long)]
    height: Option<usize>,

    /// AI difficulty: easy, normal, or hard; overrides the config file
    #[arg(long)]
    difficulty: Option<Difficulty>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(width) = cli.width {
        config.game.width = width;
    }
    if let Some(height) = cli.height {
        config.game.height = height;
    }
    if let Some(difficulty) = cli.difficulty {
        config.game.difficulty = difficulty;
    }
    config.validate()?;

    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res?;
    Ok(())
}
