//! mazechase: eat every dot before the chasers catch you.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use mazechase_core::app::{App, AppConfig};
use mazechase_crossterm::CrosstermDriver;
use tracing_subscriber::filter::LevelFilter;

use mazechase_lib::{ChaseModel, Game, GameConfig, Outcome, load_maze};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with glyphs, frame rate and lives.
    #[arg(long, default_value = "config.json")]
    config_file: PathBuf,

    /// Text file with the maze layout.
    #[arg(long, default_value = "maze.txt")]
    maze_file: PathBuf,

    /// Write logs to this file. The terminal is used by the game itself.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let level = match args.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(File::create(path)?))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let cfg = GameConfig::load(&args.config_file)?;
    let maze = load_maze(&args.maze_file)?;
    let game = Game::new(maze, cfg.lives)?;

    let tick = cfg.tick_interval();
    let model = ChaseModel::new(game, cfg);
    let (rows, cols) = model.screen_size();
    let mut app = App::new(AppConfig {
        model,
        driver: CrosstermDriver::new(),
        rows,
        cols,
        tick: Some(tick),
    });
    app.run()?;

    let game = app.model().game();
    let board = game.scoreboard();
    match game.outcome() {
        Outcome::Won => println!("You win! Score: {}", board.score),
        Outcome::Lost => println!("Game over. Score: {}", board.score),
        Outcome::Running => println!("Bye. Score: {}", board.score),
    }
    Ok(())
}
