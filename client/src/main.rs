mod app;
mod command;
mod config;
mod render;

use std::io;
use std::path::PathBuf;
use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, MoveSelector, TicTacToeGame};
use common::{log, logger};

use app::App;
use config::get_config_manager;
use render::Symbols;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the engine")]
struct Args {
    /// Engine strength for this session: hard or easy.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the engine's random choices.
    #[arg(long)]
    seed: Option<u64>,

    /// Config file to use instead of the one next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write log lines to stderr.
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Client".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting: difficulty {}, seed {}", config.difficulty, rng.seed());

    let game = TicTacToeGame::new(MoveSelector::new(config.difficulty, rng));
    let stdin = io::stdin();
    let stdout = io::stdout();

    App::new(game, Symbols::from(&config), stdin.lock(), stdout.lock())
        .with_config_manager(config_manager)
        .run()?;

    Ok(())
}
