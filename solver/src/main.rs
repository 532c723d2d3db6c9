mod runner;
mod solver_config;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::config::Validate;
use tictactoe_engine::game::{Board, BotType};
use tictactoe_engine::{SessionRng, log, logger};

use solver_config::{RunMode, get_config_manager};

#[derive(Parser)]
#[command(name = "tictactoe_solver", about = "Optimal tic-tac-toe moves by minimax search")]
struct Args {
    /// YAML config file; defaults to tictactoe_solver_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Starting board as three rows separated by '/', e.g. "XO./.X./O..".
    #[arg(long)]
    board: Option<Board>,
    #[arg(long, value_enum)]
    mode: Option<RunMode>,
    /// Who plays O in play mode.
    #[arg(long, value_enum)]
    opponent: Option<BotType>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Solver".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(args.config).get_config()?;
    if let Some(board) = args.board {
        config.starting_board = board;
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(opponent) = args.opponent {
        config.opponent = opponent;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    match config.mode {
        RunMode::Solve => {
            runner::solve(&config.starting_board)?;
        }
        RunMode::Play => {
            let mut rng = match config.seed {
                Some(seed) => SessionRng::new(seed),
                None => SessionRng::from_random(),
            };
            let record = runner::play(config.starting_board, config.opponent, &mut rng)?;
            log!("{} moves played, result: {}", record.moves.len(), record.status);
        }
    }

    Ok(())
}
