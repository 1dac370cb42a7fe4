mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use minimax_common::config::{ConfigManager, SolverConfig};
use minimax_common::engine::tictactoe::Score;
use minimax_common::{log, logger};

#[derive(Parser)]
#[command(name = "minimax_solver", about = "Exhaustive minimax solver for square tic-tac-toe boards")]
struct Args {
    #[arg(long, default_value = "minimax_solver.yaml")]
    config: PathBuf,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log every candidate move score
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a board and report whether moves remain
    Evaluate {
        /// Rows of x, o and _ separated by '/'
        #[arg(long)]
        board: String,
    },
    /// Find the best move for x
    BestMove {
        #[arg(long)]
        board: String,
    },
    /// Play x (minimax) against the configured opponent on an empty board
    Play,
    /// Minimax over a binary tree of leaf scores, maximizing at the root
    Abstract {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        scores: Vec<Score>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager: ConfigManager<SolverConfig> = ConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;

    let prefix = if args.use_log_prefix {
        Some("Solver".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose || config.verbose);

    log!("Using config {} ({:?})", args.config.display(), config);

    match args.command {
        Command::Evaluate { board } => commands::evaluate_board(&board)?,
        Command::BestMove { board } => commands::best_move(&board, &config)?,
        Command::Play => commands::play(&config)?,
        Command::Abstract { scores } => commands::abstract_value(&scores)?,
    }

    Ok(())
}
