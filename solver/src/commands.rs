use std::error::Error;
use std::time::Instant;

use minimax_common::config::SolverConfig;
use minimax_common::engine::tictactoe::{
    board_size, empty_board, evaluate, find_best_move_with_stats, format_board, game_status,
    has_moves_remaining, minimax_abstract, parse_board, run_self_play, tree_height,
    winning_line, Mark, Score, SearchStats, INFINITY,
};
use minimax_common::log;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn evaluate_board(text: &str) -> Result<(), Box<dyn Error>> {
    let board = parse_board(text)?;
    let score = evaluate(&board)?;
    let moves_remaining = has_moves_remaining(&board)?;

    println!("{}", format_board(&board));
    println!("score: {}", describe_score(score));
    println!("moves remaining: {}", moves_remaining);
    if let Some((line, mark)) = winning_line(&board)? {
        println!("winning line: {} ({})", line, mark.symbol());
    }
    println!("status: {}", game_status(&board)?);

    Ok(())
}

pub fn best_move(text: &str, config: &SolverConfig) -> Result<(), Box<dyn Error>> {
    let mut board = parse_board(text)?;
    board_size(&board)?;
    config.check_search_budget(&board)?;

    let mut stats = SearchStats::default();
    let started = Instant::now();
    let chosen = find_best_move_with_stats(&mut board, &mut stats)?;

    log!(
        "Searched {} positions ({} terminal, max depth {}) in {:?}",
        stats.nodes_visited,
        stats.terminal_positions,
        stats.max_depth,
        started.elapsed()
    );

    match chosen {
        Some(best) => {
            board[best.row][best.column] = Mark::Player;
            println!("best move: {}", best);
            println!("{}", format_board(&board));
        }
        None => println!("no move: the board is full"),
    }

    Ok(())
}

pub fn play(config: &SolverConfig) -> Result<(), Box<dyn Error>> {
    config.check_search_budget(&empty_board(config.board_size))?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log!(
        "Self-play on {0}x{0} against {1:?} opponent, seed {2}",
        config.board_size,
        config.opponent,
        seed
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let state = run_self_play(config.board_size, config.opponent, &mut rng, |state| {
        if let Some(&(mark, at)) = state.history.last() {
            println!("{} plays {}", mark.symbol(), at);
            println!("{}\n", format_board(&state.board));
        }
    })?;

    println!("result: {}", state.status);
    Ok(())
}

pub fn abstract_value(scores: &[Score]) -> Result<(), Box<dyn Error>> {
    let height = tree_height(scores.len()).ok_or_else(|| {
        format!("Leaf count {} is not a power of two", scores.len())
    })?;

    let value = minimax_abstract(0, 0, true, scores, height);
    println!("height: {}", height);
    println!("value: {}", value);

    Ok(())
}

fn describe_score(score: Score) -> String {
    if score == INFINITY {
        "+infinity (x has a line)".to_string()
    } else if score == -INFINITY {
        "-infinity (o has a line)".to_string()
    } else {
        score.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_score_names_sentinels() {
        assert_eq!(describe_score(INFINITY), "+infinity (x has a line)");
        assert_eq!(describe_score(-INFINITY), "-infinity (o has a line)");
        assert_eq!(describe_score(0), "0");
    }

    #[test]
    fn test_evaluate_reports_shape_error() {
        assert!(evaluate_board("xxx/__o").is_err());
        assert!(evaluate_board("x?x/___/___").is_err());
    }

    #[test]
    fn test_best_move_respects_search_budget() {
        let config = SolverConfig {
            max_search_cells: 4,
            ..SolverConfig::default()
        };
        assert!(best_move("___/___/___", &config).is_err());
        assert!(best_move("xo_/ox_/o__", &config).is_ok());
    }

    #[test]
    fn test_play_refuses_boards_over_budget() {
        let config = SolverConfig {
            board_size: 4,
            ..SolverConfig::default()
        };
        assert!(play(&config).is_err());
    }

    #[test]
    fn test_abstract_value_needs_power_of_two() {
        assert!(abstract_value(&[3, 5, 2]).is_err());
        assert!(abstract_value(&[3, 5, 2, 9]).is_ok());
    }
}
