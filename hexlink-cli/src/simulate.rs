//! Simulate command - random self-play games over the rules engine
//!
//! Every game claims uniformly random unclaimed cells until one side
//! connects its edges. On a rhombic Hex board a draw is impossible, so
//! each game ends with a winner.

use anyhow::{bail, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use hexlink_core::{Board, Coord, GameResult, GameState, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Args)]
pub struct SimulateArgs {
    /// Board size (cells per edge)
    #[arg(long, default_value = "11")]
    pub size: usize,

    /// Number of games to play
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Aggregate outcome of a simulation run
#[derive(Clone, Debug, Serialize)]
pub struct SimulationReport {
    pub size: usize,
    pub games: usize,
    pub player1_wins: usize,
    pub player2_wins: usize,
    pub average_moves: f64,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&args.size) {
        bail!(
            "board size {} out of range ({}-{})",
            args.size,
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE
        );
    }
    if args.games == 0 {
        bail!("need at least one game");
    }

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let report = simulate(args.size, args.games, &mut rng);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Simulated {} games on a {}x{} board",
            report.games, report.size, report.size
        );
        println!(
            "  Player1 (rows):    {} ({:.1}%)",
            report.player1_wins,
            100.0 * report.player1_wins as f64 / report.games as f64
        );
        println!(
            "  Player2 (columns): {} ({:.1}%)",
            report.player2_wins,
            100.0 * report.player2_wins as f64 / report.games as f64
        );
        println!("  Average moves:     {:.1}", report.average_moves);
    }

    Ok(())
}

fn simulate<R: Rng>(size: usize, games: usize, rng: &mut R) -> SimulationReport {
    let mut player1_wins = 0;
    let mut player2_wins = 0;
    let mut total_moves = 0usize;

    for game_index in 0..games {
        let (result, moves) = play_random_game(size, rng);
        match result {
            GameResult::Player1Wins => player1_wins += 1,
            GameResult::Player2Wins => player2_wins += 1,
            GameResult::Ongoing => unreachable!("random game ran out of cells unresolved"),
        }
        debug!(game = game_index, ?result, moves, "game finished");
        total_moves += moves;
    }

    info!(games, player1_wins, player2_wins, "simulation complete");

    SimulationReport {
        size,
        games,
        player1_wins,
        player2_wins,
        average_moves: total_moves as f64 / games as f64,
    }
}

/// Play one game by claiming random unclaimed cells until it resolves
fn play_random_game<R: Rng>(size: usize, rng: &mut R) -> (GameResult, usize) {
    let mut game = GameState::new(size);
    let mut open = unclaimed_cells(game.board());
    let mut moves = 0;

    while game.result() == GameResult::Ongoing && !open.is_empty() {
        let pick = rng.gen_range(0..open.len());
        let coord = open.swap_remove(pick);
        if game.play(coord).expect("cell list stays in bounds") {
            moves += 1;
        }
    }

    (game.result(), moves)
}

fn unclaimed_cells(board: &Board) -> Vec<Coord> {
    board
        .coords()
        .filter(|&c| board.cell(c).is_claimable())
        .collect()
}
