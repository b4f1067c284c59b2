// Boggle CLI Tool
// Finds every dictionary word on a board and prints the total score

use boggle_solver::{load_board, load_dictionary, Board, BoggleSolver};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Boggle Solver - list all dictionary words on a board
#[derive(Parser, Debug)]
#[command(name = "boggle")]
#[command(about = "Find all dictionary words on a Boggle board", long_about = None)]
#[command(version)]
struct Args {
    /// Word list: whitespace-separated words, letters only
    #[arg(value_name = "DICTIONARY")]
    dictionary: PathBuf,

    /// Board file: "rows cols" followed by the letters ('Qu' for Q).
    /// A random board is generated when omitted
    #[arg(value_name = "BOARD")]
    board: Option<PathBuf>,

    /// Rows of the random board
    #[arg(long, default_value = "4")]
    rows: usize,

    /// Columns of the random board
    #[arg(long, default_value = "4")]
    cols: usize,

    /// Roll the classic 16 dice instead of drawing letters by frequency
    #[arg(long, conflicts_with_all = ["rows", "cols"])]
    hasbro: bool,

    /// Seed for the random board
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log search statistics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let solver = BoggleSolver::with_index(load_dictionary(&args.dictionary)?);

    let board = match &args.board {
        Some(path) => load_board(path)?,
        None => {
            let mut rng = match args.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            let board = if args.hasbro {
                Board::hasbro(&mut rng)
            } else {
                Board::random(args.rows, args.cols, &mut rng)?
            };
            print!("{}", board);
            println!();
            board
        }
    };

    let mut words: Vec<String> = solver.all_valid_words(&board).into_iter().collect();
    words.sort_unstable();

    for word in &words {
        println!("{}", word);
    }
    println!("Score = {}", solver.total_score(&words));

    Ok(())
}
