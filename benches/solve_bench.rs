// Performance benchmarks for boggle board search

use boggle_solver::{Board, BoggleSolver};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

const COMMON_LETTERS: &[u8] = b"EEEEEAAAIIOOUTTNNSSRRLLDHCMPGBY";

fn main() {
    println!("🏃 Boggle Solver Performance Benchmarks\n");

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let words = synthetic_words(&mut rng, 100_000);

    let start = Instant::now();
    let solver = BoggleSolver::new(&words);
    println!(
        "📚 Indexed {} words in {:.3}ms\n",
        solver.index().len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    bench_random_boards(&solver, &mut rng);
    bench_hasbro_boards(&solver, &mut rng);
    bench_all_q_board();

    println!("\n✅ Benchmarks completed!");
}

/// Random words of 3-10 letters drawn from common letters
fn synthetic_words(rng: &mut ChaCha8Rng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..=10);
            (0..len)
                .map(|_| COMMON_LETTERS[rng.gen_range(0..COMMON_LETTERS.len())] as char)
                .collect()
        })
        .collect()
}

fn bench_random_boards(solver: &BoggleSolver, rng: &mut ChaCha8Rng) {
    println!("🔤 RANDOM BOARDS (letter frequencies)");
    println!("─────────────────────────────────────");

    for size in [4, 5, 6, 8] {
        let boards: Vec<Board> = (0..20)
            .map(|_| Board::random(size, size, rng).expect("valid dimensions"))
            .collect();

        let start = Instant::now();
        let mut found = 0;
        let mut score = 0;
        for board in &boards {
            let words = solver.all_valid_words(board);
            score += solver.total_score(&words);
            found += words.len();
        }
        let duration = start.elapsed();

        println!(
            "  {}x{}  → {} words, {} points over {} boards in {:.3}ms ({:.3}ms avg)",
            size,
            size,
            found,
            score,
            boards.len(),
            duration.as_secs_f64() * 1000.0,
            duration.as_secs_f64() * 1000.0 / boards.len() as f64
        );
    }
    println!();
}

fn bench_hasbro_boards(solver: &BoggleSolver, rng: &mut ChaCha8Rng) {
    println!("🎲 HASBRO DICE BOARDS");
    println!("─────────────────────");

    let count = 1000;
    let start = Instant::now();
    let mut found = 0;
    for _ in 0..count {
        let board = Board::hasbro(rng);
        found += solver.all_valid_words(&board).len();
    }
    let total = start.elapsed();

    println!(
        "  {} boards, {} words in {:.3}ms ({:.3}ms avg)",
        count,
        found,
        total.as_secs_f64() * 1000.0,
        (total.as_secs_f64() / count as f64) * 1000.0
    );
    println!();
}

fn bench_all_q_board() {
    println!("🧱 ALL-Q BOARD (pruning worst case)");
    println!("───────────────────────────────────");

    let solver = BoggleSolver::new(["QU", "QUQU", "QUQUQU", "QUQUQUQUQUQU"]);
    let board = Board::from_rows(&["QQQQQQQQ"; 8]).expect("valid board");

    let start = Instant::now();
    let (words, stats) = solver.solve_with_stats(&board);
    let duration = start.elapsed();

    println!(
        "  8x8  → {} words in {:.3}ms ({})",
        words.len(),
        duration.as_secs_f64() * 1000.0,
        stats
    );
}
