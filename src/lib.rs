//! # Boggle Solver
//!
//! Finds every dictionary word that can be traced on a Boggle board as a
//! path of adjacent cells (orthogonal or diagonal) without reusing a cell,
//! and scores words by length.
//!
//! ## How the search works
//!
//! 1. **Dictionary index** - words go into a trie, so exact lookups and
//!    "does any word start with this" lookups cost O(query length)
//! 2. **Adjacency graph** - the 8-neighbor graph of the board is built once per query
//! 3. **Depth-first search** - from every cell, paths are extended only while
//!    the path string (length ≥ 3) is still a prefix of some dictionary word
//!
//! A 'Q' cell always contributes "QU" to the path string. Dictionary words
//! are matched literally, so a word with a bare 'Q' can never be found.
//!
//! ## Scoring
//!
//! | length | 3-4 | 5 | 6 | 7 | 8+ |
//! |--------|-----|---|---|---|----|
//! | points | 1   | 2 | 3 | 5 | 11 |
//!
//! ## Example Usage
//!
//! ```
//! use boggle_solver::{Board, BoggleSolver};
//!
//! let solver = BoggleSolver::new(["QUIT", "QUITE", "TIE", "AB"]);
//! let board = Board::from_rows(&["QI", "ET"])?;
//!
//! let words = solver.all_valid_words(&board);
//! assert!(words.contains("QUIT"));
//! assert!(words.contains("QUITE"));
//! assert!(words.contains("TIE"));
//! assert_eq!(solver.total_score(&words), 4);
//! # Ok::<(), boggle_solver::BoggleError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Board** - validated grid, text format, random boards
//! - **AdjacencyGraph** - neighbor lists per cell
//! - **Dictionary / Trie** - the `WordIndex` used for pruning
//! - **BoggleSolver** - the search and scoring API
//! - **Loader** - dictionary and board files

pub mod adjacency;
pub mod board;
pub mod dictionary;
pub mod loader;
pub mod scoring;
pub mod search;
pub mod trie;
pub mod types;
pub mod visited;

// Re-export main types and functions for convenience
pub use adjacency::AdjacencyGraph;
pub use board::Board;
pub use dictionary::{Dictionary, WordIndex};
pub use loader::{load_board, load_dictionary, read_words};
pub use scoring::{score_for_length, MIN_WORD_LEN};
pub use search::BoggleSolver;
pub use trie::Trie;
pub use types::{BoggleError, Result, SearchStats};
pub use visited::VisitedSet;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
