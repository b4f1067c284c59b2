// Boggle Type Definitions
// Error type and search statistics shared across the crate

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating boards and word lists
///
/// The search core never fails; these come from the input layer only.
#[derive(Debug, Error)]
pub enum BoggleError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid word '{word}' on line {line}: only letters A-Z allowed")]
    InvalidWord { line: usize, word: String },

    #[error("Invalid board letter '{token}': expected a single letter A-Z or 'Qu'")]
    InvalidLetter { token: String },

    #[error("Invalid board header: {0}")]
    InvalidHeader(String),

    #[error("Board dimensions {rows}x{cols} need {expected} letters, found {found}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    #[error("Board row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Board must have at least one row and one column")]
    EmptyBoard,

    #[error("Letter distribution error: {0}")]
    Distribution(#[from] rand::distributions::WeightedError),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, BoggleError>;

/// Counters collected during one board search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells used as DFS roots
    pub roots: usize,

    /// Path nodes entered (roots included)
    pub nodes_expanded: usize,

    /// Branches abandoned because no dictionary word has the path as prefix
    pub pruned: usize,

    /// Distinct words recorded
    pub words_found: usize,
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "roots={} expanded={} pruned={} found={}",
            self.roots, self.nodes_expanded, self.pruned, self.words_found
        )
    }
}
