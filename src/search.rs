// Boggle Search Engine
// Main API: prefix-pruned depth-first search over the board

use crate::adjacency::AdjacencyGraph;
use crate::board::Board;
use crate::dictionary::{Dictionary, WordIndex};
use crate::scoring::{score_for_length, MIN_WORD_LEN};
use crate::types::SearchStats;
use crate::visited::VisitedSet;
use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::ops::{Deref, DerefMut};

/// Main Boggle solver
///
/// Holds the dictionary index; every query builds its own adjacency graph
/// and search state, so one solver can serve any number of boards.
pub struct BoggleSolver<I: WordIndex = Dictionary> {
    index: I,
}

impl BoggleSolver<Dictionary> {
    /// Create a solver from a word list (uppercase A-Z)
    ///
    /// # Example
    /// ```
    /// # use boggle_solver::{Board, BoggleSolver};
    /// let solver = BoggleSolver::new(["ABEF", "AB", "BCG"]);
    /// let board = Board::from_rows(&["ABCD", "EFGH", "IJKL", "MNOP"]).unwrap();
    ///
    /// let words = solver.all_valid_words(&board);
    /// assert!(words.contains("ABEF"));
    /// assert!(!words.contains("AB"));
    /// ```
    pub fn new<W, S>(words: W) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_index(Dictionary::new(words))
    }
}

impl<I: WordIndex> BoggleSolver<I> {
    /// Create a solver over any word index
    pub fn with_index(index: I) -> Self {
        Self { index }
    }

    /// The word index backing this solver
    pub fn index(&self) -> &I {
        &self.index
    }

    /// All dictionary words of length ≥ 3 traceable on `board`
    ///
    /// The returned set is unordered.
    pub fn all_valid_words(&self, board: &Board) -> FxHashSet<String> {
        self.solve_with_stats(board).0
    }

    /// Like [`all_valid_words`](Self::all_valid_words), also returning search counters
    pub fn solve_with_stats(&self, board: &Board) -> (FxHashSet<String>, SearchStats) {
        let graph = AdjacencyGraph::new(board.rows(), board.cols());
        let mut search = Search::new(board, &graph, &self.index);

        for root in 0..board.len() {
            debug_assert_eq!(search.visited.count(), 0);
            search.stats.roots += 1;
            let mut path = search.enter(root);
            path.explore(root);
            trace!("Root {} done, {} words so far", root, path.found.len());
        }

        let Search {
            found, mut stats, ..
        } = search;
        stats.words_found = found.len();
        debug!(
            "Solved {}x{} board: {}",
            board.rows(),
            board.cols(),
            stats
        );

        (found, stats)
    }

    /// Points for `word`: 0 if shorter than 3 letters or not in the dictionary
    pub fn score_of(&self, word: &str) -> u32 {
        if word.len() < MIN_WORD_LEN || !self.index.contains(word) {
            return 0;
        }
        score_for_length(word.len())
    }

    /// Sum of [`score_of`](Self::score_of) over `words`
    pub fn total_score<W, S>(&self, words: W) -> u32
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().map(|w| self.score_of(w.as_ref())).sum()
    }
}

/// Mutable state for one board query
struct Search<'a, I: ?Sized> {
    board: &'a Board,
    graph: &'a AdjacencyGraph,
    index: &'a I,
    visited: VisitedSet,
    path: String,
    found: FxHashSet<String>,
    stats: SearchStats,
}

impl<'a, I: WordIndex + ?Sized> Search<'a, I> {
    fn new(board: &'a Board, graph: &'a AdjacencyGraph, index: &'a I) -> Self {
        Self {
            board,
            graph,
            index,
            visited: VisitedSet::new(board.len()),
            path: String::with_capacity(2 * board.len()),
            found: FxHashSet::default(),
            stats: SearchStats::default(),
        }
    }

    /// Put `cell` on the path; undone when the returned guard drops
    fn enter(&mut self, cell: usize) -> PathStep<'_, 'a, I> {
        let restore_len = self.path.len();
        self.visited.mark(cell);
        match self.board.letter_at(cell) {
            'Q' => self.path.push_str("QU"),
            letter => self.path.push(letter),
        }
        PathStep {
            search: self,
            cell,
            restore_len,
        }
    }

    /// Record and extend the path ending at `cell`
    fn explore(&mut self, cell: usize) {
        self.stats.nodes_expanded += 1;

        if self.path.len() >= MIN_WORD_LEN {
            if !self.index.has_prefix(&self.path) {
                self.stats.pruned += 1;
                return;
            }
            if self.index.contains(&self.path) && !self.found.contains(self.path.as_str()) {
                self.found.insert(self.path.clone());
            }
        }

        let graph = self.graph;
        for &next in graph.neighbors(cell) {
            if self.visited.is_marked(next) {
                continue;
            }
            let mut step = self.enter(next);
            step.explore(next);
        }
    }
}

/// One cell on the current path
///
/// Dropping it unmarks the cell and truncates the path string, which also
/// runs during unwinding. A 'Q' cell's "QU" goes away as one unit.
struct PathStep<'s, 'a, I: ?Sized> {
    search: &'s mut Search<'a, I>,
    cell: usize,
    restore_len: usize,
}

impl<'s, 'a, I: ?Sized> Deref for PathStep<'s, 'a, I> {
    type Target = Search<'a, I>;

    fn deref(&self) -> &Self::Target {
        &*self.search
    }
}

impl<'s, 'a, I: ?Sized> DerefMut for PathStep<'s, 'a, I> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.search
    }
}

impl<'s, 'a, I: ?Sized> Drop for PathStep<'s, 'a, I> {
    fn drop(&mut self) {
        self.search.visited.unmark(self.cell);
        self.search.path.truncate(self.restore_len);
    }
}
