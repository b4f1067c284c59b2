// Boggle Adjacency Graph
// 8-directional neighbor graph over board cell indices

/// Row/column offsets of the eight neighbors: orthogonal first, then diagonal
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Neighbor graph for a rows × cols grid
///
/// Cell `(row, col)` has index `row * cols + col`. Neighbor lists are stored
/// back to back in `targets`; the list for cell `i` is
/// `targets[offsets[i]..offsets[i + 1]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    rows: usize,
    cols: usize,
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl AdjacencyGraph {
    /// Build the graph for a grid of the given dimensions
    ///
    /// # Example
    /// ```
    /// # use boggle_solver::adjacency::AdjacencyGraph;
    /// let graph = AdjacencyGraph::new(3, 3);
    /// assert_eq!(graph.neighbors(4).len(), 8); // centre cell
    /// assert_eq!(graph.neighbors(0).len(), 3); // corner
    /// ```
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = rows * cols;
        let mut offsets = Vec::with_capacity(cells + 1);
        let mut targets = Vec::with_capacity(cells * NEIGHBOR_OFFSETS.len());

        offsets.push(0);
        for row in 0..rows {
            for col in 0..cols {
                for (dr, dc) in NEIGHBOR_OFFSETS {
                    let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
                    else {
                        continue;
                    };
                    if r < rows && c < cols {
                        targets.push(r * cols + c);
                    }
                }
                offsets.push(targets.len());
            }
        }

        Self {
            rows,
            cols,
            offsets,
            targets,
        }
    }

    /// Neighbors of `cell`
    ///
    /// # Panics
    /// If `cell` is not a valid index for this grid.
    #[inline]
    pub fn neighbors(&self, cell: usize) -> &[usize] {
        &self.targets[self.offsets[cell]..self.offsets[cell + 1]]
    }

    /// Whether `a` and `b` are neighbors
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        a < self.node_count() && self.neighbors(a).contains(&b)
    }

    /// Number of cells
    pub fn node_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of directed edges (each adjacency is counted from both ends)
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}
