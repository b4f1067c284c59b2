// Boggle Board
// Validated letter grid: parsing, display and random generation

use crate::types::{BoggleError, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// English letter frequencies (percent) for A..Z, used by [`Board::random`]
const LETTER_FREQUENCIES: [f64; 26] = [
    8.167, 1.492, 2.782, 4.253, 12.703, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Faces of the 16 dice in the 1992 Hasbro edition; 'Q' stands for "Qu"
const HASBRO_DICE: [&str; 16] = [
    "LRYTTE", "VTHRWE", "EGHWNE", "SEOTIS", "ANAEEG", "IDSYTT", "OATTOW", "MTOICU", "AFPKFS",
    "XLDERI", "HCPOAS", "ENSIEU", "YLDEVR", "ZNRNHL", "NMIQHU", "OBBAOJ",
];

/// Immutable rows × cols grid of uppercase letters
///
/// A 'Q' cell reads as "QU" when words are built from the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    letters: Vec<char>,
}

impl Board {
    /// Create a board from row-major letters
    ///
    /// Lowercase letters are uppercased; anything else outside A-Z is an error.
    pub fn new(rows: usize, cols: usize, letters: Vec<char>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(BoggleError::EmptyBoard);
        }
        if letters.len() != rows * cols {
            return Err(BoggleError::DimensionMismatch {
                rows,
                cols,
                expected: rows * cols,
                found: letters.len(),
            });
        }

        let letters = letters
            .into_iter()
            .map(|ch| {
                let up = ch.to_ascii_uppercase();
                if up.is_ascii_uppercase() {
                    Ok(up)
                } else {
                    Err(BoggleError::InvalidLetter {
                        token: ch.to_string(),
                    })
                }
            })
            .collect::<Result<Vec<char>>>()?;

        Ok(Self {
            rows,
            cols,
            letters,
        })
    }

    /// Create a board from one string per row, one character per cell
    ///
    /// # Example
    /// ```
    /// # use boggle_solver::board::Board;
    /// let board = Board::from_rows(&["ABCD", "EFGH", "IJKL", "MNOP"]).unwrap();
    /// assert_eq!(board.letter(1, 2), 'G');
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let cols = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        let mut letters = Vec::with_capacity(rows.len() * cols);

        for (idx, row) in rows.iter().enumerate() {
            let width = row.as_ref().chars().count();
            if width != cols {
                return Err(BoggleError::RaggedRow {
                    row: idx,
                    expected: cols,
                    found: width,
                });
            }
            letters.extend(row.as_ref().chars());
        }

        Self::new(rows.len(), cols, letters)
    }

    /// Random board, each cell drawn from English letter frequencies
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        let dist = WeightedIndex::new(LETTER_FREQUENCIES)?;
        let letters = (0..rows * cols)
            .map(|_| (b'A' + dist.sample(rng) as u8) as char)
            .collect();
        Self::new(rows, cols, letters)
    }

    /// Classic 4×4 board: the 16 dice are shuffled into place and each rolled once
    pub fn hasbro<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut dice = HASBRO_DICE;
        dice.shuffle(rng);

        let letters = dice
            .iter()
            .map(|faces| {
                let faces = faces.as_bytes();
                faces[rng.gen_range(0..faces.len())] as char
            })
            .collect();

        Self {
            rows: 4,
            cols: 4,
            letters,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: boards have at least one cell
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter at `(row, col)`
    ///
    /// # Panics
    /// If the position is outside the board.
    pub fn letter(&self, row: usize, col: usize) -> char {
        assert!(row < self.rows && col < self.cols, "cell ({}, {}) out of bounds", row, col);
        self.letters[self.index_of(row, col)]
    }

    /// Letter at a row-major cell index
    #[inline]
    pub fn letter_at(&self, index: usize) -> char {
        self.letters[index]
    }

    /// Row-major index of `(row, col)`
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

/// Parses the board text format: `rows cols` followed by `rows * cols`
/// whitespace-separated letter tokens, where `Qu` (any case) denotes a Q cell
impl FromStr for Board {
    type Err = BoggleError;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();

        let mut dimension = |name: &str| -> Result<usize> {
            let token = tokens
                .next()
                .ok_or_else(|| BoggleError::InvalidHeader(format!("missing {}", name)))?;
            token.parse::<usize>().map_err(|_| {
                BoggleError::InvalidHeader(format!("{} '{}' is not a number", name, token))
            })
        };
        let rows = dimension("row count")?;
        let cols = dimension("column count")?;

        let letters = tokens.map(parse_cell).collect::<Result<Vec<char>>>()?;
        Self::new(rows, cols, letters)
    }
}

fn parse_cell(token: &str) -> Result<char> {
    let upper = token.to_ascii_uppercase();
    let mut chars = upper.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, None) if c.is_ascii_uppercase() => Ok(c),
        (Some('Q'), Some('U'), None) => Ok('Q'),
        _ => Err(BoggleError::InvalidLetter {
            token: token.to_string(),
        }),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows, self.cols)?;
        for row in self.letters.chunks(self.cols) {
            for (i, &c) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                if c == 'Q' {
                    write!(f, "Qu")?;
                } else {
                    write!(f, "{}", c)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
