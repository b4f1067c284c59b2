// Boggle Loader
// Reads word lists and boards from files

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::types::{BoggleError, Result};
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read whitespace-separated words, uppercasing ASCII letters
///
/// A token containing anything other than letters is an error.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            if !token.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Err(BoggleError::InvalidWord {
                    line: idx + 1,
                    word: token.to_string(),
                });
            }
            words.push(token.to_ascii_uppercase());
        }
    }
    Ok(words)
}

/// Load a dictionary file (one or more words per line)
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let words = read_words(BufReader::new(file))?;

    let dictionary = Dictionary::new(&words);
    info!(
        "Loaded dictionary {}: {} words ({} distinct)",
        path.display(),
        words.len(),
        dictionary.len()
    );
    Ok(dictionary)
}

/// Load a board file in the `rows cols` + letter tokens format
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let board: Board = text.parse()?;
    info!(
        "Loaded board {}: {}x{}",
        path.display(),
        board.rows(),
        board.cols()
    );
    Ok(board)
}

fn io_error(path: &Path, source: std::io::Error) -> BoggleError {
    BoggleError::Io {
        path: path.to_path_buf(),
        source,
    }
}
