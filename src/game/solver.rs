use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::dictionary::Dictionary;
use crate::models::Tile;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("grid content is {actual} characters, expected {expected} to fill the grid")]
    ContentLength { expected: usize, actual: usize },
}

/// Offsets to the 8 neighbors of a cell, diagonals included.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Finds every dictionary word that can be traced on a rectangular letter
/// grid: adjacent cells (diagonals included), each cell used at most once
/// per word.
///
/// The solver is bound to one dictionary and fixed dimensions. All mutable
/// search state lives inside a single [`find_words`](Self::find_words) call,
/// so one instance can serve concurrent callers.
pub struct GridSolver {
    dictionary: Arc<Dictionary>,
    width: usize,
    height: usize,
}

impl GridSolver {
    pub fn new(dictionary: Arc<Dictionary>, width: usize, height: usize) -> Self {
        Self {
            dictionary,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Find every dictionary word embeddable in `content`, the grid's tiles
    /// as one row-major string of `width * height` letters.
    ///
    /// Results are unique, sorted by descending length and then
    /// alphabetically within a length.
    pub fn find_words(&self, content: &str) -> Result<Vec<String>, SolverError> {
        let expected = self.width * self.height;
        let actual = content.chars().count();
        if actual != expected {
            return Err(SolverError::ContentLength { expected, actual });
        }

        let tiles: Vec<Tile> = content
            .to_uppercase()
            .chars()
            .map(Tile::from_char)
            .collect();

        let mut search = Search {
            dictionary: self.dictionary.as_ref(),
            width: self.width as isize,
            height: self.height as isize,
            tiles,
            visited: vec![false; expected],
            candidate: String::new(),
            found: HashSet::new(),
        };

        for x in 0..search.width {
            for y in 0..search.height {
                search.step(x, y, 0);
            }
        }

        let mut words: Vec<String> = search.found.into_iter().collect();
        words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        tracing::debug!("Found {} words in grid", words.len());

        Ok(words)
    }
}

/// Search state for one `find_words` call.
struct Search<'a> {
    dictionary: &'a Dictionary,
    width: isize,
    height: isize,
    tiles: Vec<Tile>,
    visited: Vec<bool>,
    candidate: String,
    found: HashSet<String>,
}

impl Search<'_> {
    /// Visit `(x, y)` as the `depth`-th cell of the current path, collecting
    /// any word completed here and recursing into all 8 neighbors. The
    /// candidate string and visited flags are restored before returning.
    fn step(&mut self, x: isize, y: isize, depth: usize) {
        if depth >= self.dictionary.max_word_len()
            || x < 0
            || x >= self.width
            || y < 0
            || y >= self.height
        {
            return;
        }

        let index = (y * self.width + x) as usize;
        if self.visited[index] {
            return;
        }

        let undo_len = self.candidate.len();
        self.tiles[index].push_onto(&mut self.candidate);

        // A branch that is no word's prefix can never become one.
        if depth > 0 && !self.dictionary.has_prefix(&self.candidate) {
            self.candidate.truncate(undo_len);
            return;
        }

        self.visited[index] = true;

        if let Some(word) = self.dictionary.lookup(&self.candidate) {
            if !self.found.contains(word) {
                self.found.insert(word.to_owned());
            }
        }

        for (dx, dy) in NEIGHBOR_OFFSETS {
            self.step(x + dx, y + dy, depth + 1);
        }

        self.visited[index] = false;
        self.candidate.truncate(undo_len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver(words: &[&str], width: usize, height: usize) -> GridSolver {
        let dictionary = Arc::new(Dictionary::from_lines(words.iter().copied()).unwrap());
        GridSolver::new(dictionary, width, height)
    }

    #[test]
    fn test_finds_words_along_adjacent_cells() {
        // C T
        // A S
        let solver = solver(&["cat", "cats", "dog"], 2, 2);
        let words = solver.find_words("CTAS").unwrap();
        assert_eq!(words, ["CATS", "CAT"]);
    }

    #[test]
    fn test_content_length_must_match_grid() {
        let solver = solver(&["cat"], 4, 4);
        let result = solver.find_words("ABCDEFGHIJKLMNO");
        assert!(matches!(
            result,
            Err(SolverError::ContentLength {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_q_tile_counts_as_qu() {
        // Q I
        // Z W
        let solver = solver(&["quiz"], 2, 2);
        let words = solver.find_words("QIZW").unwrap();
        assert_eq!(words, ["QUIZ"]);
    }

    #[test]
    fn test_words_are_reported_once() {
        // BOB reads the same from either end of the row.
        let solver = solver(&["bob"], 3, 1);
        let words = solver.find_words("BOB").unwrap();
        assert_eq!(words, ["BOB"]);
    }

    #[test]
    fn test_cells_are_not_reused_within_a_word() {
        let solver = solver(&["aba"], 2, 1);
        let words = solver.find_words("AB").unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn test_longer_words_first_then_alphabetical() {
        // R T
        // A S
        let solver = solver(&["rat", "tar", "art", "rats"], 2, 2);
        let words = solver.find_words("RTAS").unwrap();
        assert_eq!(words, ["RATS", "ART", "RAT", "TAR"]);
    }

    #[test]
    fn test_content_is_uppercased() {
        let solver = solver(&["cat", "cats"], 2, 2);
        let words = solver.find_words("ctas").unwrap();
        assert_eq!(words, ["CATS", "CAT"]);
    }

    #[test]
    fn test_search_state_resets_between_calls() {
        let solver = solver(&["cat", "cats"], 2, 2);
        let first = solver.find_words("CTAS").unwrap();
        let second = solver.find_words("CTAS").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_words_not_in_grid_are_absent() {
        let solver = solver(&["cat", "dog"], 2, 2);
        let words = solver.find_words("CTAS").unwrap();
        assert_eq!(words, ["CAT"]);
    }
}
