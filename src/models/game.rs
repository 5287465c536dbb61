use serde::{Deserialize, Serialize};

/// The letter content of a single grid cell.
///
/// A Boggle die prints "Qu" on one face, so a 'Q' in grid input stands for
/// the two-letter tile "QU". Every other letter is a tile by itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Tile {
    #[serde(rename = "QU")]
    Qu,
    Letter(char),
}

impl Tile {
    pub fn from_char(c: char) -> Self {
        if c == 'Q' {
            Tile::Qu
        } else {
            Tile::Letter(c)
        }
    }

    /// Append this tile's letters to a word under construction.
    pub fn push_onto(&self, word: &mut String) {
        match self {
            Tile::Qu => word.push_str("QU"),
            Tile::Letter(c) => word.push(*c),
        }
    }
}

/// One solved word together with its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundWord {
    pub word: String,
    pub score: u32,
}
