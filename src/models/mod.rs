pub mod game;

pub use game::{FoundWord, Tile};
