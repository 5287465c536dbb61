// Game engine modules

pub mod grid;
pub mod scorer;
pub mod solver;

pub use grid::GridGenerator;
pub use scorer::Scorer;
pub use solver::{GridSolver, SolverError};
