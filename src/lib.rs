//! Optimal N-by-N sliding tile puzzle solver library.
//!
//! Two pieces: [`Board`], an immutable value type for one tile
//! configuration with its goal-distance heuristics and move generation, and
//! [`Solver`], which races an A* search on the initial board against one on
//! its twin to reconstruct a minimum-move solution or prove the puzzle
//! unsolvable.

pub mod board;
pub mod solver;

pub use board::{Board, BoardError};
pub use solver::Solver;
