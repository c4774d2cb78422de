//! Polyomino Packing Feasibility Library
//!
//! Given a catalogue of piece shapes and a list of rectangular regions, each
//! naming how many copies of every shape it must hold, decides per region
//! whether all required pieces can be placed without overlapping. Unused
//! holes are allowed; full coverage is not required, and no layout is
//! produced, only a verdict.

pub mod geometry;
pub mod grid;
pub mod parse;
pub mod pieces;
pub mod solver;

pub use parse::{parse_puzzle, ParseError};
pub use pieces::{Puzzle, Region, Shape};
pub use solver::{solve_region, solve_with_budget, Outcome, Verdict};
