//! Word ladder solving and generation
//!
//! The [`Solver`] enumerates every ladder up to a length bound, pruned by a
//! [`DistanceMap`] rooted at the target word; the [`Generator`] walks random
//! ladders that are solvable by construction.

mod candidate;
pub mod distance;
mod engine;
pub mod generator;
mod solution;

pub use distance::DistanceMap;
pub use engine::{SolveOutcome, Solver};
pub use generator::{Generation, Generator};
pub use solution::Solution;
