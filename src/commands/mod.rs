//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkError, BenchmarkResult, run_benchmark};
pub use generate::{GenerateConfig, GenerateResult, generate_puzzle};
pub use solve::{SolveConfig, SolveResult, minimum_length, solve_puzzle};
