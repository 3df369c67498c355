//! Word Ladder
//!
//! Solves and generates word ladder puzzles: chains of equal-length words where
//! each word differs from the previous one by exactly one letter.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_ladder::graph::GraphRegistry;
//! use word_ladder::puzzle::{Options, Puzzle};
//!
//! let registry = GraphRegistry::default();
//! let puzzle = Puzzle::new(&registry, "cat", "dog").unwrap();
//!
//! // 0 solves at the shortest possible ladder length
//! let (solver, max) = puzzle.solver(Options::with_max_ladder_length(0)).unwrap();
//! for solution in solver.solve().solutions {
//!     println!("{solution} ({max} words)");
//! }
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Word graphs and the per-length registry
pub mod graph;

// Solving and generation algorithms
pub mod solver;

// Puzzle definition
pub mod puzzle;

pub mod errors;
pub mod log;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
