//! Word graphs
//!
//! [`WordGraph`] links the words of one length that differ by a single letter;
//! [`GraphRegistry`] builds each length once and hands out shared graphs.

mod registry;
mod word_graph;

pub use registry::GraphRegistry;
pub use word_graph::WordGraph;
