//! Search module for the Network engine
//!
//! Depth-limited minimax with alpha-beta pruning over a single shared
//! board, mutated and reverted in strict stack discipline.

pub mod minimax;

pub use minimax::{SearchResult, Searcher};
