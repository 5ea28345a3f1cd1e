//! Position evaluation for the minimax search

pub mod heuristic;

pub use heuristic::{evaluate, LOSS_SCORE, WIN_SCORE};
