//! Game rules for Network
//!
//! This module implements the rule set:
//! - Move legality (chip budget, goal edges, dead corners, cluster rule)
//! - Legal move enumeration
//! - Winning-network detection (constrained connection path search)

pub mod legal;
pub mod network;

// Re-exports for convenient access
pub use legal::{is_valid_move, list_valid_moves};
pub use network::{connected_squares, has_winning_network};
