//! Rules engine and search core for the connection game Network
//!
//! Two colors place up to ten chips each on an 8x8 board with dead corners.
//! A color wins by forming a network: a chain of six or more of its chips
//! linking its two goal edges by straight-line hops, with no three
//! consecutive chips collinear and no goal square used as an interior link.
//! Placement is constrained by the cluster rule (no three mutually adjacent
//! same-color chips) and by the goal-edge restriction (each color is barred
//! from the opponent's goal edges).
//!
//! # Architecture
//!
//! - [`board`]: grid state, chip counters, move application and undo
//! - [`rules`]: move legality, legal move enumeration, network detection
//! - [`eval`]: static position evaluation for the search
//! - [`search`]: depth-limited minimax with alpha-beta pruning
//! - [`player`]: the referee-facing machine player
//!
//! # Quick Start
//!
//! ```
//! use network::{Color, MachinePlayer, Move, Square};
//!
//! // White moves first; depth 1 keeps the example fast
//! let mut player = MachinePlayer::with_depth(Color::White, 1);
//!
//! let mv = player.choose_move();
//! assert_ne!(mv, Move::Quit);
//!
//! // Record the opponent's reply
//! assert!(player.opponent_move(Move::Add(Square::new(4, 4))));
//! ```

pub mod board;
pub mod eval;
pub mod player;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, CellState, Color, Move, Square, BOARD_SIZE, MAX_CHIPS};
pub use eval::evaluate;
pub use player::MachinePlayer;
pub use rules::{has_winning_network, is_valid_move, list_valid_moves};
pub use search::{SearchResult, Searcher};
