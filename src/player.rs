//! Machine player facade
//!
//! Owns the live game board and exposes the referee-facing contract:
//! [`MachinePlayer::choose_move`] selects and applies the machine's own
//! move, [`MachinePlayer::opponent_move`] records a validated opponent
//! move, and [`MachinePlayer::force_move`] plays a validated move for the
//! machine itself (useful for setting up positions).

use tracing::debug;

use crate::board::{Board, Color, Move};
use crate::rules::is_valid_move;
use crate::search::Searcher;

/// Search depth used by [`MachinePlayer::new`]
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// An automatic Network player. Keeps track of moves made by both players
/// and can select a move for itself.
pub struct MachinePlayer {
    board: Board,
    color: Color,
    depth: u8,
}

impl MachinePlayer {
    /// Create a machine player with the given color and the default
    /// search depth. White has the first move.
    pub fn new(color: Color) -> Self {
        Self::with_depth(color, DEFAULT_SEARCH_DEPTH)
    }

    /// Create a machine player with the given color and search depth.
    pub fn with_depth(color: Color, depth: u8) -> Self {
        Self {
            board: Board::new(),
            color,
            depth,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The player's view of the game board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Select a move for this player, record it on the internal board and
    /// return it. Returns [`Move::Quit`], leaving the board untouched,
    /// when no legal move exists or the game is already decided.
    pub fn choose_move(&mut self) -> Move {
        let mut searcher = Searcher::new(self.color, self.depth);
        let result = searcher.search(&mut self.board);
        let Some(best) = result.best_move else {
            debug!("{:?} has no move to make", self.color);
            return Move::Quit;
        };
        self.board.action(best, self.color);
        debug!("{:?} plays {:?} (score {})", self.color, best, result.score);
        best
    }

    /// Record a move by the opponent. Returns `true` and updates the board
    /// if the move is legal for the opposing color; returns `false` and
    /// leaves all state unchanged otherwise.
    pub fn opponent_move(&mut self, mv: Move) -> bool {
        self.try_move(mv, self.color.opponent())
    }

    /// Record a move by this player without searching. Returns `true` and
    /// updates the board if the move is legal for the player's own color;
    /// returns `false` and leaves all state unchanged otherwise.
    pub fn force_move(&mut self, mv: Move) -> bool {
        self.try_move(mv, self.color)
    }

    fn try_move(&mut self, mv: Move, color: Color) -> bool {
        if is_valid_move(&self.board, mv, color) {
            self.board.action(mv, color);
            true
        } else {
            false
        }
    }
}
