//! Depth-limited minimax search with alpha-beta pruning
//!
//! The searcher owns no board: it borrows the live game board, applies each
//! candidate move in place, recurses, and reverts it before trying the next
//! candidate (including when a branch is pruned) so sibling candidates
//! always see the original position. There is no board cloning anywhere in
//! the search.
//!
//! Scores are always computed from the machine's perspective: the machine's
//! plies maximize, the opponent's plies minimize.

use tracing::debug;

use crate::board::{Board, Color, Move};
use crate::eval::evaluate;
use crate::rules::{has_winning_network, list_valid_moves};

/// Side to move within the search tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Machine,
    Opponent,
}

impl Side {
    #[inline]
    fn flip(self) -> Side {
        match self {
            Side::Machine => Side::Opponent,
            Side::Opponent => Side::Machine,
        }
    }
}

/// Result of a search: the best move found and its score.
///
/// `best_move` is `None` only when the side to move has no legal move at
/// the root (or the root position is already terminal).
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    /// Number of nodes visited, for diagnostics
    pub nodes: u64,
}

/// Fixed-depth alpha-beta searcher for one machine color.
pub struct Searcher {
    color: Color,
    depth: u8,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher for the given color and search depth (in plies).
    pub fn new(color: Color, depth: u8) -> Self {
        debug_assert!(depth > 0, "search depth must be positive");
        Self {
            color,
            depth,
            nodes: 0,
        }
    }

    /// Run the search from the current position.
    ///
    /// The board is mutated during the search but is bit-identical to its
    /// input state when this returns.
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        self.nodes = 0;
        let (best_move, score) = self.minimax(board, Side::Machine, i32::MIN, i32::MAX, self.depth);
        debug!(
            "search done for {:?}: move={:?} score={} nodes={}",
            self.color, best_move, score, self.nodes
        );
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        side: Side,
        mut alpha: i32,
        mut beta: i32,
        depth_remaining: u8,
    ) -> (Option<Move>, i32) {
        self.nodes += 1;
        let plies = self.depth - depth_remaining;

        if depth_remaining == 0
            || has_winning_network(board, self.color)
            || has_winning_network(board, self.color.opponent())
        {
            return (None, evaluate(board, self.color, plies));
        }

        let to_move = match side {
            Side::Machine => self.color,
            Side::Opponent => self.color.opponent(),
        };
        let moves = list_valid_moves(board, to_move);

        // A move is always returned even if every reply gets pruned
        let mut best_move = moves.first().copied();
        let mut best_score = match side {
            Side::Machine => alpha,
            Side::Opponent => beta,
        };

        for &mv in &moves {
            board.action(mv, to_move);
            let (_, reply) = self.minimax(board, side.flip(), alpha, beta, depth_remaining - 1);
            board.undo(mv, to_move);

            match side {
                Side::Machine if reply > best_score => {
                    best_move = Some(mv);
                    best_score = reply;
                    alpha = reply;
                }
                Side::Opponent if reply < best_score => {
                    best_move = Some(mv);
                    best_score = reply;
                    beta = reply;
                }
                _ => {}
            }
            if alpha >= beta {
                return (best_move, best_score);
            }
        }
        (best_move, best_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use crate::rules::is_valid_move;

    fn place(board: &mut Board, color: Color, squares: &[(u8, u8)]) {
        for &(x, y) in squares {
            board.action(Move::Add(Square::new(x, y)), color);
        }
    }

    /// White is one chip short of a rim-to-rim network; Black's chips are
    /// parked away from every connection line.
    fn one_move_from_winning() -> Board {
        let mut board = Board::new();
        place(&mut board, Color::White, &[(0, 1), (2, 1), (2, 3), (4, 5), (5, 4)]);
        place(&mut board, Color::Black, &[(1, 6), (3, 6), (5, 6), (1, 4), (6, 6)]);
        board
    }

    /// Full-width minimax without pruning, for equivalence checks.
    fn plain_minimax(
        board: &mut Board,
        color: Color,
        side: Side,
        max_depth: u8,
        depth_remaining: u8,
    ) -> (Option<Move>, i32) {
        let plies = max_depth - depth_remaining;
        if depth_remaining == 0
            || has_winning_network(board, color)
            || has_winning_network(board, color.opponent())
        {
            return (None, evaluate(board, color, plies));
        }
        let to_move = match side {
            Side::Machine => color,
            Side::Opponent => color.opponent(),
        };
        let moves = list_valid_moves(board, to_move);
        let mut best_move = moves.first().copied();
        let mut best_score = match side {
            Side::Machine => i32::MIN,
            Side::Opponent => i32::MAX,
        };
        for &mv in &moves {
            board.action(mv, to_move);
            let (_, reply) =
                plain_minimax(board, color, side.flip(), max_depth, depth_remaining - 1);
            board.undo(mv, to_move);
            let improved = match side {
                Side::Machine => reply > best_score,
                Side::Opponent => reply < best_score,
            };
            if improved {
                best_move = Some(mv);
                best_score = reply;
            }
        }
        (best_move, best_score)
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = one_move_from_winning();
        let before = board.clone();
        let mut searcher = Searcher::new(Color::White, 2);
        searcher.search(&mut board);
        assert_eq!(board, before, "search must undo every simulated move");
    }

    #[test]
    fn test_finds_winning_completion() {
        let mut board = one_move_from_winning();
        let mut searcher = Searcher::new(Color::White, 2);
        let result = searcher.search(&mut board);

        let mv = result.best_move.expect("a legal move exists");
        assert!(is_valid_move(&board, mv, Color::White));
        board.action(mv, Color::White);
        assert!(
            has_winning_network(&board, Color::White),
            "the search should complete the network, got {:?}",
            mv
        );
        assert_eq!(result.score, i32::MAX, "a win one ply deep scores WIN_SCORE / 1");
    }

    #[test]
    fn test_prefers_faster_win() {
        // Depth 3 sees wins at ply 1 and ply 3; the ply-1 score is larger.
        let mut board = one_move_from_winning();
        let mut searcher = Searcher::new(Color::White, 3);
        let result = searcher.search(&mut board);
        assert_eq!(result.score, i32::MAX);
    }

    #[test]
    fn test_alpha_beta_matches_full_width_search() {
        let mut board = Board::new();
        place(&mut board, Color::White, &[(2, 2), (4, 3)]);
        place(&mut board, Color::Black, &[(3, 5)]);

        let mut pruned = Searcher::new(Color::White, 2);
        let fast = pruned.search(&mut board);
        let (slow_move, slow_score) =
            plain_minimax(&mut board, Color::White, Side::Machine, 2, 2);

        assert_eq!(fast.score, slow_score);
        assert_eq!(fast.best_move, slow_move);
        assert!(fast.nodes > 0);
    }

    #[test]
    fn test_terminal_root_returns_no_move() {
        let mut board = Board::new();
        place(&mut board, Color::White, &[(0, 1), (2, 1), (2, 3), (4, 5), (5, 4), (7, 4)]);
        let mut searcher = Searcher::new(Color::Black, 2);
        let result = searcher.search(&mut board);
        assert!(result.best_move.is_none());
        assert_eq!(result.score, i32::MIN, "opponent network already complete");
    }
}
