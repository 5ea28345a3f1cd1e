//! Heuristic evaluation function for Network board positions
//!
//! A completed network dominates everything else; wins reached in fewer
//! plies score higher. Non-terminal positions are scored by connection
//! counts: each chip contributes the number of same-color chips it can
//! reach in one straight-line hop, weighted up for chips on the outer rim
//! since the goal edges live there.

use crate::board::{Board, CellState, Color, Square, BOARD_SIZE};
use crate::rules::network::{connected_squares, has_winning_network};

/// Score of a network completed at the root
pub const WIN_SCORE: i32 = i32::MAX;

/// Score of an opposing network completed at the root
pub const LOSS_SCORE: i32 = i32::MIN;

/// Evaluate the board from the perspective of the given color.
///
/// `plies_from_root` is the number of moves simulated to reach this
/// position; a win found after fewer plies scores higher
/// (`WIN_SCORE / plies`). Positive values favor `color`.
#[must_use]
pub fn evaluate(board: &Board, color: Color, plies_from_root: u8) -> i32 {
    if has_winning_network(board, color) {
        return discount(WIN_SCORE, plies_from_root);
    }
    if has_winning_network(board, color.opponent()) {
        return discount(LOSS_SCORE, plies_from_root);
    }

    let mut score = 0;
    for x in 0..BOARD_SIZE as u8 {
        for y in 0..BOARD_SIZE as u8 {
            let sq = Square::new(x, y);
            let CellState::Chip(owner) = board.get(sq) else {
                continue;
            };
            let links = connected_squares(board, sq).len() as i32;
            // Rim chips weigh 1.5x: the goal edges are on the rim
            let weighted = if on_rim(sq) { links * 3 / 2 } else { links };
            if owner == color {
                score += weighted;
            } else {
                score -= weighted;
            }
        }
    }
    score
}

#[inline]
fn discount(terminal: i32, plies: u8) -> i32 {
    if plies == 0 {
        terminal
    } else {
        terminal / plies as i32
    }
}

#[inline]
fn on_rim(sq: Square) -> bool {
    let edge = BOARD_SIZE as u8 - 1;
    sq.x == 0 || sq.x == edge || sq.y == 0 || sq.y == edge
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    fn place(board: &mut Board, color: Color, squares: &[(u8, u8)]) {
        for &(x, y) in squares {
            board.action(Move::Add(Square::new(x, y)), color);
        }
    }

    fn white_win_board() -> Board {
        let mut board = Board::new();
        place(
            &mut board,
            Color::White,
            &[(0, 1), (2, 1), (2, 3), (4, 5), (5, 4), (7, 4)],
        );
        board
    }

    #[test]
    fn test_win_scores_maximum_at_root() {
        let board = white_win_board();
        assert_eq!(evaluate(&board, Color::White, 0), WIN_SCORE);
        assert_eq!(evaluate(&board, Color::Black, 0), LOSS_SCORE);
    }

    #[test]
    fn test_faster_wins_score_higher() {
        let board = white_win_board();
        assert_eq!(evaluate(&board, Color::White, 2), WIN_SCORE / 2);
        assert_eq!(evaluate(&board, Color::Black, 3), LOSS_SCORE / 3);
        assert!(evaluate(&board, Color::White, 1) > evaluate(&board, Color::White, 3));
    }

    #[test]
    fn test_empty_board_is_neutral() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Color::White, 0), 0);
        assert_eq!(evaluate(&board, Color::Black, 0), 0);
    }

    #[test]
    fn test_heuristic_is_antisymmetric() {
        let mut board = Board::new();
        place(&mut board, Color::White, &[(2, 2), (2, 4), (4, 4)]);
        place(&mut board, Color::Black, &[(5, 1), (5, 3)]);
        let white = evaluate(&board, Color::White, 0);
        let black = evaluate(&board, Color::Black, 0);
        assert_eq!(white, -black);
        assert!(white > 0, "White has more connections and should lead");
    }

    #[test]
    fn test_rim_chips_weigh_more() {
        // Same two-connection L-shape, once anchored on the rim, once inside
        let mut on_rim = Board::new();
        place(&mut on_rim, Color::White, &[(0, 2), (2, 2), (2, 4)]);
        let mut inside = Board::new();
        place(&mut inside, Color::White, &[(2, 2), (4, 2), (4, 4)]);

        assert!(
            evaluate(&on_rim, Color::White, 0) > evaluate(&inside, Color::White, 0),
            "rim anchor should outscore the interior copy"
        );
    }

    #[test]
    fn test_win_dominates_any_heuristic() {
        let board = white_win_board();
        let mut busy = Board::new();
        place(&mut busy, Color::White, &[(1, 1), (1, 3), (3, 1), (3, 3), (5, 5)]);
        assert!(evaluate(&board, Color::White, 3) > evaluate(&busy, Color::White, 0));
    }
}
