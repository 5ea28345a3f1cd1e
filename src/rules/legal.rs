//! Move legality and legal move enumeration
//!
//! A move is legal when:
//! 1. The color still has chips to place (`Add`) or has placed all ten
//!    (`Step`); a color must finish placing before relocating.
//! 2. The target square is on the board and not a dead corner.
//! 3. The target respects the goal-edge restriction: Black may not occupy
//!    the columns x = 0 / x = 7, White may not occupy the rows y = 0 / y = 7.
//! 4. The target square is unoccupied.
//! 5. For `Step`, source and target differ and the source holds a chip.
//! 6. The landing chip does not form a cluster of three or more mutually
//!    adjacent same-color chips.
//!
//! Legality is a pure query: the board is never touched. For a step move
//! the vacated source square is passed to the cluster check as an explicit
//! "ignore" parameter so the neighborhood is evaluated as it will be once
//! the chip has departed.

use crate::board::{Board, CellState, Color, Move, Square, BOARD_SIZE, MAX_CHIPS};

/// Check whether a move is legal for the given color.
///
/// Returns `false` for `Move::Quit`; the sentinel never enters the game.
pub fn is_valid_move(board: &Board, mv: Move, color: Color) -> bool {
    let (to, from) = match mv {
        Move::Add(to) => {
            if board.chip_count(color) >= MAX_CHIPS {
                return false;
            }
            (to, None)
        }
        Move::Step { to, from } => {
            if board.chip_count(color) < MAX_CHIPS {
                return false;
            }
            (to, Some(from))
        }
        Move::Quit => return false,
    };

    if !to.in_bounds() {
        return false;
    }
    if board.get(to) == CellState::Dead {
        return false;
    }
    let edge = BOARD_SIZE as u8 - 1;
    match color {
        Color::Black => {
            // White's goal columns are off limits for Black
            if to.x == 0 || to.x == edge {
                return false;
            }
        }
        Color::White => {
            // Black's goal rows are off limits for White
            if to.y == 0 || to.y == edge {
                return false;
            }
        }
    }
    if board.get(to).is_active() {
        return false;
    }
    if let Some(from) = from {
        if !from.in_bounds() || from == to {
            return false;
        }
        if !board.get(from).is_active() {
            return false;
        }
    }

    !forms_cluster(board, to, color, from)
}

/// Check the cluster rule for a chip landing on `target`.
///
/// `ignore` is the source square of a step move, skipped everywhere so the
/// board is judged as it will be after the chip leaves its old square.
///
/// Two or more same-color neighbors of the landing square always form a
/// cluster. A single neighbor forms one if that neighbor touches any other
/// chip of the color: together with the mover that makes three mutually
/// adjacent chips.
pub(crate) fn forms_cluster(
    board: &Board,
    target: Square,
    color: Color,
    ignore: Option<Square>,
) -> bool {
    let mut count = 0;
    let mut neighbor = None;
    for sq in neighbors_of(target) {
        if Some(sq) == ignore {
            continue;
        }
        if board.get(sq).is_chip_of(color) {
            count += 1;
            neighbor = Some(sq);
        }
    }
    if count >= 2 {
        return true;
    }
    let Some(neighbor) = neighbor else {
        return false;
    };

    // The mover is provisionally on `target`, so any further same-color
    // contact of the neighbor completes a cluster of three.
    for sq in neighbors_of(neighbor) {
        if sq == target || Some(sq) == ignore {
            continue;
        }
        if board.get(sq).is_chip_of(color) {
            return true;
        }
    }
    false
}

/// In-bounds 8-neighborhood of a square, the square itself excluded.
fn neighbors_of(sq: Square) -> impl Iterator<Item = Square> {
    let (cx, cy) = (sq.x as i32, sq.y as i32);
    (-1..=1).flat_map(move |dx| {
        (-1..=1).filter_map(move |dy| {
            if dx == 0 && dy == 0 {
                return None;
            }
            let (x, y) = (cx + dx, cy + dy);
            Square::on_board(x, y).then(|| Square::new(x as u8, y as u8))
        })
    })
}

/// Enumerate every legal move for the given color.
///
/// `Add` candidates come first, in row-major (outer x, inner y) scan order.
/// `Step` candidates follow, grouped by source chip with destinations in the
/// same scan order; source chips are tried in reverse discovery order so
/// recently placed chips are considered for relocation first.
pub fn list_valid_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut chips = Vec::new();

    for x in 0..BOARD_SIZE as u8 {
        for y in 0..BOARD_SIZE as u8 {
            let sq = Square::new(x, y);
            if board.get(sq).is_chip_of(color) {
                chips.push(sq);
            }
            let add = Move::Add(sq);
            if is_valid_move(board, add, color) {
                moves.push(add);
            }
        }
    }

    for &from in chips.iter().rev() {
        for x in 0..BOARD_SIZE as u8 {
            for y in 0..BOARD_SIZE as u8 {
                let step = Move::Step {
                    to: Square::new(x, y),
                    from,
                };
                if is_valid_move(board, step, color) {
                    moves.push(step);
                }
            }
        }
    }
    moves
}
