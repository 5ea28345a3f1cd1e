//! Winning-network detection
//!
//! A network is an ordered chain of six or more same-color chips linking the
//! color's two goal edges (Black: rows y = 0 and y = 7; White: columns x = 0
//! and x = 7). Consecutive chips must be connected by a straight-line hop:
//! the nearest same-color chip along a rank, file or diagonal, with an
//! opposing chip blocking the line. No two consecutive hops may continue
//! in the same direction (no three consecutive chips collinear). Goal squares
//! may only start or finish a chain, never serve as an interior link.
//!
//! Detection is a recursive backtracking search seeded from every chip on
//! the color's starting edge. The chain is an explicit `Vec` plus a 64-bit
//! occupancy mask for O(1) membership tests; worst case is exponential in
//! chain length, bounded by the ten-chip budget per color.

use crate::board::{Board, CellState, Color, Square, BOARD_SIZE};

/// Minimum number of chips in a winning network
pub const MIN_NETWORK_LEN: usize = 6;

/// Ray directions for connection scans (8 directions)
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0), // West
    (1, 0),  // East
    (0, -1), // North
    (0, 1),  // South
    (-1, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
];

/// Squares holding same-color chips reachable from `sq` by one straight hop.
///
/// Scans each of the eight rays until the first chip: a same-color chip
/// terminates the ray and is reported, an opposing chip blocks it. A chip
/// sitting on its own goal edge never connects along that edge (Black: no
/// horizontal hops on rows 0/7; White: no vertical hops on columns 0/7).
/// Such a hop could only reach another goal square, which no valid network
/// uses as an interior link.
///
/// Returns an empty list when `sq` holds no chip.
pub fn connected_squares(board: &Board, sq: Square) -> Vec<Square> {
    let CellState::Chip(color) = board.get(sq) else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for &(dx, dy) in &DIRECTIONS {
        if suppressed_on_goal_edge(sq, color, dx, dy) {
            continue;
        }
        let mut x = sq.x as i32 + dx;
        let mut y = sq.y as i32 + dy;
        while Square::on_board(x, y) {
            match board.get(Square::new(x as u8, y as u8)) {
                CellState::Chip(c) if c == color => {
                    found.push(Square::new(x as u8, y as u8));
                    break;
                }
                CellState::Chip(_) => break,
                _ => {}
            }
            x += dx;
            y += dy;
        }
    }
    found
}

/// True if the ray runs along the chip's own goal edge
fn suppressed_on_goal_edge(sq: Square, color: Color, dx: i32, dy: i32) -> bool {
    let edge = BOARD_SIZE as u8 - 1;
    match color {
        Color::Black => dy == 0 && (sq.y == 0 || sq.y == edge),
        Color::White => dx == 0 && (sq.x == 0 || sq.x == edge),
    }
}

/// True if the square lies in the color's goal area (either edge)
fn in_goal_area(sq: Square, color: Color) -> bool {
    let edge = BOARD_SIZE as u8 - 1;
    match color {
        Color::Black => sq.y == 0 || sq.y == edge,
        Color::White => sq.x == 0 || sq.x == edge,
    }
}

/// Check whether the board holds a winning network for the given color.
///
/// Requires at least [`MIN_NETWORK_LEN`] chips of the color; seeds the chain
/// search from every chip on the color's starting edge (Black: y = 0,
/// White: x = 0). The corner squares of the edge are dead and skipped.
pub fn has_winning_network(board: &Board, color: Color) -> bool {
    if (board.chip_count(color) as usize) < MIN_NETWORK_LEN {
        return false;
    }
    for i in 1..BOARD_SIZE as u8 - 1 {
        let seed = match color {
            Color::Black => Square::new(i, 0),
            Color::White => Square::new(0, i),
        };
        if !board.get(seed).is_chip_of(color) {
            continue;
        }
        let mut chain = vec![seed];
        let mut visited = 1u64 << seed.index();
        if extend(board, color, &mut chain, &mut visited) {
            return true;
        }
    }
    false
}

/// Grow the chain by one hop at a time, backtracking on failure.
fn extend(board: &Board, color: Color, chain: &mut Vec<Square>, visited: &mut u64) -> bool {
    let last = *chain.last().expect("chain always holds its seed");
    if is_winning_chain(chain, color) {
        return true;
    }
    // Goal squares terminate a chain; they never appear as interior links.
    if chain.len() > 1 && in_goal_area(last, color) {
        return false;
    }
    for next in connected_squares(board, last) {
        let bit = 1u64 << next.index();
        if *visited & bit != 0 {
            continue;
        }
        chain.push(next);
        *visited |= bit;
        if extend(board, color, chain, visited) {
            return true;
        }
        chain.pop();
        *visited &= !bit;
    }
    false
}

/// Check whether a completed chain is a valid winning network:
/// at least six chips, ending on the terminal goal edge (Black: y = 7,
/// White: x = 7), with no three consecutive chips collinear.
fn is_winning_chain(chain: &[Square], color: Color) -> bool {
    if chain.len() < MIN_NETWORK_LEN {
        return false;
    }
    let edge = BOARD_SIZE as u8 - 1;
    let last = chain[chain.len() - 1];
    let terminal = match color {
        Color::Black => last.y == edge,
        Color::White => last.x == edge,
    };
    if !terminal {
        return false;
    }
    chain.windows(3).all(|w| !collinear(w[0], w[1], w[2]))
}

/// Signed-area test: zero iff the three squares lie on one line
fn collinear(a: Square, b: Square, c: Square) -> bool {
    let (x1, y1) = (a.x as i32, a.y as i32);
    let (x2, y2) = (b.x as i32, b.y as i32);
    let (x3, y3) = (c.x as i32, c.y as i32);
    x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2) == 0
}
