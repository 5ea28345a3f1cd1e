//! Board structure with chip counters and move application

use std::fmt;

use super::{CellState, Color, Move, Square, BOARD_SIZE};

/// Game board: an 8x8 grid of cell states plus per-color chip counters.
///
/// The board exclusively owns its cells. `action` and `undo` are the only
/// mutators and trust their callers: legality is checked separately by
/// [`crate::rules::legal::is_valid_move`]. Counters always equal the number
/// of squares currently holding that color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    black_chips: u8,
    white_chips: u8,
}

impl Board {
    /// Create an empty board with the four corners marked dead.
    pub fn new() -> Self {
        let mut cells = [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE];
        let last = BOARD_SIZE - 1;
        cells[0][0] = CellState::Dead;
        cells[0][last] = CellState::Dead;
        cells[last][0] = CellState::Dead;
        cells[last][last] = CellState::Dead;
        Self {
            cells,
            black_chips: 0,
            white_chips: 0,
        }
    }

    /// Get the state of a square
    #[inline]
    pub fn get(&self, sq: Square) -> CellState {
        self.cells[sq.x as usize][sq.y as usize]
    }

    /// Number of chips the given color has on the board
    #[inline]
    pub fn chip_count(&self, color: Color) -> u8 {
        match color {
            Color::Black => self.black_chips,
            Color::White => self.white_chips,
        }
    }

    /// Apply a move for the given color.
    ///
    /// No legality check is performed here; callers must have validated the
    /// move (or be replaying a previously validated one). `Quit` is a no-op.
    pub fn action(&mut self, mv: Move, color: Color) {
        match mv {
            Move::Add(to) => {
                debug_assert_eq!(self.get(to), CellState::Empty, "add onto non-empty square");
                self.set(to, CellState::Chip(color));
                self.bump(color, 1);
            }
            Move::Step { to, from } => {
                debug_assert!(self.get(from).is_active(), "step from inactive square");
                debug_assert_eq!(self.get(to), CellState::Empty, "step onto non-empty square");
                self.set(from, CellState::Empty);
                self.set(to, CellState::Chip(color));
            }
            Move::Quit => {}
        }
    }

    /// Revert a move previously applied with [`Board::action`].
    ///
    /// Must be called with the same (move, color) pair; undoing an unrelated
    /// action leaves the board in an undefined state.
    pub fn undo(&mut self, mv: Move, color: Color) {
        match mv {
            Move::Add(to) => {
                debug_assert!(self.get(to).is_chip_of(color), "undo add of missing chip");
                self.set(to, CellState::Empty);
                self.bump(color, -1);
            }
            Move::Step { to, from } => {
                debug_assert!(self.get(to).is_chip_of(color), "undo step of missing chip");
                self.set(to, CellState::Empty);
                self.set(from, CellState::Chip(color));
            }
            Move::Quit => {}
        }
    }

    #[inline]
    fn set(&mut self, sq: Square, state: CellState) {
        self.cells[sq.x as usize][sq.y as usize] = state;
    }

    #[inline]
    fn bump(&mut self, color: Color, delta: i8) {
        let count = match color {
            Color::Black => &mut self.black_chips,
            Color::White => &mut self.white_chips,
        };
        *count = count.wrapping_add_signed(delta);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid rendering: one row per line, `X` dead, `B`/`W` chips, `-` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let mark = match self.cells[x][y] {
                    CellState::Dead => 'X',
                    CellState::Chip(Color::Black) => 'B',
                    CellState::Chip(Color::White) => 'W',
                    CellState::Empty => '-',
                };
                write!(f, "{} ", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
