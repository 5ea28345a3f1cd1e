//! Board representation for Network
//!
//! The game is played on an 8x8 grid. Each color owns at most ten chips;
//! the four corner squares are dead and never hold a chip.

pub mod grid;


// Re-exports
pub use grid::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;

/// Maximum number of chips a single color may have on the board
pub const MAX_CHIPS: u8 = 10;

/// Chip colors
///
/// White has the first move by convention. Black's goal edges are the
/// rows y = 0 and y = 7; White's goal edges are the columns x = 0 and x = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// State of a single board square.
///
/// `Dead` is permanent and only ever set on the four corners at board
/// construction. A chip in transit during a step move is represented by an
/// explicit "ignore this square" parameter to the cluster check, not by a
/// cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Dead,
    Chip(Color),
}

impl CellState {
    /// True if this square holds a chip of either color
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, CellState::Chip(_))
    }

    /// True if this square holds a chip of the given color
    #[inline]
    pub fn is_chip_of(self, color: Color) -> bool {
        self == CellState::Chip(color)
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub x: u8,
    pub y: u8,
}

impl Square {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// True if signed coordinates land on the board; used by ray scans
    #[inline]
    pub fn on_board(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        (self.x as usize) < BOARD_SIZE && (self.y as usize) < BOARD_SIZE
    }

    /// Flat index, used for the visited bitmask in network detection
    #[inline]
    pub fn index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }
}

/// A move by one color.
///
/// `Add` places a new chip; `Step` relocates the chip at `from` to `to`.
/// `Quit` is a sentinel that never mutates the board, returned by the
/// search when no legal move exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Add(Square),
    Step { to: Square, from: Square },
    Quit,
}
