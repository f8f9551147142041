use std::fmt;

use crate::error::EngineResult;
use crate::types::{BOARD_SIZE, Cell, NUM_SQUARES, Position, Side};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Othello board state represented by two bitboards.
///
/// Bit `row * 8 + col` is set in `dark` (or `light`) when that side owns
/// the square. The board is `Copy`, so every search branch owns its own
/// value and siblings never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    dark: u64,
    light: u64,
}

impl Board {
    /// Creates the initial board:
    /// d4=light, e4=dark, d5=dark, e5=light.
    pub fn new() -> Self {
        Self {
            dark: bit(28) | bit(35),
            light: bit(27) | bit(36),
        }
    }

    /// Builds a board from raw bitboards. A square set in both masks is
    /// treated as Dark.
    pub fn from_bitboards(dark: u64, light: u64) -> Self {
        Self {
            dark,
            light: light & !dark,
        }
    }

    /// Builds a board from a row-major grid of cells.
    pub fn from_cells(cells: &[[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::from_bitboards(0, 0);
        for (row, line) in cells.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                board.set(Position::from_index(row * BOARD_SIZE + col), cell);
            }
        }
        board
    }

    /// Returns the content of `(row, col)`.
    pub fn get(&self, row: u8, col: u8) -> EngineResult<Cell> {
        Ok(self.cell(Position::new(row, col)?))
    }

    pub fn cell(&self, pos: Position) -> Cell {
        let square = bit(pos.index());
        if self.dark & square != 0 {
            Cell::Dark
        } else if self.light & square != 0 {
            Cell::Light
        } else {
            Cell::Empty
        }
    }

    /// Overwrites one square. Moves go through `place` instead.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        let square = bit(pos.index());
        self.dark &= !square;
        self.light &= !square;
        match cell {
            Cell::Dark => self.dark |= square,
            Cell::Light => self.light |= square,
            Cell::Empty => {}
        }
    }

    /// Returns `(dark_count, light_count)`.
    pub fn count_pieces(&self) -> (u8, u8) {
        (self.dark.count_ones() as u8, self.light.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (dark_count, light_count) = self.count_pieces();
        NUM_SQUARES as u8 - dark_count - light_count
    }

    /// Piece count of one side.
    pub fn count_side(&self, side: Side) -> u8 {
        self.stones(side).count_ones() as u8
    }

    /// Returns legal move mask for the given side.
    pub fn legal_mask(&self, side: Side) -> u64 {
        let me = self.stones(side);
        let opp = self.stones(!side);
        let occupied = me | opp;
        let mut legal = 0u64;

        for pos in 0..NUM_SQUARES {
            let move_bit = bit(pos);
            if (occupied & move_bit) != 0 {
                continue;
            }
            if Self::collect_flips(pos, me, opp) != 0 {
                legal |= move_bit;
            }
        }

        legal
    }

    /// Mask of the squares `side` would flip by playing `pos`; 0 when the
    /// move is illegal.
    pub fn flips_for(&self, pos: usize, side: Side) -> u64 {
        Self::collect_flips(pos, self.stones(side), self.stones(!side))
    }

    /// Places one stone and flips captured stones.
    /// Returns flipped bit mask. Returns 0 when move is illegal, leaving
    /// the board untouched.
    pub(crate) fn place(&mut self, pos: usize, side: Side) -> u64 {
        let flips = self.flips_for(pos, side);
        if flips == 0 {
            return 0;
        }

        let move_bit = bit(pos);
        match side {
            Side::Dark => {
                self.dark |= move_bit | flips;
                self.light &= !flips;
            }
            Side::Light => {
                self.light |= move_bit | flips;
                self.dark &= !flips;
            }
        }

        flips
    }

    /// Row-major cell list, 64 entries.
    pub fn to_cells(&self) -> Vec<Cell> {
        (0..NUM_SQUARES)
            .map(|idx| self.cell(Position::from_index(idx)))
            .collect()
    }

    fn stones(&self, side: Side) -> u64 {
        match side {
            Side::Dark => self.dark,
            Side::Light => self.light,
        }
    }

    fn collect_flips(pos: usize, me: u64, opp: u64) -> u64 {
        if pos >= NUM_SQUARES {
            return 0;
        }

        let move_bit = bit(pos);
        if ((me | opp) & move_bit) != 0 {
            return 0;
        }

        let (row, col) = pos_to_row_col(pos);
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let mut r = row + dr;
            let mut c = col + dc;
            let mut line = 0u64;

            while in_bounds(r, c) {
                let square = bit((r as usize) * BOARD_SIZE + c as usize);
                if (opp & square) != 0 {
                    line |= square;
                } else {
                    // A line only counts when it ends on our own stone.
                    if (me & square) != 0 {
                        flips |= line;
                    }
                    break;
                }

                r += dr;
                c += dc;
            }
        }

        flips
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = match self.cell(Position::from_index(row * BOARD_SIZE + col)) {
                    Cell::Dark => 'X',
                    Cell::Light => 'O',
                    Cell::Empty => '.',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

/// Lists the set bits of `mask` in ascending (row-major) order.
pub(crate) fn mask_to_positions(mut mask: u64) -> Vec<Position> {
    let mut out = Vec::with_capacity(mask.count_ones() as usize);
    while mask != 0 {
        out.push(Position::from_index(mask.trailing_zeros() as usize));
        mask &= mask - 1;
    }
    out
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
