use std::fmt;

use serde::Serialize;

use crate::error::{EngineError, EngineResult};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Content of one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

/// One of the two players. Dark moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Dark => Cell::Dark,
            Side::Light => Cell::Light,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Dark => write!(f, "Dark"),
            Side::Light => write!(f, "Light"),
        }
    }
}

/// A board coordinate. Used both for moves and for flipped squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Builds a position, rejecting coordinates off the board.
    pub fn new(row: u8, col: u8) -> EngineResult<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(EngineError::OutOfBounds { row, col })
        }
    }

    /// Row-major square index (0..=63).
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        debug_assert!(idx < NUM_SQUARES);
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE {
            write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Final outcome of a finished game, decided by piece count only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Winner(Side),
    Draw,
}

/// Public game state returned to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major, 64 entries.
    pub board: Vec<Cell>,
    pub current_player: Side,
    pub dark_count: u8,
    pub light_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the last move was followed by a forced pass.
    /// - `passed` names the side that could not move.
    pub is_pass: bool,
    pub passed: Option<Side>,
    /// Squares flipped by the last applied move; empty at game start.
    pub flipped: Vec<Position>,
    pub move_count: u32,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub dark_count: u8,
    pub light_count: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_new_rejects_off_board_coordinates() {
        assert_eq!(
            Position::new(8, 0),
            Err(EngineError::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            Position::new(3, 200),
            Err(EngineError::OutOfBounds { row: 3, col: 200 })
        );
        assert!(Position::new(7, 7).is_ok());
    }

    #[test]
    fn position_displays_as_algebraic_square() {
        let d3 = Position::new(2, 3).unwrap();
        assert_eq!(d3.to_string(), "d3");
        assert_eq!(Position::from_index(63).to_string(), "h8");
        assert_eq!(d3.index(), 19);
    }

    #[test]
    fn off_board_position_displays_numerically() {
        let stray = Position { row: 0, col: 200 };

        assert_eq!(stray.to_string(), "(0, 200)");
        assert_eq!(Position { row: 255, col: 255 }.to_string(), "(255, 255)");
    }

    #[test]
    fn side_not_is_opponent() {
        assert_eq!(!Side::Dark, Side::Light);
        assert_eq!(Side::Light.opponent(), Side::Dark);
        assert_eq!(Cell::from(Side::Light), Cell::Light);
    }
}
