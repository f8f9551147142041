use serde::Deserialize;

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::types::{BOARD_SIZE, Cell, NUM_SQUARES, Position, Side};

/// Per-square weights: corners best, squares touching a corner worst,
/// edges moderate, the centre close to neutral.
const POSITION_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Largest accepted weight magnitude. Keeps every term, and their sum,
/// inside `i32` for any board.
pub const MAX_WEIGHT: i32 = 1_000_000;

/// Coefficients of the three evaluation terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub material: i32,
    pub positional: i32,
    pub mobility: i32,
}

impl EvalWeights {
    pub fn validate(&self) -> EngineResult<()> {
        for (name, value) in [
            ("material", self.material),
            ("positional", self.positional),
            ("mobility", self.mobility),
        ] {
            if !(-MAX_WEIGHT..=MAX_WEIGHT).contains(&value) {
                return Err(EngineError::InvalidWeight {
                    name,
                    value,
                    max: MAX_WEIGHT,
                });
            }
        }
        Ok(())
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            material: 10,
            positional: 1,
            mobility: 5,
        }
    }
}

/// Static evaluator: positional table, mobility and material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    /// Evaluate from `side`'s perspective; higher is better for `side`.
    ///
    /// Saturates instead of overflowing when weights bypass
    /// `EvalWeights::validate`.
    pub fn evaluate(&self, board: &Board, side: Side) -> i32 {
        let weights = self.weights;
        weights
            .material
            .saturating_mul(material_score(board, side))
            .saturating_add(weights.positional.saturating_mul(positional_score(board, side)))
            .saturating_add(weights.mobility.saturating_mul(mobility_score(board, side)))
    }
}

/// Table weight of own squares minus table weight of opponent squares.
pub fn positional_score(board: &Board, side: Side) -> i32 {
    let own = Cell::from(side);
    let other = Cell::from(!side);

    (0..NUM_SQUARES)
        .map(|idx| {
            let pos = Position::from_index(idx);
            let weight = POSITION_WEIGHTS[pos.row as usize][pos.col as usize];
            match board.cell(pos) {
                cell if cell == own => weight,
                cell if cell == other => -weight,
                _ => 0,
            }
        })
        .sum()
}

pub fn mobility_score(board: &Board, side: Side) -> i32 {
    board.legal_mask(side).count_ones() as i32 - board.legal_mask(!side).count_ones() as i32
}

pub fn material_score(board: &Board, side: Side) -> i32 {
    board.count_side(side) as i32 - board.count_side(!side) as i32
}
