use thiserror::Error;

use crate::types::Side;

/// Errors raised by the rules engine, the searcher and the game session.
///
/// None of these leave a board half-updated: every operation that fails
/// returns before touching state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("illegal move at row {row}, col {col}")]
    IllegalMove { row: u8, col: u8 },

    #[error("row/col out of range: ({row}, {col}) (must be 0-7)")]
    OutOfBounds { row: u8, col: u8 },

    #[error("invalid difficulty level {level} (supported: 1-6)")]
    InvalidDifficulty { level: u8 },

    #[error("evaluation weight {name} = {value} is out of range (max magnitude {max})")]
    InvalidWeight {
        name: &'static str,
        value: i32,
        max: i32,
    },

    /// The caller asked for a move on a turn that must be passed.
    #[error("{side} has no legal move")]
    NoLegalMove { side: Side },

    #[error("game is already over")]
    GameOver,

    #[error("it is not the player's turn")]
    NotHumanTurn,

    #[error("it is not AI's turn")]
    NotAiTurn,

    #[error("AI is disabled for this game")]
    AiDisabled,
}

pub type EngineResult<T> = Result<T, EngineError>;
